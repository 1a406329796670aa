use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::Attr;

wire_enum! {
    pub enum ServerBy("server selector") {
        Id = "id",
        Name = "name",
        ServiceHostname = "serviceHostname",
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerSelector in "server" {
        pub by: ServerBy = attr("by"),
        pub key: String = text,
    }
}

impl ServerSelector {
    pub fn new(by: ServerBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerInfo in "server" {
        pub name: String = attr("name"),
        pub id: String = attr("id"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetServerRequest in "GetServerRequest" in ADMIN_NAMESPACE {
        /// Include global config defaults in the returned attributes.
        pub apply_config: Option<bool> = attr("applyConfig"),
        pub attrs: Option<String> = attr("attrs"),
        pub server: Option<ServerSelector> = child("server"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetServerResponse in "GetServerResponse" in ADMIN_NAMESPACE {
        pub server: ServerInfo = child("server"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllServersRequest in "GetAllServersRequest" in ADMIN_NAMESPACE {
        /// Only servers running this service, e.g. `mailbox`.
        pub service: Option<String> = attr("service"),
        pub apply_config: Option<bool> = attr("applyConfig"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllServersResponse in "GetAllServersResponse" in ADMIN_NAMESPACE {
        pub servers: Vec<ServerInfo> = list("server"),
    }
}
