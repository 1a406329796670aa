use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::Attr;

wire_enum! {
    pub enum UcServiceBy("ucservice selector") {
        Id = "id",
        Name = "name",
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UcServiceSelector in "ucservice" {
        pub by: UcServiceBy = attr("by"),
        pub key: String = text,
    }
}

impl UcServiceSelector {
    pub fn new(by: UcServiceBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }
}

wire_object! {
    /// Unified communication service with its directory attributes.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UcServiceInfo in "ucservice" {
        pub name: String = attr("name"),
        pub id: String = attr("id"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetUcServiceRequest in "GetUCServiceRequest" in ADMIN_NAMESPACE {
        /// Comma separated attribute names to return.
        pub attrs: Option<String> = attr("attrs"),
        pub ucservice: UcServiceSelector = child("ucservice"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetUcServiceResponse in "GetUCServiceResponse" in ADMIN_NAMESPACE {
        pub ucservice: UcServiceInfo = child("ucservice"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllUcServicesRequest in "GetAllUCServicesRequest" in ADMIN_NAMESPACE {}
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllUcServicesResponse in "GetAllUCServicesResponse" in ADMIN_NAMESPACE {
        pub ucservices: Vec<UcServiceInfo> = list("ucservice"),
    }
}
