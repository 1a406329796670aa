use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::Attr;

wire_enum! {
    /// Kinds of external data source an account can import from.
    pub enum DataSourceType("data source type", listing) {
        Pop3 = "pop3",
        Imap = "imap",
        Caldav = "caldav",
        Contacts = "contacts",
        Yab = "yab",
        Rss = "rss",
        Cal = "cal",
        Gal = "gal",
        Xsync = "xsync",
        Tagmap = "tagmap",
        Unknown = "unknown",
    }
}

impl DataSourceType {
    /// Mail import protocols, as opposed to feeds and address books.
    pub const fn is_mail(self) -> bool {
        matches!(self, Self::Pop3 | Self::Imap)
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DataSourceInfo in "dataSource" {
        pub name: String = attr("name"),
        pub id: String = attr("id"),
        pub kind: DataSourceType = attr("type"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DataSourceSpecifier in "dataSource" {
        pub kind: DataSourceType = attr("type"),
        pub name: String = attr("name"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

impl DataSourceSpecifier {
    pub fn new(kind: DataSourceType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attrs: Vec::new(),
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetDataSourcesRequest in "GetDataSourcesRequest" in ADMIN_NAMESPACE {
        /// Account id.
        pub id: String = attr("id"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetDataSourcesResponse in "GetDataSourcesResponse" in ADMIN_NAMESPACE {
        pub data_sources: Vec<DataSourceInfo> = list("dataSource"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateDataSourceRequest in "CreateDataSourceRequest" in ADMIN_NAMESPACE {
        pub id: String = attr("id"),
        pub data_source: DataSourceSpecifier = child("dataSource"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateDataSourceResponse in "CreateDataSourceResponse" in ADMIN_NAMESPACE {
        pub data_source: DataSourceInfo = child("dataSource"),
    }
}
