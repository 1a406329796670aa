use crate::core::ADMIN_NAMESPACE;
use crate::utils::error::Result;

wire_enum! {
    /// Server-side caches that `FlushCacheRequest` can target.
    pub enum CacheEntryType("cache type") {
        Acl = "acl",
        All = "all",
        Account = "account",
        AlwaysOnCluster = "alwaysOnCluster",
        Config = "config",
        GlobalGrant = "globalgrant",
        Cos = "cos",
        Domain = "domain",
        GalGroup = "galgroup",
        Group = "group",
        License = "license",
        Locale = "locale",
        Mime = "mime",
        Server = "server",
        Skin = "skin",
        UiStrings = "uistrings",
        Zimlet = "zimlet",
    }
}

impl CacheEntryType {
    /// Caches backed by the directory. The others are only reachable over SOAP.
    pub const fn is_directory_cache(self) -> bool {
        !matches!(
            self,
            Self::Skin | Self::Locale | Self::UiStrings | Self::License | Self::All
        )
    }
}

wire_enum! {
    pub enum CacheEntryBy("cache entry key") {
        Id = "id",
        Name = "name",
    }
}

wire_object! {
    /// A single entry to evict, keyed by id or name.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CacheEntrySelector in "entry" {
        pub by: Option<CacheEntryBy> = attr("by"),
        pub key: String = text,
    }
}

impl CacheEntrySelector {
    pub fn new(by: CacheEntryBy, key: impl Into<String>) -> Self {
        Self {
            by: Some(by),
            key: key.into(),
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CacheSelector in "cache" {
        /// Comma separated cache types.
        pub types: String = attr("type"),
        pub all_servers: Option<bool> = attr("allServers"),
        pub imap_servers: Option<bool> = attr("imapServers"),
        pub entries: Vec<CacheEntrySelector> = list("entry"),
    }
}

impl CacheSelector {
    pub fn new(types: &[CacheEntryType]) -> Self {
        let types = types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            types,
            all_servers: None,
            imap_servers: None,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: CacheEntrySelector) -> Self {
        self.entries.push(entry);
        self
    }

    /// Parses the `type` list; the first unknown name fails the whole list.
    pub fn entry_types(&self) -> Result<Vec<CacheEntryType>> {
        self.types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(CacheEntryType::from_wire)
            .collect()
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FlushCacheRequest in "FlushCacheRequest" in ADMIN_NAMESPACE {
        pub cache: Option<CacheSelector> = child("cache"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct FlushCacheResponse in "FlushCacheResponse" in ADMIN_NAMESPACE {}
}
