use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::NamedElement;

wire_enum! {
    pub enum BackupMethod("backup method") {
        Full = "full",
        Incremental = "incremental",
        Abort = "abort",
        Delete = "delete",
    }
}

wire_object! {
    /// Per-account outcome of a backup run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AccountBackupInfo in "account" {
        pub name: String = attr("name"),
        pub status: Option<String> = attr("status"),
        pub error_message: Option<String> = elem("errorMessage"),
    }
}

impl AccountBackupInfo {
    pub fn completed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Some("COMPLETED".to_string()),
            error_message: None,
        }
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Some("ERROR".to_string()),
            error_message: Some(message.into()),
        }
    }
}

wire_object! {
    /// Accounts backed up on one host. `<accounts>` is always present.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BackupHostAccounts in "host" {
        pub name: String = attr("name"),
        pub accounts: Vec<AccountBackupInfo> = wrapped_required("accounts", "account"),
    }
}

impl BackupHostAccounts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BackupSpec in "backup" {
        pub method: BackupMethod = attr("method"),
        /// Target directory; the server default when absent.
        pub target: Option<String> = attr("target"),
        /// Label of the backup to abort or delete.
        pub label: Option<String> = attr("label"),
        pub sync: Option<bool> = attr("sync"),
        pub zip: Option<bool> = attr("zip"),
        pub zip_store: Option<bool> = attr("zipStore"),
        pub accounts: Vec<NamedElement> = list("account"),
    }
}

impl BackupSpec {
    pub fn new(method: BackupMethod) -> Self {
        Self {
            method,
            target: None,
            label: None,
            sync: None,
            zip: None,
            zip_store: None,
            accounts: Vec::new(),
        }
    }

    pub fn with_account(mut self, name: impl Into<String>) -> Self {
        self.accounts.push(NamedElement::new(name));
        self
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct BackupResult in "backup" {
        pub label: Option<String> = attr("label"),
        pub hosts: Vec<BackupHostAccounts> = wrapped("hosts", "host"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BackupRequest in "BackupRequest" in ADMIN_NAMESPACE {
        pub backup: BackupSpec = child("backup"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct BackupResponse in "BackupResponse" in ADMIN_NAMESPACE {
        pub backup: Option<BackupResult> = child("backup"),
    }
}
