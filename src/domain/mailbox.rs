use crate::core::ADMIN_NAMESPACE;

wire_object! {
    /// Mailbox as reported by the store. Only the owning account id can be
    /// changed once the value exists; it is filled in late on some replies.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MailboxWithMailboxId in "mbox" {
        mbxid: i32 = attr("mbxid"),
        account_id: Option<String> = attr("id"),
        size: Option<i64> = attr("s"),
    }
}

impl MailboxWithMailboxId {
    pub fn new(mbxid: i32, account_id: Option<String>, size: Option<i64>) -> Self {
        Self {
            mbxid,
            account_id,
            size,
        }
    }

    pub fn mailbox_id(&self) -> i32 {
        self.mbxid
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn set_account_id(&mut self, account_id: impl Into<String>) {
        self.account_id = Some(account_id.into());
    }

    /// Bytes used, when the server reported it.
    pub fn size(&self) -> Option<i64> {
        self.size
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MailboxByAccountIdSelector in "mbox" {
        pub id: String = attr("id"),
    }
}

impl MailboxByAccountIdSelector {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            id: account_id.into(),
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetMailboxRequest in "GetMailboxRequest" in ADMIN_NAMESPACE {
        pub mbox: MailboxByAccountIdSelector = child("mbox"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetMailboxResponse in "GetMailboxResponse" in ADMIN_NAMESPACE {
        pub mbox: MailboxWithMailboxId = child("mbox"),
    }
}

wire_object! {
    /// Without a selector every mailbox on the server is purged.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct PurgeMessagesRequest in "PurgeMessagesRequest" in ADMIN_NAMESPACE {
        pub mbox: Option<MailboxByAccountIdSelector> = child("mbox"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct PurgeMessagesResponse in "PurgeMessagesResponse" in ADMIN_NAMESPACE {
        pub mailboxes: Vec<MailboxWithMailboxId> = list("mbox"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct DeleteMailboxRequest in "DeleteMailboxRequest" in ADMIN_NAMESPACE {
        pub mbox: Option<MailboxByAccountIdSelector> = child("mbox"),
    }
}

wire_object! {
    /// `mbox` is absent when the account had no mailbox to delete.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct DeleteMailboxResponse in "DeleteMailboxResponse" in ADMIN_NAMESPACE {
        pub mbox: Option<MailboxWithMailboxId> = child("mbox"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Element, Value, WireObject};

    #[test]
    fn test_account_id_is_mutable() {
        let mut mbox = MailboxWithMailboxId::new(12, None, Some(4096));
        assert_eq!(mbox.account_id(), None);
        mbox.set_account_id("0b5e-acct");
        assert_eq!(mbox.account_id(), Some("0b5e-acct"));
        assert_eq!(mbox.mailbox_id(), 12);
        assert_eq!(mbox.size(), Some(4096));
    }

    #[test]
    fn test_numeric_attributes_on_the_wire() {
        let el = MailboxWithMailboxId::new(7, Some("acct".into()), Some(1_000_000_000_000)).to_element();
        assert_eq!(el.attr("mbxid"), Some(&Value::Int(7)));
        assert_eq!(el.attr("s"), Some(&Value::Int(1_000_000_000_000)));
    }

    #[test]
    fn test_missing_mailbox_id_is_malformed() {
        let el = Element::new("mbox").with_attr("id", "acct");
        let err = MailboxWithMailboxId::from_element(&el).unwrap_err();
        assert!(!err.is_invalid_request());
        assert!(err.to_string().contains("mbxid"));
    }

    #[test]
    fn test_purge_response_round_trip() {
        let response = PurgeMessagesResponse {
            mailboxes: vec![
                MailboxWithMailboxId::new(1, Some("a1".into()), Some(10)),
                MailboxWithMailboxId::new(2, None, None),
            ],
        };
        let xml = response.to_xml().unwrap();
        assert_eq!(PurgeMessagesResponse::from_xml(&xml).unwrap(), response);
        assert_eq!(
            PurgeMessagesResponse::from_json(&response.to_json()).unwrap(),
            response
        );
    }

    #[test]
    fn test_get_mailbox_requires_selector() {
        let xml = r#"<GetMailboxRequest xmlns="urn:zimbraAdmin"/>"#;
        let err = GetMailboxRequest::from_xml(xml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required element 'mbox' in <GetMailboxRequest>"
        );
    }
}
