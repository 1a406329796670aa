use zmadmin_wire::core::Placement;
use zmadmin_wire::domain::{AccountBackupInfo, BackupHostAccounts, BackupResult, GetAllServersResponse};
use zmadmin_wire::{Element, WireObject};

#[test]
fn test_required_wrapper_emitted_when_empty() {
    let host = BackupHostAccounts::new("mail1");

    let el = host.to_element();
    let wrapper = el.child("accounts").expect("wrapper present");
    assert!(wrapper.children().is_empty());

    let body = host.to_json();
    assert_eq!(body["accounts"], serde_json::json!([{}]));
}

#[test]
fn test_optional_wrapper_omitted_when_empty() {
    let result = BackupResult::default();
    assert!(result.to_element().child("hosts").is_none());
    assert!(result.to_json().get("hosts").is_none());
}

#[test]
fn test_optional_wrapper_present_when_filled() {
    let result = BackupResult {
        label: None,
        hosts: vec![BackupHostAccounts::new("mail1")],
    };
    let xml = result.to_xml().unwrap();
    assert_eq!(
        xml,
        r#"<backup><hosts><host name="mail1"><accounts/></host></hosts></backup>"#
    );
}

#[test]
fn test_missing_optional_wrapper_reads_as_empty_list() {
    let result = BackupResult::from_xml(r#"<backup label="x"/>"#).unwrap();
    assert!(result.hosts.is_empty());
}

#[test]
fn test_missing_required_wrapper_is_malformed() {
    let el = Element::new("host").with_attr("name", "mail1");
    let err = BackupHostAccounts::from_element(&el).unwrap_err();
    assert!(!err.is_invalid_request());
    assert!(err.to_string().contains("'accounts'"));
}

#[test]
fn test_wrapped_items_keep_insertion_order() {
    let names = ["zed@example.com", "amy@example.com", "kim@example.com"];
    let mut host = BackupHostAccounts::new("mail1");
    host.accounts
        .extend(names.iter().map(|n| AccountBackupInfo::completed(*n)));

    let back = BackupHostAccounts::from_json(&host.to_json()).unwrap();
    let got: Vec<_> = back.accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(got, names);
}

#[test]
fn test_foreign_items_inside_wrapper_are_skipped() {
    let xml = concat!(
        r#"<host name="mail1"><accounts>"#,
        r#"<account name="a@example.com"/><note>ignored</note>"#,
        r#"</accounts></host>"#
    );
    let host = BackupHostAccounts::from_xml(xml).unwrap();
    assert_eq!(host.accounts.len(), 1);
}

#[test]
fn test_unwrapped_list_default_empty() {
    let response = GetAllServersResponse::from_xml(r#"<GetAllServersResponse/>"#).unwrap();
    assert!(response.servers.is_empty());
}

#[test]
fn test_schema_records_wrapping() {
    let accounts = BackupHostAccounts::SCHEMA
        .iter()
        .find(|spec| spec.field == "accounts")
        .unwrap();
    assert!(accounts.required);
    assert_eq!(accounts.placement, Placement::WrappedList { item: "account" });

    let hosts = BackupResult::SCHEMA
        .iter()
        .find(|spec| spec.field == "hosts")
        .unwrap();
    assert!(!hosts.required);
}
