use anyhow::Result;
use zmadmin_wire::domain::{
    AccountBackupInfo, Attr, MailQueueActionRequest, QueueAction, QueueActionBy,
};
use zmadmin_wire::WireObject;

// Some clients send attributes as child elements.
const QUEUE_ACTION_AS_ELEMENTS: &str = r#"
<MailQueueActionRequest xmlns="urn:zimbraAdmin">
  <server>
    <name>mta1.example.com</name>
    <queue>
      <name>deferred</name>
      <action>
        <op>release</op>
        <by>query</by>
        <query>
          <limit>99</limit>
          <offset>5</offset>
          <field>
            <name>from</name>
            <match><value>spam@example.net</value></match>
          </field>
        </query>
      </action>
    </queue>
  </server>
</MailQueueActionRequest>
"#;

#[test]
fn test_attributes_given_as_elements() -> Result<()> {
    let request = MailQueueActionRequest::from_xml(QUEUE_ACTION_AS_ELEMENTS)?;

    assert_eq!(request.server.name, "mta1.example.com");
    assert_eq!(request.server.queue.name, "deferred");
    let action = &request.server.queue.action;
    assert_eq!(action.op, QueueAction::Release);
    assert_eq!(action.by, QueueActionBy::Query);

    let query = action.query.as_ref().expect("query present");
    assert_eq!(query.limit, Some(99));
    assert_eq!(query.offset, Some(5));
    assert_eq!(query.fields[0].name, "from");
    assert_eq!(query.fields[0].matches[0].value, "spam@example.net");
    Ok(())
}

#[test]
fn test_lenient_input_normalizes_to_attributes() -> Result<()> {
    let request = MailQueueActionRequest::from_xml(QUEUE_ACTION_AS_ELEMENTS)?;
    let xml = request.to_xml()?;
    assert!(xml.contains(r#"<server name="mta1.example.com">"#));
    assert!(xml.contains(r#"<query limit="99" offset="5">"#));
    assert!(!xml.contains("<limit>"));
    Ok(())
}

#[test]
fn test_element_field_accepts_attribute() -> Result<()> {
    let info = AccountBackupInfo::from_xml(
        r#"<account name="a@example.com" status="ERROR" errorMessage="disk full"/>"#,
    )?;
    assert_eq!(info.error_message.as_deref(), Some("disk full"));
    assert!(info.to_xml()?.contains("<errorMessage>disk full</errorMessage>"));
    Ok(())
}

#[test]
fn test_leaf_text_whitespace_is_kept() -> Result<()> {
    let attr = Attr::from_xml("<a n=\"zimbraNotes\">  indented\n</a>")?;
    assert_eq!(attr.value, "  indented\n");
    Ok(())
}

#[test]
fn test_prefixed_names_use_local_part() -> Result<()> {
    let xml = r#"<zadmin:a xmlns:zadmin="urn:zimbraAdmin" n="cn">mail1</zadmin:a>"#;
    let attr = Attr::from_xml(xml)?;
    assert_eq!(attr.name, "cn");
    assert_eq!(attr.value, "mail1");
    Ok(())
}
