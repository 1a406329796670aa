use anyhow::Result;
use zmadmin_wire::core::registry;
use zmadmin_wire::{Converter, WireFormat};

const DATA_SOURCES_XML: &str = r#"<GetDataSourcesResponse xmlns="urn:zimbraAdmin">
  <dataSource name="home" id="ds-1" type="imap">
    <a n="zimbraDataSourceHost">imap.example.com</a>
    <a n="zimbraDataSourcePort">993</a>
  </dataSource>
</GetDataSourcesResponse>"#;

#[test]
fn test_xml_to_json_and_back() -> Result<()> {
    let converter = Converter::new();
    let json = converter.convert_detected(DATA_SOURCES_XML, WireFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(
        value["GetDataSourcesResponse"]["dataSource"][0]["_attrs"]["zimbraDataSourcePort"],
        "993"
    );

    let xml = converter.convert_detected(&json, WireFormat::Xml)?;
    assert_eq!(
        xml,
        concat!(
            r#"<GetDataSourcesResponse xmlns="urn:zimbraAdmin">"#,
            r#"<dataSource name="home" id="ds-1" type="imap">"#,
            r#"<a n="zimbraDataSourceHost">imap.example.com</a>"#,
            r#"<a n="zimbraDataSourcePort">993</a>"#,
            r#"</dataSource></GetDataSourcesResponse>"#
        )
    );
    Ok(())
}

#[test]
fn test_typed_conversion_rejects_bad_enum() {
    let xml = DATA_SOURCES_XML.replace(r#"type="imap""#, r#"type="exchange""#);
    let err = Converter::new()
        .convert_detected(&xml, WireFormat::Json)
        .unwrap_err();
    assert!(err.is_invalid_request());
    assert!(err.to_string().contains("exchange"));
}

#[test]
fn test_pretty_xml_output_reparses() -> Result<()> {
    let converter = Converter::new().with_pretty(2);
    let pretty = converter.convert_detected(DATA_SOURCES_XML, WireFormat::Xml)?;
    assert!(pretty.contains("\n  <dataSource"));

    let compact = Converter::new().convert_detected(&pretty, WireFormat::Xml)?;
    assert!(!compact.contains('\n'));
    Ok(())
}

#[test]
fn test_unregistered_root_converted_as_is() -> Result<()> {
    let json = Converter::new().convert_detected(r#"<Custom x="1"/>"#, WireFormat::Json)?;
    assert_eq!(json, r#"{"Custom":{"x":"1"}}"#);
    Ok(())
}

#[test]
fn test_explicit_type_must_match_root() -> Result<()> {
    let flush = concat!(
        r#"<FlushCacheRequest xmlns="urn:zimbraAdmin">"#,
        r#"<cache type="account" allServers="1"/>"#,
        r#"</FlushCacheRequest>"#
    );
    let err = Converter::new()
        .convert(flush, WireFormat::Json, Some(registry::find("GetAllCosRequest")?))
        .unwrap_err();
    assert!(!err.is_invalid_request());
    assert!(err.to_string().contains("GetAllCosRequest"));

    let json = Converter::new().convert(flush, WireFormat::Json, Some(registry::find("FlushCacheRequest")?))?;
    assert!(json.contains(r#""type":"account""#));
    Ok(())
}

#[test]
fn test_check_with_explicit_nested_type() -> Result<()> {
    let ty = registry::find("BackupHostAccounts")?;
    let report = Converter::new().check(r#"<host name="mail1"/>"#, ty)?;
    assert_eq!(report.errors().count(), 1);
    assert!(report.decode_error.is_some());
    assert!(!report.passed());

    let report = Converter::new().check(r#"<host name="mail1"><accounts/></host>"#, ty)?;
    assert!(report.passed());
    Ok(())
}

#[test]
fn test_malformed_inputs() {
    let converter = Converter::new();
    assert!(converter.convert_detected("<open>", WireFormat::Json).is_err());
    assert!(converter.convert_detected("{not json", WireFormat::Xml).is_err());
    assert!(converter.convert_detected("plain text", WireFormat::Xml).is_err());
    assert!(converter.convert_detected("<a/><b/>", WireFormat::Json).is_err());
}
