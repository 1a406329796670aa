use anyhow::Result;
use serde_json::json;
use zmadmin_wire::core::{json as projection, xml};
use zmadmin_wire::domain::{
    Attr, CacheEntryBy, CacheEntrySelector, CacheEntryType, CacheSelector, FlushCacheRequest,
    GetAllServersResponse, ServerInfo,
};
use zmadmin_wire::WireObject;

#[test]
fn test_flush_cache_document_shape() {
    let request = FlushCacheRequest {
        cache: Some(
            CacheSelector::new(&[CacheEntryType::Account])
                .with_entry(CacheEntrySelector::new(CacheEntryBy::Name, "user@example.com")),
        ),
    };
    assert_eq!(
        request.to_json_document(),
        json!({
            "FlushCacheRequest": {
                "cache": [{
                    "type": "account",
                    "entry": [{ "by": "name", "_content": "user@example.com" }]
                }],
                "_jsns": "urn:zimbraAdmin"
            }
        })
    );
}

#[test]
fn test_attrs_map_collapses_pairs() {
    let response = GetAllServersResponse {
        servers: vec![ServerInfo {
            name: "mail1".to_string(),
            id: "s-1".to_string(),
            attrs: vec![
                Attr::new("cn", "mail1"),
                Attr::new("zimbraServiceEnabled", "mailbox"),
                Attr::new("zimbraServiceEnabled", "mta"),
            ],
        }],
    };
    let body = response.to_json();
    assert_eq!(
        body["server"][0]["_attrs"],
        json!({ "cn": "mail1", "zimbraServiceEnabled": ["mailbox", "mta"] })
    );
}

#[test]
fn test_perm_denied_pair_stays_an_element() {
    let mut denied = Attr::new("userPassword", "");
    denied.perm_denied = Some(true);
    let server = ServerInfo {
        name: "mail1".to_string(),
        id: "s-1".to_string(),
        attrs: vec![Attr::new("cn", "mail1"), denied],
    };
    let body = server.to_json();
    assert!(body.get("_attrs").is_none());
    assert_eq!(body["a"][1]["pd"], true);
    assert_eq!(ServerInfo::from_json(&body).unwrap(), server);
}

#[test]
fn test_xml_and_json_decode_to_same_value() -> Result<()> {
    let xml = concat!(
        r#"<GetAllServersResponse xmlns="urn:zimbraAdmin">"#,
        r#"<server name="mail1" id="s-1"><a n="cn">mail1</a></server>"#,
        r#"</GetAllServersResponse>"#
    );
    let document = json!({
        "GetAllServersResponse": {
            "server": [{ "name": "mail1", "id": "s-1", "_attrs": { "cn": "mail1" } }],
            "_jsns": "urn:zimbraAdmin"
        }
    });
    assert_eq!(
        GetAllServersResponse::from_xml(xml)?,
        GetAllServersResponse::from_json_document(&document)?
    );
    Ok(())
}

#[test]
fn test_single_object_accepted_where_array_expected() -> Result<()> {
    let body = json!({ "server": { "name": "mail1", "id": "s-1" } });
    let response = GetAllServersResponse::from_json(&body)?;
    assert_eq!(response.servers.len(), 1);
    Ok(())
}

#[test]
fn test_wrong_root_rejected() {
    let document = json!({ "GetServerResponse": {} });
    let err = GetAllServersResponse::from_json_document(&document).unwrap_err();
    assert!(err.to_string().contains("GetServerResponse"));
}

#[test]
fn test_document_must_have_single_root() {
    let document = json!({ "A": {}, "B": {} });
    assert!(projection::from_document(&document).is_err());
    assert!(projection::from_document(&json!([1, 2])).is_err());
}

#[test]
fn test_untyped_tree_survives_both_projections() -> Result<()> {
    let source = r#"<Unknown xmlns="urn:x" flag="1"><item id="7">text</item><item id="8"/></Unknown>"#;
    let tree = xml::parse(source)?;
    let document = projection::to_document(&tree);
    let back = projection::from_document(&document)?;
    assert_eq!(xml::to_string(&back, &xml::XmlStyle::COMPACT)?, source);
    Ok(())
}
