//! JSON projection of the element tree.
//!
//! Attributes become keys, children become arrays grouped by name, text is
//! `_content`, the namespace is `_jsns` and `<a n="k">v</a>` pairs collapse
//! into an `_attrs` map.

use crate::core::element::Element;
use crate::utils::error::{Result, SoapError};
use serde_json::{Map, Value as Json};

pub const CONTENT_KEY: &str = "_content";
pub const NAMESPACE_KEY: &str = "_jsns";
pub const KEY_VALUE_PAIRS_KEY: &str = "_attrs";
const PAIR_ELEMENT: &str = "a";
const PAIR_NAME: &str = "n";

pub fn to_value(element: &Element) -> Json {
    let mut map = Map::new();

    for (name, value) in element.attrs() {
        map.insert(name.to_string(), value.to_json());
    }

    let collapse_pairs = pairs_collapse(element);

    let mut pairs = Map::new();
    for child in element.children() {
        if collapse_pairs && child.name() == PAIR_ELEMENT {
            if let Some((key, value)) = child.as_key_value_pair() {
                push_pair(&mut pairs, key, value);
            }
            continue;
        }
        let entry = map
            .entry(child.name().to_string())
            .or_insert_with(|| Json::Array(Vec::new()));
        match entry {
            Json::Array(items) => items.push(to_value(child)),
            // An attribute of the same name is kept as a scalar item, which
            // reads back as a text child.
            other => {
                let attr = other.take();
                *other = Json::Array(vec![attr, to_value(child)]);
            }
        }
    }
    if !pairs.is_empty() {
        map.insert(KEY_VALUE_PAIRS_KEY.to_string(), Json::Object(pairs));
    }

    if let Some(text) = element.text() {
        map.insert(CONTENT_KEY.to_string(), Json::String(text.to_string()));
    }
    if let Some(namespace) = element.namespace() {
        map.insert(NAMESPACE_KEY.to_string(), Json::String(namespace.to_string()));
    }

    Json::Object(map)
}

// Pairs fold into `_attrs` only when each is a plain `n`/text pair and every
// key's pairs are adjacent, so the map reads back in wire order.
fn pairs_collapse(element: &Element) -> bool {
    let mut seen: Vec<&str> = Vec::new();
    for child in element.children_named(PAIR_ELEMENT) {
        let Some((key, _)) = child.as_key_value_pair() else {
            return false;
        };
        if seen.last() == Some(&key) {
            continue;
        }
        if seen.contains(&key) {
            return false;
        }
        seen.push(key);
    }
    true
}

// A repeated key turns its value into an array.
fn push_pair(pairs: &mut Map<String, Json>, key: &str, value: &str) {
    let value = Json::String(value.to_string());
    if !pairs.contains_key(key) {
        pairs.insert(key.to_string(), value);
        return;
    }
    match pairs.get_mut(key) {
        Some(Json::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Json::Array(vec![first, value]);
        }
        None => {}
    }
}

/// `{"Name": {...}}`
pub fn to_document(element: &Element) -> Json {
    let mut map = Map::new();
    map.insert(element.name().to_string(), to_value(element));
    Json::Object(map)
}

pub fn from_value(name: &str, value: &Json) -> Result<Element> {
    let map = match value {
        Json::Object(map) => map,
        other => {
            return Err(SoapError::malformed(
                "JSON",
                format!("<{name}> must be an object, got {}", json_type(other)),
            ))
        }
    };

    let mut element = Element::new(name);
    for (key, value) in map {
        match key.as_str() {
            CONTENT_KEY => element.set_text(scalar_text(key, value)?),
            NAMESPACE_KEY => element.set_namespace(scalar_text(key, value)?),
            KEY_VALUE_PAIRS_KEY => read_pairs(&mut element, value)?,
            _ => read_entry(&mut element, key, value)?,
        }
    }
    Ok(element)
}

pub fn from_document(document: &Json) -> Result<Element> {
    match document {
        Json::Object(map) if map.len() == 1 => {
            let (name, body) = map
                .iter()
                .next()
                .ok_or_else(|| SoapError::malformed("JSON", "empty document"))?;
            let element = from_value(name, body)?;
            tracing::debug!(
                "Parsed JSON <{}> with {} children",
                element.name(),
                element.children().len()
            );
            Ok(element)
        }
        _ => Err(SoapError::malformed(
            "JSON",
            "document must be an object with exactly one root key",
        )),
    }
}

fn read_entry(element: &mut Element, key: &str, value: &Json) -> Result<()> {
    match value {
        Json::Null => {}
        Json::Object(_) => element.push_child(from_value(key, value)?),
        Json::Array(items) => {
            for item in items {
                match item {
                    Json::Object(_) => element.push_child(from_value(key, item)?),
                    Json::Null => {}
                    scalar => element.push_child(Element::new(key).with_text(scalar_text(key, scalar)?)),
                }
            }
        }
        Json::String(s) => element.set_attr(key, s.as_str()),
        Json::Bool(b) => element.set_attr(key, *b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => element.set_attr(key, i),
            None => element.set_attr(key, n.to_string()),
        },
    }
    Ok(())
}

fn read_pairs(element: &mut Element, value: &Json) -> Result<()> {
    let pairs = match value {
        Json::Object(pairs) => pairs,
        other => {
            return Err(SoapError::malformed(
                "JSON",
                format!("{KEY_VALUE_PAIRS_KEY} must be an object, got {}", json_type(other)),
            ))
        }
    };
    for (key, value) in pairs {
        let values = match value {
            Json::Array(values) => values.iter().collect::<Vec<_>>(),
            single => vec![single],
        };
        for value in values {
            element.push_child(
                Element::new(PAIR_ELEMENT)
                    .with_attr(PAIR_NAME, key.as_str())
                    .with_text(scalar_text(key, value)?),
            );
        }
    }
    Ok(())
}

fn scalar_text(key: &str, value: &Json) -> Result<String> {
    match value {
        Json::String(s) => Ok(s.clone()),
        Json::Bool(b) => Ok(b.to_string()),
        Json::Number(n) => Ok(n.to_string()),
        other => Err(SoapError::malformed(
            "JSON",
            format!("'{key}' must be a scalar, got {}", json_type(other)),
        )),
    }
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::Value;
    use serde_json::json;

    #[test]
    fn test_attributes_children_and_content() {
        let el = Element::new("GetAllServersResponse")
            .with_namespace("urn:zimbraAdmin")
            .with_child(
                Element::new("server")
                    .with_attr("name", "mta1")
                    .with_attr("isCurrent", true),
            )
            .with_child(Element::new("server").with_attr("name", "mta2"));

        assert_eq!(
            to_value(&el),
            json!({
                "server": [
                    {"name": "mta1", "isCurrent": true},
                    {"name": "mta2"}
                ],
                "_jsns": "urn:zimbraAdmin"
            })
        );
    }

    #[test]
    fn test_key_value_pairs_collapse_into_attrs() {
        let el = Element::new("ucservice")
            .with_attr("name", "uc1")
            .with_child(Element::new("a").with_attr("n", "key1").with_text("value1"))
            .with_child(Element::new("a").with_attr("n", "key2").with_text("value2-a"))
            .with_child(Element::new("a").with_attr("n", "key2").with_text("value2-b"));

        let value = to_value(&el);
        assert_eq!(
            value,
            json!({
                "name": "uc1",
                "_attrs": {"key1": "value1", "key2": ["value2-a", "value2-b"]}
            })
        );
        assert_eq!(from_value("ucservice", &value).unwrap(), el);
    }

    #[test]
    fn test_pairs_with_extra_attributes_stay_as_array() {
        let el = Element::new("account")
            .with_child(Element::new("a").with_attr("n", "k").with_attr("pd", true));

        assert_eq!(
            to_value(&el),
            json!({"a": [{"n": "k", "pd": true}]})
        );
    }

    #[test]
    fn test_interleaved_pairs_keep_order() {
        let el = Element::new("provider")
            .with_child(Element::new("a").with_attr("n", "a").with_text("1"))
            .with_child(Element::new("a").with_attr("n", "b").with_text("2"))
            .with_child(Element::new("a").with_attr("n", "a").with_text("3"));

        let value = to_value(&el);
        assert!(value.get(KEY_VALUE_PAIRS_KEY).is_none());
        assert_eq!(
            value,
            json!({"a": [
                {"n": "a", "_content": "1"},
                {"n": "b", "_content": "2"},
                {"n": "a", "_content": "3"}
            ]})
        );
        assert_eq!(from_value("provider", &value).unwrap(), el);
    }

    #[test]
    fn test_attribute_and_child_with_same_name_both_kept() {
        let el = Element::new("query")
            .with_attr("field", "from")
            .with_child(Element::new("field").with_attr("name", "rcpt"));

        let value = to_value(&el);
        assert_eq!(value, json!({"field": ["from", {"name": "rcpt"}]}));

        let back = from_value("query", &value).unwrap();
        let fields: Vec<_> = back.children_named("field").collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].text(), Some("from"));
        assert_eq!(fields[1].attr("name"), Some(&Value::from("rcpt")));
    }

    #[test]
    fn test_from_value_typed_scalars() {
        let el = from_value(
            "volume",
            &json!({"id": 3, "compressBlobs": false, "name": "msg1", "note": null}),
        )
        .unwrap();
        assert_eq!(el.attr("id"), Some(&Value::Int(3)));
        assert_eq!(el.attr("compressBlobs"), Some(&Value::Bool(false)));
        assert_eq!(el.attr("name"), Some(&Value::from("msg1")));
        assert!(el.attr("note").is_none());
    }

    #[test]
    fn test_document_round_trip() {
        let el = Element::new("GetMailboxRequest")
            .with_namespace("urn:zimbraAdmin")
            .with_child(Element::new("mbox").with_attr("id", "acct-1"));

        let doc = to_document(&el);
        assert_eq!(
            doc,
            json!({"GetMailboxRequest": {"mbox": [{"id": "acct-1"}], "_jsns": "urn:zimbraAdmin"}})
        );
        assert_eq!(from_document(&doc).unwrap(), el);
    }

    #[test]
    fn test_from_document_rejects_multiple_roots() {
        assert!(from_document(&json!({"A": {}, "B": {}})).is_err());
        assert!(from_document(&json!([1, 2])).is_err());
    }
}
