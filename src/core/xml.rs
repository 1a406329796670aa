use crate::core::element::Element;
use crate::utils::error::{Result, SoapError};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// Layout of generated XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlStyle {
    pub pretty: bool,
    pub indent: usize,
}

impl XmlStyle {
    pub const COMPACT: Self = Self {
        pretty: false,
        indent: 0,
    };

    pub const fn pretty(indent: usize) -> Self {
        Self {
            pretty: true,
            indent,
        }
    }
}

impl Default for XmlStyle {
    fn default() -> Self {
        Self::COMPACT
    }
}

pub fn to_string(element: &Element, style: &XmlStyle) -> Result<String> {
    let buffer = Vec::new();
    let mut writer = if style.pretty {
        Writer::new_with_indent(buffer, b' ', style.indent)
    } else {
        Writer::new(buffer)
    };

    write_element(&mut writer, element)?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| SoapError::malformed("XML", format!("writer produced invalid UTF-8: {e}")))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    if let Some(namespace) = element.namespace() {
        start.push_attribute(("xmlns", namespace));
    }
    for (name, value) in element.attrs() {
        let text = value.to_xml_text();
        start.push_attribute((name, text.as_ref()));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// Element under construction plus its raw accumulated text.
struct Open {
    element: Element,
    text: String,
}

impl Open {
    fn close(mut self) -> Element {
        // Whitespace between child elements is layout, a leaf's text is data.
        let text = if self.element.children().is_empty() {
            self.text
        } else {
            self.text.trim().to_string()
        };
        if text.is_empty() {
            self.element.clear_text();
        } else {
            self.element.set_text(text);
        }
        self.element
    }
}

pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Open> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                ensure_single_root(&root)?;
                stack.push(Open {
                    element: open_element(&start)?,
                    text: String::new(),
                });
            }
            Event::Empty(start) => {
                ensure_single_root(&root)?;
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let open = stack
                    .pop()
                    .ok_or_else(|| SoapError::malformed("XML", "unbalanced closing tag"))?;
                attach(&mut stack, &mut root, open.close());
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(SoapError::malformed("XML", "text outside the root element"))
                    }
                }
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let text = std::str::from_utf8(&bytes)?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(text),
                    None => {
                        return Err(SoapError::malformed("XML", "CDATA outside the root element"))
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SoapError::malformed(
            "XML",
            format!("unclosed element <{}>", open.element.name()),
        ));
    }

    let root = root.ok_or_else(|| SoapError::malformed("XML", "document has no root element"))?;
    tracing::debug!(
        "Parsed XML <{}> with {} children",
        root.name(),
        root.children().len()
    );
    Ok(root)
}

fn ensure_single_root(root: &Option<Element>) -> Result<()> {
    match root {
        Some(existing) => Err(SoapError::malformed(
            "XML",
            format!("second root element after <{}>", existing.name()),
        )),
        None => Ok(()),
    }
}

fn attach(stack: &mut [Open], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.element.push_child(element),
        None => *root = Some(element),
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let local = start.local_name();
    let mut element = Element::new(std::str::from_utf8(local.as_ref())?);

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        if key == "xmlns" {
            element.set_namespace(value.into_owned());
        } else if !key.starts_with("xmlns:") {
            element.set_attr(key, value.into_owned());
        }
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::Value;

    #[test]
    fn test_compact_output() {
        let el = Element::new("FlushCacheRequest")
            .with_namespace("urn:zimbraAdmin")
            .with_child(
                Element::new("cache")
                    .with_attr("type", "account")
                    .with_attr("allServers", true),
            );

        let xml = to_string(&el, &XmlStyle::COMPACT).unwrap();
        assert_eq!(
            xml,
            r#"<FlushCacheRequest xmlns="urn:zimbraAdmin"><cache type="account" allServers="1"/></FlushCacheRequest>"#
        );
    }

    #[test]
    fn test_parse_keeps_leaf_text_and_drops_layout() {
        let xml = r#"
            <ucservice name="uc1" id="u-1">
                <a n="zimbraUCProvider">cisco</a>
                <a n="description">  padded  </a>
            </ucservice>"#;

        let el = parse(xml).unwrap();
        assert_eq!(el.name(), "ucservice");
        assert_eq!(el.text(), None);
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.children()[1].text(), Some("  padded  "));
    }

    #[test]
    fn test_parse_namespace_and_entities() {
        let el = parse(r#"<x:GetServerRequest xmlns="urn:zimbraAdmin" xmlns:x="urn:zimbraAdmin" attrs="a&amp;b"/>"#)
            .unwrap();
        assert_eq!(el.name(), "GetServerRequest");
        assert_eq!(el.namespace(), Some("urn:zimbraAdmin"));
        assert_eq!(el.attr("attrs"), Some(&Value::from("a&b")));
        assert!(el.attr("xmlns:x").is_none());
    }

    #[test]
    fn test_parse_cdata() {
        let el = parse("<a n=\"k\"><![CDATA[<b>raw</b>]]></a>").unwrap();
        assert_eq!(el.text(), Some("<b>raw</b>"));
    }

    #[test]
    fn test_parse_rejects_second_root() {
        assert!(parse("<a/><b/>").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_unclosed() {
        assert!(parse("   ").is_err());
        assert!(parse("<a><b></b>").is_err());
    }

    #[test]
    fn test_pretty_round_trip() {
        let el = Element::new("GetAllVolumesResponse")
            .with_child(Element::new("volume").with_attr("id", "1"))
            .with_child(Element::new("volume").with_attr("id", "2"));

        let xml = to_string(&el, &XmlStyle::pretty(2)).unwrap();
        assert!(xml.contains('\n'));
        assert_eq!(parse(&xml).unwrap(), el);
    }
}
