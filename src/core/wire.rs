use crate::core::element::Element;
use crate::core::schema::FieldSpec;
use crate::core::{json, xml};
use crate::utils::error::{Result, SoapError};

/// Namespace of every admin request and response.
pub const ADMIN_NAMESPACE: &str = "urn:zimbraAdmin";

/// A type with a declared wire shape. Implemented by `wire_object!`.
pub trait WireObject: Sized {
    /// Element name used when the object is a document root.
    const ELEMENT: &'static str;
    const NAMESPACE: Option<&'static str>;
    const SCHEMA: &'static [FieldSpec];

    fn write_fields(&self, element: &mut Element);

    fn read_fields(element: &Element) -> Result<Self>;

    fn to_element(&self) -> Element {
        let mut element = self.to_element_named(Self::ELEMENT);
        if let Some(namespace) = Self::NAMESPACE {
            element.set_namespace(namespace);
        }
        element
    }

    /// Nested objects are named by the field that holds them, not by their type.
    fn to_element_named(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        self.write_fields(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self> {
        Self::read_fields(element)
    }

    fn to_xml(&self) -> Result<String> {
        xml::to_string(&self.to_element(), &xml::XmlStyle::COMPACT)
    }

    fn to_xml_pretty(&self, indent: usize) -> Result<String> {
        xml::to_string(&self.to_element(), &xml::XmlStyle::pretty(indent))
    }

    fn from_xml(document: &str) -> Result<Self> {
        let root = xml::parse(document)?;
        expect_root::<Self>(&root)?;
        tracing::debug!("Decoding <{}> from XML", Self::ELEMENT);
        Self::from_element(&root)
    }

    /// JSON body of the object, without the `{"Name": ...}` document wrapper.
    fn to_json(&self) -> serde_json::Value {
        json::to_value(&self.to_element())
    }

    fn from_json(body: &serde_json::Value) -> Result<Self> {
        let root = json::from_value(Self::ELEMENT, body)?;
        tracing::debug!("Decoding <{}> from JSON", Self::ELEMENT);
        Self::from_element(&root)
    }

    /// Full `{"Name": {...}}` JSON document.
    fn to_json_document(&self) -> serde_json::Value {
        json::to_document(&self.to_element())
    }

    fn from_json_document(document: &serde_json::Value) -> Result<Self> {
        let root = json::from_document(document)?;
        expect_root::<Self>(&root)?;
        Self::from_element(&root)
    }
}

fn expect_root<T: WireObject>(root: &Element) -> Result<()> {
    if root.name() == T::ELEMENT {
        Ok(())
    } else {
        Err(SoapError::UnexpectedElement {
            expected: T::ELEMENT.to_string(),
            found: root.name().to_string(),
        })
    }
}
