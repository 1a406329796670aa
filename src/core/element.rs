//! Format-neutral element tree shared by the XML and JSON codecs.

use std::borrow::Cow;

/// Attribute value. XML only ever produces `Str`; JSON keeps its scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Text form used on the XML wire: booleans are "1"/"0".
    pub fn to_xml_text(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Bool(false) => Cow::Borrowed("0"),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attrs: Vec<(String, Value)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.set_namespace(namespace);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Replaces an existing attribute in place, otherwise appends it.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub(crate) fn clear_text(&mut self) {
        self.text = None;
    }

    /// True when the element carries nothing but its name.
    pub fn is_bare(&self) -> bool {
        self.attrs.is_empty() && self.children.is_empty() && self.text.is_none()
    }

    /// A `<a n="key">value</a>` style key/value pair.
    pub(crate) fn as_key_value_pair(&self) -> Option<(&str, &str)> {
        if self.children.is_empty() && self.attrs.len() == 1 {
            if let (key, Value::Str(name)) = (&self.attrs[0].0, &self.attrs[0].1) {
                if key == "n" {
                    return Some((name, self.text.as_deref().unwrap_or("")));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("server")
            .with_attr("name", "mta1")
            .with_attr("id", "42");
        el.set_attr("name", "mta2");

        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0], ("name", &Value::from("mta2")));
        assert_eq!(attrs[1], ("id", &Value::from("42")));
    }

    #[test]
    fn test_value_xml_text_uses_numeric_booleans() {
        assert_eq!(Value::Bool(true).to_xml_text(), "1");
        assert_eq!(Value::Bool(false).to_xml_text(), "0");
        assert_eq!(Value::Int(-7).to_xml_text(), "-7");
    }

    #[test]
    fn test_children_named_preserves_order() {
        let el = Element::new("query")
            .with_child(Element::new("field").with_attr("name", "from"))
            .with_child(Element::new("other"))
            .with_child(Element::new("field").with_attr("name", "to"));

        let names: Vec<_> = el
            .children_named("field")
            .filter_map(|f| f.attr("name"))
            .map(|v| v.to_xml_text().into_owned())
            .collect();
        assert_eq!(names, vec!["from", "to"]);
    }

    #[test]
    fn test_key_value_pair_detection() {
        let pair = Element::new("a").with_attr("n", "zimbraId").with_text("abc");
        assert_eq!(pair.as_key_value_pair(), Some(("zimbraId", "abc")));

        let flagged = pair.clone().with_attr("pd", true);
        assert_eq!(flagged.as_key_value_pair(), None);
    }
}
