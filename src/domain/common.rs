//! Small shapes reused across the admin protocol.

wire_object! {
    /// Free-form key/value pair: `<a n="zimbraMailHost">mail.example.com</a>`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Attr in "a" {
        pub name: String = attr("n"),
        /// Set when the caller may not read the value.
        pub perm_denied: Option<bool> = attr("pd"),
        pub value: String = text,
    }
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            perm_denied: None,
            value: value.into(),
        }
    }
}

/// Values of every pair named `name`, in wire order.
pub fn attr_values<'a, 'n>(attrs: &'a [Attr], name: &'n str) -> impl Iterator<Item = &'a str> + 'n
where
    'a: 'n,
{
    attrs
        .iter()
        .filter(move |attr| attr.name == name)
        .map(|attr| attr.value.as_str())
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NamedElement in "named" {
        pub name: String = attr("name"),
    }
}

impl NamedElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ValueAttrib in "value" {
        pub value: String = attr("value"),
    }
}

impl ValueAttrib {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
