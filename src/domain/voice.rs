use crate::domain::common::{attr_values, Attr};

wire_object! {
    /// Voice provider with free-form `<a n="...">` settings.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VoiceProviderInfo in "provider" {
        pub name: String = attr("name"),
        pub attrs: Vec<Attr> = list("a"),
    }
}

impl VoiceProviderInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::new(name, value));
        self
    }

    /// First value of `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        attr_values(&self.attrs, name).next()
    }
}
