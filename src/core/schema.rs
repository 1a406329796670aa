//! Declarative description of a wire type: which Rust field lands where on the wire.

use crate::core::element::Element;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Attribute,
    /// Text content of the element itself.
    Text,
    /// Child element holding a single scalar as its text.
    Element,
    /// Single nested object.
    Child,
    /// Repeated nested objects directly under the parent.
    List,
    /// Repeated nested objects inside a container element named by `FieldSpec::wire`.
    WrappedList { item: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    /// Optional boolean: absent, true or false.
    TriStateBoolean,
    Enum(&'static [&'static str]),
    Object {
        element: &'static str,
        schema: &'static [FieldSpec],
    },
}

impl FieldKind {
    /// The kind seen through an `Option`.
    pub const fn optional(self) -> Self {
        match self {
            Self::Boolean => Self::TriStateBoolean,
            other => other,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
            Self::TriStateBoolean => f.write_str("boolean?"),
            Self::Enum(values) => write!(f, "enum({})", values.join("|")),
            Self::Object { element, .. } => write!(f, "<{element}>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: &'static str,
    pub wire: &'static str,
    pub placement: Placement,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Short human-readable placement, e.g. `@id`, `<cache>`, `<accounts>/<account>*`.
    pub fn wire_path(&self) -> String {
        match self.placement {
            Placement::Attribute => format!("@{}", self.wire),
            Placement::Text => "#text".to_string(),
            Placement::Element | Placement::Child => format!("<{}>", self.wire),
            Placement::List => format!("<{}>*", self.wire),
            Placement::WrappedList { item } => format!("<{}>/<{}>*", self.wire, item),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// Slash separated element path to where the finding applies.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}: {}", self.path, self.message)
    }
}

/// Walks `element` against `schema`, reporting missing required pieces as
/// errors and anything the schema does not name as warnings.
pub fn check(schema: &[FieldSpec], element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_into(schema, element, element.name(), &mut findings);
    findings
}

fn check_into(schema: &[FieldSpec], element: &Element, path: &str, out: &mut Vec<Finding>) {
    for spec in schema {
        match spec.placement {
            Placement::Attribute | Placement::Element => {
                let present = element.attr(spec.wire).is_some() || element.child(spec.wire).is_some();
                if spec.required && !present {
                    out.push(error(path, format!("missing required {}", spec.wire_path())));
                }
            }
            Placement::Text => {}
            Placement::Child => match element.child(spec.wire) {
                Some(child) => check_nested(spec, child, path, out),
                None if spec.required => {
                    out.push(error(path, format!("missing required {}", spec.wire_path())));
                }
                None => {}
            },
            Placement::List => {
                for child in element.children_named(spec.wire) {
                    check_nested(spec, child, path, out);
                }
            }
            Placement::WrappedList { item } => match element.child(spec.wire) {
                Some(wrapper) => {
                    let wrapper_path = format!("{path}/{}", spec.wire);
                    for child in wrapper.children() {
                        if child.name() == item {
                            check_nested(spec, child, &wrapper_path, out);
                        } else {
                            out.push(warning(
                                &wrapper_path,
                                format!("unexpected element <{}>", child.name()),
                            ));
                        }
                    }
                }
                None if spec.required => {
                    out.push(error(path, format!("missing required {}", spec.wire_path())));
                }
                None => {}
            },
        }
    }

    for (name, _) in element.attrs() {
        if !schema.iter().any(|spec| names_attribute(spec, name)) {
            out.push(warning(path, format!("unknown attribute @{name}")));
        }
    }
    for child in element.children() {
        if !schema.iter().any(|spec| names_child(spec, child.name())) {
            out.push(warning(path, format!("unknown element <{}>", child.name())));
        }
    }
}

fn check_nested(spec: &FieldSpec, child: &Element, parent: &str, out: &mut Vec<Finding>) {
    if let FieldKind::Object { schema, .. } = spec.kind {
        let path = format!("{parent}/{}", child.name());
        check_into(schema, child, &path, out);
    }
}

fn names_attribute(spec: &FieldSpec, name: &str) -> bool {
    matches!(spec.placement, Placement::Attribute | Placement::Element) && spec.wire == name
}

fn names_child(spec: &FieldSpec, name: &str) -> bool {
    !matches!(spec.placement, Placement::Text) && spec.wire == name
}

fn error(path: &str, message: String) -> Finding {
    Finding {
        severity: Severity::Error,
        path: path.to_string(),
        message,
    }
}

fn warning(path: &str, message: String) -> Finding {
    Finding {
        severity: Severity::Warning,
        path: path.to_string(),
        message,
    }
}
