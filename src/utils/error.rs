use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoapError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid UTF-8 in document: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid request: unknown {kind}: {value}{}", valid_values_suffix(.valid))]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        valid: Option<&'static [&'static str]>,
    },

    #[error("invalid request: invalid value '{value}' for '{field}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("missing required {what} '{name}' in <{element}>")]
    MissingField {
        element: String,
        name: String,
        what: &'static str,
    },

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedElement { expected: String, found: String },

    #[error("malformed {format} document: {message}")]
    Malformed {
        format: &'static str,
        message: String,
    },

    #[error("unknown wire type: {0}")]
    UnknownType(String),

    #[error("ambiguous wire type '{name}', one of: {candidates}")]
    AmbiguousType { name: String, candidates: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// The two failure families of the wire layer, plus the ambient ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was syntactically present but not acceptable.
    InvalidRequest,
    /// The document itself does not match the wire shape.
    MalformedWireData,
    Io,
    Config,
}

impl SoapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEnumValue { .. }
            | Self::InvalidValue { .. }
            | Self::UnknownType(_)
            | Self::AmbiguousType { .. } => ErrorKind::InvalidRequest,
            Self::Xml(_)
            | Self::XmlAttr(_)
            | Self::Json(_)
            | Self::Utf8(_)
            | Self::MissingField { .. }
            | Self::UnexpectedElement { .. }
            | Self::Malformed { .. } => ErrorKind::MalformedWireData,
            Self::Io(_) => ErrorKind::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }

    pub fn is_invalid_request(&self) -> bool {
        self.kind() == ErrorKind::InvalidRequest
    }

    pub(crate) fn missing(element: &str, name: &str, what: &'static str) -> Self {
        Self::MissingField {
            element: element.to_string(),
            name: name.to_string(),
            what,
        }
    }

    pub(crate) fn malformed(format: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            message: message.into(),
        }
    }
}

fn valid_values_suffix(valid: &Option<&'static [&'static str]>) -> String {
    match valid {
        Some(values) => format!(", valid values: [{}]", values.join(", ")),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SoapError>;
