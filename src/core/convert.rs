//! Document level operations: format detection, XML/JSON conversion and
//! schema checks against a registered type.

use crate::core::element::Element;
use crate::core::registry::{self, WireType};
use crate::core::schema::{Finding, Severity};
use crate::core::{json, xml};
use crate::utils::error::{Result, SoapError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum WireFormat {
    Xml,
    Json,
}

impl WireFormat {
    /// Sniffs the first non-whitespace character: `<` or `{`.
    pub fn detect(text: &str) -> Result<Self> {
        match text.trim_start_matches('\u{feff}').trim_start().chars().next() {
            Some('<') => Ok(Self::Xml),
            Some('{') => Ok(Self::Json),
            Some(other) => Err(SoapError::malformed(
                "wire",
                format!("cannot tell XML from JSON, document starts with '{other}'"),
            )),
            None => Err(SoapError::malformed("wire", "empty document")),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for WireFormat {
    type Err = SoapError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            _ => Err(SoapError::InvalidEnumValue {
                kind: "wire format",
                value: value.to_string(),
                valid: Some(&["xml", "json"]),
            }),
        }
    }
}

/// Outcome of checking one document against one type.
#[derive(Debug)]
pub struct CheckReport {
    pub type_name: &'static str,
    pub format: WireFormat,
    pub findings: Vec<Finding>,
    /// Set when the document could not be decoded into the type at all.
    pub decode_error: Option<SoapError>,
    pub strict: bool,
}

impl CheckReport {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Strict reports also fail on warnings.
    pub fn passed(&self) -> bool {
        self.decode_error.is_none()
            && self.errors().next().is_none()
            && (!self.strict || self.warnings().next().is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub pretty: bool,
    pub indent: usize,
    pub strict: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            strict: false,
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, indent: usize) -> Self {
        self.pretty = true;
        self.indent = indent;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn parse(&self, text: &str) -> Result<(WireFormat, Element)> {
        let format = WireFormat::detect(text)?;
        let element = match format {
            WireFormat::Xml => xml::parse(text)?,
            WireFormat::Json => json::from_document(&serde_json::from_str(text)?)?,
        };
        Ok((format, element))
    }

    pub fn render(&self, element: &Element, format: WireFormat) -> Result<String> {
        match format {
            WireFormat::Xml => {
                let style = if self.pretty {
                    xml::XmlStyle::pretty(self.indent)
                } else {
                    xml::XmlStyle::COMPACT
                };
                xml::to_string(element, &style)
            }
            WireFormat::Json => {
                let document = json::to_document(element);
                if !self.pretty {
                    return Ok(serde_json::to_string(&document)?);
                }
                let indent = " ".repeat(self.indent);
                let mut out = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
                document.serialize(&mut serializer)?;
                String::from_utf8(out).map_err(|e| {
                    SoapError::malformed("JSON", format!("writer produced invalid UTF-8: {e}"))
                })
            }
        }
    }

    /// Converts `text` to `to`. With a type, the document is decoded into it
    /// and re-encoded; without one the tree is carried over as is.
    pub fn convert(&self, text: &str, to: WireFormat, as_type: Option<&WireType>) -> Result<String> {
        let (from, element) = self.parse(text)?;
        let element = match as_type {
            Some(ty) => {
                self.reject_strict_findings(ty, &element)?;
                ty.normalize(&element)?
            }
            None => element,
        };
        tracing::debug!("Converting <{}> from {} to {}", element.name(), from, to);
        self.render(&element, to)
    }

    /// Like `convert`, picking the type from the registry by root element.
    pub fn convert_detected(&self, text: &str, to: WireFormat) -> Result<String> {
        let (_, element) = self.parse(text)?;
        match registry::for_root(&element) {
            Some(ty) => {
                self.reject_strict_findings(ty, &element)?;
                self.render(&ty.normalize(&element)?, to)
            }
            None => {
                tracing::warn!("No registered message for <{}>, converting as is", element.name());
                self.render(&element, to)
            }
        }
    }

    pub fn check(&self, text: &str, ty: &WireType) -> Result<CheckReport> {
        let (format, element) = self.parse(text)?;
        let mut findings = Vec::new();
        if element.name() != ty.element {
            findings.push(Finding {
                severity: Severity::Error,
                path: element.name().to_string(),
                message: format!("expected root <{}>", ty.element),
            });
        } else {
            findings.extend(ty.check(&element));
        }
        for finding in &findings {
            tracing::warn!("{}", finding);
        }
        let decode_error = ty.normalize(&element).err();
        Ok(CheckReport {
            type_name: ty.name,
            format,
            findings,
            decode_error,
            strict: self.strict,
        })
    }

    fn reject_strict_findings(&self, ty: &WireType, element: &Element) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        match ty.check(element).into_iter().next() {
            Some(finding) => Err(SoapError::malformed("wire", finding.to_string())),
            None => Ok(()),
        }
    }
}
