use crate::core::{Converter, WireFormat};
use crate::utils::error::{Result, SoapError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
pub const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub schema: SchemaConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Target format when the command line does not name one.
    pub format: Option<WireFormat>,
    pub pretty: bool,
    pub indent: usize,
    /// Where converted files are written; stdout when absent.
    pub directory: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            pretty: false,
            indent: 2,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Treat unknown attributes and elements as errors.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loading config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| SoapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SoapError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("output.indent", self.output.indent, 0, MAX_INDENT)?;

        if let Some(directory) = &self.output.directory {
            validation::validate_path("output.directory", directory)?;
        }

        validation::validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;

        Ok(())
    }

    pub fn converter(&self) -> Converter {
        Converter {
            pretty: self.output.pretty,
            indent: self.output.indent,
            strict: self.schema.strict,
        }
    }

    pub fn output_directory(&self) -> Option<PathBuf> {
        self.output.directory.as_ref().map(PathBuf::from)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
