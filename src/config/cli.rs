use crate::core::element::Value;
use crate::core::{WireFormat, WireScalar};
use crate::domain::{
    BackupMethod, CacheEntryBy, CacheEntryType, DataSourceType, QueueAction, QueueActionBy,
    ServerBy, UcServiceBy, VolumeType,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "zmadmin-wire")]
#[command(version, about = "Convert and check mail server admin SOAP documents")]
pub struct CliConfig {
    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a document between XML and JSON
    Convert {
        /// Input file, stdin when absent or "-"
        input: Option<PathBuf>,
        /// Target format; defaults to the other one
        #[arg(long, value_enum)]
        to: Option<WireFormat>,
        /// Decode through this type instead of the one matching the root element
        #[arg(long = "type")]
        type_name: Option<String>,
        /// Carry the tree over without decoding it
        #[arg(long, conflicts_with = "type_name")]
        raw: bool,
        #[arg(long)]
        pretty: bool,
        #[arg(long)]
        indent: Option<usize>,
        #[arg(long)]
        strict: bool,
        /// Output file, stdout when absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a document against a type's wire schema
    Check {
        input: Option<PathBuf>,
        #[arg(long = "type")]
        type_name: Option<String>,
        #[arg(long)]
        strict: bool,
    },
    /// Print the wire schema of a type, or list every type
    Describe { name: Option<String> },
    /// Resolve a value against one of the protocol vocabularies
    Lookup {
        #[arg(value_enum)]
        vocabulary: Vocabulary,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Vocabulary {
    CacheType,
    CacheEntryBy,
    DataSourceType,
    QueueAction,
    QueueActionBy,
    ServerBy,
    UcServiceBy,
    VolumeType,
    BackupMethod,
}

impl Vocabulary {
    /// Canonical wire form of `value`, or the invalid-request error.
    pub fn lookup(self, value: &str) -> Result<String> {
        Ok(match self {
            Self::CacheType => CacheEntryType::from_wire(value)?.to_string(),
            Self::CacheEntryBy => CacheEntryBy::from_wire(value)?.to_string(),
            Self::DataSourceType => DataSourceType::from_wire(value)?.to_string(),
            Self::QueueAction => QueueAction::from_wire(value)?.to_string(),
            Self::QueueActionBy => QueueActionBy::from_wire(value)?.to_string(),
            Self::ServerBy => ServerBy::from_wire(value)?.to_string(),
            Self::UcServiceBy => UcServiceBy::from_wire(value)?.to_string(),
            Self::VolumeType => VolumeType::from_value(&Value::from(value), "type")?.to_string(),
            Self::BackupMethod => BackupMethod::from_wire(value)?.to_string(),
        })
    }

    pub fn values(self) -> &'static [&'static str] {
        match self {
            Self::CacheType => CacheEntryType::WIRE_VALUES,
            Self::CacheEntryBy => CacheEntryBy::WIRE_VALUES,
            Self::DataSourceType => DataSourceType::WIRE_VALUES,
            Self::QueueAction => QueueAction::WIRE_VALUES,
            Self::QueueActionBy => QueueActionBy::WIRE_VALUES,
            Self::ServerBy => ServerBy::WIRE_VALUES,
            Self::UcServiceBy => UcServiceBy::WIRE_VALUES,
            Self::VolumeType => VolumeType::WIRE_VALUES,
            Self::BackupMethod => BackupMethod::WIRE_VALUES,
        }
    }
}

/// Reads the whole input; `None` and `-` mean stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validation::validate_path("config", &config.to_string_lossy())?;
        }
        match &self.command {
            Command::Convert { indent, output, type_name, .. } => {
                if let Some(indent) = indent {
                    validation::validate_range(
                        "indent",
                        *indent,
                        0,
                        crate::config::toml_config::MAX_INDENT,
                    )?;
                }
                if let Some(output) = output {
                    validation::validate_path("output", &output.to_string_lossy())?;
                }
                if let Some(name) = type_name {
                    validation::validate_non_empty_string("type", name)?;
                }
            }
            Command::Check { type_name: Some(name), .. } => {
                validation::validate_non_empty_string("type", name)?;
            }
            _ => {}
        }
        Ok(())
    }
}
