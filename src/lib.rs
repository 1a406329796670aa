#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{Converter, Element, Value, WireFormat, WireObject, WireScalar};
pub use crate::utils::error::{ErrorKind, Result, SoapError};
