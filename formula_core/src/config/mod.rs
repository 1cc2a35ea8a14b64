//! Master data and formula constants, read from TOML or JSON
//!
//! Master data carries ship and gear records; formula constants carry the
//! caps and damage tunables. Both deserialize through the helpers here and
//! are checked by their own `validate` before use.

mod constants;
mod master;

pub use constants::{CapConstants, CriticalConstants, DamageConstants, FormulaConstants};
pub use master::{default_master_data, MasterData};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to load master data or formula constants
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read master data or constants file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("malformed TOML master data or constants: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("malformed JSON master data or constants: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Records that parse but break a table invariant (duplicate ids, bad caps)
    #[error("inconsistent master data or constants: {0}")]
    ValidationError(String),
}

/// Read a master data or constants file from disk
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    log::debug!("loading formula tables from {}", path.display());
    let tables: T = toml::from_str(&content)?;
    Ok(tables)
}

/// Deserialize master data or constants from TOML text
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let tables: T = toml::from_str(content)?;
    Ok(tables)
}

/// Deserialize master data or constants exported as JSON
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let tables: T = serde_json::from_str(content)?;
    Ok(tables)
}
