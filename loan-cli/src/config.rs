//! TOML configuration for the calculator.
//!
//! Every key is optional. A missing key keeps the built-in default.
//!
//! ```toml
//! currency_symbol = "$"
//!
//! [defaults]
//! loan_amount = "5000"
//! interest_rate = "5.5"
//! loan_term = "36"
//! down_payment = "1000"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Initial text of the four form fields.
///
/// Kept as text so a configured default goes through the same parsing as
/// anything typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_term: String,
    pub down_payment: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            loan_amount: "5000".to_string(),
            interest_rate: "5.5".to_string(),
            loan_term: "36".to_string(),
            down_payment: "1000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoanConfig {
    /// Prefix for displayed amounts.
    pub currency_symbol: String,
    pub defaults: FormDefaults,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

impl LoanConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
