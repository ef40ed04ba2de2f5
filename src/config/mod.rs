//! Display configuration.
//!
//! Settings for the display collaborator, loaded from TOML. Validation uses
//! Stillwater's `Validation` so that every problem in a file is reported in
//! one pass rather than one per load attempt.
//!
//! # Example
//!
//! ```rust
//! use tally::config::DisplayConfig;
//!
//! let config = DisplayConfig::from_toml_str(r#"
//!     group_separator = " "
//!     history_limit = 16
//! "#).unwrap();
//!
//! assert_eq!(config.group_separator, ' ');
//! assert_eq!(config.empty_text, "0");
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{DEFAULT_GROUP_SEPARATOR, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest accepted `history_limit`.
pub const MAX_HISTORY_LIMIT: usize = 4096;

/// Settings for rendering the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Thousands separator for the integer part of operands.
    pub group_separator: char,

    /// Text shown when nothing has been typed.
    pub empty_text: String,

    /// Notice shown to the user when a division by zero is attempted.
    pub division_by_zero_message: String,

    /// Number of phase transitions the calculator keeps, 1 to
    /// [`MAX_HISTORY_LIMIT`]. Each phase change costs O(limit).
    pub history_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR,
            empty_text: "0".to_string(),
            division_by_zero_message: "Cannot divide by zero".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl DisplayConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = toml::from_str(text)?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded display configuration");
        Ok(config)
    }

    /// Check every setting, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            check(
                !is_numeric_char(self.group_separator),
                ConfigViolation::InvalidGroupSeparator {
                    separator: self.group_separator,
                },
            ),
            check(!self.empty_text.is_empty(), ConfigViolation::EmptyText),
            check(
                !self.division_by_zero_message.trim().is_empty(),
                ConfigViolation::BlankMessage,
            ),
            check(self.history_limit > 0, ConfigViolation::ZeroHistoryLimit),
            check(
                self.history_limit <= MAX_HISTORY_LIMIT,
                ConfigViolation::HistoryLimitTooLarge {
                    limit: self.history_limit,
                    max: MAX_HISTORY_LIMIT,
                },
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}

fn check(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}
