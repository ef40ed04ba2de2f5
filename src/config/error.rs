//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a [`DisplayConfig`](super::DisplayConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("group separator {separator:?} would be read as part of a number")]
    InvalidGroupSeparator { separator: char },

    #[error("empty_text must not be empty")]
    EmptyText,

    #[error("division_by_zero_message must not be blank")]
    BlankMessage,

    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("history_limit {limit} exceeds the maximum of {max}")]
    HistoryLimitTooLarge { limit: usize, max: usize },
}

/// Errors that can occur while loading a display configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
