//! Error types.
//!
//! The state container itself never fails. Errors only arise at the edges:
//! when a form submission is rejected, or when configuration is inconsistent.

use thiserror::Error;

/// A rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The name field was empty or whitespace.
    #[error("player name is required")]
    MissingName,

    /// The number field did not parse as an integer.
    #[error("player number must be a whole number, got {0:?}")]
    InvalidNumber(String),

    /// The number parsed but falls outside the allowed range.
    #[error("player number {value} is outside {min}-{max}")]
    NumberOutOfRange { value: i64, min: i64, max: i64 },
}

/// Inconsistent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid number range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}
