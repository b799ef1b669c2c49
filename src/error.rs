//! Error types for the validation engine.
//!
//! Validating a candidate never fails: a rejected value is simply `false`.
//! The errors in this module surface while rules are being built or while
//! configuration profiles are loaded, and are meant to abort start-up.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rule construction and configuration loading.
pub type ValidatorResult<T> = Result<T, ValidatorError>;

/// Errors raised while building validators or loading profiles.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Configuration file could not be read
    #[error("IO error for path '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// An area code does not have the 1-4 digit shape
    #[error("Invalid area code '{code}': {reason}")]
    InvalidAreaCode { code: String, reason: String },

    /// An option value or pattern outside any profile is malformed
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// A profile entry is malformed or contradictory
    #[error("Invalid profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    /// Configuration document could not be parsed
    #[error("Configuration parse error: {reason}")]
    ConfigParse { reason: String },

    /// Regex composition failed
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },
}

impl ValidatorError {
    /// Returns true for errors caused by configuration data rather than code.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::InvalidAreaCode { .. }
                | Self::InvalidInput { .. }
                | Self::InvalidProfile { .. }
                | Self::ConfigParse { .. }
        )
    }
}

impl From<serde_json::Error> for ValidatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            reason: err.to_string(),
        }
    }
}
