//! Validation targets and batch statistics.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidatorError;

/// Kind of identifier to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationTarget {
    /// Dutch telephone numbers
    Phone,

    /// E-mail addresses
    Email,

    /// IBAN account numbers
    Iban,
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Iban => "iban",
        };
        f.write_str(name)
    }
}

impl FromStr for ValidationTarget {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "iban" => Ok(Self::Iban),
            other => Err(ValidatorError::InvalidInput {
                parameter: "target".to_string(),
                reason: format!("unknown validation target '{other}'"),
            }),
        }
    }
}

/// Outcome of validating a batch of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of candidates checked
    pub checked: usize,

    /// Number of candidates accepted
    pub valid: usize,

    /// Rejected candidates, in input order
    pub invalid: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn record(&mut self, candidate: &str, valid: bool) {
        self.checked += 1;
        if valid {
            self.valid += 1;
        } else {
            self.invalid.push(candidate.to_string());
        }
    }

    /// Returns true if any candidate was rejected.
    pub fn has_failures(&self) -> bool {
        !self.invalid.is_empty()
    }
}
