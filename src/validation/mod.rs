//! Validation service: the composition root for matchers.
//!
//! The service owns the resolved configuration and builds matchers on
//! request. Matchers are immutable and can be reused for any number of
//! candidates.

pub mod target;

pub use target::{ValidationReport, ValidationTarget};

use crate::config::{ConfigurationResolver, ProfileSet};
use crate::domain::{EmailOptions, IbanChecker, PhoneOptions, Validator};
use crate::error::ValidatorResult;
use std::path::Path;
use tracing::{debug, trace};

/// Code-level defaults for every validator kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    pub phone: PhoneOptions,
    pub email: EmailOptions,
}

/// Builds validators from configuration profiles and code defaults.
#[derive(Debug, Clone, Default)]
pub struct ValidationService {
    resolver: ConfigurationResolver,
}

impl ValidationService {
    /// Creates a service around an already loaded resolver.
    pub fn new(resolver: ConfigurationResolver) -> Self {
        Self { resolver }
    }

    /// Creates a service with no profiles; code defaults always apply.
    pub fn with_defaults() -> Self {
        Self::new(ConfigurationResolver::empty())
    }

    /// Loads a profile document from disk and creates a service around it.
    pub fn from_config_file(path: &Path) -> ValidatorResult<Self> {
        debug!(path = %path.display(), "loading validation profiles");
        let profiles = ProfileSet::from_path(path)?;
        Ok(Self::new(ConfigurationResolver::new(profiles)))
    }

    pub fn resolver(&self) -> &ConfigurationResolver {
        &self.resolver
    }

    /// Builds the validator for `target` using profile `profile`.
    pub fn validator(
        &self,
        target: ValidationTarget,
        profile: Option<&str>,
        options: &MatcherOptions,
    ) -> ValidatorResult<Box<dyn Validator>> {
        let validator: Box<dyn Validator> = match target {
            ValidationTarget::Phone => Box::new(
                self.resolver
                    .phone_matcher(profile, options.phone.clone())?,
            ),
            ValidationTarget::Email => Box::new(
                self.resolver
                    .email_matcher(profile, options.email.clone())?,
            ),
            ValidationTarget::Iban => Box::new(IbanChecker::new()),
        };
        Ok(validator)
    }

    /// Validates a single candidate.
    ///
    /// Builds a fresh validator on every call. To check many values, build
    /// one with [`ValidationService::validator`] and reuse it.
    pub fn validate(
        &self,
        target: ValidationTarget,
        profile: Option<&str>,
        options: &MatcherOptions,
        candidate: Option<&str>,
    ) -> ValidatorResult<bool> {
        Ok(self.validator(target, profile, options)?.is_valid(candidate))
    }

    /// Validates every candidate with one validator.
    pub fn validate_batch<S: AsRef<str>>(
        &self,
        target: ValidationTarget,
        profile: Option<&str>,
        options: &MatcherOptions,
        candidates: &[S],
    ) -> ValidatorResult<ValidationReport> {
        let validator = self.validator(target, profile, options)?;
        let mut report = ValidationReport::none();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let valid = validator.is_valid(Some(candidate));
            trace!(%target, candidate, valid, "validated candidate");
            report.record(candidate, valid);
        }

        Ok(report)
    }
}
