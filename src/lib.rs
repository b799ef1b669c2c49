//! Validation engine for structured identifiers.
//!
//! This library validates Dutch telephone numbers, e-mail addresses and IBAN
//! account numbers. Every validator follows the same shape: a precise rule is
//! built once from a handful of options, optionally overridden by a named
//! configuration profile, and then answers `is_valid` for any number of
//! candidates without further allocation of rule state.
//!
//! # Features
//!
//! - **Phone numbers**: regular, mobile, emergency, service and other Dutch
//!   number classes, with area code include/exclude overrides
//! - **E-mail addresses**: three local-part strictness tiers, comment and IP
//!   literal policy, and wildcard allow/deny domain lists
//! - **IBAN**: ISO 13616 structure with the MOD 97-10 checksum
//! - **Profiles**: JSON configuration merged over code defaults
//!
//! # Architecture
//!
//! - [`domain`]: the matchers and the immutable pattern data they use
//! - [`config`]: profile loading and precedence resolution
//! - [`validation`]: service that builds matchers per target and profile
//! - [`error`]: construction and configuration errors
//!
//! # Quick Start
//!
//! ```
//! use nlcheck::domain::{PhoneCategories, PhoneNumberMatcher, PhoneOptions, Validator};
//!
//! let options = PhoneOptions::new(PhoneCategories::REGULAR).with_country_calling_code(true);
//! let matcher = PhoneNumberMatcher::new(&options).unwrap();
//!
//! assert!(matcher.is_valid(Some("+31 20 123 4567")));
//! assert!(!matcher.is_valid(Some("+31 6 12345678")));
//! ```
//!
//! # Examples
//!
//! ## Profiles
//!
//! ```
//! use nlcheck::config::{ConfigurationResolver, ProfileSet};
//! use nlcheck::domain::{EmailOptions, Validator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profiles = ProfileSet::from_json_str(
//!     r#"{ "email": [ { "name": "dutch", "includeDomains": ["*.nl"] } ] }"#,
//! )?;
//! let resolver = ConfigurationResolver::new(profiles);
//!
//! let matcher = resolver.email_matcher(Some("dutch"), EmailOptions::default())?;
//! assert!(matcher.is_valid(Some("info@rijksoverheid.nl")));
//! assert!(!matcher.is_valid(Some("info@example.com")));
//! # Ok(())
//! # }
//! ```

// Public API
pub mod config;
pub mod domain;
pub mod error;
pub mod validation;

// Re-exports for convenient access
pub use config::{ConfigurationResolver, ProfileSet};
pub use domain::{
    EmailMatcher, EmailOptions, EmailStrictness, IbanChecker, PhoneCategories, PhoneCategory,
    PhoneNumberMatcher, PhoneOptions, Validator,
};
pub use error::{ValidatorError, ValidatorResult};
pub use validation::{MatcherOptions, ValidationReport, ValidationService, ValidationTarget};
