//! Validators for structured identifiers.
//!
//! This module contains the matching rules for Dutch telephone numbers,
//! e-mail addresses and IBAN account numbers, together with the immutable
//! pattern data they are built from.

pub mod area_code;
pub mod email;
pub mod iban;
pub mod patterns;
pub mod phone;
pub mod wildcard;

pub use area_code::{AreaCode, AreaCodeFragments, AreaCodeRule, AreaCodeRuleBuilder};
pub use email::{EmailMatcher, EmailOptions, EmailStrictness};
pub use iban::{IbanCandidate, IbanChecker};
pub use patterns::{PatternLibrary, PrefixKey};
pub use phone::{PhoneCategories, PhoneCategory, PhoneNumberMatcher, PhoneOptions};
pub use wildcard::{DomainPattern, WildcardCompiler};

/// Boolean validation contract shared by all matchers.
///
/// Implementations are immutable after construction and can be shared
/// between threads.
pub trait Validator: Send + Sync {
    /// Returns whether `candidate` is acceptable.
    ///
    /// `None` stands for an absent value; whether that is accepted depends on
    /// the validator.
    fn is_valid(&self, candidate: Option<&str>) -> bool;

    /// Short, human-readable name of the validator.
    fn name(&self) -> &str;
}
