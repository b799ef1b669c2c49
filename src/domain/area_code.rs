//! Area codes and the rule builder for "regular" landline numbers.

use super::patterns::{compose_regular_pattern, PatternLibrary, PrefixKey};
use crate::error::{ValidatorError, ValidatorResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A Dutch area code, stored without the national zero.
///
/// Accepts one to four digits on input (`"020"`, `"20"`, `"0113"`); after
/// stripping leading zeros two or three digits must remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaCode(String);

impl AreaCode {
    pub fn new(code: &str) -> ValidatorResult<Self> {
        let raw = code.trim();

        if raw.is_empty() || raw.len() > 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidatorError::InvalidAreaCode {
                code: code.to_string(),
                reason: "expected one to four decimal digits".to_string(),
            });
        }

        let stripped = raw.trim_start_matches('0');
        if !(2..=3).contains(&stripped.len()) {
            return Err(ValidatorError::InvalidAreaCode {
                code: code.to_string(),
                reason: "expected two or three digits after the national prefix".to_string(),
            });
        }

        Ok(Self(stripped.to_string()))
    }

    /// The zero-stripped digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for AreaCode {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for AreaCode {
    /// Formats the code in national form, e.g. `020`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0{}", self.0)
    }
}

/// Parses a semicolon-delimited area code list, dropping blanks and duplicates.
pub fn parse_area_codes(list: &str) -> ValidatorResult<Vec<AreaCode>> {
    let mut codes: Vec<AreaCode> = Vec::new();
    for entry in list.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let code = AreaCode::new(entry)?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    Ok(codes)
}

/// Regex alternation fragments for two- and three-digit area codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaCodeFragments {
    pub short: String,
    pub long: String,
}

impl AreaCodeFragments {
    pub fn from_codes(codes: &[AreaCode]) -> Self {
        let join = |len: usize| {
            codes
                .iter()
                .filter(|c| c.len() == len)
                .map(AreaCode::as_str)
                .collect::<Vec<_>>()
                .join("|")
        };

        Self {
            short: join(2),
            long: join(3),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.long.is_empty()
    }
}

/// Compiled rule for regular numbers.
#[derive(Debug, Clone)]
pub enum AreaCodeRule {
    /// Precompiled pattern over the default area codes
    Default(&'static Regex),

    /// Pattern rebuilt for an include or exclude override
    Custom(Regex),

    /// Every area code was removed; nothing matches
    Unmatchable,
}

impl AreaCodeRule {
    pub fn is_match(&self, number: &str) -> bool {
        match self {
            Self::Default(regex) => regex.is_match(number),
            Self::Custom(regex) => regex.is_match(number),
            Self::Unmatchable => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Default(regex) => Some(regex.as_str()),
            Self::Custom(regex) => Some(regex.as_str()),
            Self::Unmatchable => None,
        }
    }
}

/// Builds the regular-number rule from defaults and optional overrides.
///
/// A non-empty include list replaces the defaults. Otherwise an exclude list
/// is subtracted from them. Without overrides the library defaults resolve
/// to a precompiled pattern.
#[derive(Debug, Clone)]
pub struct AreaCodeRuleBuilder<'a> {
    defaults: &'a [AreaCode],
    library_defaults: bool,
    include: Option<&'a [AreaCode]>,
    exclude: Option<&'a [AreaCode]>,
    key: PrefixKey,
}

impl<'a> AreaCodeRuleBuilder<'a> {
    /// Starts from the library's Dutch area codes.
    pub fn dutch() -> Self {
        Self {
            defaults: PatternLibrary::default_area_codes(),
            library_defaults: true,
            include: None,
            exclude: None,
            key: PrefixKey::default(),
        }
    }

    /// Starts from a caller-supplied default set.
    pub fn with_defaults(defaults: &'a [AreaCode]) -> Self {
        Self {
            defaults,
            library_defaults: false,
            include: None,
            exclude: None,
            key: PrefixKey::default(),
        }
    }

    /// Sets the list that replaces the defaults when non-empty.
    pub fn include(mut self, codes: Option<&'a [AreaCode]>) -> Self {
        self.include = codes;
        self
    }

    /// Sets the codes subtracted from the defaults when no include list applies.
    pub fn exclude(mut self, codes: Option<&'a [AreaCode]>) -> Self {
        self.exclude = codes;
        self
    }

    /// Selects the dialling-prefix variant.
    pub fn prefix(mut self, key: PrefixKey) -> Self {
        self.key = key;
        self
    }

    /// Area codes the rule will accept, in order.
    pub fn effective_codes(&self) -> Vec<AreaCode> {
        if let Some(include) = self.include.filter(|codes| !codes.is_empty()) {
            return include.to_vec();
        }

        match self.exclude.filter(|codes| !codes.is_empty()) {
            Some(exclude) => self
                .defaults
                .iter()
                .filter(|code| !exclude.contains(code))
                .cloned()
                .collect(),
            None => self.defaults.to_vec(),
        }
    }

    fn has_overrides(&self) -> bool {
        self.include.is_some_and(|codes| !codes.is_empty())
            || self.exclude.is_some_and(|codes| !codes.is_empty())
    }

    /// Compiles the rule, reusing the precompiled default when nothing is overridden.
    pub fn build(&self) -> ValidatorResult<AreaCodeRule> {
        if self.library_defaults && !self.has_overrides() {
            return Ok(AreaCodeRule::Default(PatternLibrary::regular(self.key)));
        }

        let codes = self.effective_codes();
        let fragments = AreaCodeFragments::from_codes(&codes);
        debug!(
            short = %fragments.short,
            long = %fragments.long,
            "rebuilding area code rule"
        );

        match compose_regular_pattern(self.key, &fragments) {
            Some(source) => {
                let regex = Regex::new(&source).map_err(|e| ValidatorError::PatternError {
                    pattern: source.clone(),
                    reason: e.to_string(),
                })?;
                Ok(AreaCodeRule::Custom(regex))
            }
            None => Ok(AreaCodeRule::Unmatchable),
        }
    }
}
