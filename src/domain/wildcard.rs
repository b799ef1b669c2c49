//! Domain allow/deny list patterns.
//!
//! A pattern without `*` or `?` is compared case-insensitively. A pattern
//! with wildcards is compiled to an anchored, case-sensitive regex where `*`
//! matches any run of characters and `?` matches zero or one character.

use crate::error::{ValidatorError, ValidatorResult};
use regex::Regex;

/// Compiles glob-style domain patterns to regexes.
pub struct WildcardCompiler;

impl WildcardCompiler {
    /// Returns true if `pattern` contains `*` or `?`.
    pub fn is_wildcard(pattern: &str) -> bool {
        pattern.contains(['*', '?'])
    }

    /// Translates a glob into anchored regex source.
    pub fn to_regex_source(pattern: &str) -> String {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        let mut buf = [0u8; 4];
        for c in pattern.chars() {
            match c {
                '*' => source.push_str(".*"),
                '?' => source.push_str(".?"),
                _ => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
            }
        }
        source.push('$');
        source
    }

    /// Compiles a glob to an anchored, case-sensitive regex.
    pub fn compile(pattern: &str) -> ValidatorResult<Regex> {
        let source = Self::to_regex_source(pattern);
        Regex::new(&source).map_err(|e| ValidatorError::PatternError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
    }
}

/// One entry of an include or exclude domain list.
#[derive(Debug, Clone)]
pub enum DomainPattern {
    /// Case-insensitive literal domain or IP address
    Exact(String),

    /// Compiled glob
    Wildcard { pattern: String, regex: Regex },
}

impl DomainPattern {
    /// Creates an exact or wildcard pattern; blank patterns are rejected.
    pub fn new(pattern: &str) -> ValidatorResult<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(ValidatorError::InvalidInput {
                parameter: "domain pattern".to_string(),
                reason: "domain patterns must not be empty".to_string(),
            });
        }

        if WildcardCompiler::is_wildcard(pattern) {
            Ok(Self::Wildcard {
                pattern: pattern.to_string(),
                regex: WildcardCompiler::compile(pattern)?,
            })
        } else {
            Ok(Self::Exact(pattern.to_string()))
        }
    }

    /// Compiles a whole list, failing on the first bad entry.
    pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> ValidatorResult<Vec<Self>> {
        patterns.iter().map(|p| Self::new(p.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(pattern) => pattern,
            Self::Wildcard { pattern, .. } => pattern,
        }
    }

    /// Returns true if `domain` matches this entry.
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            Self::Exact(pattern) => pattern.to_lowercase() == domain.to_lowercase(),
            // TODO: wildcard matching is case-sensitive while exact matching is not;
            // settle on one behaviour once existing profiles have been audited.
            Self::Wildcard { regex, .. } => regex.is_match(domain),
        }
    }

    /// Returns true if any pattern in `patterns` matches `domain`.
    pub fn any_matches(patterns: &[Self], domain: &str) -> bool {
        patterns.iter().any(|p| p.matches(domain))
    }
}
