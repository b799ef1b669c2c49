//! E-mail address validation.
//!
//! The address is split at the last `@`. The domain part is matched first,
//! including comment, IP literal, top-level domain and allow/deny list
//! policy; the local part is then matched against one of three grammars.

use super::patterns::PatternLibrary;
use super::wildcard::DomainPattern;
use super::Validator;
use crate::error::{ValidatorError, ValidatorResult};
use regex::Captures;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

const MAX_DOMAIN_LENGTH: usize = 255;

/// Local part grammar tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmailStrictness {
    /// Letters, digits, `_` and `-`, separated by dots
    #[default]
    Basic,

    /// Basic plus ``!#$%&'*+/=?^`{|}~``
    Extended,

    /// Extended plus quoted strings
    Complete,
}

impl FromStr for EmailStrictness {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "extended" => Ok(Self::Extended),
            "complete" => Ok(Self::Complete),
            other => Err(ValidatorError::InvalidInput {
                parameter: "strictness".to_string(),
                reason: format!("unknown e-mail strictness '{other}'"),
            }),
        }
    }
}

/// Programmatic options for [`EmailMatcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailOptions {
    pub strictness: EmailStrictness,
    pub allow_comments: bool,
    pub allow_ip_addresses: bool,
    pub require_top_level_domain: bool,
    pub include_domains: Vec<String>,
    pub exclude_domains: Vec<String>,
}

impl EmailOptions {
    /// Creates options for `strictness`; every other option is off.
    pub fn new(strictness: EmailStrictness) -> Self {
        Self {
            strictness,
            ..Self::default()
        }
    }

    /// Accepts parenthesised comments around the local and domain parts.
    pub fn with_comments(mut self, allow: bool) -> Self {
        self.allow_comments = allow;
        self
    }

    /// Accepts `[a.b.c.d]` and `[IPv6:...]` domain literals.
    pub fn with_ip_addresses(mut self, allow: bool) -> Self {
        self.allow_ip_addresses = allow;
        self
    }

    /// Requires at least one dot in the domain.
    pub fn with_top_level_domain(mut self, require: bool) -> Self {
        self.require_top_level_domain = require;
        self
    }

    /// Sets the allow list. An empty list allows every domain.
    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the deny list, checked before the allow list.
    pub fn with_exclude_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains = domains.into_iter().map(Into::into).collect();
        self
    }
}

/// E-mail address matcher.
///
/// ```
/// use nlcheck::domain::{EmailMatcher, EmailOptions, EmailStrictness, Validator};
///
/// let options = EmailOptions::new(EmailStrictness::Basic).with_top_level_domain(true);
/// let matcher = EmailMatcher::new(&options).unwrap();
/// assert!(matcher.is_valid(Some("user@example.com")));
/// assert!(!matcher.is_valid(Some("user@localhost")));
/// ```
#[derive(Debug, Clone)]
pub struct EmailMatcher {
    strictness: EmailStrictness,
    allow_comments: bool,
    allow_ip_addresses: bool,
    require_top_level_domain: bool,
    include: Vec<DomainPattern>,
    exclude: Vec<DomainPattern>,
}

impl EmailMatcher {
    /// Creates a new e-mail matcher, compiling the domain lists.
    pub fn new(options: &EmailOptions) -> ValidatorResult<Self> {
        Ok(Self {
            strictness: options.strictness,
            allow_comments: options.allow_comments,
            allow_ip_addresses: options.allow_ip_addresses,
            require_top_level_domain: options.require_top_level_domain,
            include: DomainPattern::compile_all(&options.include_domains)?,
            exclude: DomainPattern::compile_all(&options.exclude_domains)?,
        })
    }

    pub fn strictness(&self) -> EmailStrictness {
        self.strictness
    }

    fn has_comments(&self, caps: &Captures<'_>) -> bool {
        ["comment1", "comment2"]
            .iter()
            .any(|group| caps.name(group).is_some_and(|m| !m.as_str().is_empty()))
    }

    fn check_domain(&self, domain_part: &str) -> bool {
        let Some(caps) = PatternLibrary::email_domain().captures(domain_part) else {
            return false;
        };
        if !self.allow_comments && self.has_comments(&caps) {
            return false;
        }

        let (full_domain, is_ip_address) = if let Some(literal) = caps.name("ipAddress") {
            if !self.allow_ip_addresses {
                return false;
            }
            match parse_ip_literal(literal.as_str()) {
                Some(address) => (address.to_string(), true),
                None => return false,
            }
        } else {
            let Some(domain) = caps.name("domain") else {
                return false;
            };
            let domain = domain.as_str();
            if domain.len() > MAX_DOMAIN_LENGTH || domain.parse::<IpAddr>().is_ok() {
                return false;
            }
            (domain.to_string(), false)
        };

        if self.require_top_level_domain && (is_ip_address || !full_domain.contains('.')) {
            return false;
        }

        if DomainPattern::any_matches(&self.exclude, &full_domain) {
            return false;
        }

        self.include.is_empty() || DomainPattern::any_matches(&self.include, &full_domain)
    }

    fn check_local(&self, local_part: &str) -> bool {
        match PatternLibrary::email_local(self.strictness).captures(local_part) {
            Some(caps) => self.allow_comments || !self.has_comments(&caps),
            None => false,
        }
    }
}

/// Parses `[a.b.c.d]` or `[IPv6:...]`; the prefix decides the address family.
fn parse_ip_literal(literal: &str) -> Option<IpAddr> {
    let inner = literal.strip_prefix('[')?.strip_suffix(']')?;
    match inner.strip_prefix("IPv6:") {
        Some(v6) => v6.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        None => inner.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
    }
}

impl Validator for EmailMatcher {
    fn is_valid(&self, candidate: Option<&str>) -> bool {
        let Some(address) = candidate.filter(|c| !c.is_empty()) else {
            return true;
        };
        let Some((local_part, domain_part)) = address.rsplit_once('@') else {
            return false;
        };

        self.check_domain(domain_part) && self.check_local(local_part)
    }

    fn name(&self) -> &str {
        "email"
    }
}
