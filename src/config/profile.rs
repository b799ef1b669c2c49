//! Validation profiles loaded from configuration.
//!
//! A profile document holds a `phone` and an `email` section, each a list of
//! named entries. Every option in an entry is optional; only options that are
//! present override the programmatic defaults. All checks happen at load
//! time so a bad document aborts start-up instead of surfacing later.

use crate::domain::area_code::{parse_area_codes, AreaCode};
use crate::domain::DomainPattern;
use crate::error::{ValidatorError, ValidatorResult};
use serde::Deserialize;
use std::path::Path;

/// Names that select the unnamed profile of a section.
pub fn is_default_name(name: &str) -> bool {
    name.is_empty() || name.eq_ignore_ascii_case("default")
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileDocument {
    #[serde(default)]
    phone: Vec<RawPhoneProfile>,
    #[serde(default)]
    email: Vec<RawEmailProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPhoneProfile {
    #[serde(default)]
    name: String,
    allow_country_calling_code: Option<bool>,
    allow_carrier_preselect: Option<bool>,
    area_codes: Option<String>,
    exclude_area_codes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawEmailProfile {
    #[serde(default)]
    name: String,
    allow_comments: Option<bool>,
    #[serde(rename = "allowIPAddresses", alias = "allowIpAddresses")]
    allow_ip_addresses: Option<bool>,
    require_top_level_domain: Option<bool>,
    include_domains: Option<Vec<String>>,
    exclude_domains: Option<Vec<String>>,
}

/// Phone options sourced from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneProfile {
    pub name: String,
    pub allow_country_calling_code: Option<bool>,
    pub allow_carrier_preselect: Option<bool>,
    /// Replaces the default area codes
    pub area_codes: Option<Vec<AreaCode>>,
    pub exclude_area_codes: Option<Vec<AreaCode>>,
}

impl PhoneProfile {
    fn from_raw(raw: RawPhoneProfile) -> ValidatorResult<Self> {
        let parse = |list: Option<String>| -> ValidatorResult<Option<Vec<AreaCode>>> {
            list.map(|l| parse_area_codes(&l)).transpose()
        };

        Ok(Self {
            area_codes: parse(raw.area_codes).map_err(|e| in_profile(&raw.name, e))?,
            exclude_area_codes: parse(raw.exclude_area_codes)
                .map_err(|e| in_profile(&raw.name, e))?,
            name: raw.name,
            allow_country_calling_code: raw.allow_country_calling_code,
            allow_carrier_preselect: raw.allow_carrier_preselect,
        })
    }
}

/// E-mail options sourced from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailProfile {
    pub name: String,
    pub allow_comments: Option<bool>,
    pub allow_ip_addresses: Option<bool>,
    pub require_top_level_domain: Option<bool>,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
}

impl EmailProfile {
    fn from_raw(raw: RawEmailProfile) -> Self {
        Self {
            name: raw.name,
            allow_comments: raw.allow_comments,
            allow_ip_addresses: raw.allow_ip_addresses,
            require_top_level_domain: raw.require_top_level_domain,
            include_domains: raw.include_domains,
            exclude_domains: raw.exclude_domains,
        }
    }

    /// Compiles both domain lists, reporting the first bad pattern.
    fn check_patterns(&self) -> ValidatorResult<()> {
        let lists = [&self.include_domains, &self.exclude_domains];
        for list in lists.into_iter().flatten() {
            DomainPattern::compile_all(list).map_err(|e| in_profile(&self.name, e))?;
        }
        Ok(())
    }
}

/// Attaches the profile name to a load-time error.
fn in_profile(profile: &str, err: ValidatorError) -> ValidatorError {
    ValidatorError::InvalidProfile {
        profile: profile.to_string(),
        reason: err.to_string(),
    }
}

fn check_unique<'a>(section: &str, names: impl Iterator<Item = &'a str>) -> ValidatorResult<()> {
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        let key = if is_default_name(name) { "" } else { name };
        if seen.contains(&key) {
            return Err(ValidatorError::InvalidProfile {
                profile: name.to_string(),
                reason: format!("duplicate profile in '{section}' section"),
            });
        }
        seen.push(key);
    }
    Ok(())
}

/// All profiles of a configuration document, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    phone: Vec<PhoneProfile>,
    email: Vec<EmailProfile>,
}

impl ProfileSet {
    /// Creates a profile set, rejecting duplicate names and bad domain patterns.
    pub fn new(phone: Vec<PhoneProfile>, email: Vec<EmailProfile>) -> ValidatorResult<Self> {
        check_unique("phone", phone.iter().map(|p| p.name.as_str()))?;
        check_unique("email", email.iter().map(|p| p.name.as_str()))?;
        for profile in &email {
            profile.check_patterns()?;
        }
        Ok(Self { phone, email })
    }

    /// Parses and validates a JSON profile document.
    pub fn from_json_str(json: &str) -> ValidatorResult<Self> {
        let document: ProfileDocument = serde_json::from_str(json)?;

        let phone = document
            .phone
            .into_iter()
            .map(PhoneProfile::from_raw)
            .collect::<ValidatorResult<Vec<_>>>()?;
        let email = document
            .email
            .into_iter()
            .map(EmailProfile::from_raw)
            .collect();

        Self::new(phone, email)
    }

    /// Reads a JSON profile document from disk.
    pub fn from_path(path: &Path) -> ValidatorResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ValidatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn phone_profiles(&self) -> &[PhoneProfile] {
        &self.phone
    }

    pub fn email_profiles(&self) -> &[EmailProfile] {
        &self.email
    }

    pub fn phone_profile(&self, name: &str) -> Option<&PhoneProfile> {
        find(&self.phone, name, |p| &p.name)
    }

    pub fn email_profile(&self, name: &str) -> Option<&EmailProfile> {
        find(&self.email, name, |p| &p.name)
    }

    pub fn is_empty(&self) -> bool {
        self.phone.is_empty() && self.email.is_empty()
    }
}

fn find<'a, T>(
    profiles: &'a [T],
    name: &str,
    name_of: impl Fn(&T) -> &String,
) -> Option<&'a T> {
    if is_default_name(name) {
        profiles.iter().find(|p| is_default_name(name_of(p)))
    } else {
        profiles.iter().find(|p| name_of(p) == name)
    }
}
