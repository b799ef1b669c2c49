//! Merges configuration profiles over programmatic defaults.
//!
//! Precedence, highest first: the explicitly named profile, the unnamed
//! (default) profile, then the options supplied in code.

use super::profile::{is_default_name, EmailProfile, PhoneProfile, ProfileSet};
use crate::domain::{EmailMatcher, EmailOptions, PhoneNumberMatcher, PhoneOptions};
use crate::error::ValidatorResult;
use tracing::{debug, warn};

/// Resolves matcher options from an eagerly loaded [`ProfileSet`].
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    profiles: ProfileSet,
}

impl ConfigurationResolver {
    /// Creates a resolver over an eagerly loaded profile set.
    pub fn new(profiles: ProfileSet) -> Self {
        debug!(
            phone = profiles.phone_profiles().len(),
            email = profiles.email_profiles().len(),
            "validation profiles loaded"
        );
        Self { profiles }
    }

    /// Resolver without any profiles; code defaults always apply.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// Phone profile for `name`, or the default profile if it is missing.
    pub fn phone_profile(&self, name: Option<&str>) -> Option<&PhoneProfile> {
        self.lookup("phone", name, |n| self.profiles.phone_profile(n))
    }

    pub fn email_profile(&self, name: Option<&str>) -> Option<&EmailProfile> {
        self.lookup("email", name, |n| self.profiles.email_profile(n))
    }

    fn lookup<'a, T>(
        &'a self,
        section: &str,
        name: Option<&str>,
        find: impl Fn(&str) -> Option<&'a T>,
    ) -> Option<&'a T> {
        if let Some(name) = name.filter(|n| !is_default_name(n)) {
            if let Some(profile) = find(name) {
                debug!(section, profile = name, "using named profile");
                return Some(profile);
            }
            warn!(
                section,
                profile = name,
                "profile not found, falling back to default profile"
            );
        }
        find("")
    }

    /// Merges the selected phone profile over `defaults`.
    pub fn resolve_phone(&self, name: Option<&str>, defaults: PhoneOptions) -> PhoneOptions {
        let Some(profile) = self.phone_profile(name) else {
            return defaults;
        };

        PhoneOptions {
            categories: defaults.categories,
            allow_country_calling_code: profile
                .allow_country_calling_code
                .unwrap_or(defaults.allow_country_calling_code),
            allow_carrier_preselect: profile
                .allow_carrier_preselect
                .unwrap_or(defaults.allow_carrier_preselect),
            include_area_codes: profile.area_codes.clone().or(defaults.include_area_codes),
            exclude_area_codes: profile
                .exclude_area_codes
                .clone()
                .or(defaults.exclude_area_codes),
        }
    }

    /// Merges the selected e-mail profile over `defaults`.
    pub fn resolve_email(&self, name: Option<&str>, defaults: EmailOptions) -> EmailOptions {
        let Some(profile) = self.email_profile(name) else {
            return defaults;
        };

        EmailOptions {
            strictness: defaults.strictness,
            allow_comments: profile.allow_comments.unwrap_or(defaults.allow_comments),
            allow_ip_addresses: profile
                .allow_ip_addresses
                .unwrap_or(defaults.allow_ip_addresses),
            require_top_level_domain: profile
                .require_top_level_domain
                .unwrap_or(defaults.require_top_level_domain),
            include_domains: profile
                .include_domains
                .clone()
                .unwrap_or(defaults.include_domains),
            exclude_domains: profile
                .exclude_domains
                .clone()
                .unwrap_or(defaults.exclude_domains),
        }
    }

    /// Builds a phone matcher for `name`, falling back as described above.
    pub fn phone_matcher(
        &self,
        name: Option<&str>,
        defaults: PhoneOptions,
    ) -> ValidatorResult<PhoneNumberMatcher> {
        PhoneNumberMatcher::new(&self.resolve_phone(name, defaults))
    }

    pub fn email_matcher(
        &self,
        name: Option<&str>,
        defaults: EmailOptions,
    ) -> ValidatorResult<EmailMatcher> {
        EmailMatcher::new(&self.resolve_email(name, defaults))
    }
}
