//! Dutch telephone number validation.
//!
//! A number is checked against every enabled category, in a fixed order,
//! until one matches. Spaces are removed before matching; no other
//! normalisation takes place.

use super::area_code::{AreaCode, AreaCodeRule, AreaCodeRuleBuilder};
use super::patterns::{PatternLibrary, PrefixKey};
use super::Validator;
use crate::error::{ValidatorError, ValidatorResult};
use bitflags::bitflags;
use std::str::FromStr;

/// A single number class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCategory {
    Regular,
    Mobile,
    Emergency,
    Service,
    Other,
}

impl PhoneCategory {
    /// Evaluation order used by [`PhoneNumberMatcher`].
    pub const EVALUATION_ORDER: [PhoneCategory; 5] = [
        PhoneCategory::Regular,
        PhoneCategory::Mobile,
        PhoneCategory::Emergency,
        PhoneCategory::Service,
        PhoneCategory::Other,
    ];

    pub fn flag(self) -> PhoneCategories {
        match self {
            Self::Regular => PhoneCategories::REGULAR,
            Self::Mobile => PhoneCategories::MOBILE,
            Self::Emergency => PhoneCategories::EMERGENCY,
            Self::Service => PhoneCategories::SERVICE,
            Self::Other => PhoneCategories::OTHER,
        }
    }
}

bitflags! {
    /// Set of enabled number classes. The empty set disables validation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PhoneCategories: u8 {
        const REGULAR = 1 << 0;
        const MOBILE = 1 << 1;
        const EMERGENCY = 1 << 2;
        const SERVICE = 1 << 3;
        const OTHER = 1 << 4;
    }
}

impl PhoneCategories {
    pub const NONE: Self = Self::empty();

    /// Enabled categories in evaluation order.
    pub fn ordered(self) -> impl Iterator<Item = PhoneCategory> {
        PhoneCategory::EVALUATION_ORDER
            .into_iter()
            .filter(move |category| self.contains(category.flag()))
    }
}

impl Default for PhoneCategories {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl FromStr for PhoneCategories {
    type Err = ValidatorError;

    /// Parses `|` or `,` separated names, e.g. `"regular|mobile"`, `"all"`, `"none"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut categories = Self::empty();
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            categories |= match name.to_ascii_lowercase().as_str() {
                "none" => Self::empty(),
                "all" => Self::all(),
                "regular" => Self::REGULAR,
                "mobile" => Self::MOBILE,
                "emergency" => Self::EMERGENCY,
                "service" => Self::SERVICE,
                "other" => Self::OTHER,
                _ => {
                    return Err(ValidatorError::InvalidInput {
                        parameter: "categories".to_string(),
                        reason: format!("unknown phone category '{name}' in '{s}'"),
                    })
                }
            };
        }
        Ok(categories)
    }
}

/// Programmatic options for [`PhoneNumberMatcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneOptions {
    pub categories: PhoneCategories,
    pub allow_country_calling_code: bool,
    pub allow_carrier_preselect: bool,
    /// Replaces the default area codes when non-empty
    pub include_area_codes: Option<Vec<AreaCode>>,
    /// Removed from the default area codes
    pub exclude_area_codes: Option<Vec<AreaCode>>,
}

impl PhoneOptions {
    /// Creates options for `categories`; every other option is off.
    pub fn new(categories: PhoneCategories) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Accepts `+31` or `0031` in place of the national zero.
    pub fn with_country_calling_code(mut self, allow: bool) -> Self {
        self.allow_country_calling_code = allow;
        self
    }

    /// Accepts a `16xx` carrier preselect code before the national zero.
    pub fn with_carrier_preselect(mut self, allow: bool) -> Self {
        self.allow_carrier_preselect = allow;
        self
    }

    /// Replaces the default area codes; an empty list leaves them in place.
    pub fn with_include_area_codes(mut self, codes: Vec<AreaCode>) -> Self {
        self.include_area_codes = Some(codes);
        self
    }

    /// Removes area codes from the defaults. Ignored when an include list is set.
    pub fn with_exclude_area_codes(mut self, codes: Vec<AreaCode>) -> Self {
        self.exclude_area_codes = Some(codes);
        self
    }

    fn prefix_key(&self) -> PrefixKey {
        PrefixKey::new(self.allow_country_calling_code, self.allow_carrier_preselect)
    }
}

/// Dutch telephone number matcher.
///
/// Empty input and an empty category set are accepted; presence checks
/// belong to the caller.
///
/// ```
/// use nlcheck::domain::{PhoneCategories, PhoneNumberMatcher, PhoneOptions, Validator};
///
/// let options = PhoneOptions::new(PhoneCategories::REGULAR | PhoneCategories::MOBILE);
/// let matcher = PhoneNumberMatcher::new(&options).unwrap();
/// assert!(matcher.is_valid(Some("020 123 4567")));
/// assert!(matcher.is_valid(Some("06 12345678")));
/// assert!(!matcher.is_valid(Some("112")));
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumberMatcher {
    categories: PhoneCategories,
    key: PrefixKey,
    regular: AreaCodeRule,
}

impl PhoneNumberMatcher {
    /// Creates a new phone number matcher.
    pub fn new(options: &PhoneOptions) -> ValidatorResult<Self> {
        let key = options.prefix_key();

        let regular = if options.categories.contains(PhoneCategories::REGULAR) {
            AreaCodeRuleBuilder::dutch()
                .include(options.include_area_codes.as_deref())
                .exclude(options.exclude_area_codes.as_deref())
                .prefix(key)
                .build()?
        } else {
            AreaCodeRule::Unmatchable
        };

        Ok(Self {
            categories: options.categories,
            key,
            regular,
        })
    }

    pub fn categories(&self) -> PhoneCategories {
        self.categories
    }

    /// Returns the first enabled category the number belongs to.
    pub fn classify(&self, number: &str) -> Option<PhoneCategory> {
        let compact: String = number.chars().filter(|&c| c != ' ').collect();
        self.categories
            .ordered()
            .find(|&category| self.matches_category(category, &compact))
    }

    fn matches_category(&self, category: PhoneCategory, number: &str) -> bool {
        match category {
            PhoneCategory::Regular => self.regular.is_match(number),
            PhoneCategory::Mobile => PatternLibrary::mobile(self.key).is_match(number),
            PhoneCategory::Emergency => PatternLibrary::emergency().is_match(number),
            PhoneCategory::Service => PatternLibrary::service().is_match(number),
            PhoneCategory::Other => {
                PatternLibrary::other(self.key.carrier_preselect).is_match(number)
            }
        }
    }
}

impl Validator for PhoneNumberMatcher {
    fn is_valid(&self, candidate: Option<&str>) -> bool {
        let Some(number) = candidate.filter(|c| !c.is_empty()) else {
            return true;
        };
        if self.categories.is_empty() {
            return true;
        }

        self.classify(number).is_some()
    }

    fn name(&self) -> &str {
        "phone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::area_code::parse_area_codes;

    fn matcher(options: PhoneOptions) -> PhoneNumberMatcher {
        PhoneNumberMatcher::new(&options).unwrap()
    }

    #[test]
    fn test_regular_numbers() {
        let m = matcher(PhoneOptions::default());
        assert!(m.is_valid(Some("0201234567")));
        assert!(m.is_valid(Some("020 123 4567")));
        assert!(m.is_valid(Some("0113123456")));
        assert!(!m.is_valid(Some("020-123-4567")));
        assert!(!m.is_valid(Some("0201234")));
        assert!(!m.is_valid(Some("0200234567")));
        assert!(!m.is_valid(Some("0612345678")));
    }

    #[test]
    fn test_absent_value_is_valid() {
        let m = matcher(PhoneOptions::default());
        assert!(m.is_valid(None));
        assert!(m.is_valid(Some("")));
    }

    #[test]
    fn test_no_categories_accepts_everything() {
        let m = matcher(PhoneOptions::new(PhoneCategories::NONE));
        assert!(m.is_valid(Some("not a number")));
    }

    #[test]
    fn test_country_calling_code() {
        let national = matcher(PhoneOptions::default());
        assert!(!national.is_valid(Some("+31201234567")));

        let international = matcher(PhoneOptions::default().with_country_calling_code(true));
        assert!(international.is_valid(Some("+31201234567")));
        assert!(international.is_valid(Some("0031201234567")));
        assert!(international.is_valid(Some("0201234567")));
        assert!(!international.is_valid(Some("+310201234567")));
    }

    #[test]
    fn test_carrier_preselect() {
        let plain = matcher(PhoneOptions::default());
        assert!(!plain.is_valid(Some("16880201234567")));

        let preselect = matcher(PhoneOptions::default().with_carrier_preselect(true));
        assert!(preselect.is_valid(Some("16880201234567")));
        assert!(preselect.is_valid(Some("0201234567")));
    }

    #[test]
    fn test_include_overrides_default() {
        let include = parse_area_codes("020").unwrap();
        let m = matcher(PhoneOptions::default().with_include_area_codes(include));
        assert!(m.is_valid(Some("0201234567")));
        assert!(!m.is_valid(Some("0301234567")));
    }

    #[test]
    fn test_exclude_removes_from_default() {
        let exclude = parse_area_codes("058").unwrap();
        let m = matcher(PhoneOptions::default().with_exclude_area_codes(exclude));
        assert!(!m.is_valid(Some("0581234567")));
        assert!(m.is_valid(Some("0101234567")));
    }

    #[test]
    fn test_category_or_semantics() {
        let mobile = matcher(PhoneOptions::new(PhoneCategories::MOBILE));
        assert!(!mobile.is_valid(Some("112")));

        let both = matcher(PhoneOptions::new(
            PhoneCategories::MOBILE | PhoneCategories::EMERGENCY,
        ));
        assert!(both.is_valid(Some("112")));
        assert!(both.is_valid(Some("0612345678")));
    }

    #[test]
    fn test_classify_follows_evaluation_order() {
        let m = matcher(PhoneOptions::new(PhoneCategories::all()));
        assert_eq!(m.classify("0201234567"), Some(PhoneCategory::Regular));
        assert_eq!(m.classify("0612345678"), Some(PhoneCategory::Mobile));
        assert_eq!(m.classify("112"), Some(PhoneCategory::Emergency));
        assert_eq!(m.classify("08001234"), Some(PhoneCategory::Service));
        assert_eq!(m.classify("0851234567"), Some(PhoneCategory::Other));
        assert_eq!(m.classify("12345"), None);
    }

    #[test]
    fn test_service_numbers() {
        let m = matcher(PhoneOptions::new(PhoneCategories::SERVICE));
        assert!(m.is_valid(Some("0800 1234")));
        assert!(m.is_valid(Some("0800 1234567")));
        assert!(m.is_valid(Some("0900 1234")));
        assert!(m.is_valid(Some("0906 1234567")));
        assert!(!m.is_valid(Some("0901 1234")));
        assert!(!m.is_valid(Some("0800 12345")));
    }

    #[test]
    fn test_other_numbers() {
        let m = matcher(PhoneOptions::new(PhoneCategories::OTHER));
        assert!(m.is_valid(Some("0661234567")));
        assert!(m.is_valid(Some("0841234567")));
        assert!(m.is_valid(Some("14020")));
        assert!(m.is_valid(Some("1888")));
        assert!(!m.is_valid(Some("16880851234567")));

        let preselect = matcher(
            PhoneOptions::new(PhoneCategories::OTHER).with_carrier_preselect(true),
        );
        assert!(preselect.is_valid(Some("16880851234567")));
    }

    #[test]
    fn test_parse_categories() {
        let parsed: PhoneCategories = "regular|Mobile".parse().unwrap();
        assert_eq!(parsed, PhoneCategories::REGULAR | PhoneCategories::MOBILE);
        assert_eq!("none".parse::<PhoneCategories>().unwrap(), PhoneCategories::NONE);
        assert_eq!("all".parse::<PhoneCategories>().unwrap(), PhoneCategories::all());
        assert!("landline".parse::<PhoneCategories>().is_err());
    }
}
