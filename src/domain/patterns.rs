//! Canonical pattern data shared by all validators.
//!
//! Everything in here is immutable. Fixed patterns are compiled once on first
//! use and shared read-only between threads.

use super::area_code::{AreaCode, AreaCodeFragments};
use super::email::EmailStrictness;
use once_cell::sync::Lazy;
use regex::Regex;

/// Dutch geographic area codes, without the national zero.
pub const DEFAULT_AREA_CODES: &str = "10;13;15;20;23;24;26;30;33;35;36;38;40;43;45;46;50;53;55;58;\
70;71;72;73;74;75;76;77;78;79;\
111;113;114;115;117;118;161;162;164;165;166;167;168;172;174;180;181;182;183;184;186;187;\
222;223;224;226;227;228;229;251;252;255;294;297;299;\
313;314;315;316;317;318;320;321;341;342;343;344;345;346;347;348;\
411;412;413;416;418;475;478;481;485;486;487;488;492;493;495;497;499;\
511;512;513;514;515;516;517;518;519;521;522;523;524;525;527;528;529;\
541;543;544;545;546;547;548;561;562;566;570;571;572;573;575;577;578;\
591;592;593;594;595;596;597;598;599";

/// Key selecting one of the four dialling-prefix variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrefixKey {
    pub country_calling_code: bool,
    pub carrier_preselect: bool,
}

impl PrefixKey {
    /// All variants, in table order.
    pub const ALL: [PrefixKey; 4] = [
        PrefixKey::new(false, false),
        PrefixKey::new(true, false),
        PrefixKey::new(false, true),
        PrefixKey::new(true, true),
    ];

    pub const fn new(country_calling_code: bool, carrier_preselect: bool) -> Self {
        Self {
            country_calling_code,
            carrier_preselect,
        }
    }

    fn index(self) -> usize {
        match (self.country_calling_code, self.carrier_preselect) {
            (false, false) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        }
    }

    /// Dialling prefix that replaces the national zero.
    ///
    /// The country calling code (`+31` or `0031`) drops the national zero.
    /// A carrier preselect code (`16xx`) is dialled before it.
    pub fn dialling_prefix(self) -> &'static str {
        match (self.country_calling_code, self.carrier_preselect) {
            (false, false) => "0",
            (true, false) => r"(?:0|(?:\+|00)31)",
            (false, true) => r"(?:16[0-9]{2})?0",
            (true, true) => r"(?:(?:16[0-9]{2})?0|(?:\+|00)31)",
        }
    }
}

/// Builds the anchored "regular number" pattern for a set of area-code fragments.
///
/// Returns `None` when both fragments are empty: such a rule matches nothing.
pub(crate) fn compose_regular_pattern(
    key: PrefixKey,
    fragments: &AreaCodeFragments,
) -> Option<String> {
    let mut branches = Vec::with_capacity(2);
    if !fragments.short.is_empty() {
        // two-digit area code, seven-digit subscriber number
        branches.push(format!("(?:{})[1-9][0-9]{{6}}", fragments.short));
    }
    if !fragments.long.is_empty() {
        // three-digit area code, six-digit subscriber number
        branches.push(format!("(?:{})[1-9][0-9]{{5}}", fragments.long));
    }
    if branches.is_empty() {
        return None;
    }

    Some(format!(
        "^{}(?:{})$",
        key.dialling_prefix(),
        branches.join("|")
    ))
}

const EMERGENCY_PATTERN: &str = r"^(?:112|144|116000|116111|116123)$";

const SERVICE_PATTERN: &str = r"(?x)
    ^(?:
        0800[0-9]{4}(?:[0-9]{3})?           # free phone
      | 090[069][0-9]{4}(?:[0-9]{3})?       # paid information lines
    )$";

/// National ranges after the national zero, each followed by seven digits.
const OTHER_NATIONAL_RANGES: &str = r"(?x:
        67          # videotex
      | 66          # semaphone
      | 82          # virtual private networks
      | 8[47]       # personal assistant
      | 85 | 91     # electronic services
    )[0-9]{7}";

/// Short numbers, dialled without any prefix.
const OTHER_SHORT_RANGES: &str = r"(?x:
        12[0-9]{2}      # provider services
      | 18[0-9]{2}      # information services
      | 14[0-9]{3,4}    # government
    )";

const EMAIL_COMMENT: &str = r"\((?:[^()\\]|\\.)*\)";

const EMAIL_BASIC_ATOM: &str = r"[A-Za-z0-9_-]+";

const EMAIL_EXTENDED_ATOM: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";

const EMAIL_QUOTED_STRING: &str = r#""(?:[^"\\\r\n]|\\.)*""#;

const EMAIL_LABEL: &str = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";

const IBAN_PATTERN: &str = r"^([A-Z]{2})([0-9]{2})([A-Z0-9]{1,30})$";

static DEFAULT_CODES: Lazy<Vec<AreaCode>> = Lazy::new(|| {
    super::area_code::parse_area_codes(DEFAULT_AREA_CODES)
        .expect("Valid default area code list")
});

static REGULAR: Lazy<[Regex; 4]> = Lazy::new(|| {
    let fragments = AreaCodeFragments::from_codes(PatternLibrary::default_area_codes());
    PrefixKey::ALL.map(|key| {
        let source = compose_regular_pattern(key, &fragments).expect("Non-empty default codes");
        Regex::new(&source).expect("Valid regular number regex")
    })
});

static MOBILE: Lazy<[Regex; 4]> = Lazy::new(|| {
    PrefixKey::ALL.map(|key| {
        Regex::new(&format!("^{}6[1-5][0-9]{{7}}$", key.dialling_prefix()))
            .expect("Valid mobile number regex")
    })
});

static OTHER: Lazy<[Regex; 2]> = Lazy::new(|| {
    [r"0", r"(?:16[0-9]{2})?0"].map(|prefix| {
        Regex::new(&format!(
            "^(?:{prefix}{OTHER_NATIONAL_RANGES}|{OTHER_SHORT_RANGES})$"
        ))
        .expect("Valid other number regex")
    })
});

static EMAIL_LOCAL: Lazy<[Regex; 3]> = Lazy::new(|| {
    let complete_word = format!("(?:{EMAIL_EXTENDED_ATOM}|{EMAIL_QUOTED_STRING})");
    [
        EMAIL_BASIC_ATOM.to_string(),
        EMAIL_EXTENDED_ATOM.to_string(),
        complete_word,
    ]
    .map(|word| {
        Regex::new(&format!(
            "^(?P<comment1>{EMAIL_COMMENT})?(?P<local>{word}(?:\\.{word})*)(?P<comment2>{EMAIL_COMMENT})?$"
        ))
        .expect("Valid e-mail local part regex")
    })
});

/// Read-only access to the canonical patterns.
pub struct PatternLibrary;

impl PatternLibrary {
    /// Default Dutch area codes, zero-stripped, in declaration order.
    pub fn default_area_codes() -> &'static [AreaCode] {
        &DEFAULT_CODES
    }

    /// Precompiled regular-number pattern over the default area codes.
    pub fn regular(key: PrefixKey) -> &'static Regex {
        &REGULAR[key.index()]
    }

    /// Mobile numbers: `6`, then `1`-`5`, then seven digits after the prefix.
    pub fn mobile(key: PrefixKey) -> &'static Regex {
        &MOBILE[key.index()]
    }

    /// Emergency short numbers, dialled without prefix.
    pub fn emergency() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(EMERGENCY_PATTERN).expect("Valid emergency regex"));
        &PATTERN
    }

    /// Free phone and paid information lines.
    pub fn service() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(SERVICE_PATTERN).expect("Valid service regex"));
        &PATTERN
    }

    /// Legacy and special ranges; the carrier preselect variant allows a `16xx` prefix.
    pub fn other(carrier_preselect: bool) -> &'static Regex {
        &OTHER[usize::from(carrier_preselect)]
    }

    /// Domain part grammar exposing `comment1`, `domain`, `ipAddress` and `comment2`.
    pub fn email_domain() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(
                "^(?P<comment1>{EMAIL_COMMENT})?\
                 (?:(?P<domain>(?:{EMAIL_LABEL}\\.)*{EMAIL_LABEL})|(?P<ipAddress>\\[[^\\[\\]\\s]+\\]))\
                 (?P<comment2>{EMAIL_COMMENT})?$"
            ))
            .expect("Valid e-mail domain regex")
        });
        &PATTERN
    }

    /// Local part grammar for a strictness tier, exposing `comment1`, `local` and `comment2`.
    pub fn email_local(strictness: EmailStrictness) -> &'static Regex {
        let index = match strictness {
            EmailStrictness::Basic => 0,
            EmailStrictness::Extended => 1,
            EmailStrictness::Complete => 2,
        };
        &EMAIL_LOCAL[index]
    }

    /// ISO 13616 structure: country code, check digits, BBAN.
    pub fn iban() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(IBAN_PATTERN).expect("Valid IBAN regex"));
        &PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table_is_distinct() {
        let indices: Vec<usize> = PrefixKey::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_default_codes_are_two_or_three_digits() {
        for code in PatternLibrary::default_area_codes() {
            assert!(
                code.len() == 2 || code.len() == 3,
                "unexpected area code {}",
                code.as_str()
            );
        }
    }

    #[test]
    fn test_compose_empty_fragments() {
        let fragments = AreaCodeFragments::default();
        assert!(compose_regular_pattern(PrefixKey::default(), &fragments).is_none());
    }

    #[test]
    fn test_all_patterns_compile() {
        for key in PrefixKey::ALL {
            let _ = PatternLibrary::regular(key);
            let _ = PatternLibrary::mobile(key);
        }
        let _ = PatternLibrary::emergency();
        let _ = PatternLibrary::service();
        let _ = PatternLibrary::other(false);
        let _ = PatternLibrary::other(true);
        let _ = PatternLibrary::email_domain();
        let _ = PatternLibrary::email_local(EmailStrictness::Complete);
        let _ = PatternLibrary::iban();
    }

    #[test]
    fn test_mobile_country_code_variant() {
        let national = PatternLibrary::mobile(PrefixKey::new(false, false));
        let international = PatternLibrary::mobile(PrefixKey::new(true, false));
        assert!(national.is_match("0612345678"));
        assert!(!national.is_match("+31612345678"));
        assert!(international.is_match("+31612345678"));
        assert!(international.is_match("0031612345678"));
    }
}
