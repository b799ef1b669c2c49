//! IBAN account number validation.
//!
//! Structural check per ISO 13616 followed by the ISO 7064 MOD 97-10
//! checksum: the country code and check digits move to the end, letters
//! become two-digit numbers (`A` = 10 ... `Z` = 35), and the resulting
//! numeral must leave remainder 1 when divided by 97.

use super::patterns::PatternLibrary;
use super::Validator;

/// A structurally valid IBAN split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanCandidate<'a> {
    pub country_code: &'a str,
    pub check_digits: &'a str,
    pub account_id: &'a str,
}

impl<'a> IbanCandidate<'a> {
    /// Decomposes `candidate`; `None` if it does not have the IBAN shape.
    pub fn parse(candidate: &'a str) -> Option<Self> {
        let caps = PatternLibrary::iban().captures(candidate)?;
        Some(Self {
            country_code: caps.get(1)?.as_str(),
            check_digits: caps.get(2)?.as_str(),
            account_id: caps.get(3)?.as_str(),
        })
    }

    /// Account id followed by country code and check digits.
    pub fn rearranged(&self) -> String {
        format!("{}{}{}", self.account_id, self.country_code, self.check_digits)
    }

    /// Decimal numeral with every letter replaced by its two-digit value.
    pub fn to_numeric(&self) -> String {
        let rearranged = self.rearranged();
        let mut numeric = String::with_capacity(rearranged.len() * 2);
        for c in rearranged.chars() {
            if c.is_ascii_digit() {
                numeric.push(c);
            } else {
                numeric.push_str(&(u32::from(c) - 55).to_string());
            }
        }
        numeric
    }
}

/// Remainder of an arbitrarily long decimal numeral divided by 97.
fn mod97(numeral: &str) -> u32 {
    numeral
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |remainder, digit| {
            (remainder * 10 + u32::from(digit - b'0')) % 97
        })
}

/// IBAN validator. Unlike the phone and e-mail matchers, an absent or blank
/// value is rejected.
///
/// ```
/// use nlcheck::domain::{IbanChecker, Validator};
///
/// let checker = IbanChecker::new();
/// assert!(checker.is_valid(Some("NL91ABNA0417164300")));
/// assert!(!checker.is_valid(Some("NL92ABNA0417164300")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IbanChecker;

impl IbanChecker {
    /// Creates a new IBAN checker.
    pub fn new() -> Self {
        Self
    }

    /// MOD 97-10 remainder, or `None` when the structure does not match.
    pub fn checksum(candidate: &str) -> Option<u32> {
        IbanCandidate::parse(candidate).map(|iban| mod97(&iban.to_numeric()))
    }
}

impl Validator for IbanChecker {
    fn is_valid(&self, candidate: Option<&str>) -> bool {
        let Some(iban) = candidate.filter(|c| !c.trim().is_empty()) else {
            return false;
        };

        Self::checksum(iban) == Some(1)
    }

    fn name(&self) -> &str {
        "iban"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ibans() {
        let checker = IbanChecker::new();
        for iban in [
            "NL91ABNA0417164300",
            "NL20INGB0001234567",
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "BE68539007547034",
        ] {
            assert!(checker.is_valid(Some(iban)), "Expected '{iban}' to be valid");
        }
    }

    #[test]
    fn test_check_digit_flips() {
        let checker = IbanChecker::new();
        assert!(!checker.is_valid(Some("NL81ABNA0417164300")));
        assert!(!checker.is_valid(Some("NL90ABNA0417164300")));
    }

    #[test]
    fn test_blank_is_invalid() {
        let checker = IbanChecker::new();
        assert!(!checker.is_valid(None));
        assert!(!checker.is_valid(Some("")));
        assert!(!checker.is_valid(Some("   ")));
    }

    #[test]
    fn test_structure_is_strict() {
        let checker = IbanChecker::new();
        assert!(!checker.is_valid(Some("nl91abna0417164300")));
        assert!(!checker.is_valid(Some("NL91 ABNA 0417 1643 00")));
        assert!(!checker.is_valid(Some("NL91")));
        assert!(IbanCandidate::parse(&format!("NL91{}", "1".repeat(31))).is_none());
    }

    #[test]
    fn test_decomposition() {
        let iban = IbanCandidate::parse("NL91ABNA0417164300").unwrap();
        assert_eq!(iban.country_code, "NL");
        assert_eq!(iban.check_digits, "91");
        assert_eq!(iban.account_id, "ABNA0417164300");
        assert_eq!(iban.rearranged(), "ABNA0417164300NL91");
        assert_eq!(iban.to_numeric(), "101123100417164300232191");
    }

    #[test]
    fn test_mod97() {
        assert_eq!(mod97("97"), 0);
        assert_eq!(mod97("98"), 1);
        assert_eq!(mod97("3214282912345698765432161182"), 1);
    }
}
