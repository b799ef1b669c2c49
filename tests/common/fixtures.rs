//! Test fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// IBANs with correct check digits.
pub const VALID_IBANS: &[&str] = &[
    "NL91ABNA0417164300",
    "NL20INGB0001234567",
    "DE89370400440532013000",
    "GB82WEST12345698765432",
    "BE68539007547034",
];

/// Regular numbers inside the default area code table.
pub const REGULAR_NUMBERS: &[&str] = &["0201234567", "010 123 4567", "0581234567", "0113123456"];

pub const MOBILE_NUMBERS: &[&str] = &["0612345678", "06 51234567"];

pub const EMERGENCY_NUMBERS: &[&str] = &["112", "144", "116000", "116111", "116123"];

/// Profile document covering both sections, with a default and a named
/// entry in each.
pub const PROFILE_DOCUMENT: &str = r#"{
    "phone": [
        { "name": "", "allowCountryCallingCode": true },
        { "name": "amsterdam", "areaCodes": "020" },
        { "name": "no-frisian", "excludeAreaCodes": "058;0513;0515" }
    ],
    "email": [
        { "name": "default", "requireTopLevelDomain": true },
        {
            "name": "government",
            "includeDomains": ["*.nl", "europa.eu"],
            "excludeDomains": ["spam.nl"]
        },
        { "name": "intranet", "allowIPAddresses": true, "requireTopLevelDomain": false }
    ]
}"#;

/// Writes `contents` to a file in a fresh temporary directory.
///
/// The directory must be kept alive for as long as the file is used.
pub fn write_profile_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("profiles.json");
    fs::write(&path, contents).expect("write profile file");
    (dir, path)
}

/// Replaces the check digits of `iban` with `digits`.
pub fn with_check_digits(iban: &str, digits: u32) -> String {
    format!("{}{:02}{}", &iban[..2], digits, &iban[4..])
}
