//! CLI integration tests.
//!
//! Runs the actual binary to check argument parsing, per-value output and
//! the exit status.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::*;

/// Creates a test Command for the nlcheck binary.
fn nlcheck_cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("nlcheck")
}

/// Tests basic CLI argument parsing and help output.
mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        nlcheck_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("phone"))
            .stdout(predicate::str::contains("email"))
            .stdout(predicate::str::contains("iban"))
            .stdout(predicate::str::contains("--config"));
    }

    #[test]
    fn test_version_flag() {
        nlcheck_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("nlcheck"))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_values_required() {
        nlcheck_cmd()
            .arg("iban")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn test_unknown_category() {
        nlcheck_cmd()
            .args(["phone", "--categories", "fax", "0201234567"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("fax"));
    }
}

/// Tests verdict output and exit status.
mod validation {
    use super::*;

    #[test]
    fn test_all_valid_succeeds() {
        nlcheck_cmd()
            .args(["iban", "NL91ABNA0417164300", "BE68539007547034"])
            .assert()
            .success()
            .stdout(predicate::str::contains("NL91ABNA0417164300\tvalid"))
            .stdout(predicate::str::contains("BE68539007547034\tvalid"));
    }

    #[test]
    fn test_any_invalid_fails() {
        nlcheck_cmd()
            .args(["iban", "NL91ABNA0417164300", "NL92ABNA0417164300"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("NL91ABNA0417164300\tvalid"))
            .stdout(predicate::str::contains("NL92ABNA0417164300\tinvalid"));
    }

    #[test]
    fn test_phone_flags() {
        nlcheck_cmd()
            .args([
                "phone",
                "--categories",
                "regular|mobile",
                "--country-code",
                "+31 20 123 4567",
                "+31 6 12345678",
            ])
            .assert()
            .success();
    }

    #[test]
    fn test_phone_area_code_override() {
        nlcheck_cmd()
            .args(["phone", "--include-area-codes", "020", "0301234567"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("0301234567\tinvalid"));
    }

    #[test]
    fn test_bad_area_code_option() {
        nlcheck_cmd()
            .args(["phone", "--exclude-area-codes", "12345", "0201234567"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--exclude-area-codes"));
    }

    #[test]
    fn test_email_options() {
        nlcheck_cmd()
            .args([
                "email",
                "--strictness",
                "extended",
                "--require-tld",
                "--exclude-domain",
                "*.test",
                "user+tag@example.nl",
                "user@example.test",
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains("user+tag@example.nl\tvalid"))
            .stdout(predicate::str::contains("user@example.test\tinvalid"));
    }
}

/// Tests profile handling through --config and --profile.
mod profiles {
    use super::*;

    #[test]
    fn test_named_profile_from_config() {
        let (_dir, path) = write_profile_file(PROFILE_DOCUMENT);

        nlcheck_cmd()
            .arg("--config")
            .arg(&path)
            .args(["--profile", "amsterdam", "phone", "0201234567"])
            .assert()
            .success();

        nlcheck_cmd()
            .arg("--config")
            .arg(&path)
            .args(["--profile", "amsterdam", "phone", "0101234567"])
            .assert()
            .failure();
    }

    #[test]
    fn test_profile_after_subcommand() {
        let (_dir, path) = write_profile_file(PROFILE_DOCUMENT);

        nlcheck_cmd()
            .args(["email", "--profile", "intranet", "--config"])
            .arg(&path)
            .arg("root@[10.0.0.1]")
            .assert()
            .success();
    }

    #[test]
    fn test_missing_config_file() {
        nlcheck_cmd()
            .args(["--config", "/nonexistent/profiles.json", "iban", "NL91ABNA0417164300"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load profiles"));
    }

    #[test]
    fn test_invalid_config_file() {
        let (_dir, path) = write_profile_file(r#"{ "phone": [ { "areaCodes": "0x0" } ] }"#);

        nlcheck_cmd()
            .arg("--config")
            .arg(&path)
            .args(["phone", "0201234567"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid"));
    }
}
