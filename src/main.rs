//! Validation CLI.
//!
//! Validates telephone numbers, e-mail addresses or IBANs given on the
//! command line and prints one verdict per value. The exit status is non-zero
//! when any value is rejected.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nlcheck::domain::area_code::parse_area_codes;
use nlcheck::{
    EmailOptions, EmailStrictness, MatcherOptions, PhoneCategories, PhoneOptions,
    ValidationService, ValidationTarget,
};

/// Dutch identifier validator
///
/// Validates telephone numbers, e-mail addresses and IBAN account numbers.
/// Options given here are defaults; a matching profile in --config overrides them.
#[derive(Parser)]
#[command(name = "nlcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Profile document (JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Profile name to apply (falls back to the unnamed profile)
    #[arg(short, long, value_name = "NAME", global = true)]
    profile: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate Dutch telephone numbers
    Phone(PhoneArgs),

    /// Validate e-mail addresses
    Email(EmailArgs),

    /// Validate IBAN account numbers
    Iban {
        /// Values to validate
        #[arg(required = true)]
        values: Vec<String>,
    },
}

#[derive(Args)]
struct PhoneArgs {
    /// Number categories, e.g. "regular|mobile", "all" or "none"
    #[arg(long, default_value = "regular")]
    categories: PhoneCategories,

    /// Accept +31 / 0031 in place of the national zero
    #[arg(long)]
    country_code: bool,

    /// Accept a 16xx carrier preselect prefix
    #[arg(long)]
    carrier_preselect: bool,

    /// Semicolon-delimited area codes replacing the defaults
    #[arg(long, value_name = "CODES")]
    include_area_codes: Option<String>,

    /// Semicolon-delimited area codes removed from the defaults
    #[arg(long, value_name = "CODES")]
    exclude_area_codes: Option<String>,

    /// Values to validate
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Args)]
struct EmailArgs {
    /// Local part grammar: basic, extended or complete
    #[arg(long, default_value = "basic")]
    strictness: EmailStrictness,

    /// Accept comments such as "(work)"
    #[arg(long)]
    allow_comments: bool,

    /// Accept IP address literals such as "[192.168.1.1]"
    #[arg(long)]
    allow_ip: bool,

    /// Require a dot in the domain
    #[arg(long)]
    require_tld: bool,

    /// Allowed domain (exact or wildcard); repeatable
    #[arg(long, value_name = "PATTERN")]
    include_domain: Vec<String>,

    /// Denied domain (exact or wildcard); repeatable
    #[arg(long, value_name = "PATTERN")]
    exclude_domain: Vec<String>,

    /// Values to validate
    #[arg(required = true)]
    values: Vec<String>,
}

impl PhoneArgs {
    fn options(&self) -> Result<PhoneOptions> {
        let mut options = PhoneOptions::new(self.categories)
            .with_country_calling_code(self.country_code)
            .with_carrier_preselect(self.carrier_preselect);

        if let Some(list) = &self.include_area_codes {
            options = options.with_include_area_codes(
                parse_area_codes(list).context("Invalid --include-area-codes")?,
            );
        }
        if let Some(list) = &self.exclude_area_codes {
            options = options.with_exclude_area_codes(
                parse_area_codes(list).context("Invalid --exclude-area-codes")?,
            );
        }

        Ok(options)
    }
}

impl EmailArgs {
    fn options(&self) -> EmailOptions {
        EmailOptions::new(self.strictness)
            .with_comments(self.allow_comments)
            .with_ip_addresses(self.allow_ip)
            .with_top_level_domain(self.require_tld)
            .with_include_domains(self.include_domain.iter().cloned())
            .with_exclude_domains(self.exclude_domain.iter().cloned())
    }
}

/// Splits the parsed command into a target, matcher defaults and values.
fn build_request(command: &Commands) -> Result<(ValidationTarget, MatcherOptions, &[String])> {
    let mut options = MatcherOptions::default();

    let (target, values) = match command {
        Commands::Phone(args) => {
            options.phone = args.options()?;
            (ValidationTarget::Phone, &args.values)
        }
        Commands::Email(args) => {
            options.email = args.options();
            (ValidationTarget::Email, &args.values)
        }
        Commands::Iban { values } => (ValidationTarget::Iban, values),
    };

    Ok((target, options, values.as_slice()))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Profiles are loaded once, before any matcher is built.
    let service = match &cli.config {
        Some(path) => ValidationService::from_config_file(path)
            .with_context(|| format!("Failed to load profiles from {}", path.display()))?,
        None => ValidationService::with_defaults(),
    };

    let (target, options, values) = build_request(&cli.command)?;
    debug!(%target, profile = ?cli.profile, "building validator");

    let report = service
        .validate_batch(target, cli.profile.as_deref(), &options, values)
        .with_context(|| format!("Failed to build {target} validator"))?;

    for value in values {
        let verdict = if report.invalid.contains(value) {
            "invalid"
        } else {
            "valid"
        };
        println!("{value}\t{verdict}");
    }

    info!(
        checked = report.checked,
        valid = report.valid,
        invalid = report.invalid.len(),
        "validation finished"
    );

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
