//! Validate a registration record stored as JSON.
//!
//! Usage:
//!   sport-registration <record.json> [--type leader|player] [--lang en|km]
//!
//! Prints the error map as JSON and exits with status 1 when the record is
//! invalid. Environment variables (see `Config`) supply defaults.

use anyhow::{bail, Context, Result};
use sport_registration::config::Config;
use sport_registration::i18n::{Language, TranslationMetrics, Translator};
use sport_registration::{validate, RegistrationRecord, RegistrationType};
use tracing::{debug, info};

struct Args {
    record_path: String,
    registration_type: Option<RegistrationType>,
    language: Option<Language>,
}

fn parse_args() -> Result<Args> {
    let mut record_path = None;
    let mut registration_type = None;
    let mut language = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--type" => {
                let value = args.next().context("--type needs a value")?;
                registration_type = Some(value.parse()?);
            }
            "--lang" => {
                let value = args.next().context("--lang needs a value")?;
                language = Some(Language::from_code(&value)?);
            }
            other if other.starts_with("--") => bail!("Unknown option: {}", other),
            _ => record_path = Some(arg),
        }
    }

    Ok(Args {
        record_path: record_path
            .context("Usage: sport-registration <record.json> [--type leader|player] [--lang en|km]")?,
        registration_type,
        language,
    })
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sport_registration=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;
    let catalog = config.load_catalog()?;

    let registration_type = args.registration_type.unwrap_or(config.registration_type);
    let language = args.language.unwrap_or(config.language);
    let translator = Translator::new(language);

    let contents = std::fs::read_to_string(&args.record_path)
        .with_context(|| format!("Failed to read {}", args.record_path))?;
    let record: RegistrationRecord =
        serde_json::from_str(&contents).context("Failed to parse registration record")?;

    info!(
        "Validating {} registration from {} ({})",
        registration_type,
        args.record_path,
        language.name()
    );
    let errors = validate(&record, registration_type, &catalog, &translator);

    println!("{}", serde_json::to_string_pretty(&errors)?);
    debug!(metrics = ?TranslationMetrics::global().report(), "Translation lookups");

    if errors.is_empty() {
        info!("Registration is valid");
        Ok(())
    } else {
        info!("Registration has {} invalid field(s)", errors.len());
        std::process::exit(1);
    }
}
