use crate::catalog::SportCatalog;
use crate::i18n::Language;
use crate::record::RegistrationType;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language of error messages
    pub language: Language,

    /// Form variant to validate against when the caller does not say
    pub registration_type: RegistrationType,

    /// Optional JSON file replacing the built-in sport catalog
    pub sport_catalog_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            language: match std::env::var("REGISTRATION_LANGUAGE") {
                Ok(code) => Language::from_code(code.trim())
                    .context("REGISTRATION_LANGUAGE is not a supported language")?,
                Err(_) => Language::canonical(),
            },

            registration_type: match std::env::var("REGISTRATION_TYPE") {
                Ok(value) => value
                    .parse()
                    .context("REGISTRATION_TYPE must be 'leader' or 'player'")?,
                Err(_) => RegistrationType::Leader,
            },

            sport_catalog_file: std::env::var("SPORT_CATALOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<SportCatalog> {
        match &self.sport_catalog_file {
            Some(path) => SportCatalog::from_file(path)
                .with_context(|| format!("Failed to load sport catalog from {}", path.display())),
            None => Ok(SportCatalog::default()),
        }
    }
}
