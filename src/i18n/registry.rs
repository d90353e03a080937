//! Languages the registration form can be shown in.
//!
//! English is canonical: its string table is complete, and every other table
//! falls back to it key by key.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, KHMER_STRINGS};
use std::sync::OnceLock;

/// One selectable form language and its string table.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code ("en", "km")
    pub code: &'static str,

    /// Name in English, used in logs
    pub name: &'static str,

    /// Name shown in the language switcher
    pub native_name: &'static str,

    pub is_canonical: bool,

    pub enabled: bool,

    pub strings: &'static LanguageStrings,
}

static LANGUAGES: [LanguageConfig; 2] = [
    LanguageConfig {
        code: "en",
        name: "English",
        native_name: "English",
        is_canonical: true,
        enabled: true,
        strings: &ENGLISH_STRINGS,
    },
    LanguageConfig {
        code: "km",
        name: "Khmer",
        native_name: "ខ្មែរ",
        is_canonical: false,
        enabled: true,
        strings: &KHMER_STRINGS,
    },
];

/// Read-only view over the supported form languages.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
    canonical: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let canonical = LANGUAGES
                .iter()
                .position(|lang| lang.is_canonical)
                .unwrap_or(0);
            LanguageRegistry {
                languages: &LANGUAGES,
                canonical,
            }
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Languages offered in the switcher, canonical first.
    pub fn list_enabled(&self) -> Vec<&'static LanguageConfig> {
        let mut enabled: Vec<_> = self.languages.iter().filter(|lang| lang.enabled).collect();
        enabled.sort_by_key(|lang| !lang.is_canonical);
        enabled
    }

    /// The language whose table is complete (English).
    pub fn canonical(&self) -> &'static LanguageConfig {
        &self.languages[self.canonical]
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).is_some_and(|lang| lang.enabled)
    }
}
