//! Key → message translation.
//!
//! The validator depends only on the [`Translate`] capability, so callers can
//! pass a [`Translator`] bound to a language, or any closure.

use crate::i18n::strings::OptionCategory;
use crate::i18n::{Language, TranslationMetrics};
use tracing::trace;

/// Resolve a message key to display text.
///
/// Implementations must be total: an unresolved key yields `fallback`, or
/// the key itself when `fallback` is empty.
pub trait Translate {
    fn translate(&self, key: &str, fallback: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &str) -> String,
{
    fn translate(&self, key: &str, fallback: &str) -> String {
        self(key, fallback)
    }
}

/// Translator bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
    metrics: &'static TranslationMetrics,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            metrics: TranslationMetrics::global(),
        }
    }

    /// Record lookups into `metrics` instead of the global instance.
    pub fn with_metrics(mut self, metrics: &'static TranslationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Message for `key` in this language, if the table has one.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.language.strings().message(key)
    }

    /// Shorthand for `translate(key, "")`: unresolved keys come back verbatim.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, "")
    }

    /// Display label for a reference-data value.
    ///
    /// Uses this language's label, then the canonical label, then the raw value.
    pub fn option_label(&self, category: OptionCategory, value: &str) -> String {
        if let Some(label) = self.language.strings().option(category, value) {
            self.metrics.record_hit();
            return label.to_string();
        }

        self.metrics.record_fallback();
        Language::canonical()
            .strings()
            .option(category, value)
            .unwrap_or(value)
            .to_string()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::canonical())
    }
}

impl Translate for Translator {
    fn translate(&self, key: &str, fallback: &str) -> String {
        match self.lookup(key) {
            Some(text) => {
                self.metrics.record_hit();
                text.to_string()
            }
            None => {
                self.metrics.record_fallback();
                trace!(language = %self.language, key, "No translation, using fallback");
                if fallback.is_empty() {
                    key.to_string()
                } else {
                    fallback.to_string()
                }
            }
        }
    }
}
