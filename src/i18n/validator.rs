//! Translation coverage validation.
//!
//! Compares a language's message table against the canonical table: keys
//! that are missing are reported as warnings (the caller's fallback text is
//! shown instead), and translations that lose numbers present in the
//! canonical text (limits such as "6", "20" or "2MB") are reported as errors.

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Translations that change the meaning of a message
    pub errors: Vec<String>,

    /// Missing or otherwise incomplete translations
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check `language`'s message table against the canonical one.
    pub fn check_coverage(language: Language) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical().strings();
        let strings = language.strings();

        for key in canonical.keys() {
            let Some(original) = canonical.message(key) else {
                continue;
            };
            match strings.message(key) {
                None => report
                    .warnings
                    .push(format!("Missing translation for '{}'", key)),
                Some(translated) => {
                    if let Some(problem) = Self::compare_numbers(original, translated) {
                        report.errors.push(format!("'{}': {}", key, problem));
                    }
                }
            }
        }

        report
    }

    /// Describe a mismatch between the numbers of two texts, if any.
    pub fn compare_numbers(original: &str, translated: &str) -> Option<String> {
        let orig_numbers = Self::extract_numbers(original);
        let trans_numbers = Self::extract_numbers(translated);
        if orig_numbers != trans_numbers {
            Some(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ))
        } else {
            None
        }
    }

    /// Extract ASCII numbers (with an optional "MB" unit), sorted.
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| {
            Regex::new(r"[0-9]+(?:\s?MB)?").expect("number pattern is valid")
        });

        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().replace(' ', ""))
            .collect();
        numbers.sort();
        numbers
    }
}
