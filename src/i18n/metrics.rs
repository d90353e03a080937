//! Translation lookup metrics.
//!
//! Counts how many lookups were answered from a language table and how many
//! fell back to caller-supplied text, which shows where translations are
//! still missing.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lookup counters. `global()` is the process-wide instance the
/// [`Translator`](crate::i18n::Translator) records into.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Lookups answered by the active language's table
    hits: AtomicUsize,

    /// Lookups that returned the fallback text
    fallbacks: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    /// Record a lookup answered from a language table.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let total = hits + fallbacks;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            hit_rate,
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,

    pub fallbacks: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_hit() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.hits(), 0);
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.hits(), 2);
    }

    #[test]
    fn test_record_fallback() {
        let metrics = TranslationMetrics::new();

        metrics.record_fallback();
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.hits(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.hits, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.hit_rate, 0.0);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = TranslationMetrics::new();

        // 3 hits, 1 fallback = 75%
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_hit();

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"hit_rate\":100.0"));
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = TranslationMetrics::global();
        let metrics2 = TranslationMetrics::global();

        assert!(std::ptr::eq(metrics1, metrics2));
    }
}
