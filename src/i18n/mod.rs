//! Internationalization (i18n) for the registration form.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `strings`: Message and option-label tables per language
//! - `translator`: The `Translate` capability and the table-backed `Translator`
//! - `validator`: Translation coverage checks
//! - `metrics`: Lookup hit/fallback counters
//!
//! # Example
//!
//! ```rust
//! use sport_registration::i18n::{Language, Translate, Translator};
//!
//! let khmer = Language::from_code("km").unwrap();
//! let t = Translator::new(khmer);
//! assert_eq!(t.translate("buttons.reset", "Reset"), "កំណត់ឡើងវិញ");
//! ```

mod language;
mod metrics;
mod registry;
mod strings;
mod translator;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, OptionCategory};
pub use translator::{Translate, Translator};
pub use validator::{TranslationValidator, ValidationReport};
