//! Bilingual (English/Khmer) registration form validation for sports events.
//!
//! The core is [`validation::validate`]: a pure function from a
//! [`RegistrationRecord`](record::RegistrationRecord) to an
//! [`ErrorMap`](validation::ErrorMap) of localized messages.

pub mod catalog;
pub mod config;
pub mod form;
pub mod i18n;
pub mod record;
pub mod validation;

pub use catalog::SportCatalog;
pub use record::{Field, FieldValue, PhotoUpload, RegistrationRecord, RegistrationType};
pub use validation::{validate, validate_on, ErrorMap};
