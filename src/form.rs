//! Caller-owned form state.
//!
//! A [`FormSession`] holds the record being edited, the errors of the last
//! submit attempt and an in-flight flag that rejects duplicate submissions.

use crate::catalog::SportCatalog;
use crate::i18n::Translate;
use crate::record::{Field, FieldValue, RegistrationRecord, RegistrationType};
use crate::validation::{validate, ErrorMap};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("registration has {} invalid field(s)", .errors.len())]
    Invalid {
        /// Field to focus: the first invalid one on the form
        first_field: Field,
        errors: ErrorMap,
    },

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    registration_type: RegistrationType,
    record: RegistrationRecord,
    errors: ErrorMap,
    submitting: bool,
}

impl FormSession {
    pub fn new(registration_type: RegistrationType) -> Self {
        Self {
            registration_type,
            record: RegistrationRecord::initial(registration_type),
            errors: ErrorMap::new(),
            submitting: false,
        }
    }

    pub fn registration_type(&self) -> RegistrationType {
        self.registration_type
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update one field and clear its error.
    pub fn set_field(&mut self, value: FieldValue) {
        let field = value.field();
        self.record.apply(value);
        if self.errors.clear(field).is_some() {
            debug!(field = %field, "Cleared field error after edit");
        }
    }

    /// Pick a province; choosing one clears the department.
    pub fn choose_province(&mut self, province: Option<String>) {
        let chosen = province.as_deref().is_some_and(|p| !p.is_empty());
        self.set_field(FieldValue::Province(province));
        if chosen {
            self.set_field(FieldValue::Department(None));
        }
    }

    /// Pick a department; choosing one clears the province.
    pub fn choose_department(&mut self, department: Option<String>) {
        let chosen = department.as_deref().is_some_and(|d| !d.is_empty());
        self.set_field(FieldValue::Department(department));
        if chosen {
            self.set_field(FieldValue::Province(None));
        }
    }

    /// Pick a sport category and preselect its first sport.
    pub fn choose_category(&mut self, catalog: &SportCatalog, category: Option<String>) {
        let first_sport = category
            .as_deref()
            .and_then(|c| catalog.first_sport(c))
            .map(str::to_string);
        self.set_field(FieldValue::TypeOfSport(category));
        self.set_field(FieldValue::SelectedSport(first_sport));
    }

    /// Restore the initial record and drop all errors.
    pub fn reset(&mut self) {
        self.record = RegistrationRecord::initial(self.registration_type);
        self.errors = ErrorMap::new();
    }

    /// Validate and, when valid, mark the form as submitting.
    ///
    /// Returns a snapshot of the accepted record. The caller must call
    /// [`finish_submission`](Self::finish_submission) once it is done with it.
    pub fn submit<T: Translate + ?Sized>(
        &mut self,
        catalog: &SportCatalog,
        translate: &T,
    ) -> Result<RegistrationRecord, SubmitError> {
        if self.submitting {
            warn!("Ignoring submit while a submission is in progress");
            return Err(SubmitError::AlreadySubmitting);
        }

        let errors = validate(&self.record, self.registration_type, catalog, translate);
        self.errors = errors.clone();

        if let Some(first_field) = errors.first_error_field() {
            info!(
                registration_type = %self.registration_type,
                invalid_fields = errors.len(),
                first_field = %first_field,
                "Registration rejected"
            );
            return Err(SubmitError::Invalid {
                first_field,
                errors,
            });
        }

        self.submitting = true;
        info!(registration_type = %self.registration_type, "Registration accepted");
        Ok(self.record.clone())
    }

    /// End the in-flight submission and start a fresh form.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
        self.reset();
    }
}
