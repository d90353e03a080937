//! Registration form validation.
//!
//! [`validate`] checks a [`RegistrationRecord`] and returns an [`ErrorMap`]
//! holding one localized message per invalid field. It never fails: every
//! problem with the input is reported through the map. The rule groups are
//! independent and all of them run on every call.

use crate::catalog::SportCatalog;
use crate::i18n::Translate;
use crate::record::{filled, Field, RegistrationRecord, RegistrationType, PLAYER_POSITION};
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Largest accepted photo upload (2 MiB).
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

pub const NATIONAL_ID_MIN_LEN: usize = 6;
pub const NATIONAL_ID_MAX_LEN: usize = 20;

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?[0-9\s\-()]{7,15}$").expect("phone pattern is valid")
    })
}

/// Field → localized error message. Fields without an entry are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier message for the field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error of a field, returning it.
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The invalid field that comes first on the form.
    pub fn first_error_field(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// One-line summary: the localized prefix followed by every message.
    pub fn summary<T: Translate + ?Sized>(&self, translate: &T) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let prefix = translate.translate("errorSummary.prefix", "Please review the following:");
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        Some(format!("{} {}", prefix, messages.join(" ")))
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a Field, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Validate `record` against today's local date.
pub fn validate<T: Translate + ?Sized>(
    record: &RegistrationRecord,
    registration_type: RegistrationType,
    catalog: &SportCatalog,
    translate: &T,
) -> ErrorMap {
    validate_on(
        record,
        registration_type,
        catalog,
        translate,
        Local::now().date_naive(),
    )
}

/// Validate `record`, treating `today` as the current date for the
/// date-of-birth check.
pub fn validate_on<T: Translate + ?Sized>(
    record: &RegistrationRecord,
    registration_type: RegistrationType,
    catalog: &SportCatalog,
    translate: &T,
    today: NaiveDate,
) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let mut fail = |field: Field, key: &str, fallback: &str| {
        errors.insert(field, translate.translate(key, fallback));
    };

    // Event type
    if filled(&record.event_type).is_none() {
        fail(
            Field::EventType,
            "errors.eventType.required",
            "Please select the event type.",
        );
    }

    // Names
    if record.first_name.trim().is_empty() {
        fail(
            Field::FirstName,
            "errors.firstName.required",
            "First name is required.",
        );
    }
    if record.last_name.trim().is_empty() {
        fail(
            Field::LastName,
            "errors.lastName.required",
            "Last name is required.",
        );
    }

    // Position
    match registration_type {
        RegistrationType::Player => {
            if record.position != PLAYER_POSITION {
                fail(
                    Field::Position,
                    "errors.position.playerFixed",
                    "Position must be set to Player.",
                );
            }
        }
        RegistrationType::Leader => {
            if record.position.is_empty() {
                fail(
                    Field::Position,
                    "errors.position.required",
                    "Please choose your position level.",
                );
            } else if record.position == PLAYER_POSITION {
                fail(
                    Field::Position,
                    "errors.position.coachLeaderInvalid",
                    "Coaches and leaders cannot select Player as position.",
                );
            }
        }
    }

    // Province XOR department
    match (filled(&record.province), filled(&record.department)) {
        (None, None) => {
            for field in [Field::Province, Field::Department] {
                fail(
                    field,
                    "errors.location.required",
                    "Please select a province or department.",
                );
            }
        }
        (Some(_), Some(_)) => {
            for field in [Field::Province, Field::Department] {
                fail(
                    field,
                    "errors.location.exclusive",
                    "You can only choose one.",
                );
            }
        }
        _ => {}
    }

    // National ID
    let national_id = record.national_id.as_str();
    if national_id.trim().is_empty() {
        fail(
            Field::NationalId,
            "errors.nationalID.required",
            "National ID is required.",
        );
    } else if !national_id.bytes().all(|b| b.is_ascii_digit()) {
        fail(
            Field::NationalId,
            "errors.nationalID.digits",
            "National ID should contain digits only.",
        );
    } else if !(NATIONAL_ID_MIN_LEN..=NATIONAL_ID_MAX_LEN).contains(&national_id.len()) {
        fail(
            Field::NationalId,
            "errors.nationalID.length",
            "National ID must be between 6 and 20 digits.",
        );
    }

    // Phone
    if record.phone.trim().is_empty() {
        fail(
            Field::Phone,
            "errors.phone.required",
            "Phone number is required.",
        );
    } else if !phone_regex().is_match(&record.phone) {
        fail(
            Field::Phone,
            "errors.phone.invalid",
            "Enter a valid phone number (7–15 digits).",
        );
    }

    // Date of birth
    if record.dob.is_empty() {
        fail(
            Field::Dob,
            "errors.dob.required",
            "Date of birth is required.",
        );
    } else {
        match parse_date(&record.dob) {
            None => fail(Field::Dob, "errors.dob.invalid", "Enter a valid date."),
            Some(dob) if dob > today => fail(
                Field::Dob,
                "errors.dob.future",
                "Date of birth cannot be in the future.",
            ),
            Some(_) => {}
        }
    }

    // Sport category and sport
    match filled(&record.type_of_sport) {
        None => fail(
            Field::TypeOfSport,
            "errors.typeOfSport.required",
            "Please select a sport category.",
        ),
        Some(category) => {
            let sport = record
                .selected_sport
                .as_deref()
                .filter(|s| !s.trim().is_empty());
            // Blank and unlisted are exclusive; an unlisted sport reports a
            // mismatch, never "required".
            match sport {
                None => fail(
                    Field::SelectedSport,
                    "errors.selectedSport.required",
                    "Please select a sport.",
                ),
                Some(sport) if !catalog.contains(category, sport) => fail(
                    Field::SelectedSport,
                    "errors.selectedSport.mismatch",
                    "Selected sport does not match the chosen category.",
                ),
                Some(_) => {}
            }
        }
    }

    // Photo (optional)
    if let Some(photo) = &record.photo_upload {
        if !photo.mime_type.starts_with("image/") {
            fail(
                Field::PhotoUpload,
                "upload.errors.type",
                "Only image files are allowed (JPG, PNG, etc.).",
            );
        } else if photo.size > MAX_PHOTO_BYTES {
            fail(
                Field::PhotoUpload,
                "upload.errors.size",
                "Image must be 2MB or smaller.",
            );
        }
    }

    debug!(
        registration_type = %registration_type,
        error_count = errors.len(),
        "Validated registration"
    );
    errors
}

/// Parse a calendar date: `YYYY-MM-DD`, or the date part of an RFC 3339
/// timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
