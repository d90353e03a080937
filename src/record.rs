//! Registration record model.
//!
//! The record is owned by the caller and rebuilt (or edited) for every
//! submission attempt. It serializes with the field names used by the web
//! form, so a submitted JSON payload can be deserialized directly.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position value reserved for player registrations.
pub const PLAYER_POSITION: &str = "player";

/// Positions a coach or leader may choose from.
pub const LEADER_POSITIONS: [&str; 6] = [
    "beginner",
    "intermediate",
    "advanced",
    "expert",
    "coach",
    "leader",
];

/// Which variant of the registration form is being filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationType {
    Leader,
    Player,
}

impl RegistrationType {
    /// Position a fresh form starts with.
    pub fn initial_position(&self) -> &'static str {
        match self {
            RegistrationType::Leader => "",
            RegistrationType::Player => PLAYER_POSITION,
        }
    }

    /// Position values the form offers for this registration type.
    pub fn position_options(&self) -> &'static [&'static str] {
        match self {
            RegistrationType::Leader => &LEADER_POSITIONS,
            RegistrationType::Player => &[PLAYER_POSITION],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Leader => "leader",
            RegistrationType::Player => "player",
        }
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leader" | "coach" => Ok(RegistrationType::Leader),
            "player" => Ok(RegistrationType::Player),
            other => bail!("Unknown registration type: '{}'", other),
        }
    }
}

/// Metadata of an uploaded photo. The file contents never reach the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub name: String,

    /// MIME type reported by the client (e.g. "image/png")
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Size in bytes
    pub size: u64,
}

impl PhotoUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// All form values submitted for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub province: Option<String>,
    pub department: Option<String>,
    pub event_type: Option<String>,
    pub type_of_sport: Option<String>,
    pub selected_sport: Option<String>,
    pub position: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub phone: String,
    /// Calendar date, normally `YYYY-MM-DD` as produced by a date input
    pub dob: String,
    pub photo_upload: Option<PhotoUpload>,
}

impl RegistrationRecord {
    /// Empty record for a new form of the given type.
    pub fn initial(registration_type: RegistrationType) -> Self {
        Self {
            position: registration_type.initial_position().to_string(),
            ..Self::default()
        }
    }

    /// Replace a single field.
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Province(v) => self.province = v,
            FieldValue::Department(v) => self.department = v,
            FieldValue::EventType(v) => self.event_type = v,
            FieldValue::TypeOfSport(v) => self.type_of_sport = v,
            FieldValue::SelectedSport(v) => self.selected_sport = v,
            FieldValue::Position(v) => self.position = v,
            FieldValue::FirstName(v) => self.first_name = v,
            FieldValue::LastName(v) => self.last_name = v,
            FieldValue::NationalId(v) => self.national_id = v,
            FieldValue::Phone(v) => self.phone = v,
            FieldValue::Dob(v) => self.dob = v,
            FieldValue::PhotoUpload(v) => self.photo_upload = v,
        }
    }
}

/// Validated form fields, declared in the order they appear on the form.
///
/// The derived `Ord` follows declaration order, so ordered collections keyed
/// by `Field` iterate top to bottom through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "province")]
    Province,
    #[serde(rename = "department")]
    Department,
    #[serde(rename = "eventType")]
    EventType,
    #[serde(rename = "typeOfSport")]
    TypeOfSport,
    #[serde(rename = "selectedSport")]
    SelectedSport,
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "position")]
    Position,
    #[serde(rename = "nationalID")]
    NationalId,
    #[serde(rename = "dob")]
    Dob,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "photoUpload")]
    PhotoUpload,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Province,
        Field::Department,
        Field::EventType,
        Field::TypeOfSport,
        Field::SelectedSport,
        Field::FirstName,
        Field::LastName,
        Field::Position,
        Field::NationalId,
        Field::Dob,
        Field::Phone,
        Field::PhotoUpload,
    ];

    /// Name of the field as used by the form and in serialized error maps.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Province => "province",
            Field::Department => "department",
            Field::EventType => "eventType",
            Field::TypeOfSport => "typeOfSport",
            Field::SelectedSport => "selectedSport",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Position => "position",
            Field::NationalId => "nationalID",
            Field::Dob => "dob",
            Field::Phone => "phone",
            Field::PhotoUpload => "photoUpload",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for one field of a [`RegistrationRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Province(Option<String>),
    Department(Option<String>),
    EventType(Option<String>),
    TypeOfSport(Option<String>),
    SelectedSport(Option<String>),
    Position(String),
    FirstName(String),
    LastName(String),
    NationalId(String),
    Phone(String),
    Dob(String),
    PhotoUpload(Option<PhotoUpload>),
}

impl FieldValue {
    /// The field this value belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Province(_) => Field::Province,
            FieldValue::Department(_) => Field::Department,
            FieldValue::EventType(_) => Field::EventType,
            FieldValue::TypeOfSport(_) => Field::TypeOfSport,
            FieldValue::SelectedSport(_) => Field::SelectedSport,
            FieldValue::Position(_) => Field::Position,
            FieldValue::FirstName(_) => Field::FirstName,
            FieldValue::LastName(_) => Field::LastName,
            FieldValue::NationalId(_) => Field::NationalId,
            FieldValue::Phone(_) => Field::Phone,
            FieldValue::Dob(_) => Field::Dob,
            FieldValue::PhotoUpload(_) => Field::PhotoUpload,
        }
    }
}

/// Treat `None` and `Some("")` alike.
pub(crate) fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
