//! Integration tests for the registration validator
//!
//! These tests drive the public API the way a form front end does: build a
//! record, validate it with a language-bound translator, and inspect the
//! resulting error map.

use chrono::NaiveDate;
use proptest::prelude::*;
use sport_registration::form::{FormSession, SubmitError};
use sport_registration::i18n::{
    Language, OptionCategory, TranslationValidator, Translate, Translator,
};
use sport_registration::{
    validate_on, Field, FieldValue, PhotoUpload, RegistrationRecord, RegistrationType,
    SportCatalog,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn valid_player() -> RegistrationRecord {
    RegistrationRecord {
        province: None,
        department: Some("Department 3".to_string()),
        event_type: Some("Event Type 3".to_string()),
        type_of_sport: Some("Traditional Cambodian Sports & Games".to_string()),
        selected_sport: Some("Bokator".to_string()),
        position: "player".to_string(),
        first_name: "Srey".to_string(),
        last_name: "Mom".to_string(),
        national_id: "987654".to_string(),
        phone: "(012) 345-678".to_string(),
        dob: "2010-10-10".to_string(),
        photo_upload: Some(PhotoUpload::new("face.jpg", "image/jpeg", 500_000)),
    }
}

fn run(record: &RegistrationRecord, registration_type: RegistrationType, language: Language) -> sport_registration::ErrorMap {
    validate_on(
        record,
        registration_type,
        &SportCatalog::default(),
        &Translator::new(language),
        today(),
    )
}

// ==================== End-to-End Validation Tests ====================

#[test]
fn test_valid_player_from_json() {
    let json = serde_json::to_string(&valid_player()).expect("serialize");
    let record: RegistrationRecord = serde_json::from_str(&json).expect("deserialize");

    assert!(run(&record, RegistrationType::Player, Language::ENGLISH).is_empty());
}

#[test]
fn test_player_form_rejects_coach_position() {
    let record = RegistrationRecord {
        position: "coach".to_string(),
        ..valid_player()
    };
    let errors = run(&record, RegistrationType::Player, Language::ENGLISH);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(Field::Position),
        Some("Position must be set to Player.")
    );
}

#[test]
fn test_khmer_error_map_json() {
    let record = RegistrationRecord {
        national_id: "12a456".to_string(),
        dob: "not-a-date".to_string(),
        ..valid_player()
    };
    let errors = run(&record, RegistrationType::Player, Language::KHMER);
    let json: serde_json::Value = serde_json::to_value(&errors).expect("serialize");

    assert_eq!(json["nationalID"], "លេខអត្តសញ្ញាណត្រូវមានតែលេខ។");
    assert_eq!(json["dob"], "សូមបញ្ចូលកាលបរិច្ឆេទត្រឹមត្រូវ។");
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn test_location_errors_in_both_languages() {
    let record = RegistrationRecord {
        province: Some("Pailin".to_string()),
        ..valid_player()
    };

    for language in [Language::ENGLISH, Language::KHMER] {
        let errors = run(&record, RegistrationType::Player, language);
        assert_eq!(errors.get(Field::Province), Some("You can only choose one."));
        assert_eq!(errors.get(Field::Department), Some("You can only choose one."));
    }
}

#[test]
fn test_custom_catalog_changes_membership() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[{{ "category": "Water Sports", "sports": ["Rowing", "Swimming"] }}]"#
    )
    .unwrap();

    let catalog = SportCatalog::from_file(&path).expect("Should load catalog");
    let record = RegistrationRecord {
        type_of_sport: Some("Water Sports".to_string()),
        selected_sport: Some("Rowing".to_string()),
        ..valid_player()
    };

    let translate = |_key: &str, fallback: &str| fallback.to_string();
    let errors = validate_on(&record, RegistrationType::Player, &catalog, &translate, today());
    assert!(errors.is_empty());

    let with_default = validate_on(
        &record,
        RegistrationType::Player,
        &SportCatalog::default(),
        &translate,
        today(),
    );
    assert!(with_default.contains(Field::SelectedSport));
}

#[test]
fn test_translate_capability_receives_keys() {
    let record = RegistrationRecord {
        phone: "12".to_string(),
        ..valid_player()
    };
    let keys = |key: &str, _fallback: &str| key.to_string();
    let errors = validate_on(
        &record,
        RegistrationType::Player,
        &SportCatalog::default(),
        &keys,
        today(),
    );
    assert_eq!(errors.get(Field::Phone), Some("errors.phone.invalid"));
}

// ==================== Concurrency Tests ====================

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(SportCatalog::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                let record = RegistrationRecord {
                    national_id: "1".repeat(5 + i),
                    ..valid_player()
                };
                validate_on(
                    &record,
                    RegistrationType::Player,
                    &catalog,
                    &Translator::default(),
                    today(),
                )
                .contains(Field::NationalId)
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, false, false]);
}

// ==================== Form Session Tests ====================

#[test]
fn test_form_session_round_trip() {
    let catalog = SportCatalog::default();
    let translator = Translator::new(Language::KHMER);
    let mut session = FormSession::new(RegistrationType::Leader);

    let err = session.submit(&catalog, &translator).unwrap_err();
    let SubmitError::Invalid { first_field, .. } = err else {
        panic!("expected invalid submission");
    };
    assert_eq!(first_field, Field::Province);

    session.choose_province(Some("Battambang".to_string()));
    session.set_field(FieldValue::EventType(Some("Event Type 1".to_string())));
    session.choose_category(&catalog, Some("Indoor & Recreational Sports".to_string()));
    session.set_field(FieldValue::Position("expert".to_string()));
    session.set_field(FieldValue::FirstName("Rith".to_string()));
    session.set_field(FieldValue::LastName("Sok".to_string()));
    session.set_field(FieldValue::NationalId("123456789012".to_string()));
    session.set_field(FieldValue::Phone("+85512345678".to_string()));
    session.set_field(FieldValue::Dob("1985-05-05".to_string()));
    assert!(session.errors().is_empty());

    let accepted = session.submit(&catalog, &translator).expect("Should accept");
    assert_eq!(accepted.selected_sport.as_deref(), Some("Table Tennis"));
}

// ==================== i18n Tests ====================

#[test]
fn test_option_labels_for_catalog() {
    let translator = Translator::new(Language::KHMER);
    let catalog = SportCatalog::default();

    let labels: Vec<String> = catalog
        .sports("Ball Games")
        .unwrap()
        .iter()
        .map(|sport| translator.option_label(OptionCategory::Sports, sport))
        .collect();

    assert_eq!(labels, vec!["បាល់ទាត់", "បាល់ទះ", "បាល់បោះ", "សីប៉ាកតាក់រ៉ូ"]);
}

#[test]
fn test_khmer_translations_keep_limits() {
    let report = TranslationValidator::check_coverage(Language::KHMER);
    assert!(!report.has_errors(), "errors: {:?}", report.errors);
}

#[test]
fn test_summary_uses_language_prefix() {
    let record = RegistrationRecord {
        last_name: String::new(),
        ..valid_player()
    };
    let translator = Translator::new(Language::KHMER);
    let errors = run(&record, RegistrationType::Player, Language::KHMER);

    assert_eq!(
        errors.summary(&translator).as_deref(),
        Some("សូមពិនិត្យមើល៖ ត្រូវការនាមត្រកូល។")
    );
    assert_eq!(translator.translate("errorSummary.prefix", ""), "សូមពិនិត្យមើល៖");
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_validation_is_idempotent(
        first_name in ".{0,12}",
        national_id in "[0-9a-z ]{0,24}",
        phone in "[0-9+() -]{0,18}",
        dob in prop_oneof![Just(String::new()), "[0-9]{4}-[0-9]{2}-[0-9]{2}"],
        player in any::<bool>(),
    ) {
        let record = RegistrationRecord {
            first_name,
            national_id,
            phone,
            dob,
            ..valid_player()
        };
        let registration_type = if player { RegistrationType::Player } else { RegistrationType::Leader };

        let first = run(&record, registration_type, Language::ENGLISH);
        let second = run(&record, registration_type, Language::ENGLISH);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_digit_ids_valid_only_within_length_bounds(len in 1usize..30) {
        let record = RegistrationRecord {
            national_id: "7".repeat(len),
            ..valid_player()
        };
        let errors = run(&record, RegistrationType::Player, Language::ENGLISH);
        prop_assert_eq!(errors.contains(Field::NationalId), !(6..=20).contains(&len));
    }

    #[test]
    fn prop_image_size_limit(size in 0u64..(4 * 1024 * 1024)) {
        let record = RegistrationRecord {
            photo_upload: Some(PhotoUpload::new("p.png", "image/png", size)),
            ..valid_player()
        };
        let errors = run(&record, RegistrationType::Player, Language::ENGLISH);
        prop_assert_eq!(errors.contains(Field::PhotoUpload), size > 2 * 1024 * 1024);
    }
}
