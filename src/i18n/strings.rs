/// All localized user-facing strings for a language.
///
/// Messages are addressed by dotted keys (e.g. `errors.dob.future`). Option
/// tables translate reference-data values, keyed by the canonical value.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Dotted key → message
    pub messages: &'static [(&'static str, &'static str)],

    /// Province value → label
    pub provinces: &'static [(&'static str, &'static str)],

    /// Department value → label
    pub departments: &'static [(&'static str, &'static str)],

    /// Event type value → label
    pub event_types: &'static [(&'static str, &'static str)],

    /// Sport category value → label
    pub sport_categories: &'static [(&'static str, &'static str)],

    /// Sport value → label
    pub sports: &'static [(&'static str, &'static str)],
}

/// Reference-data lists that have translated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionCategory {
    Provinces,
    Departments,
    EventTypes,
    SportCategories,
    Sports,
}

impl LanguageStrings {
    /// Look up a message by its dotted key.
    pub fn message(&self, key: &str) -> Option<&'static str> {
        lookup(self.messages, key)
    }

    /// Look up the label of a reference-data value.
    pub fn option(&self, category: OptionCategory, value: &str) -> Option<&'static str> {
        let table = match category {
            OptionCategory::Provinces => self.provinces,
            OptionCategory::Departments => self.departments,
            OptionCategory::EventTypes => self.event_types,
            OptionCategory::SportCategories => self.sport_categories,
            OptionCategory::Sports => self.sports,
        };
        lookup(table, value)
    }

    /// All message keys, in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.messages.iter().map(|(key, _)| *key)
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    messages: &[
        // Home
        ("home.title", "Register As"),
        ("home.leader", "Coach / Leader"),
        ("home.player", "Player"),
        // Registration headers
        ("registration.title.player", "Player Registration Form"),
        ("registration.title.coachLeader", "Coach/Leader Registration Form"),
        (
            "registration.subtitle",
            "Please fill in the details below. Fields marked as required must be completed.",
        ),
        ("errorSummary.prefix", "Please review the following:"),
        // Location section
        ("location.title", "Location & Event"),
        (
            "location.subtitle",
            "Select your location and the event you are registering for.",
        ),
        ("location.province.label", "Province"),
        ("location.department.label", "Department"),
        ("location.eventType.label", "Type of Event"),
        // Sport section
        ("sport.selector.title", "Sport Category"),
        (
            "sport.selector.subtitle",
            "Choose a category, then pick a specific sport.",
        ),
        ("sport.selector.legend", "Type of Sport"),
        ("sport.select.label", "Select Sport"),
        // Personal section
        ("personal.title", "Personal Information"),
        (
            "personal.subtitle",
            "Please enter your details. All fields are required.",
        ),
        ("fields.firstName", "First Name"),
        ("fields.lastName", "Last Name"),
        ("fields.position", "Position"),
        ("fields.nationalID", "National ID"),
        ("fields.dob", "Date of Birth"),
        ("fields.phone", "Phone Number"),
        // Positions
        ("positions.beginner", "Beginner"),
        ("positions.intermediate", "Intermediate"),
        ("positions.advanced", "Advanced"),
        ("positions.expert", "Expert"),
        ("positions.player", "Player"),
        ("positions.coach", "Coach"),
        ("positions.leader", "Leader"),
        ("positions.playerFixed", "Fixed as Player"),
        // Upload
        ("upload.title", "Upload Photo (optional)"),
        (
            "upload.subtitle",
            "Please upload a clear image. Maximum size: 2MB.",
        ),
        ("upload.choose", "Choose file..."),
        (
            "upload.errors.type",
            "Only image files are allowed (JPG, PNG, etc.).",
        ),
        ("upload.errors.size", "Image must be 2MB or smaller."),
        // Buttons and alerts
        ("buttons.submit", "Register Now"),
        ("buttons.submitting", "Submitting…"),
        ("buttons.reset", "Reset"),
        ("alerts.submitSuccess", "Registration submitted successfully!"),
        // Validation errors
        ("errors.province.required", "Please select your province."),
        ("errors.department.required", "Please select your department."),
        ("errors.eventType.required", "Please select the event type."),
        ("errors.firstName.required", "First name is required."),
        ("errors.lastName.required", "Last name is required."),
        ("errors.position.required", "Please choose your position level."),
        ("errors.position.playerFixed", "Position must be set to Player."),
        (
            "errors.position.coachLeaderInvalid",
            "Coaches and leaders cannot select Player as position.",
        ),
        (
            "errors.location.required",
            "Please select a province or department.",
        ),
        ("errors.location.exclusive", "You can only choose one."),
        ("errors.nationalID.required", "National ID is required."),
        (
            "errors.nationalID.digits",
            "National ID should contain digits only.",
        ),
        (
            "errors.nationalID.length",
            "National ID must be between 6 and 20 digits.",
        ),
        ("errors.phone.required", "Phone number is required."),
        (
            "errors.phone.invalid",
            "Enter a valid phone number (7–15 digits).",
        ),
        ("errors.dob.required", "Date of birth is required."),
        ("errors.dob.invalid", "Enter a valid date."),
        ("errors.dob.future", "Date of birth cannot be in the future."),
        (
            "errors.typeOfSport.required",
            "Please select a sport category.",
        ),
        ("errors.selectedSport.required", "Please select a sport."),
        (
            "errors.selectedSport.mismatch",
            "Selected sport does not match the chosen category.",
        ),
        // Navbar
        ("navbar.buttons.leader", "Register as Leader"),
        ("navbar.buttons.player", "Register as Player"),
        (
            "navbar.ministry.name",
            "Ministry of Education, Youth and Sport of Cambodia",
        ),
    ],
    // Province values are already their English labels
    provinces: &[],
    departments: &[
        ("Department 1", "Department 1"),
        ("Department 2", "Department 2"),
        ("Department 3", "Department 3"),
    ],
    event_types: &[
        ("Event Type 1", "Event Type 1"),
        ("Event Type 2", "Event Type 2"),
        ("Event Type 3", "Event Type 3"),
    ],
    sport_categories: &[
        (
            "Traditional Cambodian Sports & Games",
            "Traditional Cambodian Sports & Games",
        ),
        ("Ball Games", "Ball Games"),
        ("Martial Arts & Combat Sports", "Martial Arts & Combat Sports"),
        ("Athletics & Outdoor Sports", "Athletics & Outdoor Sports"),
        ("Indoor & Recreational Sports", "Indoor & Recreational Sports"),
    ],
    sports: &[
        ("Bokator", "Bokator"),
        ("Pradal Serey", "Pradal Serey"),
        ("Chol Chhoung", "Chol Chhoung"),
        ("Teanh Prot", "Teanh Prot"),
        ("Football", "Football"),
        ("Volleyball", "Volleyball"),
        ("Basketball", "Basketball"),
        ("Sepak Takraw", "Sepak Takraw"),
        ("Karate", "Karate"),
        ("Taekwondo", "Taekwondo"),
        ("Boxing", "Boxing"),
        ("Judo", "Judo"),
        ("Running", "Running"),
        ("Cycling", "Cycling"),
        ("Swimming", "Swimming"),
        ("Archery", "Archery"),
        ("Table Tennis", "Table Tennis"),
        ("Badminton", "Badminton"),
        ("Chess", "Chess"),
        ("E-sports", "E-sports"),
    ],
};

// ==================== Khmer Strings ====================

/// Khmer language strings.
/// The position and location validation messages have no Khmer text yet and
/// fall back to the English text supplied by the caller.
pub const KHMER_STRINGS: LanguageStrings = LanguageStrings {
    messages: &[
        // Home
        ("home.title", "ចុះឈ្មោះជា"),
        ("home.leader", "គ្រូ / មេដឹកនាំ"),
        ("home.player", "អ្នកលេង"),
        // Registration headers
        ("registration.title.player", "ទម្រង់ចុះឈ្មោះអ្នកលេង"),
        ("registration.title.coachLeader", "ទម្រង់ចុះឈ្មោះគ្រូ/មេដឹកនាំ"),
        (
            "registration.subtitle",
            "សូមបំពេញព័ត៌មានខាងក្រោម។ វាលដែលត្រូវបំពេញត្រូវបំពេញអស់ទាំងអស់។",
        ),
        ("errorSummary.prefix", "សូមពិនិត្យមើល៖"),
        // Location section
        ("location.title", "ទីតាំង និងព្រឹត្តិការណ៍"),
        (
            "location.subtitle",
            "សូមជ្រើសរើសទីតាំង និងព្រឹត្តិការណ៍ដែលអ្នកចូលរួម។",
        ),
        ("location.province.label", "ខេត្ត/រាជធានី"),
        ("location.department.label", "នាយកដ្ឋាន"),
        ("location.eventType.label", "ប្រភេទព្រឹត្តិការណ៍"),
        // Sport section
        ("sport.selector.title", "ប្រភេទកីឡា"),
        (
            "sport.selector.subtitle",
            "ជ្រើសរើសប្រភេទមួយ បន្ទាប់មកជ្រើសរើសកីឡាជាក់លាក់។",
        ),
        ("sport.selector.legend", "ប្រភេទកីឡា"),
        ("sport.select.label", "ជ្រើសរើសកីឡា"),
        // Personal section
        ("personal.title", "ព័ត៌មានផ្ទាល់ខ្លួន"),
        (
            "personal.subtitle",
            "សូមបញ្ចូលព័ត៌មានរបស់អ្នក។ វាលទាំងអស់ត្រូវបំពេញ។",
        ),
        ("fields.firstName", "នាមខ្លួន"),
        ("fields.lastName", "នាមត្រកូល"),
        ("fields.position", "កម្រិត"),
        ("fields.nationalID", "អត្តសញ្ញាណប័ណ្ណ"),
        ("fields.dob", "ថ្ងៃខែឆ្នាំកំណើត"),
        ("fields.phone", "លេខទូរស័ព្ទ"),
        // Positions
        ("positions.beginner", "អ្នកចាប់ផ្តើម"),
        ("positions.intermediate", "កម្រិតមធ្យម"),
        ("positions.advanced", "កម្រិតខ្ពស់"),
        ("positions.expert", "អ្នកជំនាញ"),
        ("positions.player", "អ្នកលេង"),
        ("positions.coach", "គ្រូ"),
        ("positions.leader", "មេដឹកនាំ"),
        ("positions.playerFixed", "កំណត់ជាអ្នកលេង"),
        // Upload
        ("upload.title", "អាប់ឡោតរូបថត (ស្រេចចិត្ត)"),
        (
            "upload.subtitle",
            "សូមអាប់ឡោតរូបភាពច្បាស់ ទំហំអតិបរមា 2MB។",
        ),
        ("upload.choose", "ជ្រើសរើសឯកសារ..."),
        (
            "upload.errors.type",
            "អនុញ្ញាតតែឯកសាររូបភាព (JPG, PNG, ល) ប៉ុណ្ណោះ។",
        ),
        (
            "upload.errors.size",
            "រូបភាពត្រូវតែមានទំហំតិចជាងឬស្មើ 2MB។",
        ),
        // Buttons and alerts
        ("buttons.submit", "ចុះឈ្មោះឥឡូវនេះ"),
        ("buttons.submitting", "កំពុងដាក់ស្នើ…"),
        ("buttons.reset", "កំណត់ឡើងវិញ"),
        ("alerts.submitSuccess", "បានដាក់ស្នើការចុះឈ្មោះដោយជោគជ័យ!"),
        // Validation errors
        ("errors.province.required", "សូមជ្រើសរើសខេត្ត/រាជធានី។"),
        ("errors.department.required", "សូមជ្រើសរើសនាយកដ្ឋាន។"),
        ("errors.eventType.required", "សូមជ្រើសរើសប្រភេទព្រឹត្តិការណ៍។"),
        ("errors.firstName.required", "ត្រូវការនាមខ្លួន។"),
        ("errors.lastName.required", "ត្រូវការនាមត្រកូល។"),
        ("errors.position.required", "សូមជ្រើសរើសកម្រិតរបស់អ្នក។"),
        ("errors.nationalID.required", "ត្រូវការលេខអត្តសញ្ញាណប័ណ្ណ។"),
        ("errors.nationalID.digits", "លេខអត្តសញ្ញាណត្រូវមានតែលេខ។"),
        (
            "errors.nationalID.length",
            "លេខអត្តសញ្ញាណប័ណ្ណត្រូវមានពី 6 ដល់ 20 ខ្ទង់។",
        ),
        ("errors.phone.required", "ត្រូវការលេខទូរស័ព្ទ។"),
        (
            "errors.phone.invalid",
            "សូមបញ្ចូលលេខទូរស័ព្ទត្រឹមត្រូវ (7–15 ខ្ទង់)។",
        ),
        ("errors.dob.required", "ត្រូវការថ្ងៃខែឆ្នាំកំណើត។"),
        ("errors.dob.invalid", "សូមបញ្ចូលកាលបរិច្ឆេទត្រឹមត្រូវ។"),
        ("errors.dob.future", "ថ្ងៃខែឆ្នាំកំណើតមិនអាចនៅអនាគតបានទេ។"),
        ("errors.typeOfSport.required", "សូមជ្រើសរើសប្រភេទកីឡា។"),
        ("errors.selectedSport.required", "សូមជ្រើសរើសកីឡា។"),
        (
            "errors.selectedSport.mismatch",
            "កីឡាដែលបានជ្រើសរើសមិនត្រូវនឹងប្រភេទដែលបានជ្រើសរើសទេ។",
        ),
        // Navbar
        ("navbar.buttons.leader", "ចុះឈ្មោះជាមេដឹកនាំ"),
        ("navbar.buttons.player", "ចុះឈ្មោះជាអ្នកលេង"),
        ("navbar.ministry.name", "ក្រសួងអប់រំ យុវជន និងកីឡា"),
    ],
    provinces: &[
        ("Phnom Penh", "ភ្នំពេញ"),
        ("Banteay Meanchey", "បន្ទាយមានជ័យ"),
        ("Battambang", "បាត់ដំបង"),
        ("Kampong Cham", "កំពង់ចាម"),
        ("Kampong Chhnang", "កំពង់ឆ្នាំង"),
        ("Kampong Speu", "កំពង់ស្ពឺ"),
        ("Kampong Thom", "កំពង់ធំ"),
        ("Kampot", "កំពត"),
        ("Kandal", "កណ្ដាល"),
        ("Kep", "កែប"),
        ("Koh Kong", "កោះកុង"),
        ("Kratie", "ក្រចេះ"),
        ("Mondulkiri", "មណ្ឌលគិរី"),
        ("Oddar Meanchey", "ឧត្តរមានជ័យ"),
        ("Pailin", "ប៉ៃលិន"),
        ("Preah Vihear", "ព្រះវិហារ"),
        ("Prey Veng", "ព្រៃវែង"),
        ("Pursat", "ពោធិ៍សាត់"),
        ("Ratanakiri", "រតនគិរី"),
        ("Siem Reap", "សៀមរាប"),
        ("Preah Sihanouk", "ព្រះសីហនុ"),
        ("Stung Treng", "ស្ទឹងត្រែង"),
        ("Svay Rieng", "ស្វាយរៀង"),
        ("Takeo", "តាកែវ"),
        ("Tbong Khmum", "ត្បូងឃ្មុំ"),
    ],
    departments: &[
        ("Department 1", "នាយកដ្ឋាន ១"),
        ("Department 2", "នាយកដ្ឋាន ២"),
        ("Department 3", "នាយកដ្ឋាន ៣"),
    ],
    event_types: &[
        ("Event Type 1", "ប្រភេទព្រឹត្តិការណ៍ ១"),
        ("Event Type 2", "ប្រភេទព្រឹត្តិការណ៍ ២"),
        ("Event Type 3", "ប្រភេទព្រឹត្តិការណ៍ ៣"),
    ],
    sport_categories: &[
        (
            "Traditional Cambodian Sports & Games",
            "កីឡា និងល្បែងប្រពៃណីខ្មែរ",
        ),
        ("Ball Games", "កីឡាបាល់"),
        ("Martial Arts & Combat Sports", "សិល្បៈប្រយុទ្ធ និងកីឡាប្រយុទ្ធ"),
        ("Athletics & Outdoor Sports", "កីឡាខាងក្រៅ និងអត្តពលិក"),
        ("Indoor & Recreational Sports", "កីឡាខាងក្នុង និងកម្សាន្ត"),
    ],
    sports: &[
        ("Bokator", "បុកកាត"),
        ("Pradal Serey", "ប្រដាល់សេរី"),
        ("Chol Chhoung", "ចូលឈូង"),
        ("Teanh Prot", "ទាញព្រ័ត្រ"),
        ("Football", "បាល់ទាត់"),
        ("Volleyball", "បាល់ទះ"),
        ("Basketball", "បាល់បោះ"),
        ("Sepak Takraw", "សីប៉ាកតាក់រ៉ូ"),
        ("Karate", "គារ៉ាធេ"),
        ("Taekwondo", "តៃក្វាន់ដូ"),
        ("Boxing", "ប្រដាល់"),
        ("Judo", "ជូដូ"),
        ("Running", "រត់"),
        ("Cycling", "ជិះកង់"),
        ("Swimming", "ហែលទឹក"),
        ("Archery", "បាញ់ធ្នូ"),
        ("Table Tennis", "ប៉េងប៉ុង"),
        ("Badminton", "បេដមិនតុន"),
        ("Chess", "អុក"),
        ("E-sports", "អ៊ី-ស្ពត"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_english_message_lookup() {
        assert_eq!(
            ENGLISH_STRINGS.message("errors.dob.future"),
            Some("Date of birth cannot be in the future.")
        );
        assert_eq!(ENGLISH_STRINGS.message("errors.dob"), None);
    }

    #[test]
    fn test_khmer_message_lookup() {
        assert_eq!(
            KHMER_STRINGS.message("upload.errors.size"),
            Some("រូបភាពត្រូវតែមានទំហំតិចជាងឬស្មើ 2MB។")
        );
    }

    #[test]
    fn test_khmer_lacks_location_messages() {
        assert!(KHMER_STRINGS.message("errors.location.required").is_none());
        assert!(KHMER_STRINGS.message("errors.location.exclusive").is_none());
    }

    #[test]
    fn test_message_keys_are_unique() {
        for strings in [&ENGLISH_STRINGS, &KHMER_STRINGS] {
            let mut seen = HashSet::new();
            for key in strings.keys() {
                assert!(seen.insert(key), "duplicate key {}", key);
            }
        }
    }

    #[test]
    fn test_khmer_keys_are_subset_of_english() {
        let english: HashSet<_> = ENGLISH_STRINGS.keys().collect();
        for key in KHMER_STRINGS.keys() {
            assert!(english.contains(key), "unexpected Khmer key {}", key);
        }
    }

    #[test]
    fn test_option_lookup() {
        assert_eq!(
            KHMER_STRINGS.option(OptionCategory::Sports, "Chess"),
            Some("អុក")
        );
        assert_eq!(
            KHMER_STRINGS.option(OptionCategory::Provinces, "Siem Reap"),
            Some("សៀមរាប")
        );
        assert_eq!(ENGLISH_STRINGS.option(OptionCategory::Provinces, "Kep"), None);
    }

    #[test]
    fn test_every_province_has_khmer_label() {
        for province in crate::catalog::PROVINCES {
            assert!(
                KHMER_STRINGS
                    .option(OptionCategory::Provinces, province)
                    .is_some(),
                "missing Khmer label for {}",
                province
            );
        }
    }

    #[test]
    fn test_every_default_sport_has_labels() {
        let catalog = crate::catalog::SportCatalog::default();
        for category in catalog.categories() {
            assert!(KHMER_STRINGS
                .option(OptionCategory::SportCategories, category)
                .is_some());
            for sport in catalog.sports(category).unwrap() {
                assert!(ENGLISH_STRINGS.option(OptionCategory::Sports, sport).is_some());
                assert!(KHMER_STRINGS.option(OptionCategory::Sports, sport).is_some());
            }
        }
    }
}
