use crate::form::{ConditionTag, FormField, FormState, InputKind};
use crate::i18n::Language;
use serde::Serialize;

/// The payload sent to the intake service.
///
/// Keys match the form field names, plus `conditions` and
/// `language_preference`. Optional fields left blank are sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeRecord {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub insurance_provider: String,
    pub policy_number: String,
    pub reason_for_visit: String,
    pub medications: String,
    pub allergies: String,
    pub conditions: Vec<ConditionTag>,
    pub language_preference: Language,
}

impl IntakeRecord {
    /// Snapshot the form as it stands. Values are sent as entered, except
    /// email addresses, which lose surrounding whitespace like an email input does.
    pub fn from_form(form: &FormState, language: Language) -> Self {
        let value = |field: FormField| {
            let raw = form.value(field);
            match field.kind() {
                InputKind::Email => raw.trim().to_string(),
                _ => raw.to_string(),
            }
        };

        Self {
            first_name: value(FormField::FirstName),
            last_name: value(FormField::LastName),
            dob: value(FormField::Dob),
            phone: value(FormField::Phone),
            email: value(FormField::Email),
            address: value(FormField::Address),
            emergency_contact: value(FormField::EmergencyContact),
            insurance_provider: value(FormField::InsuranceProvider),
            policy_number: value(FormField::PolicyNumber),
            reason_for_visit: value(FormField::ReasonForVisit),
            medications: value(FormField::Medications),
            allergies: value(FormField::Allergies),
            conditions: form.checked_conditions(),
            language_preference: language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::ENGLISH_DEMO;

    #[test]
    fn test_json_keys_match_field_names() {
        let mut form = FormState::new();
        ENGLISH_DEMO.fill(&mut form);
        let record = IntakeRecord::from_form(&form, Language::English);

        let json = serde_json::to_value(&record).expect("serialize");
        let object = json.as_object().expect("object");

        for field in FormField::ALL {
            assert_eq!(
                object.get(field.name()).and_then(|v| v.as_str()),
                Some(form.value(field)),
                "{}",
                field
            );
        }
        assert_eq!(object.len(), FormField::ALL.len() + 2);
    }

    #[test]
    fn test_conditions_and_language_preference() {
        let mut form = FormState::new();
        form.set_condition(ConditionTag::Asthma, true);
        form.set_condition(ConditionTag::Diabetes, true);
        let record = IntakeRecord::from_form(&form, Language::Spanish);

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["conditions"], serde_json::json!(["diabetes", "asthma"]));
        assert_eq!(json["language_preference"], "es");
    }

    #[test]
    fn test_blank_optional_fields_sent_as_empty_strings() {
        let record = IntakeRecord::from_form(&FormState::new(), Language::English);
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["medications"], "");
        assert_eq!(json["conditions"], serde_json::json!([]));
    }

    #[test]
    fn test_email_sent_without_surrounding_whitespace() {
        let mut form = FormState::new();
        ENGLISH_DEMO.fill(&mut form);
        form.set(FormField::Email, " jane@x.com ");
        form.set(FormField::Address, " 1 Elm St ");
        assert!(form.validate().is_empty());

        let record = IntakeRecord::from_form(&form, Language::English);
        let json = serde_json::to_value(&record).expect("serialize");

        assert_eq!(json["email"], "jane@x.com");
        assert_eq!(json["address"], " 1 Elm St ");
    }

    #[test]
    fn test_record_is_independent_of_later_form_edits() {
        let mut form = FormState::new();
        form.set(FormField::FirstName, "Jane");
        let record = IntakeRecord::from_form(&form, Language::English);

        form.set(FormField::FirstName, "Janet");
        assert_eq!(record.first_name, "Jane");
    }
}
