//! Fixed sample patients for manual testing, one per language.

use crate::form::{ConditionTag, FormField, FormState};
use crate::i18n::Language;

/// A complete sample intake, as it would be typed into the form.
#[derive(Debug, Clone)]
pub struct DemoRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub dob: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub emergency_contact: &'static str,
    pub insurance_provider: &'static str,
    pub policy_number: &'static str,
    pub reason_for_visit: &'static str,
    pub medications: &'static str,
    pub allergies: &'static str,
    pub conditions: &'static [ConditionTag],
}

pub const ENGLISH_DEMO: DemoRecord = DemoRecord {
    first_name: "Jane",
    last_name: "Doe",
    dob: "1985-06-15",
    phone: "(555) 123-4567",
    email: "jane.doe@example.com",
    address: "123 Main Street, Springfield, IL 62701",
    emergency_contact: "John Doe (555) 987-6543",
    insurance_provider: "Blue Cross Blue Shield",
    policy_number: "BC-789456",
    reason_for_visit: "Annual checkup and recent fatigue concerns",
    medications: "Metformin 500mg twice daily, Lisinopril 10mg once daily",
    allergies: "Penicillin, shellfish",
    conditions: &[ConditionTag::Diabetes, ConditionTag::Hypertension],
};

pub const SPANISH_DEMO: DemoRecord = DemoRecord {
    first_name: "Juan",
    last_name: "Pérez",
    dob: "1985-06-15",
    phone: "(555) 123-4567",
    email: "juan.perez@ejemplo.com",
    address: "Calle Principal 123, Springfield, IL 62701",
    emergency_contact: "María Pérez (555) 987-6543",
    insurance_provider: "Blue Cross Blue Shield",
    policy_number: "BC-789456",
    reason_for_visit: "Chequeo anual y preocupaciones sobre fatiga reciente",
    medications: "Metformina 500mg dos veces al día, Lisinopril 10mg una vez al día",
    allergies: "Penicilina, mariscos",
    conditions: &[ConditionTag::Diabetes, ConditionTag::Hypertension],
};

impl DemoRecord {
    /// Demo record for the given page language.
    pub fn for_language(language: Language) -> &'static DemoRecord {
        match language {
            Language::English => &ENGLISH_DEMO,
            Language::Spanish => &SPANISH_DEMO,
        }
    }

    pub fn value(&self, field: FormField) -> &'static str {
        match field {
            FormField::FirstName => self.first_name,
            FormField::LastName => self.last_name,
            FormField::Dob => self.dob,
            FormField::Phone => self.phone,
            FormField::Email => self.email,
            FormField::Address => self.address,
            FormField::EmergencyContact => self.emergency_contact,
            FormField::InsuranceProvider => self.insurance_provider,
            FormField::PolicyNumber => self.policy_number,
            FormField::ReasonForVisit => self.reason_for_visit,
            FormField::Medications => self.medications,
            FormField::Allergies => self.allergies,
        }
    }

    /// Overwrite every field, check exactly this record's conditions and
    /// drop any invalid markers.
    pub fn fill(&self, form: &mut FormState) {
        for field in FormField::ALL {
            form.set(field, self.value(field));
        }
        form.check_only(self.conditions);
        form.clear_invalid();
    }
}
