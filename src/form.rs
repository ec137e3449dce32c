//! Form model: the named intake fields, condition checkboxes, and the
//! required/format checks a browser would run before submitting.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Native input type of a field, which decides its format constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Tel,
    TextArea,
}

/// Every field on the intake form, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Dob,
    Phone,
    Email,
    Address,
    EmergencyContact,
    InsuranceProvider,
    PolicyNumber,
    ReasonForVisit,
    Medications,
    Allergies,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Dob,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
        FormField::EmergencyContact,
        FormField::InsuranceProvider,
        FormField::PolicyNumber,
        FormField::ReasonForVisit,
        FormField::Medications,
        FormField::Allergies,
    ];

    /// Field name as submitted in the intake payload.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Dob => "dob",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Address => "address",
            FormField::EmergencyContact => "emergency_contact",
            FormField::InsuranceProvider => "insurance_provider",
            FormField::PolicyNumber => "policy_number",
            FormField::ReasonForVisit => "reason_for_visit",
            FormField::Medications => "medications",
            FormField::Allergies => "allergies",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// UI key of the field's label.
    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::FirstName => "lbl_fname",
            FormField::LastName => "lbl_lname",
            FormField::Dob => "lbl_dob",
            FormField::Phone => "lbl_phone",
            FormField::Email => "lbl_email",
            FormField::Address => "lbl_address",
            FormField::EmergencyContact => "lbl_emergency",
            FormField::InsuranceProvider => "lbl_provider",
            FormField::PolicyNumber => "lbl_policy",
            FormField::ReasonForVisit => "lbl_reason",
            FormField::Medications => "lbl_meds",
            FormField::Allergies => "lbl_allergies",
        }
    }

    /// UI key of the field's placeholder, if it has one.
    pub fn placeholder_key(&self) -> Option<&'static str> {
        match self {
            FormField::FirstName => Some("ph_fname"),
            FormField::LastName => Some("ph_lname"),
            FormField::PolicyNumber => Some("ph_policy"),
            FormField::ReasonForVisit => Some("ph_reason"),
            FormField::Medications => Some("ph_meds"),
            FormField::Allergies => Some("ph_allergies"),
            _ => None,
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            FormField::Dob => InputKind::Date,
            FormField::Phone => InputKind::Tel,
            FormField::Email => InputKind::Email,
            FormField::ReasonForVisit | FormField::Medications | FormField::Allergies => {
                InputKind::TextArea
            }
            _ => InputKind::Text,
        }
    }

    /// Medications and allergies are optional; everything else is mandatory.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Medications | FormField::Allergies)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Health-condition checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionTag {
    Diabetes,
    Hypertension,
    Asthma,
}

impl ConditionTag {
    pub const ALL: [ConditionTag; 3] = [
        ConditionTag::Diabetes,
        ConditionTag::Hypertension,
        ConditionTag::Asthma,
    ];

    /// Checkbox value, as submitted in `conditions`.
    pub fn value(&self) -> &'static str {
        match self {
            ConditionTag::Diabetes => "diabetes",
            ConditionTag::Hypertension => "hypertension",
            ConditionTag::Asthma => "asthma",
        }
    }

    pub fn from_value(value: &str) -> Option<ConditionTag> {
        Self::ALL.into_iter().find(|tag| tag.value() == value)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ConditionTag::Diabetes => "chk_diabetes",
            ConditionTag::Hypertension => "chk_hyp",
            ConditionTag::Asthma => "chk_asthma",
        }
    }
}

impl fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(FormField),

    #[error("{0} is malformed")]
    Malformed(FormField),
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Missing(field) | ValidationError::Malformed(field) => *field,
        }
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Same shape rule browsers apply to `<input type="email">`.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is valid")
    })
}

/// Check one field value against its required flag and input kind.
pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return if field.is_required() {
            Err(ValidationError::Missing(field))
        } else {
            Ok(())
        };
    }

    let well_formed = match field.kind() {
        InputKind::Email => email_regex().is_match(value),
        InputKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        InputKind::Text | InputKind::Tel | InputKind::TextArea => true,
    };

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::Malformed(field))
    }
}

/// Current values of the form, its checked conditions, and which fields
/// carry the invalid marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<FormField, String>,
    conditions: BTreeSet<ConditionTag>,
    invalid: BTreeSet<FormField>,
    focused: Option<FormField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Overwrite a field. Editing a field clears its invalid marker.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.invalid.remove(&field);
    }

    pub fn set_condition(&mut self, tag: ConditionTag, checked: bool) {
        if checked {
            self.conditions.insert(tag);
        } else {
            self.conditions.remove(&tag);
        }
    }

    pub fn is_checked(&self, tag: ConditionTag) -> bool {
        self.conditions.contains(&tag)
    }

    /// Checked conditions, in checkbox order.
    pub fn checked_conditions(&self) -> Vec<ConditionTag> {
        self.conditions.iter().copied().collect()
    }

    /// Check exactly the given tags and uncheck all others.
    pub fn check_only(&mut self, tags: &[ConditionTag]) {
        self.conditions = tags.iter().copied().collect();
    }

    pub fn is_invalid(&self, field: FormField) -> bool {
        self.invalid.contains(&field)
    }

    pub fn invalid_fields(&self) -> Vec<FormField> {
        self.invalid.iter().copied().collect()
    }

    /// Drop every invalid marker along with the focus they put on the form.
    pub fn clear_invalid(&mut self) {
        self.invalid.clear();
        self.focused = None;
    }

    /// Field that received focus after the last failed validation.
    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    /// Run every field check, in page order.
    pub fn validate(&self) -> Vec<ValidationError> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, self.value(field)).err())
            .collect()
    }

    /// Flag the fields behind `errors` and move focus to the first of them.
    pub fn mark_invalid(&mut self, errors: &[ValidationError]) {
        self.invalid.extend(errors.iter().map(ValidationError::field));
        self.focused = errors.iter().map(ValidationError::field).min();
    }

    /// Back to the empty default form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
