//! Submission workflow: the pure halves of the submit button.
//!
//! `prepare` maps (form, language) to either a request payload or the
//! validation failures; `display_outcome` maps (response, language) to what
//! the page should show. `Page` wires the two around the network call.

use crate::client::{SubmissionResult, SubmitError};
use crate::form::{FormState, ValidationError};
use crate::i18n::Language;
use crate::intake::IntakeRecord;
use crate::result_view::ResultView;
use std::fmt;
use thiserror::Error;

/// `Idle → Validating → (Invalid | Submitting) → (Success | Error) → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Error,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Invalid => "invalid",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Error => "error",
        };
        f.write_str(name)
    }
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeginError {
    #[error("a submission is already in flight")]
    Busy,

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Validate the form and, if it passes, snapshot it into a payload.
pub fn prepare(form: &FormState, language: Language) -> Result<IntakeRecord, Vec<ValidationError>> {
    let errors = form.validate();
    if errors.is_empty() {
        Ok(IntakeRecord::from_form(form, language))
    } else {
        Err(errors)
    }
}

/// What the page shows once a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeDisplay {
    /// Clear the form, show `message`, open `view`.
    Accepted { message: String, view: ResultView },

    /// Keep the form as entered, show `message`.
    Failed { message: &'static str },
}

impl OutcomeDisplay {
    pub fn state(&self) -> SubmissionState {
        match self {
            OutcomeDisplay::Accepted { .. } => SubmissionState::Success,
            OutcomeDisplay::Failed { .. } => SubmissionState::Error,
        }
    }
}

/// Map a settled request to its display model.
///
/// Connectivity failures get their own message; every server-reported
/// failure shows the generic error.
pub fn display_outcome(
    outcome: Result<SubmissionResult, SubmitError>,
    language: Language,
) -> OutcomeDisplay {
    let strings = language.strings();

    match outcome {
        Ok(result) => OutcomeDisplay::Accepted {
            message: format!(
                "{}{}{}",
                result.message, result.timestamp, strings.success_suffix
            ),
            view: ResultView::new(result.bundle, result.patient_id),
        },
        Err(e) if e.is_connectivity() => OutcomeDisplay::Failed {
            message: strings.msg_connect_error,
        },
        Err(_) => OutcomeDisplay::Failed {
            message: strings.msg_error,
        },
    }
}
