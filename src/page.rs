//! Render state of the intake page.
//!
//! `Page` owns everything the browser kept in the DOM: the current
//! language, the form, the message area, the submit control and the
//! optional result panel. All operations take `&mut self`, so they run on
//! one logical UI thread; the only await point is the HTTP request inside
//! `submit`, which can also be driven in two halves (`begin_submission` and
//! `finish_submission`) so other operations may run while it is pending.

use crate::client::{IntakeClient, SubmissionResult, SubmitError};
use crate::demo::DemoRecord;
use crate::form::{ConditionTag, FormField, FormState};
use crate::i18n::{Language, PLACEHOLDER_KEYS, TEXT_KEYS};
use crate::intake::IntakeRecord;
use crate::notice::{Notice, DEMO_NOTICE_TTL};
use crate::result_view::{ResultSummary, ResultView};
use crate::submission::{self, BeginError, OutcomeDisplay, SubmissionState};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// A labeled element and the text it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub key: &'static str,
    pub text: &'static str,
}

/// Everything visible on the page for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// `lang` attribute of the document
    pub document_lang: &'static str,
    pub labels: Vec<RenderedText>,
    pub placeholders: Vec<RenderedText>,
    pub toggle_label: &'static str,
    /// `lang` attribute of the toggle label (the language it switches to)
    pub toggle_lang: &'static str,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub notice: Option<Notice>,
    pub invalid_fields: Vec<FormField>,
    pub result: Option<ResultSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    language: Language,
    form: FormState,
    notice: Option<Notice>,
    state: SubmissionState,
    result: Option<ResultView>,
}

fn render_keys(language: Language, keys: &[&'static str]) -> Vec<RenderedText> {
    let strings = language.strings();
    keys.iter()
        .filter_map(|&key| strings.lookup(key).map(|text| RenderedText { key, text }))
        .collect()
}

impl Page {
    /// A freshly loaded page: default language, empty form, nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn render(&self) -> PageView {
        let strings = self.language.strings();
        let other = self.language.toggled();

        PageView {
            document_lang: self.language.code(),
            labels: render_keys(self.language, TEXT_KEYS),
            placeholders: render_keys(self.language, PLACEHOLDER_KEYS),
            toggle_label: strings.toggle_label,
            toggle_lang: other.code(),
            submit_label: if self.is_submitting() {
                strings.loading
            } else {
                strings.btn_submit
            },
            submit_disabled: self.is_submitting(),
            notice: self.notice.clone(),
            invalid_fields: self.form.invalid_fields(),
            result: self.result.as_ref().map(|r| r.summary(self.language)),
        }
    }

    // ==================== Locale Switcher ====================

    /// Switch to the other language. Labels follow on the next `render`.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        info!("Language switched to {}", self.language);
        self.language
    }

    // ==================== Form Editing ====================

    /// Type into a field. Clears the field's invalid marker.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_condition(&mut self, tag: ConditionTag, checked: bool) {
        self.form.set_condition(tag, checked);
    }

    // ==================== Demo-Data Loader ====================

    /// Fill the form with the current language's demo record.
    pub fn load_demo(&mut self, now: Instant) {
        DemoRecord::for_language(self.language).fill(&mut self.form);
        self.notice = Some(
            Notice::success(self.language.strings().demo_loaded).expiring(now, DEMO_NOTICE_TTL),
        );
        info!("Demo data loaded ({})", self.language);
    }

    /// Hide the message if its display time has run out.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            debug!("Notice dismissed");
            self.notice = None;
        }
    }

    // ==================== Submission Controller ====================

    /// Validate and, if valid, lock the submit control and hand back the
    /// payload to send.
    pub fn begin_submission(&mut self) -> Result<IntakeRecord, BeginError> {
        if self.is_submitting() {
            return Err(BeginError::Busy);
        }

        self.state = SubmissionState::Validating;
        self.notice = None;
        self.form.clear_invalid();

        match submission::prepare(&self.form, self.language) {
            Ok(record) => {
                self.state = SubmissionState::Submitting;
                debug!("Submission state: {}", self.state);
                Ok(record)
            }
            Err(errors) => {
                self.state = SubmissionState::Invalid;
                self.form.mark_invalid(&errors);
                self.notice = Some(Notice::error(self.language.strings().msg_error));
                warn!(
                    "Intake form invalid: {}",
                    errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                self.state = SubmissionState::Idle;
                Err(BeginError::Invalid(errors))
            }
        }
    }

    /// Apply a settled request. Always unlocks the submit control.
    pub fn finish_submission(
        &mut self,
        outcome: Result<SubmissionResult, SubmitError>,
    ) -> SubmissionState {
        if let Err(e) = &outcome {
            warn!("Submission failed: {}", e);
        }

        let display = submission::display_outcome(outcome, self.language);
        let settled = display.state();
        self.state = settled;

        match display {
            OutcomeDisplay::Accepted { message, view } => {
                info!("Submission accepted for patient {}", view.patient_id());
                self.form.reset();
                self.notice = Some(Notice::success(message));
                self.show_result(view);
            }
            OutcomeDisplay::Failed { message } => {
                self.notice = Some(Notice::error(message));
            }
        }

        self.state = SubmissionState::Idle;
        settled
    }

    /// Validate, send and apply the result in one go.
    pub async fn submit(&mut self, client: &IntakeClient) -> Result<SubmissionState, BeginError> {
        let record = self.begin_submission()?;
        let outcome = client.submit(&record).await;
        Ok(self.finish_submission(outcome))
    }

    // ==================== Result Renderer ====================

    /// Open a result panel, replacing any panel already open.
    pub fn show_result(&mut self, view: ResultView) {
        if self.result.replace(view).is_some() {
            debug!("Replaced previous result panel");
        }
    }

    pub fn close_result(&mut self) {
        self.result = None;
    }

    /// Toggle the raw JSON view. `None` when no panel is open.
    pub fn toggle_result_json(&mut self) -> Option<bool> {
        self.result.as_mut().map(ResultView::toggle_json)
    }

    pub fn download_result(&self, dir: &Path) -> Result<PathBuf> {
        self.result
            .as_ref()
            .context("No FHIR bundle to download")?
            .download(dir)
    }
}
