//! The result panel shown after a successful submission.

use crate::bundle::FhirBundle;
use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Localized, display-ready content of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub title: &'static str,
    pub close_label: &'static str,
    pub patient_id_label: &'static str,
    pub patient_id: String,
    pub resources_label: &'static str,
    pub resource_count: usize,
    /// Distinct resource types, joined with ", "
    pub resource_types: String,
    pub view_json_label: &'static str,
    pub download_label: &'static str,
}

impl ResultSummary {
    /// The "Resources Created" value, e.g. `5 (Patient, Encounter, Coverage)`.
    pub fn resources_text(&self) -> String {
        format!("{} ({})", self.resource_count, self.resource_types)
    }
}

/// A returned bundle plus the raw-JSON toggle state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    bundle: FhirBundle,
    patient_id: String,
    json_visible: bool,
}

impl ResultView {
    pub fn new(bundle: FhirBundle, patient_id: impl Into<String>) -> Self {
        Self {
            bundle,
            patient_id: patient_id.into(),
            json_visible: false,
        }
    }

    pub fn bundle(&self) -> &FhirBundle {
        &self.bundle
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn summary(&self, language: Language) -> ResultSummary {
        let strings = language.strings();

        ResultSummary {
            title: strings.panel_title,
            close_label: strings.panel_close,
            patient_id_label: strings.panel_patient_id,
            patient_id: self.patient_id.clone(),
            resources_label: strings.panel_resources,
            resource_count: self.bundle.len(),
            resource_types: self.bundle.distinct_resource_types().join(", "),
            view_json_label: strings.panel_view_json,
            download_label: strings.panel_download,
        }
    }

    /// Show or hide the raw JSON. Returns the new visibility.
    pub fn toggle_json(&mut self) -> bool {
        self.json_visible = !self.json_visible;
        self.json_visible
    }

    pub fn is_json_visible(&self) -> bool {
        self.json_visible
    }

    /// Pretty-printed bundle, only while the JSON view is open.
    pub fn json_view(&self) -> Result<Option<String>> {
        if self.json_visible {
            self.pretty_json().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.bundle).context("Failed to serialize FHIR bundle")
    }

    /// `fhir-bundle-<patient_id>.json`, with anything that could escape the
    /// download directory replaced by `_`.
    pub fn file_name(&self) -> String {
        let safe_id: String = self
            .patient_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("fhir-bundle-{}.json", safe_id)
    }

    /// Save the pretty-printed bundle into `dir` and return the file path.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let json = self.pretty_json()?;

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write bundle to {}", path.display()))?;

        info!("Saved FHIR bundle for {} to {}", self.patient_id, path.display());
        Ok(path)
    }
}
