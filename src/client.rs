use crate::bundle::FhirBundle;
use crate::config::Config;
use crate::intake::IntakeRecord;
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Raw body of a submit response.
#[derive(Debug, Clone, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    patient_id: Option<String>,
    #[serde(default)]
    fhir_bundle: Option<FhirBundle>,
}

/// An intake the service accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub message: String,
    pub timestamp: String,
    pub patient_id: String,
    pub bundle: FhirBundle,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Ways a submission can fail once it has passed local validation.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never completed: refused connection, DNS, TLS, ...
    #[error("cannot reach intake service: {0}")]
    Connectivity(#[source] reqwest::Error),

    #[error("intake service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to read intake response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse intake response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered but reported `success: false`.
    #[error("intake rejected: {message}")]
    Rejected { message: String },

    #[error("intake response is missing {0}")]
    Incomplete(&'static str),
}

impl SubmitError {
    /// Whether the failure happened before any response arrived.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, SubmitError::Connectivity(_))
    }
}

/// HTTP client for the intake service.
///
/// No timeout is configured: a request that never settles stays pending.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    http: reqwest::Client,
    submit_url: Url,
}

impl IntakeClient {
    pub fn new(submit_url: &str) -> Result<Self> {
        let submit_url = Url::parse(submit_url)
            .with_context(|| format!("Invalid intake endpoint URL: {}", submit_url))?;

        Ok(Self {
            http: reqwest::Client::new(),
            submit_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url)
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }

    /// Health endpoint, a sibling of the submit endpoint.
    pub fn health_url(&self) -> Result<Url> {
        self.submit_url
            .join("health")
            .context("Failed to derive health endpoint URL")
    }

    /// POST the record once and decode the service's answer.
    pub async fn submit(&self, record: &IntakeRecord) -> Result<SubmissionResult, SubmitError> {
        info!(
            "Submitting intake to {} ({} conditions, language {})",
            self.submit_url,
            record.conditions.len(),
            record.language_preference
        );

        let response = self
            .http
            .post(self.submit_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(record)
            .send()
            .await
            .map_err(SubmitError::Connectivity)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Intake service error ({}): {}", status, body);
            return Err(SubmitError::Status { status, body });
        }

        let body = response.text().await.map_err(SubmitError::Body)?;
        let parsed: SubmitResponse = serde_json::from_str(&body)?;
        debug!("Intake response decoded (success={})", parsed.success);

        if !parsed.success {
            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Server error".to_string());
            return Err(SubmitError::Rejected { message });
        }

        let patient_id = parsed
            .patient_id
            .ok_or(SubmitError::Incomplete("patient_id"))?;
        let bundle = parsed
            .fhir_bundle
            .ok_or(SubmitError::Incomplete("fhir_bundle"))?;

        Ok(SubmissionResult {
            message: parsed.message.unwrap_or_default(),
            timestamp: parsed.timestamp.unwrap_or_default(),
            patient_id,
            bundle,
        })
    }

    /// Ask the service whether it is up.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.health_url()?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send health check request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Health check failed ({}): {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse health check response")
    }
}
