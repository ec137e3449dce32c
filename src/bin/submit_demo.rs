//! Submit the demo patient once and save the returned FHIR bundle.
//!
//! Usage:
//!   cargo run --bin submit-demo          # English demo record
//!   cargo run --bin submit-demo -- es    # Spanish demo record
//!
//! Optional environment variables:
//! - INTAKE_API_URL (defaults to the production endpoint)
//! - INTAKE_DOWNLOAD_DIR (defaults to the current directory)

use anyhow::{bail, Result};
use patient_intake::client::IntakeClient;
use patient_intake::config::Config;
use patient_intake::i18n::Language;
use patient_intake::page::Page;
use patient_intake::submission::SubmissionState;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient_intake=info".parse()?)
                .add_directive("submit_demo=info".parse()?),
        )
        .init();

    let language = match std::env::args().nth(1) {
        Some(code) => Language::from_code(&code)?,
        None => Language::default(),
    };

    let config = Config::from_env()?;
    let client = IntakeClient::from_config(&config)?;

    let mut page = Page::new();
    if page.language() != language {
        page.toggle_language();
    }
    page.load_demo(Instant::now());

    info!("Submitting {} demo record to {}", language.name(), client.submit_url());
    let state = page.submit(&client).await?;

    let message = page.notice().map(|n| n.text.clone()).unwrap_or_default();
    if state != SubmissionState::Success {
        bail!("Submission failed: {}", message);
    }
    println!("{}", message);

    if let Some(summary) = page.render().result {
        println!("{}: {}", summary.patient_id_label, summary.patient_id);
        println!("{}: {}", summary.resources_label, summary.resources_text());
    }

    let path = page.download_result(&config.download_dir)?;
    println!("Saved {}", path.display());

    Ok(())
}
