use anyhow::{Context, Result};
use std::path::PathBuf;

/// Production intake endpoint.
pub const DEFAULT_API_URL: &str = "https://app-holy-flower-295-production.up.railway.app/submit";

#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint the intake record is POSTed to
    pub api_url: String,

    /// Directory bundle downloads are written into
    pub download_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("INTAKE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        reqwest::Url::parse(&api_url)
            .with_context(|| format!("INTAKE_API_URL is not a valid URL: {}", api_url))?;

        Ok(Self {
            api_url,
            download_dir: std::env::var("INTAKE_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            download_dir: PathBuf::from("."),
        }
    }
}
