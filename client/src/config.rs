//! Client Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL without a trailing slash (e.g., `https://api.example.com`)
    pub api_base_url: String,

    /// Transport timeout for every request (default: 10 seconds)
    pub http_timeout: Duration,

    /// File holding the persisted session (`authToken` and `user` keys)
    pub session_file: PathBuf,

    /// Path of the verification approve/reject endpoint. The backend has not
    /// published one, so it stays unset unless an operator provides it.
    pub verification_update_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base = env::var("DASH_API_BASE_URL").context("DASH_API_BASE_URL must be set")?;

        Ok(Self {
            api_base_url: normalize_base_url(&base)?,
            http_timeout: Duration::from_secs(
                env::var("DASH_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            session_file: env::var("DASH_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
            verification_update_path: env::var("DASH_VERIFICATION_UPDATE_PATH")
                .ok()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .map(|p| if p.starts_with('/') { p } else { format!("/{p}") }),
        })
    }

    /// Point the configuration at another backend.
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.api_base_url = normalize_base_url(base)?;
        Ok(self)
    }

    /// Check if the verification update endpoint is configured.
    #[must_use]
    pub const fn has_verification_update(&self) -> bool {
        self.verification_update_path.is_some()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".into(),
            http_timeout: Duration::from_secs(5),
            session_file: env::temp_dir().join("dash-admin-test").join("session.json"),
            verification_update_path: None,
        }
    }
}

fn normalize_base_url(base: &str) -> Result<String> {
    let trimmed = base.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {base}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("API base URL must be http or https, got {}", url.scheme());
    }
    Ok(trimmed.to_string())
}

fn default_session_file() -> PathBuf {
    env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".dash-admin")
        .join("session.json")
}
