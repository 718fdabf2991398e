//! Process-wide configuration: model identifier, API credential, endpoint,
//! and the inference timeout. Loaded once at startup, read-only thereafter.

use thiserror::Error;

pub const APP_NAME: &str = "VAID";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent on outbound inference calls.
pub fn user_agent() -> String {
    format!("{APP_NAME}/{APP_VERSION}")
}

/// Model the original product shipped with.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Groq OpenAI-compatible endpoint.
pub const DEFAULT_INFERENCE_URL: &str = "https://api.groq.com/openai/v1";
/// Bound on a single inference call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set")]
    MissingCredential,

    #[error("VAID_TIMEOUT_SECS is not a number: {0}")]
    InvalidTimeout(String),
}

/// Triage pipeline configuration.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl TriageConfig {
    /// Fixed-value constructor for tests and embedded hosts.
    pub fn new(model: &str, api_key: &str, base_url: &str, timeout_secs: u64) -> Self {
        Self {
            model: model.to_string(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            timeout_secs,
        }
    }

    /// Load from the environment. `GROQ_API_KEY` is required; everything
    /// else falls back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| ConfigError::MissingCredential)?;
        let model = std::env::var("VAID_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("VAID_INFERENCE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string());
        let timeout_secs = match std::env::var("VAID_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            model,
            api_key,
            base_url,
            timeout_secs,
        })
    }
}
