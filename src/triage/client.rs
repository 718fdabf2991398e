//! Inference client boundary.
//!
//! The pipeline talks to the hosted model through the [`InferenceClient`]
//! trait: one blocking attempt per request, bounded by the configured
//! timeout, every failure mapped to a typed [`InferenceError`]. The real
//! implementation targets the Groq OpenAI-compatible chat completions API;
//! [`MockInferenceClient`] stands in for tests.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TriageConfig;

/// Failure modes of a single inference attempt.
///
/// Display strings are safe to log server-side; none of them carries the
/// credential.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("authentication with the inference service failed")]
    Auth,

    #[error("inference service rate limit exceeded")]
    RateLimited,

    #[error("inference request failed: {0}")]
    Network(String),

    #[error("inference request timed out after {0}s")]
    Timeout(u64),
}

/// Single-attempt, bounded-timeout access to the hosted reasoning model.
///
/// Implementations are stateless beyond credential configuration, so one
/// instance is safely shared across concurrent requests.
pub trait InferenceClient: Send + Sync {
    /// Send one prompt and block until the reply or a failure arrives.
    fn infer(&self, prompt: &str, model: &str) -> Result<String, InferenceError>;
}

/// HTTP client for the Groq chat completions endpoint.
pub struct GroqClient {
    base_url: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl GroqClient {
    /// Build a client from process-wide configuration. The request timeout
    /// is baked into the underlying HTTP client so a hung call cannot block
    /// a worker indefinitely.
    pub fn new(config: &TriageConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(crate::config::user_agent())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for POST {base_url}/chat/completions
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl InferenceClient for GroqClient {
    fn infer(&self, prompt: &str, model: &str) -> Result<String, InferenceError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    InferenceError::Network("could not connect to the inference service".into())
                } else {
                    InferenceError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(InferenceError::Auth),
            429 => return Err(InferenceError::RateLimited),
            _ if !status.is_success() => {
                return Err(InferenceError::Network(format!(
                    "inference service returned status {status}"
                )))
            }
            _ => {}
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| InferenceError::Network(format!("malformed inference response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| InferenceError::Network("inference response contained no choices".into()))
    }
}

/// Mock inference client for tests — canned reply or canned failure.
///
/// Clones share the prompt log, so a test can hand one clone to the pipeline
/// and assert on the other (e.g. that the override path made zero calls).
#[derive(Clone)]
pub struct MockInferenceClient {
    reply: Result<String, InferenceError>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockInferenceClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: InferenceError) -> Self {
        Self {
            reply: Err(error),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of inference calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|log| log.len()).unwrap_or(0)
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl InferenceClient for MockInferenceClient {
    fn infer(&self, prompt: &str, _model: &str) -> Result<String, InferenceError> {
        if let Ok(mut log) = self.prompts.lock() {
            log.push(prompt.to_string());
        }
        self.reply.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_reply() {
        let client = MockInferenceClient::new("CONDITION: Flu\nRISK: Low\nACTION: Rest");
        let reply = client.infer("prompt", "model").unwrap();
        assert!(reply.contains("Flu"));
    }

    #[test]
    fn mock_records_prompts() {
        let client = MockInferenceClient::new("ok");
        assert_eq!(client.call_count(), 0);
        client.infer("first", "model").unwrap();
        client.infer("second", "model").unwrap();
        assert_eq!(client.call_count(), 2);
        assert_eq!(client.prompts(), vec!["first", "second"]);
    }

    #[test]
    fn mock_clones_share_the_prompt_log() {
        let client = MockInferenceClient::new("ok");
        let handle = client.clone();
        client.infer("from original", "model").unwrap();
        assert_eq!(handle.call_count(), 1);
    }

    #[test]
    fn mock_failure_propagates_typed_error() {
        let client = MockInferenceClient::failing(InferenceError::Timeout(30));
        let err = client.infer("prompt", "model").unwrap_err();
        assert_eq!(err, InferenceError::Timeout(30));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn groq_client_trims_trailing_slash() {
        let config = TriageConfig::new("model", "key", "https://api.groq.com/openai/v1/", 30);
        let client = GroqClient::new(&config);
        assert_eq!(client.base_url(), "https://api.groq.com/openai/v1");
    }

    #[test]
    fn request_body_serializes_to_wire_shape() {
        let body = ChatCompletionRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_body_deserializes_reply_text() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"CONDITION: Flu"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.choices[0].message.content, "CONDITION: Flu");
    }

    #[test]
    fn error_display_never_leaks_credentials() {
        for err in [
            InferenceError::Auth,
            InferenceError::RateLimited,
            InferenceError::Network("status 500".into()),
            InferenceError::Timeout(30),
        ] {
            let text = err.to_string();
            assert!(!text.contains("key"), "suspicious display: {text}");
            assert!(!text.is_empty());
        }
    }
}
