//! The triage inference pipeline: deterministic pre-checks, prompt
//! construction, a bounded external inference call, and reply parsing with
//! safe fallbacks.

pub mod client;
pub mod emergency;
pub mod input;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod symptoms;
pub mod types;

pub use client::*;
pub use emergency::*;
pub use input::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use symptoms::*;
pub use types::*;

use serde::Serialize;
use thiserror::Error;

/// Pipeline-level error taxonomy.
///
/// Validation failures are caller errors and name the offending field;
/// inference failures are upstream errors whose display is deliberately
/// generic — the detail stays on the source chain for server logs.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("invalid value for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("triage service is temporarily unavailable")]
    Inference(#[from] client::InferenceError),
}

impl TriageError {
    /// Lets the host pick a rejected-request vs upstream-failure status.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Serializable failure body for the host boundary.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&TriageError> for ErrorResponse {
    fn from(err: &TriageError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = TriageError::Validation {
            field: "height",
            reason: "must be a number",
        };
        assert!(err.is_validation());
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn inference_error_display_is_generic() {
        let err = TriageError::from(client::InferenceError::Auth);
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "triage service is temporarily unavailable");
    }

    #[test]
    fn inference_error_keeps_detail_on_source_chain() {
        use std::error::Error as _;
        let err = TriageError::from(client::InferenceError::Timeout(30));
        let source = err.source().expect("source");
        assert!(source.to_string().contains("timed out"));
    }

    #[test]
    fn error_response_serializes() {
        let err = TriageError::Validation {
            field: "pain",
            reason: "must be a whole number between 1 and 10",
        };
        let body = ErrorResponse::from(&err);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("pain"));
    }
}
