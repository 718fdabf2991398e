//! VAID triage inference pipeline.
//!
//! Collects patient-reported symptoms and vitals and produces a structured
//! clinical triage recommendation (condition, risk tier, action). The
//! pipeline runs deterministic emergency pre-checks before any model call,
//! builds a strict-format prompt for a hosted language model, and parses the
//! freeform reply into typed fields with safe fallbacks. Page rendering,
//! HTTP routing, and process startup belong to the embedding host.
//!
//! Typical host wiring:
//!
//! ```no_run
//! use vaid::config::TriageConfig;
//! use vaid::triage::{GroqClient, TriagePipeline, TriageRequest};
//!
//! let config = TriageConfig::from_env().expect("configuration");
//! let pipeline = TriagePipeline::new(Box::new(GroqClient::new(&config)), &config.model);
//!
//! let request: TriageRequest = serde_json::from_str(
//!     r#"{"language":"english","symptoms":["Fever","Cough"],"height":"170","weight":"70"}"#,
//! )
//! .unwrap();
//! match pipeline.analyze(&request) {
//!     Ok(result) => println!("{}", serde_json::to_string(&result).unwrap()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod config;
pub mod triage;

pub use config::{ConfigError, TriageConfig};
pub use triage::{
    EmergencyOverride, GroqClient, InferenceClient, InferenceError, MockInferenceClient,
    PatientInput, RiskLevel, TriageError, TriagePipeline, TriageRequest, TriageResult,
};
