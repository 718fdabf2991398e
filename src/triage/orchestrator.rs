//! Pipeline orchestration: validate → BMI → override → prompt → inference →
//! parse. One typed result per request, no retries, no partial results.

use uuid::Uuid;

use super::client::InferenceClient;
use super::emergency::EmergencyOverride;
use super::input::TriageRequest;
use super::parser::parse_triage_reply;
use super::prompt::build_triage_prompt;
use super::types::{DerivedMetrics, TriageResult};
use super::TriageError;

/// Sequences the triage pipeline. Constructed once at host startup with an
/// injected inference client and a model id; stateless across requests.
pub struct TriagePipeline {
    client: Box<dyn InferenceClient>,
    model: String,
}

impl TriagePipeline {
    pub fn new(client: Box<dyn InferenceClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    /// Run one request through the full pipeline.
    ///
    /// Hard boundaries, in order: validation failures reject the request
    /// before anything else runs; a matching emergency override returns its
    /// fixed result without any inference call; an inference failure returns
    /// a typed error and never a partial result; parse fallbacks are not
    /// errors and stay invisible to the caller.
    pub fn analyze(&self, request: &TriageRequest) -> Result<TriageResult, TriageError> {
        let request_id = Uuid::new_v4();

        let input = request.validate()?;
        let metrics = DerivedMetrics::from_input(&input);
        tracing::info!(
            request_id = %request_id,
            symptoms = input.symptoms.len(),
            bmi = metrics.bmi,
            "triage request accepted"
        );

        if let Some(result) = EmergencyOverride::evaluate(&input.symptoms, input.language) {
            tracing::info!(
                request_id = %request_id,
                risk = ?result.risk,
                "override result returned without inference"
            );
            return Ok(result);
        }

        let prompt = build_triage_prompt(&input, &metrics);
        let reply = self.client.infer(&prompt, &self.model).map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "inference call failed");
            TriageError::Inference(e)
        })?;

        let result = parse_triage_reply(&reply);
        tracing::info!(request_id = %request_id, risk = ?result.risk, "triage completed");
        Ok(result)
    }
}
