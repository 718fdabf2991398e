//! Core triage data model: validated patient input, derived metrics, and the
//! typed result every pipeline path returns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::symptoms::Symptom;

/// Output language for the prompt and the override messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Lenient parse of the boundary value. Unrecognized input falls back to
    /// English rather than rejecting the request.
    pub fn from_request(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("hindi") {
            Self::Hindi
        } else {
            Self::English
        }
    }

    /// Human-readable name used in the system instruction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }
}

/// Patient-reported sex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

impl Sex {
    /// Lenient parse. Anything unrecognized maps to `Unknown` — sex is an
    /// optional field and never a reason to reject a request.
    pub fn from_request(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("male") || trimmed.eq_ignore_ascii_case("m") {
            Self::Male
        } else if trimmed.eq_ignore_ascii_case("female") || trimmed.eq_ignore_ascii_case("f") {
            Self::Female
        } else if trimmed.eq_ignore_ascii_case("other") {
            Self::Other
        } else {
            Self::Unknown
        }
    }

    /// Prompt rendering; `Unknown` renders as an empty value.
    pub fn prompt_value(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::Unknown => "",
        }
    }
}

/// Risk tier of a triage recommendation.
///
/// `Emergency` is reserved for the deterministic override — the model is
/// only ever asked for Low/Medium/High.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

impl RiskLevel {
    /// Normalize a raw model-provided risk string into the enum.
    ///
    /// Trims whitespace and matches the four tiers case-insensitively;
    /// anything else — empty, punctuated, multi-word — is coerced to
    /// `Medium`. Raw model text must never reach a result's risk field.
    pub fn normalize(raw: &str) -> Self {
        let cleaned = raw.trim();
        if cleaned.eq_ignore_ascii_case("low") {
            Self::Low
        } else if cleaned.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if cleaned.eq_ignore_ascii_case("high") {
            Self::High
        } else if cleaned.eq_ignore_ascii_case("emergency") {
            Self::Emergency
        } else {
            Self::Medium
        }
    }
}

/// Validated, normalized patient input. Produced only by
/// [`super::input::TriageRequest::validate`]; created per request and
/// discarded with the response.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInput {
    pub age: Option<u32>,
    pub sex: Sex,
    /// Only retained when `sex == Female`; the validator discards it otherwise.
    pub pregnant: Option<bool>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// 1–10 when present.
    pub pain_scale: Option<u8>,
    pub symptoms: BTreeSet<Symptom>,
    /// Chronic conditions, free-form.
    pub history: BTreeSet<String>,
    pub language: Language,
}

/// Metrics derived from the validated input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Body mass index rounded to one decimal; `0.0` when height or weight
    /// is absent or non-positive.
    pub bmi: f64,
}

impl DerivedMetrics {
    pub fn from_input(input: &PatientInput) -> Self {
        Self {
            bmi: bmi(input.height_cm, input.weight_kg),
        }
    }
}

/// BMI = weight_kg / (height_cm / 100)², rounded to one decimal place.
/// Defined as `0.0` whenever either operand is missing, zero, or negative.
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> f64 {
    match (height_cm, weight_kg) {
        (Some(h), Some(w)) if h > 0.0 && w > 0.0 => {
            let meters = h / 100.0;
            ((w / (meters * meters)) * 10.0).round() / 10.0
        }
        _ => 0.0,
    }
}

/// The structured triage recommendation returned to the host.
///
/// `condition` and `action` are never empty — the parser substitutes fixed
/// defaults, and the override table only carries non-empty texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageResult {
    pub condition: String,
    pub risk: RiskLevel,
    pub action: String,
}
