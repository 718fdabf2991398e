//! Deterministic emergency override, evaluated before any inference call.
//!
//! Emergency classification must never depend on network latency or model
//! availability, so these rules run first and short-circuit the pipeline.
//! Rules match on canonical symptom codes; localized labels were already
//! mapped during validation.

use std::collections::BTreeSet;

use super::symptoms::Symptom;
use super::types::{Language, RiskLevel, TriageResult};

/// One override rule: every symptom in `required` present → fixed outcome.
struct OverrideRule {
    name: &'static str,
    required: &'static [Symptom],
    risk: RiskLevel,
    condition_en: &'static str,
    condition_hi: &'static str,
    action_en: &'static str,
    action_hi: &'static str,
}

impl OverrideRule {
    fn matches(&self, symptoms: &BTreeSet<Symptom>) -> bool {
        self.required.iter().all(|code| symptoms.contains(code))
    }

    fn outcome(&self, language: Language) -> TriageResult {
        match language {
            Language::English => TriageResult {
                condition: self.condition_en.to_string(),
                risk: self.risk,
                action: self.action_en.to_string(),
            },
            Language::Hindi => TriageResult {
                condition: self.condition_hi.to_string(),
                risk: self.risk,
                action: self.action_hi.to_string(),
            },
        }
    }
}

/// Rules in priority order; the first match wins. New rules are added here,
/// never in the orchestrator.
const OVERRIDE_RULES: &[OverrideRule] = &[OverrideRule {
    name: "cardiac_chest_pain_sweating",
    required: &[Symptom::ChestPain, Symptom::Sweating],
    risk: RiskLevel::Emergency,
    condition_en: "Possible cardiac emergency (heart attack warning signs)",
    condition_hi: "संभावित हृदय आपातकाल (हार्ट अटैक के चेतावनी संकेत)",
    action_en: "Call emergency services or go to the nearest emergency department immediately. Do not wait.",
    action_hi: "तुरंत आपातकालीन सेवाओं को कॉल करें या नजदीकी आपातकालीन विभाग जाएं। प्रतीक्षा न करें।",
}];

/// Evaluates the override rule table against a canonical symptom set.
pub struct EmergencyOverride;

impl EmergencyOverride {
    /// Walk the table in declared order and return the first matching rule's
    /// fixed, localized outcome. `None` means proceed to inference.
    pub fn evaluate(symptoms: &BTreeSet<Symptom>, language: Language) -> Option<TriageResult> {
        let rule = OVERRIDE_RULES.iter().find(|rule| rule.matches(symptoms))?;
        tracing::info!(rule = rule.name, "emergency override fired");
        Some(rule.outcome(language))
    }
}
