//! Boundary request shape and the validator/normalizer that turns it into a
//! typed [`PatientInput`].
//!
//! The request arrives loosely typed — every field except `language` is an
//! optional string, exactly as a form or JSON body delivers it. Validation
//! coerces numeric strings, rejects non-numeric values naming the offending
//! field, and defaults everything missing to absent rather than failing.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::symptoms::Symptom;
use super::types::{Language, PatientInput, Sex};
use super::TriageError;

/// Raw triage request as received from the host boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriageRequest {
    pub language: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub pregnant: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub pain: Option<String>,
    pub symptoms: Vec<String>,
    pub history: Vec<String>,
}

impl TriageRequest {
    /// Validate and normalize into a [`PatientInput`].
    ///
    /// Fails only on malformed numeric fields (non-numeric age/height/weight/
    /// pain, or pain outside 1–10). Unknown symptom labels are dropped with a
    /// warning; everything else degrades to absent.
    pub fn validate(&self) -> Result<PatientInput, TriageError> {
        let language = self
            .language
            .as_deref()
            .map(Language::from_request)
            .unwrap_or_default();

        let age = parse_optional_age(self.age.as_deref())?;
        let height_cm = parse_optional_number(self.height.as_deref(), "height")?;
        let weight_kg = parse_optional_number(self.weight.as_deref(), "weight")?;
        let pain_scale = parse_optional_pain(self.pain.as_deref())?;

        let sex = self
            .sex
            .as_deref()
            .map(Sex::from_request)
            .unwrap_or_default();

        // Pregnancy is only interpretable for female patients.
        let pregnant = match sex {
            Sex::Female => self
                .pregnant
                .as_deref()
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .map(parse_bool_flag),
            _ => None,
        };

        let mut symptoms = BTreeSet::new();
        for label in &self.symptoms {
            if label.trim().is_empty() {
                continue;
            }
            match Symptom::from_label(label) {
                Some(code) => {
                    symptoms.insert(code);
                }
                None => {
                    tracing::warn!(label = %label, "dropping unrecognized symptom label");
                }
            }
        }

        let history: BTreeSet<String> = self
            .history
            .iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        Ok(PatientInput {
            age,
            sex,
            pregnant,
            height_cm,
            weight_kg,
            pain_scale,
            symptoms,
            history,
            language,
        })
    }
}

/// Coerce an optional numeric string. Empty and missing both mean absent;
/// anything that is present but not a finite number rejects the request.
fn parse_optional_number(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<f64>, TriageError> {
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or(TriageError::Validation {
            field,
            reason: "must be a number",
        })
}

fn parse_optional_age(raw: Option<&str>) -> Result<Option<u32>, TriageError> {
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TriageError::Validation {
            field: "age",
            reason: "must be a non-negative whole number",
        })
}

fn parse_optional_pain(raw: Option<&str>) -> Result<Option<u8>, TriageError> {
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u8>()
        .ok()
        .filter(|value| (1..=10).contains(value))
        .map(Some)
        .ok_or(TriageError::Validation {
            field: "pain",
            reason: "must be a whole number between 1 and 10",
        })
}

fn parse_bool_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") || raw == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TriageRequest {
        TriageRequest {
            language: Some("english".into()),
            age: Some("34".into()),
            sex: Some("female".into()),
            pregnant: Some("yes".into()),
            height: Some("170".into()),
            weight: Some("70".into()),
            pain: Some("3".into()),
            symptoms: vec!["Fever".into(), "Cough".into()],
            history: vec!["Diabetes".into()],
        }
    }

    #[test]
    fn full_request_validates() {
        let input = request().validate().unwrap();
        assert_eq!(input.age, Some(34));
        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.pregnant, Some(true));
        assert_eq!(input.height_cm, Some(170.0));
        assert_eq!(input.weight_kg, Some(70.0));
        assert_eq!(input.pain_scale, Some(3));
        assert_eq!(input.symptoms.len(), 2);
        assert!(input.history.contains("Diabetes"));
        assert_eq!(input.language, Language::English);
    }

    #[test]
    fn empty_request_validates_to_absent_fields() {
        let input = TriageRequest::default().validate().unwrap();
        assert_eq!(input.age, None);
        assert_eq!(input.sex, Sex::Unknown);
        assert_eq!(input.pregnant, None);
        assert_eq!(input.height_cm, None);
        assert_eq!(input.weight_kg, None);
        assert_eq!(input.pain_scale, None);
        assert!(input.symptoms.is_empty());
        assert!(input.history.is_empty());
        assert_eq!(input.language, Language::English);
    }

    #[test]
    fn numeric_strings_coerce_with_whitespace() {
        let mut req = request();
        req.height = Some("  170.5 ".into());
        let input = req.validate().unwrap();
        assert_eq!(input.height_cm, Some(170.5));
    }

    #[test]
    fn non_numeric_height_names_the_field() {
        let mut req = request();
        req.height = Some("tall".into());
        let err = req.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn non_numeric_weight_rejected() {
        let mut req = request();
        req.weight = Some("70kg".into());
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn negative_age_rejected() {
        let mut req = request();
        req.age = Some("-3".into());
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn pain_out_of_range_rejected() {
        for raw in ["0", "11", "eleven"] {
            let mut req = request();
            req.pain = Some(raw.into());
            let err = req.validate().unwrap_err();
            assert!(err.to_string().contains("pain"), "accepted {raw:?}");
        }
    }

    #[test]
    fn empty_numeric_strings_mean_absent() {
        let mut req = request();
        req.age = Some("".into());
        req.height = Some("   ".into());
        let input = req.validate().unwrap();
        assert_eq!(input.age, None);
        assert_eq!(input.height_cm, None);
    }

    #[test]
    fn pregnancy_discarded_unless_female() {
        let mut req = request();
        req.sex = Some("male".into());
        let input = req.validate().unwrap();
        assert_eq!(input.pregnant, None);

        req.sex = None;
        let input = req.validate().unwrap();
        assert_eq!(input.pregnant, None);
    }

    #[test]
    fn pregnancy_flag_parses_common_forms() {
        for (raw, expected) in [("true", true), ("Yes", true), ("1", true), ("no", false)] {
            let mut req = request();
            req.pregnant = Some(raw.into());
            let input = req.validate().unwrap();
            assert_eq!(input.pregnant, Some(expected), "for {raw:?}");
        }
    }

    #[test]
    fn unknown_symptom_labels_dropped_not_rejected() {
        let mut req = request();
        req.symptoms = vec!["Fever".into(), "Telepathy".into(), "".into()];
        let input = req.validate().unwrap();
        assert_eq!(input.symptoms.len(), 1);
        assert!(input.symptoms.contains(&Symptom::Fever));
    }

    #[test]
    fn duplicate_symptoms_collapse() {
        let mut req = request();
        req.symptoms = vec!["Chest pain".into(), "chest PAIN".into(), "सीने में दर्द".into()];
        let input = req.validate().unwrap();
        assert_eq!(input.symptoms.len(), 1);
    }

    #[test]
    fn history_trimmed_and_deduplicated() {
        let mut req = request();
        req.history = vec!["  Asthma ".into(), "Asthma".into(), "  ".into()];
        let input = req.validate().unwrap();
        assert_eq!(input.history.len(), 1);
        assert!(input.history.contains("Asthma"));
    }

    #[test]
    fn hindi_language_selected() {
        let mut req = request();
        req.language = Some("hindi".into());
        let input = req.validate().unwrap();
        assert_eq!(input.language, Language::Hindi);
    }

    #[test]
    fn deserializes_from_boundary_json() {
        let req: TriageRequest = serde_json::from_str(
            r#"{"language":"english","height":"170","weight":"70","symptoms":["Fever"]}"#,
        )
        .unwrap();
        let input = req.validate().unwrap();
        assert_eq!(input.height_cm, Some(170.0));
        assert_eq!(input.symptoms.len(), 1);
    }
}
