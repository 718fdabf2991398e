//! Prompt construction for the inference service.
//!
//! The output-format directive at the end of the prompt is the contract the
//! reply parser depends on: three labeled lines, English label tokens, RISK
//! limited to Low/Medium/High. Changing it means changing
//! [`super::parser::parse_triage_reply`] in lockstep — the tests in both
//! modules hold the two sides together.

use super::types::{DerivedMetrics, Language, PatientInput, Sex};

/// Language-specific system instruction, rendered as the first prompt line.
pub fn system_instruction(language: Language) -> String {
    format!(
        "You are a clinical triage AI. Respond in {}. Be concise.",
        language.name()
    )
}

/// Strict output directive. The label tokens stay English in every language
/// because the parser matches them case-sensitively.
const OUTPUT_DIRECTIVE: &str = "Reply with exactly three lines, in this order, and nothing else. \
Keep the CONDITION, RISK and ACTION labels in English.\n\
CONDITION: <single most likely condition>\n\
RISK: <exactly one of Low, Medium, High>\n\
ACTION: <what the patient should do next>";

/// Render the full prompt for a validated input.
///
/// Every field line is always present; absent values render as empty after
/// the colon so the structure never varies between requests.
pub fn build_triage_prompt(input: &PatientInput, metrics: &DerivedMetrics) -> String {
    let age = input.age.map(|age| age.to_string()).unwrap_or_default();
    let sex = input.sex.prompt_value().to_string();
    let pregnant = match input.pregnant {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => String::new(),
    };
    let bmi = if metrics.bmi > 0.0 {
        format!("{:.1}", metrics.bmi)
    } else {
        String::new()
    };
    let pain = input
        .pain_scale
        .map(|pain| pain.to_string())
        .unwrap_or_default();
    let symptoms = input
        .symptoms
        .iter()
        .map(|code| code.label(input.language))
        .collect::<Vec<_>>()
        .join(", ");
    let history = input
        .history
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{system}\n\n\
        Patient details:\n\
        AGE: {age}\n\
        SEX: {sex}\n\
        PREGNANT: {pregnant}\n\
        BMI: {bmi}\n\
        PAIN SCALE: {pain}\n\
        SYMPTOMS: {symptoms}\n\
        HISTORY: {history}\n\n\
        {directive}",
        system = system_instruction(input.language),
        directive = OUTPUT_DIRECTIVE,
    )
}
