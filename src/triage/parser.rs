//! Labeled-line parser for the inference reply.
//!
//! The prompt directs the model to answer with exactly three labeled lines;
//! real replies wander, so parsing scans for each label independently and
//! substitutes fixed defaults for anything missing. Parsing is pure, never
//! fails, and is decoupled from the network entirely — it is tested against
//! raw strings.

use super::types::{RiskLevel, TriageResult};

/// Substituted when no `CONDITION:` line is found or its value is empty.
pub const DEFAULT_CONDITION: &str = "Unknown";
/// Substituted when no `ACTION:` line is found or its value is empty.
pub const DEFAULT_ACTION: &str = "Consult a doctor if symptoms persist.";

/// Parse a raw reply into a [`TriageResult`].
///
/// For each label the first line whose trimmed content starts with
/// `"<LABEL>:"` wins; the value is the remainder of that line, trimmed, and
/// never spans lines. The risk capture always passes through
/// [`RiskLevel::normalize`], so an unconstrained model string can never
/// reach the result.
pub fn parse_triage_reply(raw: &str) -> TriageResult {
    let condition = labeled_value(raw, "CONDITION")
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CONDITION)
        .to_string();
    let risk = labeled_value(raw, "RISK")
        .map(RiskLevel::normalize)
        .unwrap_or(RiskLevel::Medium);
    let action = labeled_value(raw, "ACTION")
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ACTION)
        .to_string();

    TriageResult {
        condition,
        risk,
        action,
    }
}

/// First line whose trimmed content starts with `<label>:` (case-sensitive
/// on the label token). Returns the rest of that line, trimmed.
fn labeled_value<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    raw.lines().find_map(|line| {
        line.trim()
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
    })
}
