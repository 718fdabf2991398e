//! Canonical symptom vocabulary.
//!
//! Patients pick symptoms from a fixed set of localized labels; the rest of
//! the pipeline works only with the language-independent codes defined here.
//! The emergency override table matches on codes, so a Hindi-labeled
//! "सीने में दर्द" and an English "Chest pain" trigger the same rule.

use serde::{Deserialize, Serialize};

use super::types::Language;

/// Language-independent symptom code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Cough,
    Headache,
    ChestPain,
    BreathingDifficulty,
    Fatigue,
    Sweating,
    Dizziness,
    Nausea,
    Vomiting,
    AbdominalPain,
}

/// All codes in display order.
pub const ALL_SYMPTOMS: &[Symptom] = &[
    Symptom::Fever,
    Symptom::Cough,
    Symptom::Headache,
    Symptom::ChestPain,
    Symptom::BreathingDifficulty,
    Symptom::Fatigue,
    Symptom::Sweating,
    Symptom::Dizziness,
    Symptom::Nausea,
    Symptom::Vomiting,
    Symptom::AbdominalPain,
];

impl Symptom {
    /// Display label in the requested language.
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.label_en(),
            Language::Hindi => self.label_hi(),
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::Headache => "Headache",
            Self::ChestPain => "Chest pain",
            Self::BreathingDifficulty => "Breathing difficulty",
            Self::Fatigue => "Fatigue",
            Self::Sweating => "Sweating",
            Self::Dizziness => "Dizziness",
            Self::Nausea => "Nausea",
            Self::Vomiting => "Vomiting",
            Self::AbdominalPain => "Abdominal pain",
        }
    }

    fn label_hi(&self) -> &'static str {
        match self {
            Self::Fever => "बुखार",
            Self::Cough => "खांसी",
            Self::Headache => "सिरदर्द",
            Self::ChestPain => "सीने में दर्द",
            Self::BreathingDifficulty => "सांस लेने में तकलीफ",
            Self::Fatigue => "थकान",
            Self::Sweating => "पसीना आना",
            Self::Dizziness => "चक्कर आना",
            Self::Nausea => "जी मिचलाना",
            Self::Vomiting => "उल्टी",
            Self::AbdominalPain => "पेट दर्द",
        }
    }

    /// Canonicalize a patient-facing label (English or Hindi) to its code.
    ///
    /// English matching is case-insensitive; Hindi labels match exactly.
    /// Returns `None` for anything outside the vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        for symptom in ALL_SYMPTOMS {
            if trimmed.eq_ignore_ascii_case(symptom.label_en()) || trimmed == symptom.label_hi() {
                return Some(*symptom);
            }
        }
        // Legacy label from the original symptom buttons.
        if trimmed.eq_ignore_ascii_case("Breathing issue") {
            return Some(Self::BreathingDifficulty);
        }
        None
    }
}
