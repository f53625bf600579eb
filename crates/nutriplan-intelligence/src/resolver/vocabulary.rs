// ABOUTME: Immutable table of condition labels known to an external classifier
// ABOUTME: Normalizes free-text conditions, mapping unknown labels to "None"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::MedicalCondition;
use std::sync::Arc;

/// Condition labels a classifier was trained on
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionVocabulary {
    labels: Arc<[String]>,
}

impl ConditionVocabulary {
    /// Build a vocabulary; the `None` label is always included
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let none_label = MedicalCondition::None.label();
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if !labels.iter().any(|l| l.eq_ignore_ascii_case(none_label)) {
            labels.push(none_label.to_owned());
        }
        Self {
            labels: labels.into(),
        }
    }

    /// Known labels
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether a label is known (case-insensitive, surrounding whitespace ignored)
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.canonical(raw).is_some()
    }

    /// Canonical spelling of a known label, or `"None"` for anything unknown
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        self.canonical(raw)
            .unwrap_or_else(|| MedicalCondition::None.label())
            .to_owned()
    }

    fn canonical(&self, raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        self.labels
            .iter()
            .find(|label| label.eq_ignore_ascii_case(trimmed))
            .map(String::as_str)
    }
}

impl Default for ConditionVocabulary {
    fn default() -> Self {
        Self::new([
            MedicalCondition::None,
            MedicalCondition::Diabetes,
            MedicalCondition::Hypertension,
            MedicalCondition::Obesity,
        ]
        .map(MedicalCondition::label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_and_unknown() {
        let vocabulary = ConditionVocabulary::new(["Diabetes", "Hypertension"]);
        assert_eq!(vocabulary.normalize(" diabetes "), "Diabetes");
        assert_eq!(vocabulary.normalize("Obesity"), "None");
        assert_eq!(vocabulary.normalize("Asthma"), "None");
        assert!(vocabulary.contains("none"));
    }
}
