// ABOUTME: Diet category resolver configuration: strategy, predictor timeout and vocabulary
// ABOUTME: Selects rule-table or learned resolution and bounds external predictor calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::MedicalCondition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;

/// Longest predictor timeout accepted by validation
const MAX_PREDICTOR_TIMEOUT_MS: u64 = 60_000;

/// How diet categories are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverStrategyKind {
    /// Fixed condition -> category rule table
    #[default]
    RuleBased,
    /// External predictor with rule-table fallback
    Learned,
}

impl FromStr for ResolverStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule" | "rules" | "rule_based" | "rule-based" => Ok(Self::RuleBased),
            "learned" | "model" | "predictor" => Ok(Self::Learned),
            other => Err(format!("unknown resolver strategy '{other}'")),
        }
    }
}

impl fmt::Display for ResolverStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleBased => f.write_str("rule_based"),
            Self::Learned => f.write_str("learned"),
        }
    }
}

/// Diet category resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Resolution strategy
    pub strategy: ResolverStrategyKind,
    /// Upper bound on a single predictor call (milliseconds)
    pub predictor_timeout_ms: u64,
    /// Condition labels the external classifier was trained on
    pub condition_vocabulary: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategy: ResolverStrategyKind::RuleBased,
            predictor_timeout_ms: 2_000,
            condition_vocabulary: [
                MedicalCondition::None,
                MedicalCondition::Diabetes,
                MedicalCondition::Hypertension,
                MedicalCondition::Obesity,
            ]
            .iter()
            .map(|c| c.label().to_owned())
            .collect(),
        }
    }
}

impl ResolverConfig {
    /// Predictor timeout as a `Duration`
    #[must_use]
    pub const fn predictor_timeout(&self) -> Duration {
        Duration::from_millis(self.predictor_timeout_ms)
    }

    /// Validate timeout bounds and vocabulary contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when the timeout is outside
    /// 1..=60000 ms, or when the vocabulary lacks the `None` label every
    /// unknown condition is mapped to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.predictor_timeout_ms == 0 || self.predictor_timeout_ms > MAX_PREDICTOR_TIMEOUT_MS {
            return Err(ConfigError::ValueOutOfRange(format!(
                "Predictor timeout must be between 1 and {MAX_PREDICTOR_TIMEOUT_MS} ms"
            )));
        }
        let none_label = MedicalCondition::None.label();
        if !self
            .condition_vocabulary
            .iter()
            .any(|label| label.eq_ignore_ascii_case(none_label))
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "Condition vocabulary must contain '{none_label}'"
            )));
        }
        Ok(())
    }
}
