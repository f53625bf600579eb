// ABOUTME: Diet category predictor contract and the rule-table implementation of it
// ABOUTME: External classifiers plug in behind DietCategoryPredictor and report PredictionError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{DietCategory, MedicalCondition};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Features handed to a predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body Mass Index
    pub bmi: f64,
    /// Condition label, already normalized against the predictor vocabulary
    /// when sent to a learned predictor
    pub condition: String,
}

/// Failure reported by a predictor
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictionError {
    /// Predictor could not be reached or was never configured
    #[error("predictor unavailable: {0}")]
    Unavailable(String),
    /// Predictor did not answer within the caller's bound
    #[error("predictor timed out after {0:?}")]
    Timeout(Duration),
    /// Predictor rejected the request features
    #[error("malformed prediction input: {0}")]
    MalformedInput(String),
    /// Predictor failed internally
    #[error("predictor failed: {0}")]
    Internal(String),
}

/// Capability that maps request features to a diet category
///
/// Implementations must be total and synchronous from the caller's point of
/// view. The resolver runs every learned predictor behind a
/// [`TimeoutPredictor`](super::TimeoutPredictor), so a slow call degrades to
/// the rule table instead of stalling the caller.
pub trait DietCategoryPredictor: Send + Sync {
    /// Name recorded on resolutions produced by this predictor
    fn name(&self) -> &str;

    /// Predict a diet category
    ///
    /// # Errors
    ///
    /// Returns a `PredictionError` when the predictor cannot produce a category.
    fn predict(&self, request: &PredictionRequest) -> Result<DietCategory, PredictionError>;
}

/// Fixed condition -> category rule
#[must_use]
pub const fn rule_based_category(condition: MedicalCondition) -> DietCategory {
    match condition {
        MedicalCondition::Diabetes => DietCategory::LowCarb,
        MedicalCondition::Hypertension => DietCategory::LowSodium,
        MedicalCondition::Obesity | MedicalCondition::None => DietCategory::Balanced,
    }
}

/// The rule table exposed through the predictor contract
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedPredictor;

impl DietCategoryPredictor for RuleBasedPredictor {
    fn name(&self) -> &str {
        "rule_table"
    }

    fn predict(&self, request: &PredictionRequest) -> Result<DietCategory, PredictionError> {
        Ok(rule_based_category(MedicalCondition::from_str_lossy(
            &request.condition,
        )))
    }
}
