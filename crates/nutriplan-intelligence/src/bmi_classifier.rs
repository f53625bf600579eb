// ABOUTME: Body Mass Index calculation and half-open category classification
// ABOUTME: Also suggests a body-weight goal from the BMI category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Classifier
//!
//! `bmi = weight_kg / height_m²`, classified with one canonical table of
//! half-open ranges (lower bound inclusive), so 25.0 is Overweight and 30.0 is
//! Obese with no gaps between categories.

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{BmiCategory, Goal};
use serde::{Deserialize, Serialize};

use crate::config::BmiThresholdsConfig;
use crate::physiological_constants::units::CM_PER_M;

/// Calculated BMI and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value (kg/m²)
    pub value: f64,
    /// Category for the value
    pub category: BmiCategory,
}

/// Raw BMI value
///
/// # Errors
///
/// Returns `InvalidInput` when weight or height is not a positive finite number.
pub fn bmi_value(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }
    let height_m = height_cm / CM_PER_M;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify a BMI value
#[must_use]
pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholdsConfig) -> BmiCategory {
    if bmi < thresholds.underweight_max {
        BmiCategory::Underweight
    } else if bmi < thresholds.normal_max {
        BmiCategory::Normal
    } else if bmi < thresholds.overweight_max {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate and classify BMI
///
/// # Errors
///
/// Returns `InvalidInput` when weight or height is not positive.
pub fn calculate_bmi(
    weight_kg: f64,
    height_cm: f64,
    thresholds: &BmiThresholdsConfig,
) -> AppResult<BmiResult> {
    let value = bmi_value(weight_kg, height_cm)?;
    Ok(BmiResult {
        value,
        category: classify_bmi(value, thresholds),
    })
}

/// Goal suggested for a BMI category when the person states none
#[must_use]
pub const fn suggest_goal(category: BmiCategory) -> Goal {
    match category {
        BmiCategory::Underweight => Goal::Gain,
        BmiCategory::Normal => Goal::Maintain,
        BmiCategory::Overweight | BmiCategory::Obese => Goal::Lose,
    }
}
