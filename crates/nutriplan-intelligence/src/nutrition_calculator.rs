// ABOUTME: Energy estimation using the Mifflin-St Jeor equation and activity multipliers
// ABOUTME: BMR, TDEE and goal-adjusted calorie target with a safety floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Energy estimation for one person: BMR from the Mifflin-St Jeor equation,
//! TDEE from an activity multiplier, and a goal-adjusted daily target.
//!
//! The target is truncated to whole kilocalories first and clamped to the
//! configured floor second, so `2491.9` becomes `2491` and anything under the
//! floor becomes exactly the floor.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{ActivityLevel, Goal, PersonProfile, Sex};
use serde::{Deserialize, Serialize};

use crate::config::{ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig};

/// Energy needs derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily target (kcal/day), never below the floor
    pub target_calories: u32,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Goal-adjusted daily calorie target
///
/// Applies the goal offset to TDEE, truncates to whole kilocalories, then
/// clamps to `min_target_kcal`. Values below the floor are clamped, never
/// rejected, and a NaN adjusted value also yields the floor. Values above
/// `u32::MAX` are capped there.
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> u32 {
    let adjusted = (tdee + config.offset_for(goal)).trunc();
    if adjusted.is_nan() || adjusted < f64::from(config.min_target_kcal) {
        return config.min_target_kcal;
    }
    adjusted.min(f64::from(u32::MAX)) as u32
}

/// Estimate BMR, TDEE and target calories for a profile
///
/// # Errors
///
/// Returns an error if the profile's measurements fail BMR validation
pub fn estimate_energy(profile: &PersonProfile, config: &NutritionConfig) -> AppResult<EnergyProfile> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age(),
        profile.sex(),
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level(), &config.activity_factors);
    let target_calories = calculate_target_calories(tdee, profile.goal(), &config.goal_adjustment);

    Ok(EnergyProfile {
        bmr,
        tdee,
        target_calories,
    })
}
