// ABOUTME: Nutrition engine configuration container with env overrides and validation
// ABOUTME: Loads defaults, applies NUTRIPLAN_* variables and validates once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration Module
//!
//! Configuration is environment-only: defaults live in code and individual
//! values can be overridden with `NUTRIPLAN_*` variables. Every table is
//! validated once at load, so calculators never re-check ratio sums or
//! threshold ordering per call.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR, activity, goal, BMI and diet ratio tables
//! - `resolver` - Diet category resolution strategy
//! - `error` - Validation errors

pub mod error;
pub mod nutrition;
pub mod resolver;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, DietRatioTable, GoalAdjustmentConfig,
    MacroRatio, RATIO_SUM_TOLERANCE,
};
pub use resolver::{ResolverConfig, ResolverStrategyKind};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal deficit/surplus and calorie floor
    pub goal_adjustment: GoalAdjustmentConfig,
    /// BMI category boundaries
    pub bmi_thresholds: BmiThresholdsConfig,
    /// Macro ratio policy per diet category and goal
    pub diet_ratios: DietRatioTable,
    /// Diet category resolver settings
    pub resolver: ResolverConfig,
}

impl NutritionConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns the first validation failure across the sub-configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;
        self.bmi_thresholds.validate()?;
        self.diet_ratios.validate()?;
        self.resolver.validate()?;
        Ok(())
    }

    /// Read an override, treating an unset variable as absent
    fn read_env_var(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env_var(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR coefficients
        Self::apply_env_var("NUTRIPLAN_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_env_var("NUTRIPLAN_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_env_var("NUTRIPLAN_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_env_var(
            "NUTRIPLAN_BMR_MALE_CONSTANT",
            &mut self.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        // Activity multipliers
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var("NUTRIPLAN_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        // Goal adjustment
        Self::apply_env_var(
            "NUTRIPLAN_GOAL_DEFICIT_KCAL",
            &mut self.goal_adjustment.deficit_kcal,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GOAL_SURPLUS_KCAL",
            &mut self.goal_adjustment.surplus_kcal,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MIN_TARGET_KCAL",
            &mut self.goal_adjustment.min_target_kcal,
        )?;

        // BMI thresholds
        Self::apply_env_var(
            "NUTRIPLAN_BMI_UNDERWEIGHT_MAX",
            &mut self.bmi_thresholds.underweight_max,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_BMI_NORMAL_MAX",
            &mut self.bmi_thresholds.normal_max,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_BMI_OVERWEIGHT_MAX",
            &mut self.bmi_thresholds.overweight_max,
        )?;

        // Diet ratios: NUTRIPLAN_RATIO_<ENTRY>_<PROTEIN|FAT|CARBS>
        for (name, ratio) in self.diet_ratios.entries_mut() {
            let prefix = format!("NUTRIPLAN_RATIO_{}", name.to_uppercase());
            Self::apply_env_var(&format!("{prefix}_PROTEIN"), &mut ratio.protein)?;
            Self::apply_env_var(&format!("{prefix}_FAT"), &mut ratio.fat)?;
            Self::apply_env_var(&format!("{prefix}_CARBS"), &mut ratio.carbs)?;
        }

        // Resolver
        Self::apply_env_var("NUTRIPLAN_RESOLVER_STRATEGY", &mut self.resolver.strategy)?;
        Self::apply_env_var(
            "NUTRIPLAN_PREDICTOR_TIMEOUT_MS",
            &mut self.resolver.predictor_timeout_ms,
        )?;
        if let Some(raw) = Self::read_env_var("NUTRIPLAN_CONDITION_VOCABULARY")? {
            self.resolver.condition_vocabulary = raw
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_owned)
                .collect();
        }

        Ok(self)
    }
}
