// ABOUTME: Planner service wrapping the report assembler for binaries and embedding callers
// ABOUTME: Builds profiles from loose text input and logs degraded diet category resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Planner
//!
//! The intelligence crate never logs: a predictor failure comes back as a
//! [`CategorySource::Fallback`] marker on the report. [`NutritionPlanner`] is
//! the layer that owns that decision and emits a `warn` event for every
//! degraded resolution.

use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{
    ActivityLevel, Goal, MedicalCondition, PersonProfile, PersonProfileParams, Sex,
};
use nutriplan_intelligence::bmi_classifier::{calculate_bmi, suggest_goal, BmiResult};
use nutriplan_intelligence::config::NutritionConfig;
use nutriplan_intelligence::report::{PlanMode, Report, ReportAssembler};
use nutriplan_intelligence::resolver::{CategorySource, DietCategoryPredictor, DietCategoryResolver};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::constants::log_targets;

/// Loose, text-typed person input as typed on a command line or read from a row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    pub age: u32,
    /// Sex label ("Male", "F", ...)
    pub sex: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity label or code "1".."4"; missing means sedentary
    #[serde(default)]
    pub activity: Option<String>,
    /// Goal label or code "1".."3"; missing means suggested from BMI
    #[serde(default)]
    pub goal: Option<String>,
    /// Medical condition label; missing means none
    #[serde(default)]
    pub condition: Option<String>,
}

/// Report assembly with degraded-mode logging
#[derive(Debug, Clone)]
pub struct NutritionPlanner {
    assembler: ReportAssembler,
}

impl NutritionPlanner {
    /// Build a planner from a configuration and an optional predictor
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `ValueOutOfRange` if the configuration fails
    /// validation.
    pub fn new(
        config: NutritionConfig,
        predictor: Option<Arc<dyn DietCategoryPredictor>>,
    ) -> AppResult<Self> {
        let resolver = DietCategoryResolver::from_config(&config.resolver, predictor);
        let assembler = ReportAssembler::new(config, resolver)?;
        debug!(
            target: log_targets::PLANNER,
            resolver = ?assembler.resolver(),
            "Nutrition planner ready"
        );
        Ok(Self { assembler })
    }

    /// Build a planner from defaults plus `NUTRIPLAN_*` overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails.
    pub fn from_env(predictor: Option<Arc<dyn DietCategoryPredictor>>) -> AppResult<Self> {
        Self::new(NutritionConfig::load()?, predictor)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        self.assembler.config()
    }

    /// Underlying assembler
    #[must_use]
    pub const fn assembler(&self) -> &ReportAssembler {
        &self.assembler
    }

    /// Validate loose input into a profile
    ///
    /// Unknown sex, activity and condition labels map to their documented
    /// defaults. A missing goal is suggested from the BMI category.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if age, weight or height are rejected.
    pub fn profile_from_input(&self, input: &ProfileInput) -> AppResult<PersonProfile> {
        let goal = match input.goal.as_deref() {
            Some(raw) => Goal::from_str_lossy(raw),
            None => {
                let bmi = self.bmi(input.weight_kg, input.height_cm)?;
                let goal = suggest_goal(bmi.category);
                debug!(
                    target: log_targets::PLANNER,
                    bmi = bmi.value,
                    category = %bmi.category.label(),
                    goal = %goal,
                    "Goal suggested from BMI"
                );
                goal
            }
        };

        PersonProfile::new(PersonProfileParams {
            age: input.age,
            sex: Sex::from_str_lossy(&input.sex),
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            activity_level: input
                .activity
                .as_deref()
                .map_or(ActivityLevel::Sedentary, ActivityLevel::from_str_lossy),
            goal,
            condition: input
                .condition
                .as_deref()
                .map_or(MedicalCondition::None, MedicalCondition::from_str_lossy),
        })
    }

    /// BMI with the configured thresholds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when weight or height is not positive.
    pub fn bmi(&self, weight_kg: f64, height_cm: f64) -> AppResult<BmiResult> {
        calculate_bmi(weight_kg, height_cm, &self.config().bmi_thresholds)
    }

    /// Assemble one report, logging a degraded category resolution
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile's measurements are rejected.
    pub fn plan(&self, profile: &PersonProfile, mode: PlanMode) -> AppResult<Report> {
        let report = self.assembler.assemble(profile, mode)?;
        Self::log_report(&report);
        Ok(report)
    }

    /// Assemble reports for many profiles in parallel, preserving input order
    #[must_use]
    pub fn plan_batch(&self, profiles: &[PersonProfile], mode: PlanMode) -> Vec<AppResult<Report>> {
        let reports = self.assembler.assemble_batch(profiles, mode);
        let mut failed = 0_usize;
        for result in &reports {
            match result {
                Ok(report) => Self::log_report(report),
                Err(_) => failed += 1,
            }
        }
        debug!(
            target: log_targets::PLANNER,
            total = reports.len(),
            failed,
            "Batch assembled"
        );
        reports
    }

    fn log_report(report: &Report) {
        let Some(recommendation) = &report.recommendation else {
            return;
        };
        if let CategorySource::Fallback { reason } = &recommendation.source {
            warn!(
                target: log_targets::PLANNER,
                reason = %reason,
                category = %recommendation.category.label(),
                condition = %report.profile.condition(),
                "Diet category predictor unavailable, using rule table"
            );
        }
    }
}
