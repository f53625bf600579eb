// ABOUTME: Report assembly composing energy, diet category, macros, meal plan and BMI
// ABOUTME: Supports the direct and recommendation pipelines plus parallel batch assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Assembler
//!
//! Runs the calculators in a fixed order (Energy -> Category -> Macro ->
//! `MealPlan` -> BMI) and returns one immutable [`Report`]. The direct pipeline
//! skips the category and meal plan steps and splits macros by goal.

use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{DietCategory, MealPlan, PersonProfile};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bmi_classifier::{calculate_bmi, BmiResult};
use crate::config::{ConfigError, NutritionConfig};
use crate::macro_allocator::{MacroAllocator, MacroBasis, MacroSplit};
use crate::meal_plans::MealPlanCatalog;
use crate::nutrition_calculator::{estimate_energy, EnergyProfile};
use crate::resolver::{CategorySource, DietCategoryResolver};

/// Which pipeline produces the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    /// Goal-based macros, no diet recommendation
    Direct,
    /// Diet-category macros with a meal plan
    #[default]
    Recommend,
}

/// Diet recommendation section of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendation {
    /// Recommended category
    pub category: DietCategory,
    /// How the category was resolved
    pub source: CategorySource,
    /// Sample day of meals for the category
    pub meal_plan: MealPlan,
}

/// Complete nutrition report for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Input profile
    pub profile: PersonProfile,
    /// BMR, TDEE and target calories
    pub energy: EnergyProfile,
    /// What the macro ratio was chosen from
    pub macro_basis: MacroBasis,
    /// Daily macronutrient grams
    pub macros: MacroSplit,
    /// BMI value and category
    pub bmi: BmiResult,
    /// Present for the recommendation pipeline only
    pub recommendation: Option<DietRecommendation>,
}

impl Report {
    /// Reason the predictor was bypassed, if the category is a fallback
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        match self.recommendation.as_ref().map(|r| &r.source) {
            Some(CategorySource::Fallback { reason }) => Some(reason.as_str()),
            _ => None,
        }
    }
}

/// Composes the calculators over a validated configuration
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    config: NutritionConfig,
    allocator: MacroAllocator,
    catalog: MealPlanCatalog,
    resolver: DietCategoryResolver,
}

impl ReportAssembler {
    /// Validate the configuration and build an assembler
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found while validating `config`.
    pub fn new(config: NutritionConfig, resolver: DietCategoryResolver) -> Result<Self, ConfigError> {
        config.validate()?;
        let allocator = MacroAllocator::new(config.diet_ratios.clone())?;
        Ok(Self {
            config,
            allocator,
            catalog: MealPlanCatalog::default(),
            resolver,
        })
    }

    /// Replace the meal plan catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: MealPlanCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Resolver in use
    #[must_use]
    pub const fn resolver(&self) -> &DietCategoryResolver {
        &self.resolver
    }

    /// Direct pipeline: energy, goal-based macros, BMI
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile's measurements are rejected.
    pub fn direct_report(&self, profile: &PersonProfile) -> AppResult<Report> {
        let energy = estimate_energy(profile, &self.config)?;
        let macro_basis = MacroBasis::Goal(profile.goal());
        let macros = self.allocator.allocate(energy.target_calories, macro_basis);
        let bmi = calculate_bmi(
            profile.weight_kg(),
            profile.height_cm(),
            &self.config.bmi_thresholds,
        )?;

        Ok(Report {
            profile: profile.clone(),
            energy,
            macro_basis,
            macros,
            bmi,
            recommendation: None,
        })
    }

    /// Recommendation pipeline: energy, category, diet macros, meal plan, BMI
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile's measurements are rejected.
    /// Predictor failures are not errors; they show up as a fallback source.
    pub fn recommend(&self, profile: &PersonProfile) -> AppResult<Report> {
        let energy = estimate_energy(profile, &self.config)?;
        let resolution = self.resolver.resolve(profile);
        let macro_basis = MacroBasis::Diet(resolution.category);
        let macros = self.allocator.allocate(energy.target_calories, macro_basis);
        let meal_plan = self.catalog.lookup(resolution.category).clone();
        let bmi = calculate_bmi(
            profile.weight_kg(),
            profile.height_cm(),
            &self.config.bmi_thresholds,
        )?;

        Ok(Report {
            profile: profile.clone(),
            energy,
            macro_basis,
            macros,
            bmi,
            recommendation: Some(DietRecommendation {
                category: resolution.category,
                source: resolution.source,
                meal_plan,
            }),
        })
    }

    /// Assemble a report with the given pipeline
    ///
    /// # Errors
    ///
    /// See [`Self::direct_report`] and [`Self::recommend`].
    pub fn assemble(&self, profile: &PersonProfile, mode: PlanMode) -> AppResult<Report> {
        match mode {
            PlanMode::Direct => self.direct_report(profile),
            PlanMode::Recommend => self.recommend(profile),
        }
    }

    /// Assemble reports for many profiles in parallel, preserving input order
    #[must_use]
    pub fn assemble_batch(&self, profiles: &[PersonProfile], mode: PlanMode) -> Vec<AppResult<Report>> {
        profiles
            .par_iter()
            .map(|profile| self.assemble(profile, mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{ActivityLevel, Goal, MedicalCondition, PersonProfileParams, Sex};

    fn profile(condition: MedicalCondition) -> PersonProfile {
        PersonProfile::new(PersonProfileParams {
            age: 30,
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            condition,
        })
        .unwrap()
    }

    fn assembler() -> ReportAssembler {
        ReportAssembler::new(NutritionConfig::default(), DietCategoryResolver::rule_based()).unwrap()
    }

    #[test]
    fn test_direct_report_has_no_recommendation() {
        let report = assembler()
            .direct_report(&profile(MedicalCondition::Diabetes))
            .unwrap();
        assert!(report.recommendation.is_none());
        assert_eq!(report.macro_basis, MacroBasis::Goal(Goal::Lose));
        assert!(report.fallback_reason().is_none());
    }

    #[test]
    fn test_recommend_uses_diet_ratio_and_meal_plan() {
        let report = assembler()
            .recommend(&profile(MedicalCondition::Hypertension))
            .unwrap();
        let recommendation = report.recommendation.unwrap();
        assert_eq!(recommendation.category, DietCategory::LowSodium);
        assert_eq!(recommendation.source, CategorySource::RuleTable);
        assert_eq!(
            report.macro_basis,
            MacroBasis::Diet(DietCategory::LowSodium)
        );
        assert_eq!(
            &recommendation.meal_plan,
            MealPlanCatalog::default().lookup(DietCategory::LowSodium)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = 1.3;
        assert!(ReportAssembler::new(config, DietCategoryResolver::rule_based()).is_err());
    }
}
