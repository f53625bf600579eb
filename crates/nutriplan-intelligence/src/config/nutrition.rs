// ABOUTME: Nutrition configuration for energy estimation, BMI classification and macro ratios
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, goal offsets and diet ratio table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Every table the calculators read lives here, with defaults matching the
//! reference formulas. Tables are validated once when a
//! [`NutritionConfig`](super::NutritionConfig) is loaded; calculators then trust
//! them.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - BMI cut-offs: WHO Technical Report Series 894 (2000)

use nutriplan_core::models::{ActivityLevel, DietCategory, Goal};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tolerance for a ratio tuple summing to 1.0
pub const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Reject NaN and infinite values, which slip through ordered comparisons
fn require_finite(table: &str, fields: &[(&str, f64)]) -> Result<(), ConfigError> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(ConfigError::ValueOutOfRange(format!(
            "{table} {field} must be a finite number, got {value}"
        ))),
        None => Ok(()),
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    /// Validate coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any coefficient is not finite
    /// or the weight or height coefficient is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite(
            "BMR",
            &[
                ("msj_weight_coef", self.msj_weight_coef),
                ("msj_height_coef", self.msj_height_coef),
                ("msj_age_coef", self.msj_age_coef),
                ("msj_male_constant", self.msj_male_constant),
                ("msj_female_constant", self.msj_female_constant),
            ],
        )?;
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training or physical job): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Validate that factors lie in 1.0..=2.5 and ascend with activity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` or `ConfigError::InvalidRange`
    /// when the table is out of bounds or not ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite(
            "Activity factor",
            &[
                ("sedentary", self.sedentary),
                ("moderate", self.moderate),
                ("active", self.active),
                ("very_active", self.very_active),
            ],
        )?;
        if self.sedentary < 1.0 || self.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5".to_owned(),
            ));
        }
        if self.sedentary >= self.moderate
            || self.moderate >= self.active
            || self.active >= self.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Goal-based calorie adjustment applied to TDEE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Daily deficit for weight loss (kcal)
    pub deficit_kcal: f64,
    /// Daily surplus for weight gain (kcal)
    pub surplus_kcal: f64,
    /// Safety floor for any reported target (kcal/day)
    pub min_target_kcal: u32,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            surplus_kcal: 500.0,
            min_target_kcal: 1200,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Signed offset applied to TDEE for a goal
    #[must_use]
    pub fn offset_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => -self.deficit_kcal,
            Goal::Maintain => 0.0,
            Goal::Gain => self.surplus_kcal,
        }
    }

    /// Validate offsets and floor
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-finite or negative
    /// offsets and for a zero floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite(
            "Goal adjustment",
            &[
                ("deficit_kcal", self.deficit_kcal),
                ("surplus_kcal", self.surplus_kcal),
            ],
        )?;
        if !(self.deficit_kcal >= 0.0 && self.surplus_kcal >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Goal deficit and surplus must be non-negative".to_owned(),
            ));
        }
        if self.min_target_kcal == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum target calories must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Upper bounds (exclusive) of the BMI categories
///
/// Ranges are half-open with the lower bound inclusive:
/// `< underweight_max` Underweight, `[underweight_max, normal_max)` Normal,
/// `[normal_max, overweight_max)` Overweight, `>= overweight_max` Obese.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiThresholdsConfig {
    /// Underweight below this value: 18.5
    pub underweight_max: f64,
    /// Normal below this value: 25.0
    pub normal_max: f64,
    /// Overweight below this value: 30.0
    pub overweight_max: f64,
}

impl Default for BmiThresholdsConfig {
    fn default() -> Self {
        Self {
            underweight_max: 18.5,
            normal_max: 25.0,
            overweight_max: 30.0,
        }
    }
}

impl BmiThresholdsConfig {
    /// Validate thresholds are positive and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-finite threshold and
    /// `ConfigError::InvalidRange` for a misordered table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite(
            "BMI threshold",
            &[
                ("underweight_max", self.underweight_max),
                ("normal_max", self.normal_max),
                ("overweight_max", self.overweight_max),
            ],
        )?;
        if !(self.underweight_max > 0.0
            && self.underweight_max < self.normal_max
            && self.normal_max < self.overweight_max)
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and strictly ascending".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Share of total calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein fraction (0.0-1.0)
    pub protein: f64,
    /// Fat fraction (0.0-1.0)
    pub fat: f64,
    /// Carbohydrate fraction (0.0-1.0)
    pub carbs: f64,
}

impl MacroRatio {
    /// Create a ratio tuple (protein, fat, carbs)
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }

    /// Validate each fraction is within 0..=1 and the tuple sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a fraction outside 0..=1 and
    /// `ConfigError::InvalidWeights` when the sum is off by more than
    /// [`RATIO_SUM_TOLERANCE`].
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        for (macro_name, value) in [
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbs", self.carbs),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} {macro_name} ratio must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} macro ratios must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Macro ratio policy keyed by diet category and by goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietRatioTable {
    /// Balanced diet, also used for unrecognized categories
    pub balanced: MacroRatio,
    /// Low carbohydrate diet
    pub low_carb: MacroRatio,
    /// Low sodium diet
    pub low_sodium: MacroRatio,
    /// Goal-based: weight loss (high protein for satiety)
    pub lose: MacroRatio,
    /// Goal-based: maintenance
    pub maintain: MacroRatio,
    /// Goal-based: weight gain (high carb for energy)
    pub gain: MacroRatio,
}

impl Default for DietRatioTable {
    fn default() -> Self {
        Self {
            balanced: MacroRatio::new(0.30, 0.30, 0.40),
            low_carb: MacroRatio::new(0.30, 0.50, 0.20),
            low_sodium: MacroRatio::new(0.30, 0.30, 0.40),
            lose: MacroRatio::new(0.40, 0.35, 0.25),
            maintain: MacroRatio::new(0.30, 0.30, 0.40),
            gain: MacroRatio::new(0.30, 0.20, 0.50),
        }
    }
}

impl DietRatioTable {
    /// Ratio for a diet category
    #[must_use]
    pub const fn for_category(&self, category: DietCategory) -> MacroRatio {
        match category {
            DietCategory::Balanced => self.balanced,
            DietCategory::LowCarb => self.low_carb,
            DietCategory::LowSodium => self.low_sodium,
        }
    }

    /// Ratio for a goal when no medical diet applies
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroRatio {
        match goal {
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
        }
    }

    /// Named entries, used for validation and env overrides
    pub fn entries_mut(&mut self) -> [(&'static str, &mut MacroRatio); 6] {
        [
            ("balanced", &mut self.balanced),
            ("low_carb", &mut self.low_carb),
            ("low_sodium", &mut self.low_sodium),
            ("lose", &mut self.lose),
            ("maintain", &mut self.maintain),
            ("gain", &mut self.gain),
        ]
    }

    /// Validate every ratio tuple
    ///
    /// # Errors
    ///
    /// Returns the first tuple failure from [`MacroRatio::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("balanced", &self.balanced),
            ("low_carb", &self.low_carb),
            ("low_sodium", &self.low_sodium),
            ("lose", &self.lose),
            ("maintain", &self.maintain),
            ("gain", &self.gain),
        ];
        for (name, ratio) in entries {
            ratio.validate(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_validate() {
        BmrConfig::default().validate().unwrap();
        ActivityFactorsConfig::default().validate().unwrap();
        GoalAdjustmentConfig::default().validate().unwrap();
        BmiThresholdsConfig::default().validate().unwrap();
        DietRatioTable::default().validate().unwrap();
    }

    #[test]
    fn test_ratio_not_summing_to_one_is_rejected() {
        let err = MacroRatio::new(0.3, 0.3, 0.3).validate("custom").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeights(_)));
    }

    #[test]
    fn test_ratio_within_tolerance_is_accepted() {
        MacroRatio::new(0.3, 0.3, 0.400_000_5)
            .validate("custom")
            .unwrap();
    }

    #[test]
    fn test_negative_fraction_is_rejected() {
        let err = MacroRatio::new(-0.1, 0.6, 0.5).validate("custom").unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }

    #[test]
    fn test_activity_factors_must_ascend() {
        let config = ActivityFactorsConfig {
            moderate: 1.8,
            ..ActivityFactorsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_non_finite_coefficients_are_rejected() {
        for bmr in [
            BmrConfig {
                msj_male_constant: f64::NAN,
                ..BmrConfig::default()
            },
            BmrConfig {
                msj_age_coef: f64::INFINITY,
                ..BmrConfig::default()
            },
            BmrConfig {
                msj_weight_coef: f64::NAN,
                ..BmrConfig::default()
            },
        ] {
            assert!(matches!(
                bmr.validate(),
                Err(ConfigError::ValueOutOfRange(_))
            ));
        }

        let activity = ActivityFactorsConfig {
            sedentary: f64::NAN,
            ..ActivityFactorsConfig::default()
        };
        assert!(matches!(
            activity.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let goal = GoalAdjustmentConfig {
            surplus_kcal: f64::INFINITY,
            ..GoalAdjustmentConfig::default()
        };
        assert!(goal.validate().is_err());

        let bmi = BmiThresholdsConfig {
            overweight_max: f64::INFINITY,
            ..BmiThresholdsConfig::default()
        };
        assert!(bmi.validate().is_err());
    }

    #[test]
    fn test_bmi_thresholds_must_ascend() {
        let config = BmiThresholdsConfig {
            normal_max: 31.0,
            ..BmiThresholdsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
