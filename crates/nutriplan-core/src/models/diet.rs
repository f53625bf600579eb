// ABOUTME: Diet recommendation models: diet category, BMI category and meal plan
// ABOUTME: Closed enums with dataset label round-tripping used by predictors and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diet category driving macro ratios and meal plan selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    /// General balanced diet
    #[default]
    Balanced,
    /// Reduced carbohydrate diet
    LowCarb,
    /// Reduced sodium diet
    LowSodium,
}

impl DietCategory {
    /// Every category
    pub const ALL: [Self; 3] = [Self::Balanced, Self::LowCarb, Self::LowSodium];

    /// Dataset label (`Diet_Recommendation` column)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::LowCarb => "Low_Carb",
            Self::LowSodium => "Low_Sodium",
        }
    }

    /// Parse a dataset label, accepting spacing and case variants
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "balanced" => Some(Self::Balanced),
            "lowcarb" => Some(Self::LowCarb),
            "lowsodium" => Some(Self::LowSodium),
            _ => None,
        }
    }

    /// Parse a dataset label, falling back to `Balanced`
    #[must_use]
    pub fn from_label_lossy(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or_default()
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below the normal range
    Underweight,
    /// Healthy range
    Normal,
    /// Above normal, below obese
    Overweight,
    /// Obese range
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of sample meals for a diet category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Breakfast suggestion
    pub breakfast: String,
    /// Lunch suggestion
    pub lunch: String,
    /// Dinner suggestion
    pub dinner: String,
    /// Snack suggestion
    pub snack: String,
}

impl MealPlan {
    /// Build a plan from its four meals
    pub fn new(
        breakfast: impl Into<String>,
        lunch: impl Into<String>,
        dinner: impl Into<String>,
        snack: impl Into<String>,
    ) -> Self {
        Self {
            breakfast: breakfast.into(),
            lunch: lunch.into(),
            dinner: dinner.into(),
            snack: snack.into(),
        }
    }
}
