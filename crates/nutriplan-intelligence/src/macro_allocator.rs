// ABOUTME: Macronutrient allocation from a calorie target and a validated ratio table
// ABOUTME: Converts calorie shares into whole grams of protein, fat and carbohydrate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Grams are truncated, not rounded: `protein_g = floor(kcal * p / 4)`,
//! `fat_g = floor(kcal * f / 9)`, `carbs_g = floor(kcal * c / 4)`. Each macro
//! therefore loses strictly less than one gram, which bounds the gap between
//! the target and the split's energy below 4 + 9 + 4 = 17 kcal.

use nutriplan_core::models::{DietCategory, Goal};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DietRatioTable, MacroRatio};
use crate::physiological_constants::energy_density::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};

/// Daily macronutrient grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein (grams)
    pub protein_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
}

impl MacroSplit {
    /// Energy of the split using Atwater factors (kcal), saturating at `u32::MAX`
    #[must_use]
    pub fn total_kcal(&self) -> u32 {
        let kcal = f64::from(self.protein_g) * PROTEIN_KCAL_PER_G
            + f64::from(self.fat_g) * FAT_KCAL_PER_G
            + f64::from(self.carbs_g) * CARBS_KCAL_PER_G;
        kcal.min(f64::from(u32::MAX)) as u32
    }
}

/// What the ratio for a split was chosen from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MacroBasis {
    /// Diet category ratio (recommendation pipeline)
    Diet(DietCategory),
    /// Goal ratio (direct pipeline, no medical diet)
    Goal(Goal),
}

/// Convert a calorie target into grams for one ratio tuple
#[must_use]
pub fn allocate_macros(calories: u32, ratio: &MacroRatio) -> MacroSplit {
    let kcal = f64::from(calories);
    MacroSplit {
        protein_g: (kcal * ratio.protein / PROTEIN_KCAL_PER_G).floor() as u32,
        fat_g: (kcal * ratio.fat / FAT_KCAL_PER_G).floor() as u32,
        carbs_g: (kcal * ratio.carbs / CARBS_KCAL_PER_G).floor() as u32,
    }
}

/// Allocator over a ratio table validated at construction
#[derive(Debug, Clone)]
pub struct MacroAllocator {
    table: DietRatioTable,
}

impl MacroAllocator {
    /// Validate the table once and wrap it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` or `ConfigError::ValueOutOfRange`
    /// if any ratio tuple is malformed.
    pub fn new(table: DietRatioTable) -> Result<Self, ConfigError> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Ratio selected for a basis
    #[must_use]
    pub const fn ratio_for(&self, basis: MacroBasis) -> MacroRatio {
        match basis {
            MacroBasis::Diet(category) => self.table.for_category(category),
            MacroBasis::Goal(goal) => self.table.for_goal(goal),
        }
    }

    /// Split a calorie target according to a basis
    #[must_use]
    pub fn allocate(&self, calories: u32, basis: MacroBasis) -> MacroSplit {
        allocate_macros(calories, &self.ratio_for(basis))
    }
}
