// ABOUTME: Physiological constants used by the nutrition calculators
// ABOUTME: Atwater energy densities for protein, fat and carbohydrate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Atwater general factors (kcal per gram)
pub mod energy_density {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
}

/// Unit conversions
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_M: f64 = 100.0;
}
