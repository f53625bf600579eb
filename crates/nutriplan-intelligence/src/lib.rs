// ABOUTME: Nutrition calculation engine for nutriplan
// ABOUTME: Energy, macro, BMI and diet category calculators composed into reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Intelligence
//!
//! Pure, synchronous calculators over a validated [`config::NutritionConfig`].
//! Components, leaves first:
//!
//! 1. [`bmi_classifier`]: BMI value and half-open category table
//! 2. [`meal_plans`]: static meal plans per diet category
//! 3. [`nutrition_calculator`]: Mifflin-St Jeor BMR, TDEE, target calories
//! 4. [`resolver`]: diet category by rule table or external predictor
//! 5. [`macro_allocator`]: calorie target to protein/fat/carb grams
//! 6. [`report`]: composes the above into a [`report::Report`]
//!
//! Nothing here performs I/O. The only blocking point is an external
//! predictor, which is always bounded by [`resolver::TimeoutPredictor`].

/// Configuration tables, env overrides and validation
pub mod config;

/// Physiological constants shared by the calculators
pub mod physiological_constants;

/// BMI calculation and classification
pub mod bmi_classifier;

/// BMR, TDEE and calorie target
pub mod nutrition_calculator;

/// Macronutrient allocation
pub mod macro_allocator;

/// Meal plan catalog
pub mod meal_plans;

/// Diet category resolution
pub mod resolver;

/// Report assembly
pub mod report;
