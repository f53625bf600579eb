// ABOUTME: Main library entry point for the nutriplan diet planning engine
// ABOUTME: Re-exports the core and calculator crates and adds logging and the planner service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Daily calorie, macronutrient and diet recommendation engine.
//!
//! ## Architecture
//!
//! - **`nutriplan-core`**: errors and validated person/diet models
//! - **`nutriplan-intelligence`**: pure calculators, configuration and the
//!   diet category resolver
//! - **this crate**: structured logging, the [`planner::NutritionPlanner`]
//!   service and the `nutriplan-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::errors::AppResult;
//! use nutriplan::intelligence::report::PlanMode;
//! use nutriplan::planner::{NutritionPlanner, ProfileInput};
//!
//! fn main() -> AppResult<()> {
//!     let planner = NutritionPlanner::from_env(None)?;
//!     let profile = planner.profile_from_input(&ProfileInput {
//!         age: 30,
//!         sex: "Male".to_owned(),
//!         weight_kg: 80.0,
//!         height_cm: 180.0,
//!         activity: Some("Moderate".to_owned()),
//!         goal: Some("Lose".to_owned()),
//!         condition: Some("Diabetes".to_owned()),
//!     })?;
//!     let report = planner.plan(&profile, PlanMode::Recommend)?;
//!     println!("{} kcal", report.energy.target_calories);
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `nutriplan-core`)
pub use nutriplan_core::errors;

/// Person profile and diet models (re-exported from `nutriplan-core`)
pub use nutriplan_core::models;

/// Calculators, configuration and resolver
pub use nutriplan_intelligence as intelligence;

/// Service names and tracing targets
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Planner service with degraded-mode logging
pub mod planner;
