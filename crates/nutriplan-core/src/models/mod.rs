// ABOUTME: Core data models for nutriplan
// ABOUTME: Re-exports person profile inputs and diet recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `PersonProfile`: validated anthropometric input for one person
//! - `DietCategory`, `BmiCategory`, `MealPlan`: closed recommendation vocabulary

mod diet;
mod profile;

pub use diet::{BmiCategory, DietCategory, MealPlan};
pub use profile::{ActivityLevel, Goal, MedicalCondition, PersonProfile, PersonProfileParams, Sex};
