// ABOUTME: BMI subcommand printing the body mass index and its category
// ABOUTME: Uses the configured half-open thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::intelligence::bmi_classifier::suggest_goal;
use nutriplan::planner::NutritionPlanner;

pub fn run(planner: &NutritionPlanner, weight: f64, height: f64) -> Result<()> {
    let bmi = planner.bmi(weight, height)?;
    println!("BMI: {:.2} ({})", bmi.value, bmi.category.label());
    println!("Suggested goal: {}", suggest_goal(bmi.category));
    Ok(())
}
