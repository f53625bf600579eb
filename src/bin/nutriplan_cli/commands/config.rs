// ABOUTME: Config subcommand printing the validated configuration
// ABOUTME: Shows defaults merged with NUTRIPLAN_* environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::planner::NutritionPlanner;

pub fn run(planner: &NutritionPlanner) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(planner.config())?);
    Ok(())
}
