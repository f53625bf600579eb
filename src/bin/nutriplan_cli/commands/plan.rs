// ABOUTME: Plan subcommand building a nutrition report from command-line input
// ABOUTME: Validates the profile, runs the selected pipeline and renders text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::intelligence::report::PlanMode;
use nutriplan::planner::{NutritionPlanner, ProfileInput};

use crate::helpers::display::display_report;
use crate::OutputFormat;

/// Raw `plan` arguments
pub struct PlanArgs {
    pub age: u32,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub condition: Option<String>,
}

/// Assemble and print a report
pub fn run(
    planner: &NutritionPlanner,
    args: &PlanArgs,
    mode: PlanMode,
    format: OutputFormat,
) -> Result<()> {
    let profile = planner.profile_from_input(&ProfileInput {
        age: args.age,
        sex: args.sex.clone(),
        weight_kg: args.weight,
        height_cm: args.height,
        activity: args.activity.clone(),
        goal: args.goal.clone(),
        condition: args.condition.clone(),
    })?;
    let report = planner.plan(&profile, mode)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => display_report(&report),
    }
    Ok(())
}
