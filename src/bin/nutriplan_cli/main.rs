// ABOUTME: Nutriplan CLI - command-line front end for the nutrition planner
// ABOUTME: Prints calorie/macro reports, BMI and the effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full recommendation report
//! nutriplan-cli plan --age 30 --sex male --weight 80 --height 180 \
//!     --activity moderate --goal lose --condition diabetes
//!
//! # Goal-based macros only, as JSON
//! nutriplan-cli plan --age 30 --sex female --weight 60 --height 165 --mode direct --format json
//!
//! # BMI only
//! nutriplan-cli bmi --weight 80 --height 180
//!
//! # Effective configuration after NUTRIPLAN_* overrides
//! nutriplan-cli config
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use nutriplan::intelligence::report::PlanMode;
use nutriplan::logging::LoggingConfig;
use nutriplan::planner::NutritionPlanner;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan daily calorie and diet planner",
    long_about = "Estimates BMR, TDEE and a goal-adjusted calorie target, splits it into macronutrients and recommends a diet category with a sample meal plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a nutrition report for one person
    Plan {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex (male/female, m/f)
        #[arg(long)]
        sex: String,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Activity level (sedentary, moderate, active, very_active or 1-4)
        #[arg(long)]
        activity: Option<String>,

        /// Goal (lose, maintain, gain or 1-3); suggested from BMI when omitted
        #[arg(long)]
        goal: Option<String>,

        /// Medical condition (none, diabetes, hypertension, obesity)
        #[arg(long)]
        condition: Option<String>,

        /// Pipeline to run
        #[arg(long, value_enum, default_value_t = ModeArg::Recommend)]
        mode: ModeArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Calculate and classify BMI
    Bmi {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Goal-based macros, no diet recommendation
    Direct,
    /// Diet category, diet macros and meal plan
    Recommend,
}

impl From<ModeArg> for PlanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Direct => Self::Direct,
            ModeArg::Recommend => Self::Recommend,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let planner = NutritionPlanner::from_env(None)?;
    debug!("Configuration validated");

    match cli.command {
        Command::Plan {
            age,
            sex,
            weight,
            height,
            activity,
            goal,
            condition,
            mode,
            format,
        } => {
            let input = commands::plan::PlanArgs {
                age,
                sex,
                weight,
                height,
                activity,
                goal,
                condition,
            };
            commands::plan::run(&planner, &input, mode.into(), format)?;
        }
        Command::Bmi { weight, height } => {
            commands::bmi::run(&planner, weight, height)?;
        }
        Command::Config => {
            commands::config::run(&planner)?;
        }
    }

    Ok(())
}
