// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Renders a nutrition report as plain text sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::intelligence::macro_allocator::MacroBasis;
use nutriplan::intelligence::report::Report;
use nutriplan::intelligence::resolver::CategorySource;

/// Print a report as text
pub fn display_report(report: &Report) {
    let profile = &report.profile;
    println!("\nNutrition Report");
    println!("{}", "=".repeat(60));
    println!(
        "Profile: {} y, {}, {:.1} kg, {:.1} cm, {}, goal {}",
        profile.age(),
        profile.sex(),
        profile.weight_kg(),
        profile.height_cm(),
        profile.activity_level(),
        profile.goal(),
    );
    println!("Condition: {}", profile.condition());

    println!("\nEnergy");
    println!("   BMR:    {:.1} kcal/day", report.energy.bmr);
    println!("   TDEE:   {:.1} kcal/day", report.energy.tdee);
    println!("   Target: {} kcal/day", report.energy.target_calories);

    let basis = match report.macro_basis {
        MacroBasis::Diet(category) => format!("{} diet", category.label()),
        MacroBasis::Goal(goal) => format!("goal {goal}"),
    };
    println!("\nMacronutrients ({basis})");
    println!("   Protein: {} g", report.macros.protein_g);
    println!("   Fat:     {} g", report.macros.fat_g);
    println!("   Carbs:   {} g", report.macros.carbs_g);

    println!("\nBMI: {:.2} ({})", report.bmi.value, report.bmi.category.label());

    if let Some(recommendation) = &report.recommendation {
        let source = match &recommendation.source {
            CategorySource::RuleTable => "rule table".to_owned(),
            CategorySource::Predictor { name } => format!("predictor {name}"),
            CategorySource::Fallback { reason } => format!("rule table fallback: {reason}"),
        };
        println!(
            "\nRecommended diet: {} ({source})",
            recommendation.category.label()
        );
        let plan = &recommendation.meal_plan;
        println!("   Breakfast: {}", plan.breakfast);
        println!("   Lunch:     {}", plan.lunch);
        println!("   Dinner:    {}", plan.dinner);
        println!("   Snack:     {}", plan.snack);
    }
    println!("{}", "=".repeat(60));
}
