// ABOUTME: End-to-end tests for report assembly through the planner service
// ABOUTME: Covers the reference scenario, both pipelines, batch order and loose input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::config::NutritionConfig;
use nutriplan::intelligence::macro_allocator::{MacroBasis, MacroSplit};
use nutriplan::intelligence::meal_plans::MealPlanCatalog;
use nutriplan::intelligence::report::{PlanMode, ReportAssembler};
use nutriplan::intelligence::resolver::{CategorySource, DietCategoryResolver};
use nutriplan::models::{
    ActivityLevel, BmiCategory, DietCategory, Goal, MealPlan, MedicalCondition, Sex,
};
use nutriplan::planner::{NutritionPlanner, ProfileInput};

mod common;

fn planner() -> NutritionPlanner {
    common::init_test_logging();
    NutritionPlanner::new(NutritionConfig::default(), None).unwrap()
}

#[test]
fn test_reference_scenario_recommendation() {
    let report = planner()
        .plan(&common::diabetic_male(), PlanMode::Recommend)
        .unwrap();

    // 800 + 1125 - 150 + 5
    assert!((report.energy.bmr - 1780.0).abs() < 1e-9);
    assert!((report.energy.tdee - 2759.0).abs() < 1e-6);
    assert_eq!(report.energy.target_calories, 2259);

    assert_eq!(report.macro_basis, MacroBasis::Diet(DietCategory::LowCarb));
    assert_eq!(
        report.macros,
        MacroSplit {
            protein_g: 169,
            fat_g: 125,
            carbs_g: 112
        }
    );

    assert_eq!(report.bmi.category, BmiCategory::Normal);

    let recommendation = report.recommendation.as_ref().unwrap();
    assert_eq!(recommendation.category, DietCategory::LowCarb);
    assert_eq!(recommendation.source, CategorySource::RuleTable);
    assert_eq!(
        &recommendation.meal_plan,
        MealPlanCatalog::default().lookup(DietCategory::LowCarb)
    );
    assert!(report.fallback_reason().is_none());
}

#[test]
fn test_reference_scenario_direct() {
    let report = planner()
        .plan(&common::diabetic_male(), PlanMode::Direct)
        .unwrap();

    assert_eq!(report.energy.target_calories, 2259);
    assert_eq!(report.macro_basis, MacroBasis::Goal(Goal::Lose));
    // Lose ratio 0.40 / 0.35 / 0.25
    assert_eq!(
        (report.macros.protein_g, report.macros.fat_g, report.macros.carbs_g),
        (225, 87, 141)
    );
    assert!(report.recommendation.is_none());
}

#[test]
fn test_macros_stay_within_target() {
    let report = planner()
        .plan(&common::diabetic_male(), PlanMode::Recommend)
        .unwrap();
    let kcal = report.macros.total_kcal();
    assert!(kcal <= report.energy.target_calories);
    assert!(report.energy.target_calories - kcal < 17);
}

#[test]
fn test_custom_catalog_falls_back_to_balanced() {
    let balanced = MealPlan::new("Porridge", "Soup", "Stew", "Fruit");
    let assembler =
        ReportAssembler::new(NutritionConfig::default(), DietCategoryResolver::rule_based())
            .unwrap()
            .with_catalog(MealPlanCatalog::new(balanced.clone()));

    let report = assembler
        .assemble(&common::diabetic_male(), PlanMode::Recommend)
        .unwrap();

    let recommendation = report.recommendation.unwrap();
    assert_eq!(recommendation.category, DietCategory::LowCarb);
    assert_eq!(recommendation.meal_plan, balanced);
}

#[test]
fn test_batch_preserves_input_order() {
    let planner = planner();
    let profiles: Vec<_> = (20..60)
        .map(|age| {
            common::profile(
                age,
                if age % 2 == 0 { Sex::Male } else { Sex::Female },
                60.0 + f64::from(age),
                170.0,
                ActivityLevel::Active,
                Goal::Gain,
                MedicalCondition::Hypertension,
            )
        })
        .collect();

    let reports = planner.plan_batch(&profiles, PlanMode::Recommend);

    assert_eq!(reports.len(), profiles.len());
    for (profile, report) in profiles.iter().zip(&reports) {
        let report = report.as_ref().unwrap();
        assert_eq!(&report.profile, profile);
        let single = planner.plan(profile, PlanMode::Recommend).unwrap();
        assert_eq!(report, &single);
    }
}

#[test]
fn test_profile_from_loose_input() {
    let planner = planner();
    let profile = planner
        .profile_from_input(&ProfileInput {
            age: 52,
            sex: "F".to_owned(),
            weight_kg: 68.0,
            height_cm: 160.0,
            activity: Some("2".to_owned()),
            goal: Some("gain".to_owned()),
            condition: Some("HYPERTENSION".to_owned()),
        })
        .unwrap();

    assert_eq!(profile.sex(), Sex::Female);
    assert_eq!(profile.activity_level(), ActivityLevel::Moderate);
    assert_eq!(profile.goal(), Goal::Gain);
    assert_eq!(profile.condition(), MedicalCondition::Hypertension);
}

#[test]
fn test_missing_goal_is_suggested_from_bmi() {
    let planner = planner();
    let input = |weight_kg: f64| ProfileInput {
        age: 35,
        sex: "male".to_owned(),
        weight_kg,
        height_cm: 200.0,
        ..ProfileInput::default()
    };

    // 200 cm makes BMI a quarter of the weight
    let obese = planner.profile_from_input(&input(130.0)).unwrap();
    assert_eq!(obese.goal(), Goal::Lose);
    let normal = planner.profile_from_input(&input(84.0)).unwrap();
    assert_eq!(normal.goal(), Goal::Maintain);
    let underweight = planner.profile_from_input(&input(70.0)).unwrap();
    assert_eq!(underweight.goal(), Goal::Gain);

    assert_eq!(normal.activity_level(), ActivityLevel::Sedentary);
    assert_eq!(normal.condition(), MedicalCondition::None);
}

#[test]
fn test_invalid_input_is_rejected() {
    let planner = planner();
    let err = planner
        .profile_from_input(&ProfileInput {
            age: 0,
            sex: "male".to_owned(),
            weight_kg: 70.0,
            height_cm: 175.0,
            goal: Some("maintain".to_owned()),
            ..ProfileInput::default()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = planner
        .profile_from_input(&ProfileInput {
            age: 30,
            sex: "male".to_owned(),
            weight_kg: -70.0,
            height_cm: 175.0,
            ..ProfileInput::default()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_report_serializes_to_json() {
    let report = planner()
        .plan(&common::diabetic_male(), PlanMode::Direct)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["energy"]["target_calories"], 2259);
    assert!(json["recommendation"].is_null());
}
