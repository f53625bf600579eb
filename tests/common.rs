// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, profile builders and scripted predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use nutriplan::models::{
    ActivityLevel, DietCategory, Goal, MedicalCondition, PersonProfile, PersonProfileParams, Sex,
};
use nutriplan::intelligence::resolver::{
    DietCategoryPredictor, PredictionError, PredictionRequest,
};
use std::env;
use std::sync::{Mutex, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default is quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with everything spelled out
pub fn profile(
    age: u32,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    condition: MedicalCondition,
) -> PersonProfile {
    PersonProfile::new(PersonProfileParams {
        age,
        sex,
        weight_kg,
        height_cm,
        activity_level,
        goal,
        condition,
    })
    .unwrap()
}

/// 30 y male, 80 kg, 180 cm, moderate, losing weight, diabetic
pub fn diabetic_male() -> PersonProfile {
    profile(
        30,
        Sex::Male,
        80.0,
        180.0,
        ActivityLevel::Moderate,
        Goal::Lose,
        MedicalCondition::Diabetes,
    )
}

/// Predictor that always answers the same way and records what it saw
pub struct ScriptedPredictor {
    answer: Result<DietCategory, PredictionError>,
    seen: Mutex<Vec<PredictionRequest>>,
}

impl ScriptedPredictor {
    pub fn answering(category: DietCategory) -> Self {
        Self {
            answer: Ok(category),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: PredictionError) -> Self {
        Self {
            answer: Err(error),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_conditions(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.condition.clone())
            .collect()
    }
}

impl DietCategoryPredictor for ScriptedPredictor {
    fn name(&self) -> &str {
        "scripted"
    }

    fn predict(&self, request: &PredictionRequest) -> Result<DietCategory, PredictionError> {
        self.seen.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}
