// ABOUTME: Person profile model with validated anthropometric inputs
// ABOUTME: Sex, activity level, goal and medical condition enums with lossy label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Lowercase a label and drop separators so "Very Active", "very_active" and
/// "VeryActive" compare equal.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Biological sex used by the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Parse a sex label, treating anything unrecognized as `Male`.
    ///
    /// The male constant is the documented fallback for missing or
    /// differently formatted values in source data.
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "female" | "f" | "woman" => Self::Female,
            _ => Self::Male,
        }
    }

    /// Dataset label (`Male` / `Female`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Physical activity level driving the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard daily training or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Every level in ascending multiplier order
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse an activity label or menu code (`1`-`4`).
    ///
    /// Unknown labels such as "Extreme" resolve to `Sedentary`.
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "moderate" | "moderatelyactive" | "2" => Self::Moderate,
            "active" | "3" => Self::Active,
            "veryactive" | "4" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// Dataset label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
        }
    }
}

/// Body-weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Every goal
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Parse a goal label or menu code (`1` lose, `2` maintain, `3` gain).
    ///
    /// Anything unrecognized is treated as `Maintain`.
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "lose" | "loseweight" | "weightloss" | "1" => Self::Lose,
            "gain" | "gainmuscle" | "musclegain" | "3" => Self::Gain,
            _ => Self::Maintain,
        }
    }

    /// Dataset label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lose => "Lose Weight",
            Self::Maintain => "Maintain",
            Self::Gain => "Gain Muscle",
        }
    }
}

/// Declared medical condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// No relevant condition
    #[default]
    None,
    /// Diabetes
    Diabetes,
    /// Hypertension
    Hypertension,
    /// Obesity
    Obesity,
}

impl MedicalCondition {
    /// Parse a condition label; unknown text becomes `None`
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "diabetes" => Self::Diabetes,
            "hypertension" => Self::Hypertension,
            "obesity" => Self::Obesity,
            _ => Self::None,
        }
    }

    /// Dataset label (`Disease_Type` column)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::Obesity => "Obesity",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })+
    };
}

display_via_label!(Sex, ActivityLevel, Goal, MedicalCondition);

/// Unvalidated profile fields, as read from user or batch input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonProfileParams {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Body-weight goal
    pub goal: Goal,
    /// Declared medical condition
    #[serde(default)]
    pub condition: MedicalCondition,
}

/// Validated person profile
///
/// Fields are private: the only ways to obtain a profile are
/// [`PersonProfile::new`] and deserialization, both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersonProfileParams")]
pub struct PersonProfile {
    age: u32,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    condition: MedicalCondition,
}

impl PersonProfile {
    /// Validate raw parameters into a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when age is zero or weight/height are not
    /// positive finite numbers.
    pub fn new(params: PersonProfileParams) -> AppResult<Self> {
        if params.age == 0 {
            return Err(AppError::invalid_input("Age must be a positive integer"));
        }
        if !params.weight_kg.is_finite() || params.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        if !params.height_cm.is_finite() || params.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be positive"));
        }

        Ok(Self {
            age: params.age,
            sex: params.sex,
            weight_kg: params.weight_kg,
            height_cm: params.height_cm,
            activity_level: params.activity_level,
            goal: params.goal,
            condition: params.condition,
        })
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Biological sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Body-weight goal
    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }

    /// Declared medical condition
    #[must_use]
    pub const fn condition(&self) -> MedicalCondition {
        self.condition
    }
}

impl TryFrom<PersonProfileParams> for PersonProfile {
    type Error = AppError;

    fn try_from(params: PersonProfileParams) -> AppResult<Self> {
        Self::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PersonProfileParams {
        PersonProfileParams {
            age: 30,
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            condition: MedicalCondition::Diabetes,
        }
    }

    #[test]
    fn test_valid_profile() {
        let profile = PersonProfile::new(params()).unwrap();
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.condition(), MedicalCondition::Diabetes);
    }

    #[test]
    fn test_rejects_zero_age_and_non_positive_measurements() {
        let mut p = params();
        p.age = 0;
        assert!(PersonProfile::new(p).is_err());

        let mut p = params();
        p.weight_kg = 0.0;
        assert!(PersonProfile::new(p).is_err());

        let mut p = params();
        p.height_cm = -170.0;
        assert!(PersonProfile::new(p).is_err());

        let mut p = params();
        p.weight_kg = f64::NAN;
        assert!(PersonProfile::new(p).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"age":30,"sex":"female","weight_kg":-1.0,"height_cm":165.0,
            "activity_level":"active","goal":"maintain"}"#;
        assert!(serde_json::from_str::<PersonProfile>(json).is_err());

        let json = r#"{"age":30,"sex":"female","weight_kg":60.0,"height_cm":165.0,
            "activity_level":"very_active","goal":"gain"}"#;
        let profile: PersonProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level(), ActivityLevel::VeryActive);
        assert_eq!(profile.condition(), MedicalCondition::None);
    }

    #[test]
    fn test_lossy_label_parsing() {
        assert_eq!(ActivityLevel::from_str_lossy("Extreme"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str_lossy("very active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_str_lossy("2"), ActivityLevel::Moderate);
        assert_eq!(Goal::from_str_lossy("Lose Weight"), Goal::Lose);
        assert_eq!(Goal::from_str_lossy("3"), Goal::Gain);
        assert_eq!(Goal::from_str_lossy("whatever"), Goal::Maintain);
        assert_eq!(Sex::from_str_lossy(" FEMALE "), Sex::Female);
        assert_eq!(Sex::from_str_lossy("unknown"), Sex::Male);
        assert_eq!(
            MedicalCondition::from_str_lossy("Asthma"),
            MedicalCondition::None
        );
    }
}
