// ABOUTME: Diet category resolution via rule table or an external predictor with fallback
// ABOUTME: Never fails: predictor errors degrade to the rule table and are reported as such
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Category Resolver
//!
//! Two interchangeable strategies produce a [`DietCategory`]:
//!
//! - **Rule table**: Diabetes -> `LowCarb`, Hypertension -> `LowSodium`,
//!   anything else -> `Balanced`.
//! - **Learned**: an external [`DietCategoryPredictor`]. Conditions are first
//!   normalized against the predictor's [`ConditionVocabulary`] so labels it
//!   was never trained on arrive as `"None"`.
//!
//! A failing or timed-out predictor never surfaces as an error. The resolver
//! answers from the rule table and marks the resolution with
//! [`CategorySource::Fallback`]; logging that degraded event is the caller's
//! job.

mod predictor;
mod timeout;
mod vocabulary;

pub use predictor::{
    rule_based_category, DietCategoryPredictor, PredictionError, PredictionRequest,
    RuleBasedPredictor,
};
pub use timeout::{TimeoutPredictor, DEFAULT_PREDICTOR_WORKERS};
pub use vocabulary::ConditionVocabulary;

use nutriplan_core::models::{DietCategory, MedicalCondition, PersonProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::bmi_classifier::bmi_value;
use crate::config::{ResolverConfig, ResolverStrategyKind};

/// Where a resolved category came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategorySource {
    /// Rule table, by configuration
    RuleTable,
    /// External predictor answered
    Predictor {
        /// Predictor name
        name: String,
    },
    /// Learned strategy was selected but the rule table answered instead
    Fallback {
        /// Why the predictor was not used
        reason: String,
    },
}

/// Resolved category and its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResolution {
    /// Diet category
    pub category: DietCategory,
    /// Provenance
    pub source: CategorySource,
}

impl CategoryResolution {
    /// Reason for a degraded resolution, if any
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.source {
            CategorySource::Fallback { reason } => Some(reason.as_str()),
            CategorySource::RuleTable | CategorySource::Predictor { .. } => None,
        }
    }
}

#[derive(Clone)]
enum Strategy {
    RuleBased,
    Learned(Option<Arc<dyn DietCategoryPredictor>>),
}

/// Resolves diet categories for profiles or raw prediction requests
#[derive(Clone)]
pub struct DietCategoryResolver {
    strategy: Strategy,
    vocabulary: ConditionVocabulary,
}

impl fmt::Debug for DietCategoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match &self.strategy {
            Strategy::RuleBased => "rule_based".to_owned(),
            Strategy::Learned(Some(p)) => format!("learned({})", p.name()),
            Strategy::Learned(None) => "learned(unconfigured)".to_owned(),
        };
        f.debug_struct("DietCategoryResolver")
            .field("strategy", &strategy)
            .field("vocabulary", &self.vocabulary.labels())
            .finish()
    }
}

impl Default for DietCategoryResolver {
    fn default() -> Self {
        Self::rule_based()
    }
}

impl DietCategoryResolver {
    /// Resolver that only uses the rule table
    #[must_use]
    pub fn rule_based() -> Self {
        Self {
            strategy: Strategy::RuleBased,
            vocabulary: ConditionVocabulary::default(),
        }
    }

    /// Resolver delegating to a predictor with rule-table fallback
    ///
    /// Every call to `predictor` is bounded by `timeout` through a
    /// [`TimeoutPredictor`].
    #[must_use]
    pub fn learned(
        predictor: Arc<dyn DietCategoryPredictor>,
        vocabulary: ConditionVocabulary,
        timeout: Duration,
    ) -> Self {
        let bounded: Arc<dyn DietCategoryPredictor> =
            Arc::new(TimeoutPredictor::new(predictor, timeout));
        Self {
            strategy: Strategy::Learned(Some(bounded)),
            vocabulary,
        }
    }

    /// Build from configuration
    ///
    /// With the learned strategy the predictor is wrapped in a
    /// [`TimeoutPredictor`] using the configured bound. Selecting the learned
    /// strategy without supplying a predictor yields a resolver whose every
    /// answer is a rule-table fallback.
    #[must_use]
    pub fn from_config(
        config: &ResolverConfig,
        predictor: Option<Arc<dyn DietCategoryPredictor>>,
    ) -> Self {
        let vocabulary = ConditionVocabulary::new(config.condition_vocabulary.iter().cloned());
        match (config.strategy, predictor) {
            (ResolverStrategyKind::RuleBased, _) => Self {
                strategy: Strategy::RuleBased,
                vocabulary,
            },
            (ResolverStrategyKind::Learned, Some(inner)) => {
                Self::learned(inner, vocabulary, config.predictor_timeout())
            }
            (ResolverStrategyKind::Learned, None) => Self {
                strategy: Strategy::Learned(None),
                vocabulary,
            },
        }
    }

    /// Whether this resolver consults an external predictor
    #[must_use]
    pub const fn is_learned(&self) -> bool {
        matches!(self.strategy, Strategy::Learned(_))
    }

    /// Resolve the category for a profile
    #[must_use]
    pub fn resolve(&self, profile: &PersonProfile) -> CategoryResolution {
        if !self.is_learned() {
            return CategoryResolution {
                category: rule_based_category(profile.condition()),
                source: CategorySource::RuleTable,
            };
        }
        match bmi_value(profile.weight_kg(), profile.height_cm()) {
            Ok(bmi) => self.resolve_request(&PredictionRequest {
                age: profile.age(),
                weight_kg: profile.weight_kg(),
                bmi,
                condition: profile.condition().label().to_owned(),
            }),
            Err(e) => Self::fallback(profile.condition(), e.to_string()),
        }
    }

    /// Resolve the category for raw features (e.g. a batch row)
    #[must_use]
    pub fn resolve_request(&self, request: &PredictionRequest) -> CategoryResolution {
        let condition = MedicalCondition::from_str_lossy(&request.condition);
        match &self.strategy {
            Strategy::RuleBased => CategoryResolution {
                category: rule_based_category(condition),
                source: CategorySource::RuleTable,
            },
            Strategy::Learned(None) => {
                Self::fallback(condition, "no predictor configured".to_owned())
            }
            Strategy::Learned(Some(predictor)) => {
                let normalized = PredictionRequest {
                    condition: self.vocabulary.normalize(&request.condition),
                    ..request.clone()
                };
                match predictor.predict(&normalized) {
                    Ok(category) => CategoryResolution {
                        category,
                        source: CategorySource::Predictor {
                            name: predictor.name().to_owned(),
                        },
                    },
                    Err(e) => Self::fallback(condition, e.to_string()),
                }
            }
        }
    }

    fn fallback(condition: MedicalCondition, reason: String) -> CategoryResolution {
        CategoryResolution {
            category: rule_based_category(condition),
            source: CategorySource::Fallback { reason },
        }
    }
}
