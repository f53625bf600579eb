// ABOUTME: Configuration error types for nutrition table validation
// ABOUTME: Defines error variants for invalid ranges, ratio sums and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for nutrition table validation.

use nutriplan_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or multipliers not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Environment variable set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ratios don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_) | ConfigError::InvalidWeights(_) => {
                ErrorCode::InvalidInput
            }
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
