// ABOUTME: Unified error type and error codes shared by every nutriplan crate
// ABOUTME: AppError carries a stable ErrorCode plus message and optional source chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Calculators return [`AppResult`] so that callers can match on a stable
//! [`ErrorCode`] instead of parsing messages. Only genuinely invalid numeric
//! input becomes an error; unknown labels are resolved through documented
//! defaults by the model parsers and never reach this module.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout nutriplan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation (non-positive weight, malformed ratio table, ...)
    InvalidInput = 3000,
    /// Value parsed but lies outside the accepted range
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration could not be parsed
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Report or config serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// User-facing description of this error family
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether this code denotes a caller mistake rather than a system fault
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(self, Self::InvalidInput | Self::ValueOutOfRange)
    }
}

/// Unified error type for nutriplan
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
