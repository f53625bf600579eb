// ABOUTME: Core types for the nutriplan diet planning engine
// ABOUTME: Foundation crate with error handling and validated domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types for the nutriplan engine. It
//! changes rarely, so the calculator crate and the binaries can compile
//! against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Person profile inputs and diet recommendation vocabulary

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`PersonProfile`, `DietCategory`, `MealPlan`, ...)
pub mod models;
