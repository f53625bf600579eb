// ABOUTME: System-wide constants for the nutriplan binaries and library
// ABOUTME: Service names and tracing targets shared by logging and the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity used in logs
pub mod service_names {
    /// Default service name
    pub const NUTRIPLAN: &str = "nutriplan";

    /// Crates whose events follow the configured log level
    pub const LOG_TARGETS: [&str; 3] = ["nutriplan", "nutriplan_core", "nutriplan_intelligence"];
}

/// Tracing targets for planner events
pub mod log_targets {
    /// Degraded-mode and report assembly events
    pub const PLANNER: &str = "nutriplan::planner";
}
