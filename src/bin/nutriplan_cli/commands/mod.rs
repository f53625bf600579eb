// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides the plan, bmi and config subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod bmi;
pub mod config;
pub mod plan;
