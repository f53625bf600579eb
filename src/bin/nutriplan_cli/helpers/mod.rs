// ABOUTME: Re-exports helper modules for nutriplan-cli
// ABOUTME: Provides report display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
