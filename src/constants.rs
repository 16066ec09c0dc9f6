// ABOUTME: Application constants re-exported from workout-core
// ABOUTME: Adds the service name used by structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::constants::*;

/// Service names for structured logging
pub mod service_names {
    /// Name reported in log records
    pub const WORKOUT_CALENDAR: &str = "workout-calendar";
}
