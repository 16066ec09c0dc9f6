// ABOUTME: Unified error types re-exported from workout-core
// ABOUTME: Single import point for AppError, ErrorCode and AppResult inside the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;
