// ABOUTME: Data models re-exported from workout-core
// ABOUTME: Task, Schedule, WorkoutStatus, Template and NotificationTime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
