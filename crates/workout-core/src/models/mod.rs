// ABOUTME: Core data models for the workout calendar
// ABOUTME: Re-exports schedule, template and reminder-time types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tasks, schedules and per-day workout statuses
pub mod schedule;

/// Reusable workout templates
pub mod template;

/// Daily reminder time
pub mod reminder;

pub use reminder::NotificationTime;
pub use schedule::{format_date, parse_date, Schedule, Task, WorkoutStatus, WorkoutStatusState};
pub use template::{Template, TemplateEntry};
