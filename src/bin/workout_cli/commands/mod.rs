// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for workout-cli
// ABOUTME: Provides access to schedule, reminder and template commands

pub mod reminder;
pub mod schedule;
pub mod templates;
