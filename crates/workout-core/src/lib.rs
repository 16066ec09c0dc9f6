// ABOUTME: Core types and constants for the workout calendar
// ABOUTME: Foundation crate with error handling, schedule and template models, and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! calendar. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, defaults and the exercise catalogue
//! - **models**: Tasks, schedules, workout statuses, templates and reminder times

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Task, Schedule, Template, NotificationTime)
pub mod models;
