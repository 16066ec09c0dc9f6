// ABOUTME: Main library entry point for the workout calendar
// ABOUTME: Schedule shifting, template projection, persisted schedule state and workout reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Calendar
//!
//! Backend for a calendar that assigns one exercise per day. The user marks
//! each day done or skipped; a skipped workout pushes the rest of the
//! schedule one day later. Reusable templates populate a year of workouts,
//! and a daily reminder names today's exercise.
//!
//! ## Architecture
//!
//! - **Schedule**: pure algorithms (skip shifting, template projection,
//!   random month generation, month view)
//! - **Store**: `ScheduleStore` owns the schedule, statuses and reminder
//!   time, persists every mutation and returns an explicit reminder decision
//! - **Storage**: key-value persistence (in-memory and `SQLite`)
//! - **Templates**: user-created templates and the remote catalogue
//! - **Notifications**: reminder scheduling seam and an in-process scheduler
//! - **Context**: explicit dependency wiring built from environment config
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_calendar::config::AppConfig;
//! use workout_calendar::context::AppContext;
//! use workout_calendar::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let context = AppContext::from_config(config).await?;
//!     let store = context.schedule_store().await?;
//!
//!     match store.todays_workout() {
//!         Some(task) => println!("Today's workout: {}", task.name),
//!         None => println!("No workout scheduled for today"),
//!     }
//!     Ok(())
//! }
//! ```

/// Wall-clock abstraction so "today" can be fixed in tests
pub mod clock;

/// Environment-based configuration
pub mod config;

/// Application constants (storage keys, defaults)
pub mod constants;

/// Explicit dependency wiring for hosts and the CLI
pub mod context;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from the core crate
pub mod models;

/// Reminder scheduling seam and in-process scheduler
pub mod notifications;

/// Pure schedule algorithms
pub mod schedule;

/// Key-value persistence backends
pub mod storage;

/// Schedule state holder
pub mod store;

/// Template validation, drafting, local library and remote catalogue
pub mod templates;
