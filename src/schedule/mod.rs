// ABOUTME: Pure schedule algorithms for the workout calendar
// ABOUTME: Skip shifting, template projection, random month generation and month views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pure functions over [`Schedule`](crate::models::Schedule) values.
//!
//! None of these functions touch storage; callers persist results.

/// Month boundaries and per-day calendar markings
pub mod calendar;

/// Random month generation from the exercise catalogue
pub mod generator;

/// Template projection over a fixed horizon
pub mod projector;

/// Cascading shift after a skipped workout
pub mod shifter;

pub use calendar::{month_bounds, month_markings, DayMarking};
pub use generator::generate_month;
pub use projector::project;
pub use shifter::shift;
