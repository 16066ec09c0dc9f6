// ABOUTME: Random month generator filling each day with one catalogue exercise
// ABOUTME: Used for demo data and first-run calendars without a template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::calendar::month_bounds;
use crate::constants::EXERCISE_CATALOGUE;
use crate::errors::AppResult;
use crate::models::{Schedule, Task};
use rand::Rng;

/// One random exercise per day of `month` in `year`
///
/// # Errors
///
/// Returns `InvalidInput` for an invalid month.
pub fn generate_month<R: Rng>(year: i32, month: u32, rng: &mut R) -> AppResult<Schedule> {
    let (first, last) = month_bounds(year, month)?;

    Ok(first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| {
            let exercise = EXERCISE_CATALOGUE[rng.gen_range(0..EXERCISE_CATALOGUE.len())];
            (date, vec![Task::pending(exercise)])
        })
        .collect())
}
