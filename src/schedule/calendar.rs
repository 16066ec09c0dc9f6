// ABOUTME: Month boundaries and per-day markings for rendering a calendar grid
// ABOUTME: Combines schedule tasks, recorded statuses and the selected day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Schedule, WorkoutStatus, WorkoutStatusState};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// What a calendar cell shows for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMarking {
    /// Calendar date
    pub date: NaiveDate,
    /// Task names joined with ", ", if anything is scheduled
    pub task_label: Option<String>,
    /// Recorded outcome, if any
    pub status: Option<WorkoutStatus>,
    /// Whether this is the currently selected day
    pub selected: bool,
}

/// First and last day of `month` in `year`
///
/// # Errors
///
/// Returns `InvalidInput` when `month` is not in `1..=12` or the year is out
/// of chrono's range.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::invalid_input(format!("Invalid month {year}-{month:02}"));
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;
    Ok((first, last))
}

/// Markings for every day of `month`, in date order
///
/// # Errors
///
/// Returns `InvalidInput` for an invalid month.
pub fn month_markings(
    schedule: &Schedule,
    statuses: &WorkoutStatusState,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
) -> AppResult<Vec<DayMarking>> {
    let (first, last) = month_bounds(year, month)?;

    Ok(first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| DayMarking {
            date,
            task_label: schedule.get(&date).filter(|tasks| !tasks.is_empty()).map(|tasks| {
                tasks
                    .iter()
                    .map(|task| task.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            status: statuses.get(&date),
            selected: selected == Some(date),
        })
        .collect())
}

/// Column of `date` in a Monday-first week grid (0 = Monday)
#[must_use]
pub fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_month_bounds_handles_leap_years_and_december() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2023, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());

        assert!(month_bounds(2024, 13).is_err());
        assert!(month_bounds(2024, 0).is_err());
    }

    #[test]
    fn test_markings_join_tasks_and_flag_status() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let mut schedule = Schedule::new();
        schedule.insert(day, vec![Task::pending("Run"), Task::pending("Stretching")]);
        let mut statuses = WorkoutStatusState::new();
        statuses.set(day, WorkoutStatus::Done);

        let markings = month_markings(&schedule, &statuses, 2024, 4, Some(day)).unwrap();
        assert_eq!(markings.len(), 30);

        let marking = &markings[9];
        assert_eq!(marking.date, day);
        assert_eq!(marking.task_label.as_deref(), Some("Run, Stretching"));
        assert_eq!(marking.status, Some(WorkoutStatus::Done));
        assert!(marking.selected);
        assert!(markings[0].task_label.is_none());
        assert!(!markings[0].selected);
    }
}
