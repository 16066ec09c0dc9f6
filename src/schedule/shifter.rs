// ABOUTME: Cascading schedule shift applied when a workout is skipped
// ABOUTME: Pushes every task after the skipped date one slot later in date order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Schedule, Task};
use chrono::NaiveDate;
use tracing::debug;

/// Shift the schedule forward after `skipped` was skipped
///
/// Slots are the schedule's dates in ascending order, not calendar days, so
/// gaps in the schedule are preserved. Every slot after `skipped` takes the
/// tasks of the slot before it and the slot right after `skipped` receives
/// the skipped tasks. `skipped` keeps its own tasks and the tasks of the
/// last slot fall off the end.
///
/// Returns an unchanged copy when `skipped` is not scheduled or is the last
/// scheduled date. The input is never mutated.
#[must_use]
pub fn shift(schedule: &Schedule, skipped: NaiveDate) -> Schedule {
    let dates: Vec<NaiveDate> = schedule.dates().copied().collect();

    let Ok(position) = dates.binary_search(&skipped) else {
        debug!(date = %skipped, "Skipped date not scheduled, nothing to shift");
        return schedule.clone();
    };
    if position + 1 == dates.len() {
        debug!(date = %skipped, "Skipped date is the last scheduled day, nothing to shift");
        return schedule.clone();
    }

    let tasks_at = |date: &NaiveDate| schedule.get(date).map(<[Task]>::to_vec).unwrap_or_default();
    let skipped_tasks = tasks_at(&skipped);

    let mut shifted = schedule.clone();
    for index in (position + 1..dates.len()).rev() {
        shifted.insert(dates[index], tasks_at(&dates[index - 1]));
    }
    shifted.insert(dates[position + 1], skipped_tasks);

    debug!(
        date = %skipped,
        moved = dates.len() - position - 1,
        "Shifted schedule after skipped workout"
    );
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    fn schedule_of(entries: &[(&str, &str)]) -> Schedule {
        entries
            .iter()
            .map(|(day, name)| (date(day), vec![Task::pending(*name)]))
            .collect()
    }

    fn names(schedule: &Schedule) -> Vec<String> {
        schedule
            .iter()
            .map(|(_, tasks)| tasks[0].name.clone())
            .collect()
    }

    #[test]
    fn test_skip_first_day_cascades() {
        let schedule = schedule_of(&[
            ("2024-01-01", "A"),
            ("2024-01-02", "B"),
            ("2024-01-03", "C"),
        ]);
        let shifted = shift(&schedule, date("2024-01-01"));
        assert_eq!(names(&shifted), ["A", "A", "B"]);
        assert_eq!(names(&schedule), ["A", "B", "C"]);
    }

    #[test]
    fn test_skip_middle_day_leaves_earlier_days() {
        let schedule = schedule_of(&[
            ("2024-01-01", "A"),
            ("2024-01-02", "B"),
            ("2024-01-03", "C"),
            ("2024-01-04", "D"),
        ]);
        let shifted = shift(&schedule, date("2024-01-02"));
        assert_eq!(names(&shifted), ["A", "B", "B", "C"]);
    }

    #[test]
    fn test_skip_last_day_is_noop() {
        let schedule = schedule_of(&[("2024-01-01", "A"), ("2024-01-02", "B")]);
        assert_eq!(shift(&schedule, date("2024-01-02")), schedule);
    }

    #[test]
    fn test_skip_unscheduled_day_is_noop() {
        let schedule = schedule_of(&[("2024-01-01", "A"), ("2024-01-03", "B")]);
        assert_eq!(shift(&schedule, date("2024-01-02")), schedule);
        assert_eq!(shift(&Schedule::new(), date("2024-01-02")), Schedule::new());
    }

    #[test]
    fn test_gaps_shift_by_slot_not_calendar_day() {
        let schedule = schedule_of(&[
            ("2024-01-01", "A"),
            ("2024-01-05", "B"),
            ("2024-01-09", "C"),
        ]);
        let shifted = shift(&schedule, date("2024-01-01"));
        assert_eq!(shifted.first_task(&date("2024-01-05")).unwrap().name, "A");
        assert_eq!(shifted.first_task(&date("2024-01-09")).unwrap().name, "B");
        assert_eq!(shifted.len(), 3);
    }
}
