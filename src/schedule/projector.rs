// ABOUTME: Projects a repeating workout template onto consecutive calendar days
// ABOUTME: Cycles template entries by position to build a fresh schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Schedule, Task, Template};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Build a schedule of `horizon_days` consecutive days starting at `start`
///
/// Day `start + i` gets the exercise of entry `i mod tasks.len()`. The
/// entries' `day` numbers are display labels and do not affect placement.
///
/// # Errors
///
/// Returns `InvalidInput` when the template has no entries, and
/// `ValueOutOfRange` when the horizon runs past the last representable date.
pub fn project(template: &Template, start: NaiveDate, horizon_days: u32) -> AppResult<Schedule> {
    if template.tasks.is_empty() {
        return Err(AppError::invalid_input(format!(
            "Template '{}' has no exercises to schedule",
            template.name
        ))
        .with_resource_id(template.id.to_string()));
    }

    let cycle = template.tasks.len();
    let schedule = (0..horizon_days)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or_else(|| {
                    AppError::out_of_range(format!(
                        "Projection of {horizon_days} days from {start} exceeds the calendar"
                    ))
                })?;
            let entry = &template.tasks[offset as usize % cycle];
            Ok((date, vec![Task::pending(entry.exercise.clone())]))
        })
        .collect::<AppResult<Schedule>>()?;

    debug!(
        template = %template.name,
        start = %start,
        days = schedule.len(),
        "Projected template onto schedule"
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::TemplateEntry;

    fn template(exercises: &[&str]) -> Template {
        Template {
            id: 1,
            name: "Test".to_owned(),
            description: String::new(),
            tasks: exercises
                .iter()
                .enumerate()
                .map(|(i, exercise)| TemplateEntry {
                    day: u32::try_from(i + 1).unwrap(),
                    exercise: (*exercise).to_owned(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_cycle_repeats() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = project(&template(&["Run", "Yoga"]), start, 365).unwrap();

        assert_eq!(schedule.len(), 365);
        assert_eq!(schedule.first_date(), Some(start));
        assert_eq!(
            schedule.last_date(),
            NaiveDate::from_ymd_opt(2024, 12, 30)
        );
        let day = |d: u32| schedule.first_task(&NaiveDate::from_ymd_opt(2024, 1, d).unwrap()).unwrap();
        assert_eq!(day(1), &Task::pending("Run"));
        assert_eq!(day(2), &Task::pending("Yoga"));
        assert_eq!(day(3), &Task::pending("Run"));
    }

    #[test]
    fn test_day_labels_do_not_affect_placement() {
        let mut reordered = template(&["Swim", "Gym"]);
        reordered.tasks[0].day = 2;
        reordered.tasks[1].day = 1;
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let schedule = project(&reordered, start, 2).unwrap();
        assert_eq!(schedule.first_task(&start).unwrap().name, "Swim");
    }

    #[test]
    fn test_empty_template_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let error = project(&template(&[]), start, 365).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(project(&template(&["Run"]), start, 0).unwrap().is_empty());
    }
}
