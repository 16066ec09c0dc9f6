// ABOUTME: Schedule model mapping calendar dates to assigned workout tasks
// ABOUTME: Includes the Task type and the sparse per-day WorkoutStatus map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::schedule::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeBounds;
use std::str::FromStr;

/// Parse a `YYYY-MM-DD` schedule key
///
/// # Errors
///
/// Returns `InvalidFormat` if the string is not a valid calendar date
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| AppError::from(e).with_resource_id(value))
}

/// Format a date as a zero-padded `YYYY-MM-DD` schedule key
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// One exercise assigned to a calendar date
///
/// Tasks are replaced wholesale on mutation and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Exercise name shown on the calendar
    pub name: String,
    /// Completion flag; older stored data omits it
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a pending task for the given exercise
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// Mapping from calendar date to the tasks scheduled on it
///
/// Backed by a `BTreeMap` so iteration is in ascending date order, which
/// matches the string order of the serialized `YYYY-MM-DD` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<NaiveDate, Vec<Task>>);

impl Schedule {
    /// Create an empty schedule
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Tasks scheduled on `date`
    #[must_use]
    pub fn get(&self, date: &NaiveDate) -> Option<&[Task]> {
        self.0.get(date).map(Vec::as_slice)
    }

    /// First task scheduled on `date`, if any
    #[must_use]
    pub fn first_task(&self, date: &NaiveDate) -> Option<&Task> {
        self.0.get(date).and_then(|tasks| tasks.first())
    }

    /// Replace the task list of `date`, returning the previous list
    pub fn insert(&mut self, date: NaiveDate, tasks: Vec<Task>) -> Option<Vec<Task>> {
        self.0.insert(date, tasks)
    }

    /// Whether `date` is a key of the schedule
    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0.contains_key(date)
    }

    /// Number of scheduled dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no date is scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scheduled dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.keys()
    }

    /// Earliest scheduled date
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.keys().next().copied()
    }

    /// Latest scheduled date
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.keys().next_back().copied()
    }

    /// Entries in ascending date order
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, Vec<Task>> {
        self.0.iter()
    }

    /// Entries whose date falls inside `range`
    pub fn range<R>(&self, range: R) -> btree_map::Range<'_, NaiveDate, Vec<Task>>
    where
        R: RangeBounds<NaiveDate>,
    {
        self.0.range(range)
    }
}

impl FromIterator<(NaiveDate, Vec<Task>)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Vec<Task>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Schedule {
    type Item = (NaiveDate, Vec<Task>);
    type IntoIter = btree_map::IntoIter<NaiveDate, Vec<Task>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = (&'a NaiveDate, &'a Vec<Task>);
    type IntoIter = btree_map::Iter<'a, NaiveDate, Vec<Task>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome the user recorded for a scheduled day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    /// Workout completed
    Done,
    /// Workout skipped; the schedule shifts forward
    Skipped,
}

impl WorkoutStatus {
    /// Convert to the stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "done" => Ok(Self::Done),
            "skipped" | "skip" => Ok(Self::Skipped),
            other => Err(AppError::invalid_input(format!(
                "Unknown workout status '{other}', expected 'done' or 'skipped'"
            ))),
        }
    }
}

/// Sparse map of dates the user has acted on
///
/// A date missing from the map has no recorded outcome. Presence of a date
/// also serves as the per-day interaction marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutStatusState(BTreeMap<NaiveDate, WorkoutStatus>);

impl WorkoutStatusState {
    /// Create an empty status map
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Status recorded for `date`
    #[must_use]
    pub fn get(&self, date: &NaiveDate) -> Option<WorkoutStatus> {
        self.0.get(date).copied()
    }

    /// Record `status` for `date`, returning the previous value
    pub fn set(&mut self, date: NaiveDate, status: WorkoutStatus) -> Option<WorkoutStatus> {
        self.0.insert(date, status)
    }

    /// Forget every recorded status
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of dates with a recorded status
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no status is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded entries in ascending date order
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, WorkoutStatus> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    #[test]
    fn test_schedule_serializes_with_iso_keys() {
        let mut schedule = Schedule::new();
        schedule.insert(date("2024-01-02"), vec![Task::pending("Yoga")]);
        schedule.insert(date("2024-01-01"), vec![Task::pending("Run")]);

        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(
            json,
            r#"{"2024-01-01":[{"name":"Run","completed":false}],"2024-01-02":[{"name":"Yoga","completed":false}]}"#
        );
    }

    #[test]
    fn test_task_without_completed_flag_defaults_to_pending() {
        let schedule: Schedule = serde_json::from_str(r#"{"2024-03-05":[{"name":"Swim"}]}"#).unwrap();
        assert_eq!(
            schedule.get(&date("2024-03-05")),
            Some([Task::pending("Swim")].as_slice())
        );
    }

    #[test]
    fn test_invalid_date_key_is_rejected() {
        let parsed: Result<Schedule, _> = serde_json::from_str(r#"{"2024-02-30":[]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_workout_status_parsing() {
        assert_eq!("Done".parse::<WorkoutStatus>().unwrap(), WorkoutStatus::Done);
        assert_eq!("skipped".parse::<WorkoutStatus>().unwrap(), WorkoutStatus::Skipped);
        assert!("later".parse::<WorkoutStatus>().is_err());
    }

    #[test]
    fn test_status_state_round_trip() {
        let mut state = WorkoutStatusState::new();
        state.set(date("2024-05-01"), WorkoutStatus::Skipped);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"2024-05-01":"skipped"}"#);
        let back: WorkoutStatusState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
