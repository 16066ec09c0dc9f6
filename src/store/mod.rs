// ABOUTME: Schedule store owning the schedule, daily outcomes and reminder time
// ABOUTME: Persists every mutation and re-evaluates today's reminder afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session state for the workout calendar
//!
//! The in-memory state is the source of truth for the session. Persistence
//! runs after each in-memory update and failures are logged, never rolled
//! back.

/// Reminder re-evaluation outcomes
pub mod decision;

pub use decision::{CancelReason, ReminderDecision};

use crate::clock::Clock;
use crate::constants::schedule::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{NotificationTime, Schedule, Task, Template, WorkoutStatus, WorkoutStatusState};
use crate::notifications::{next_fire_time, NotificationScheduler, ReminderRequest};
use crate::schedule::{month_markings, project, shift, DayMarking};
use crate::storage::{read_json, write_json, KeyValueStore};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Owner of the schedule, recorded outcomes and reminder time
pub struct ScheduleStore {
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotificationScheduler>,
    clock: Arc<dyn Clock>,
    horizon_days: u32,
    schedule: Schedule,
    statuses: WorkoutStatusState,
    notification_time: NotificationTime,
}

impl ScheduleStore {
    /// Create a store with empty state and the default projection horizon
    ///
    /// Call [`Self::load_initial_state`] to pick up persisted state.
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotificationScheduler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            notifier,
            clock,
            horizon_days: DEFAULT_HORIZON_DAYS,
            schedule: Schedule::new(),
            statuses: WorkoutStatusState::new(),
            notification_time: NotificationTime::default(),
        }
    }

    /// Use `horizon_days` when projecting templates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `horizon_days` is in `1..=3660`.
    pub fn with_horizon_days(mut self, horizon_days: u32) -> AppResult<Self> {
        if !(1..=MAX_HORIZON_DAYS).contains(&horizon_days) {
            return Err(AppError::invalid_input(format!(
                "Projection horizon must be between 1 and {MAX_HORIZON_DAYS} days, got {horizon_days}"
            )));
        }
        self.horizon_days = horizon_days;
        Ok(self)
    }

    /// Restore persisted state
    ///
    /// Each key is read independently. Missing keys keep the defaults;
    /// unreadable or malformed values are logged and also keep the defaults.
    pub async fn load_initial_state(&mut self) {
        if let Some(schedule) = self.load_key::<Schedule>(storage_keys::TASKS).await {
            self.schedule = schedule;
        }
        if let Some(statuses) = self
            .load_key::<WorkoutStatusState>(storage_keys::WORKOUT_STATUS)
            .await
        {
            self.statuses = statuses;
        }
        if let Some(time) = self
            .load_key::<NotificationTime>(storage_keys::NOTIFICATION_TIME)
            .await
        {
            self.notification_time = time;
        }

        info!(
            scheduled_days = self.schedule.len(),
            recorded_days = self.statuses.len(),
            reminder_time = %self.notification_time,
            "Schedule state loaded"
        );
    }

    /// Record today's (or any day's) outcome
    ///
    /// Skipping a day shifts every later workout one slot forward. The
    /// reminder is re-evaluated afterwards.
    pub async fn record_status(&mut self, date: NaiveDate, status: WorkoutStatus) -> ReminderDecision {
        if let Some(previous) = self.statuses.set(date, status) {
            debug!(date = %date, previous = %previous, "Overwriting recorded status");
        }
        info!(date = %date, status = %status, "Workout status recorded");
        self.persist(storage_keys::WORKOUT_STATUS, &self.statuses).await;

        if status == WorkoutStatus::Skipped {
            self.schedule = shift(&self.schedule, date);
            self.persist(storage_keys::TASKS, &self.schedule).await;
        }

        self.evaluate_notification().await
    }

    /// Record the outcome for `date` unless one is already recorded
    ///
    /// Guards against skipping the same day twice, which would shift the
    /// schedule again and drop a workout.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when `date` already has an outcome.
    /// Nothing is changed; [`Self::reset_interactions`] clears the outcome.
    pub async fn record_status_once(
        &mut self,
        date: NaiveDate,
        status: WorkoutStatus,
    ) -> AppResult<ReminderDecision> {
        if let Some(previous) = self.statuses.get(&date) {
            warn!(date = %date, previous = %previous, requested = %status, "Outcome already recorded");
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("{date} is already marked {previous}"),
            )
            .with_resource_id(date.to_string()));
        }
        Ok(self.record_status(date, status).await)
    }

    /// Replace the schedule with `template` projected from today
    ///
    /// Clears every recorded status and legacy interaction flag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the template has no tasks.
    pub async fn apply_template(&mut self, template: &Template) -> AppResult<ReminderDecision> {
        let start = self.clock.today();
        let schedule = project(template, start, self.horizon_days)?;
        info!(
            template.id = template.id,
            template.name = %template.name,
            start = %start,
            days = schedule.len(),
            "Template applied"
        );

        self.schedule = schedule;
        self.statuses.clear();
        self.persist(storage_keys::TASKS, &self.schedule).await;
        self.persist(storage_keys::WORKOUT_STATUS, &self.statuses).await;
        self.purge_legacy_interactions().await;

        Ok(self.evaluate_notification().await)
    }

    /// Change the daily reminder time
    pub async fn set_notification_time(&mut self, time: NotificationTime) -> ReminderDecision {
        self.notification_time = time;
        info!(reminder_time = %time, "Reminder time updated");
        self.persist(storage_keys::NOTIFICATION_TIME, &self.notification_time)
            .await;
        self.evaluate_notification().await
    }

    /// Clear every recorded status and legacy interaction flag
    pub async fn reset_interactions(&mut self) -> ReminderDecision {
        let cleared = self.statuses.len();
        self.statuses.clear();
        self.persist(storage_keys::WORKOUT_STATUS, &self.statuses).await;
        self.purge_legacy_interactions().await;
        info!(cleared, "Recorded statuses reset");
        self.evaluate_notification().await
    }

    /// Replace the whole schedule, keeping recorded statuses
    pub async fn replace_schedule(&mut self, schedule: Schedule) -> ReminderDecision {
        info!(days = schedule.len(), "Schedule replaced");
        self.schedule = schedule;
        self.persist(storage_keys::TASKS, &self.schedule).await;
        self.evaluate_notification().await
    }

    /// Cancel pending reminders and schedule today's, if one is due
    ///
    /// A reminder is scheduled only when today has at least one task and no
    /// recorded outcome. Scheduler failures are logged and reported in the
    /// decision.
    pub async fn evaluate_notification(&self) -> ReminderDecision {
        if let Err(e) = self.notifier.cancel_all().await {
            warn!(error = %e, "Failed to cancel pending reminders");
        }

        let today = self.clock.today();
        if let Some(status) = self.statuses.get(&today) {
            debug!(date = %today, status = %status, "Reminder cancelled: already recorded");
            return ReminderDecision::Cancelled {
                reason: CancelReason::AlreadyRecorded { status },
            };
        }
        let Some(workout) = self.todays_workout().map(|task| task.name.clone()) else {
            debug!(date = %today, "Reminder cancelled: no workout today");
            return ReminderDecision::Cancelled {
                reason: CancelReason::NoWorkoutToday,
            };
        };

        let fire_at = next_fire_time(self.clock.now(), self.notification_time);
        match self
            .notifier
            .schedule(ReminderRequest::for_workout(workout.clone(), fire_at))
            .await
        {
            Ok(reminder_id) => {
                info!(reminder.id = %reminder_id, workout = %workout, fire_at = %fire_at, "Reminder scheduled");
                ReminderDecision::Scheduled { workout, fire_at }
            }
            Err(e) => {
                error!(workout = %workout, error = %e, "Failed to schedule reminder");
                ReminderDecision::Failed {
                    workout,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Current schedule
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Recorded outcomes
    #[must_use]
    pub const fn workout_status(&self) -> &WorkoutStatusState {
        &self.statuses
    }

    /// Daily reminder time
    #[must_use]
    pub const fn notification_time(&self) -> NotificationTime {
        self.notification_time
    }

    /// Projection horizon used by [`Self::apply_template`]
    #[must_use]
    pub const fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// First task scheduled for today
    #[must_use]
    pub fn todays_workout(&self) -> Option<&Task> {
        self.schedule.first_task(&self.clock.today())
    }

    /// Whether an outcome has been recorded for `date`
    #[must_use]
    pub fn has_interacted(&self, date: NaiveDate) -> bool {
        self.statuses.get(&date).is_some()
    }

    /// Calendar markings for `month`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid month.
    pub fn month_view(
        &self,
        year: i32,
        month: u32,
        selected: Option<NaiveDate>,
    ) -> AppResult<Vec<DayMarking>> {
        month_markings(&self.schedule, &self.statuses, year, month, selected)
    }

    async fn load_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match read_json::<T, _>(self.storage.as_ref(), key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable stored value");
                None
            }
        }
    }

    async fn persist<T: Serialize + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = write_json(self.storage.as_ref(), key, value).await {
            error!(key, error = %e, "Failed to persist state");
        }
    }

    async fn purge_legacy_interactions(&self) {
        match self
            .storage
            .remove_prefixed(storage_keys::INTERACTION_PREFIX)
            .await
        {
            Ok(0) => {}
            Ok(removed) => debug!(removed, "Purged legacy interaction flags"),
            Err(e) => error!(error = %e, "Failed to purge legacy interaction flags"),
        }
    }
}

impl fmt::Debug for ScheduleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleStore")
            .field("horizon_days", &self.horizon_days)
            .field("scheduled_days", &self.schedule.len())
            .field("recorded_days", &self.statuses.len())
            .field("notification_time", &self.notification_time)
            .finish_non_exhaustive()
    }
}

