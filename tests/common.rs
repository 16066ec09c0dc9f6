// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init, fixed clocks, template fixtures and store builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `workout_calendar`

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::sync::{Arc, Once};
use workout_calendar::clock::FixedClock;
use workout_calendar::errors::{AppError, AppResult};
use workout_calendar::models::{Schedule, Task, Template, TemplateEntry};
use workout_calendar::notifications::{NotificationScheduler, PendingReminders, ReminderRequest};
use workout_calendar::storage::{InMemoryStore, KeyValueStore};
use workout_calendar::store::ScheduleStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Local date-time
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Template with one entry per exercise, numbered from day 1
pub fn template(id: i64, name: &str, exercises: &[&str]) -> Template {
    Template {
        id,
        name: name.to_owned(),
        description: String::new(),
        tasks: exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| TemplateEntry {
                day: u32::try_from(i).unwrap() + 1,
                exercise: (*exercise).to_owned(),
            })
            .collect(),
    }
}

/// Schedule with one task per `(date, name)` pair
pub fn schedule_of(entries: &[(NaiveDate, &str)]) -> Schedule {
    entries
        .iter()
        .map(|(date, name)| (*date, vec![Task::pending(*name)]))
        .collect()
}

/// Names of the first task on each date, in date order
pub fn names(schedule: &Schedule) -> Vec<(NaiveDate, String)> {
    schedule
        .iter()
        .map(|(date, tasks)| (*date, tasks[0].name.clone()))
        .collect()
}

/// Everything a schedule store depends on, with handles kept for inspection
pub struct StoreHarness {
    /// Shared key-value storage
    pub storage: Arc<dyn KeyValueStore>,
    /// Reminder scheduler
    pub reminders: PendingReminders,
    /// Settable clock
    pub clock: Arc<FixedClock>,
}

impl StoreHarness {
    /// Harness over fresh in-memory storage with the clock at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self::with_storage(Arc::new(InMemoryStore::new()), now)
    }

    /// Harness over existing storage with the clock at `now`
    pub fn with_storage(storage: Arc<dyn KeyValueStore>, now: NaiveDateTime) -> Self {
        init_test_logging();
        Self {
            storage,
            reminders: PendingReminders::new(),
            clock: Arc::new(FixedClock::new(now)),
        }
    }

    /// New store that has loaded whatever the storage holds
    pub async fn store(&self) -> ScheduleStore {
        self.store_with_notifier(Arc::new(self.reminders.clone())).await
    }

    /// New store that schedules reminders through `notifier`
    pub async fn store_with_notifier(
        &self,
        notifier: Arc<dyn NotificationScheduler>,
    ) -> ScheduleStore {
        let mut store = ScheduleStore::new(Arc::clone(&self.storage), notifier, self.clock.clone());
        store.load_initial_state().await;
        store
    }
}

/// Storage that serves reads but rejects every write, like a read-only disk
#[derive(Default)]
pub struct ReadOnlyStore {
    /// Backing data served to reads
    pub inner: InMemoryStore,
}

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::storage(format!("cannot write {key}: read-only filesystem")))
    }

    async fn remove(&self, key: &str) -> AppResult<bool> {
        Err(AppError::storage(format!("cannot remove {key}: read-only filesystem")))
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }
}

/// Scheduler that refuses every request, like a platform without notification permission
pub struct DeniedScheduler;

#[async_trait]
impl NotificationScheduler for DeniedScheduler {
    async fn cancel_all(&self) -> AppResult<()> {
        Err(AppError::notification("notification permission denied"))
    }

    async fn schedule(&self, _request: ReminderRequest) -> AppResult<String> {
        Err(AppError::notification("notification permission denied"))
    }
}
