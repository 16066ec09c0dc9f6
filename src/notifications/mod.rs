// ABOUTME: Daily workout reminder requests and the scheduler abstraction
// ABOUTME: Computes the next fire time and delegates delivery to a pluggable scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-process scheduler that queues reminders and broadcasts them when due
pub mod pending;

pub use pending::PendingReminders;

use crate::constants::reminder;
use crate::errors::AppResult;
use crate::models::NotificationTime;
use async_trait::async_trait;
use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Data attached to a reminder so a handler can open the right day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPayload {
    /// Name of the workout being reminded about
    pub workout: String,
}

/// A single reminder to be delivered at `fire_at` local time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    /// Local date-time at which the reminder fires
    pub fire_at: NaiveDateTime,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Attached data
    pub payload: ReminderPayload,
}

impl ReminderRequest {
    /// Standard reminder for `workout`
    #[must_use]
    pub fn for_workout(workout: impl Into<String>, fire_at: NaiveDateTime) -> Self {
        let workout = workout.into();
        Self {
            fire_at,
            title: reminder::TITLE.to_owned(),
            body: format!("Don't forget your {workout} workout today!"),
            payload: ReminderPayload { workout },
        }
    }
}

/// Delivers reminders at a future local time
///
/// The schedule store cancels everything before scheduling, so at most one
/// reminder is ever pending through this interface.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Cancel every pending reminder
    ///
    /// # Errors
    ///
    /// Returns a `NotificationError` if the platform rejects the request
    async fn cancel_all(&self) -> AppResult<()>;

    /// Schedule `request`, returning an identifier for it
    ///
    /// # Errors
    ///
    /// Returns a `NotificationError` if the reminder cannot be scheduled
    async fn schedule(&self, request: ReminderRequest) -> AppResult<String>;
}

/// Next instant at `time` strictly after `now`
///
/// Today at `time` when that is still ahead, otherwise tomorrow at `time`.
#[must_use]
pub fn next_fire_time(now: NaiveDateTime, time: NotificationTime) -> NaiveDateTime {
    let today_at = now.date().and_time(time.as_naive_time());
    if today_at > now {
        return today_at;
    }
    today_at
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDateTime::MAX)
}
