// ABOUTME: Outcome of re-evaluating today's reminder after a state change
// ABOUTME: Scheduled, cancelled with a reason, or failed at the scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::WorkoutStatus;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Why no reminder is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CancelReason {
    /// Today has no scheduled workout
    NoWorkoutToday,
    /// Today's outcome has already been recorded
    AlreadyRecorded {
        /// The recorded outcome
        status: WorkoutStatus,
    },
}

/// Result of re-evaluating the daily reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ReminderDecision {
    /// A reminder is pending
    Scheduled {
        /// Workout named in the reminder
        workout: String,
        /// Local fire time
        fire_at: NaiveDateTime,
    },
    /// Every pending reminder was cancelled and none was scheduled
    Cancelled {
        /// Why nothing was scheduled
        reason: CancelReason,
    },
    /// The scheduler rejected the reminder
    Failed {
        /// Workout that should have been reminded about
        workout: String,
        /// Scheduler error message
        message: String,
    },
}

impl ReminderDecision {
    /// Whether a reminder is pending after this decision
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// Fire time of the pending reminder, if any
    #[must_use]
    pub const fn fire_at(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Scheduled { fire_at, .. } => Some(*fire_at),
            Self::Cancelled { .. } | Self::Failed { .. } => None,
        }
    }
}

impl fmt::Display for ReminderDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled { workout, fire_at } => {
                write!(f, "reminder for {workout} at {}", fire_at.format("%Y-%m-%d %H:%M"))
            }
            Self::Cancelled {
                reason: CancelReason::NoWorkoutToday,
            } => f.write_str("no reminder: nothing scheduled today"),
            Self::Cancelled {
                reason: CancelReason::AlreadyRecorded { status },
            } => write!(f, "no reminder: today already marked {status}"),
            Self::Failed { workout, message } => {
                write!(f, "reminder for {workout} failed: {message}")
            }
        }
    }
}
