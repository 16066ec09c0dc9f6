// ABOUTME: Daily reminder time setting with validated hour and minute
// ABOUTME: Serializes as {"hour":H,"minute":M} and rejects out-of-range stored values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::reminder::{DEFAULT_HOUR, DEFAULT_MINUTE};
use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire shape of a stored reminder time, validated on conversion
#[derive(Deserialize)]
struct RawNotificationTime {
    hour: u32,
    minute: u32,
}

/// Time of day at which today's workout reminder fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNotificationTime")]
pub struct NotificationTime {
    hour: u32,
    minute: u32,
}

impl NotificationTime {
    /// Create a reminder time
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless `hour <= 23` and `minute <= 59`
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::out_of_range(format!(
                "Reminder time {hour:02}:{minute:02} is not a valid time of day"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour of day (0-23)
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour (0-59)
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Convert to a chrono time of day
    #[must_use]
    pub fn as_naive_time(&self) -> NaiveTime {
        // Fields are range-checked at construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for NotificationTime {
    fn default() -> Self {
        Self {
            hour: DEFAULT_HOUR,
            minute: DEFAULT_MINUTE,
        }
    }
}

impl TryFrom<RawNotificationTime> for NotificationTime {
    type Error = AppError;

    fn try_from(raw: RawNotificationTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl fmt::Display for NotificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for NotificationTime {
    type Err = AppError;

    /// Parse `HH:MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| AppError::invalid_input(format!("Expected HH:MM, got '{s}'")))?;
        let hour = hour
            .parse::<u32>()
            .map_err(|_| AppError::invalid_input(format!("Invalid hour in '{s}'")))?;
        let minute = minute
            .parse::<u32>()
            .map_err(|_| AppError::invalid_input(format!("Invalid minute in '{s}'")))?;
        Self::new(hour, minute)
    }
}
