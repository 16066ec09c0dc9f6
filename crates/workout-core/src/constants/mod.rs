// ABOUTME: Application constants for the workout calendar
// ABOUTME: Storage keys, scheduling defaults, reminder text and the exercise catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Keys used in the durable key-value store
pub mod storage_keys {
    /// Serialized `Schedule`
    pub const TASKS: &str = "tasks";
    /// Serialized `WorkoutStatusState`
    pub const WORKOUT_STATUS: &str = "workoutStatus";
    /// Serialized `NotificationTime`
    pub const NOTIFICATION_TIME: &str = "notificationTime";
    /// Serialized array of user-created templates
    pub const USER_TEMPLATES: &str = "userTemplates";
    /// Prefix of the legacy per-day interaction markers (`interaction-YYYY-MM-DD`)
    pub const INTERACTION_PREFIX: &str = "interaction-";
}

/// Scheduling defaults
pub mod schedule {
    /// Number of days a template projection covers
    pub const DEFAULT_HORIZON_DAYS: u32 = 365;
    /// Upper bound accepted for a configured horizon (ten years)
    pub const MAX_HORIZON_DAYS: u32 = 3660;
    /// Date format used for schedule keys
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Reminder defaults and content
pub mod reminder {
    /// Default reminder hour (08:00)
    pub const DEFAULT_HOUR: u32 = 8;
    /// Default reminder minute
    pub const DEFAULT_MINUTE: u32 = 0;
    /// Notification title
    pub const TITLE: &str = "Today's Workout";
}

/// Remote template table
pub mod templates {
    /// Table holding the shared template catalogue
    pub const REMOTE_TABLE: &str = "workout_templates";
    /// Default HTTP timeout for template fetches
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

/// Exercises used when generating a random month
pub const EXERCISE_CATALOGUE: &[&str] = &[
    "Gym",
    "Run",
    "Yoga",
    "Swim",
    "Cycling",
    "HIIT",
    "Rest day",
    "Strength training",
    "Cardio",
    "Stretching",
    "Team sports",
];
