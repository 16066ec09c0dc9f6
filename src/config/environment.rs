// ABOUTME: Deployment environment and database location parsed from the environment
// ABOUTME: Strongly typed replacements for raw ENVIRONMENT and WORKOUT_DATABASE_URL strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Installed for daily use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the key-value store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite`, discarded on exit
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL or a bare file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:")).unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Connection string accepted by sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Directory that must exist before connecting, if any
    #[must_use]
    pub fn parent_dir(&self) -> Option<PathBuf> {
        match self {
            Self::SQLite { path } => path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(PathBuf::from),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    /// `app.db` in the per-user data directory, or `./data` when the
    /// platform has none
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("./data"));
        Self::SQLite {
            path: base
                .join(service_names::WORKOUT_CALENDAR)
                .join("app.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_fallback() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_database_url_parsing() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/app.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/app.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("/tmp/app.db").to_connection_string(),
            "sqlite:/tmp/app.db"
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/app.db").parent_dir(),
            Some(PathBuf::from("./data"))
        );
        assert_eq!(DatabaseUrl::parse_url("app.db").parent_dir(), None);
    }

    #[test]
    fn test_default_database_lives_under_service_dir() {
        let DatabaseUrl::SQLite { path } = DatabaseUrl::default() else {
            panic!("default database should be a file");
        };
        assert!(path.ends_with("workout-calendar/app.db"));
    }
}
