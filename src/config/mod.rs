// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Database location, remote template catalogue and projection horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `WORKOUT_DATABASE_URL` | `sqlite:<data_dir>/workout-calendar/app.db` |
//! | `WORKOUT_TEMPLATES_URL` | unset (remote catalogue disabled) |
//! | `WORKOUT_TEMPLATES_KEY` | unset |
//! | `WORKOUT_TEMPLATES_TIMEOUT_SECS` | 10 |
//! | `WORKOUT_SCHEDULE_HORIZON_DAYS` | 365 |
//! | `ENVIRONMENT` | development |

/// Environment and database location types
pub mod environment;

pub use environment::{DatabaseUrl, Environment};

use crate::constants::schedule::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use crate::constants::templates::DEFAULT_TIMEOUT_SECS;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::templates::RemoteTemplateConfig;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment variable names
pub mod env_vars {
    /// Key-value store location
    pub const DATABASE_URL: &str = "WORKOUT_DATABASE_URL";
    /// Remote template API base URL
    pub const TEMPLATES_URL: &str = "WORKOUT_TEMPLATES_URL";
    /// Remote template API key
    pub const TEMPLATES_KEY: &str = "WORKOUT_TEMPLATES_KEY";
    /// Remote template API timeout in seconds
    pub const TEMPLATES_TIMEOUT_SECS: &str = "WORKOUT_TEMPLATES_TIMEOUT_SECS";
    /// Days projected when a template is applied
    pub const SCHEDULE_HORIZON_DAYS: &str = "WORKOUT_SCHEDULE_HORIZON_DAYS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Key-value store location
    pub database_url: DatabaseUrl,
    /// Remote template catalogue, when configured
    pub remote_templates: Option<RemoteTemplateConfig>,
    /// Days projected when a template is applied
    pub horizon_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database_url: DatabaseUrl::default(),
            remote_templates: None,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for unparsable numbers or an out-of-range
    /// horizon, and `ConfigMissing` when a template URL is set without a key.
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_vars::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let database_url = env::var(env_vars::DATABASE_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(DatabaseUrl::default, |value| DatabaseUrl::parse_url(&value));

        let horizon_days = parse_env(env_vars::SCHEDULE_HORIZON_DAYS, DEFAULT_HORIZON_DAYS)?;
        if !(1..=MAX_HORIZON_DAYS).contains(&horizon_days) {
            return Err(AppError::config_invalid(
                env_vars::SCHEDULE_HORIZON_DAYS,
                format!("must be between 1 and {MAX_HORIZON_DAYS}, got {horizon_days}"),
            ));
        }

        let remote_templates = Self::remote_templates_from_env()?;

        let config = Self {
            environment,
            database_url,
            remote_templates,
            horizon_days,
        };
        info!(
            environment = %config.environment,
            database = %config.database_url,
            remote_templates = config.remote_templates.is_some(),
            horizon_days = config.horizon_days,
            "Configuration loaded"
        );
        Ok(config)
    }

    fn remote_templates_from_env() -> AppResult<Option<RemoteTemplateConfig>> {
        let Some(base_url) = env::var(env_vars::TEMPLATES_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
        else {
            return Ok(None);
        };
        let api_key = env::var(env_vars::TEMPLATES_KEY).map_err(|_| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!(
                    "{} is required when {} is set",
                    env_vars::TEMPLATES_KEY,
                    env_vars::TEMPLATES_URL
                ),
            )
            .with_resource_id(env_vars::TEMPLATES_KEY)
        })?;
        let timeout_secs = parse_env(env_vars::TEMPLATES_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config_invalid(
                env_vars::TEMPLATES_TIMEOUT_SECS,
                "must be at least 1 second",
            ));
        }

        Ok(Some(RemoteTemplateConfig {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

/// Parse `key` as `T`, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(key, format!("invalid value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
