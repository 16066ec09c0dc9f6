// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use workout_calendar::config::{env_vars, AppConfig, DatabaseUrl, Environment};
use workout_calendar::errors::ErrorCode;
use workout_calendar::logging::{LogFormat, LoggingConfig};

const ALL_VARS: &[&str] = &[
    env_vars::DATABASE_URL,
    env_vars::TEMPLATES_URL,
    env_vars::TEMPLATES_KEY,
    env_vars::TEMPLATES_TIMEOUT_SECS,
    env_vars::SCHEDULE_HORIZON_DAYS,
    env_vars::ENVIRONMENT,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.horizon_days, 365);
    assert!(config.remote_templates.is_none());
    assert_eq!(config.database_url, DatabaseUrl::default());
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(env_vars::DATABASE_URL, "sqlite:./tmp/workouts.db");
    env::set_var(env_vars::TEMPLATES_URL, "https://templates.example.com");
    env::set_var(env_vars::TEMPLATES_KEY, "anon");
    env::set_var(env_vars::TEMPLATES_TIMEOUT_SECS, "3");
    env::set_var(env_vars::SCHEDULE_HORIZON_DAYS, "90");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(
        config.database_url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./tmp/workouts.db")
        }
    );
    assert_eq!(config.horizon_days, 90);
    let remote = config.remote_templates.unwrap();
    assert_eq!(remote.base_url, "https://templates.example.com");
    assert_eq!(remote.api_key, "anon");
    assert_eq!(remote.timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_invalid_numbers_are_config_errors() {
    clear_env();
    env::set_var(env_vars::SCHEDULE_HORIZON_DAYS, "a year");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(
        err.context.resource_id.as_deref(),
        Some(env_vars::SCHEDULE_HORIZON_DAYS)
    );

    env::set_var(env_vars::SCHEDULE_HORIZON_DAYS, "0");
    assert_eq!(AppConfig::from_env().unwrap_err().code, ErrorCode::ConfigInvalid);

    env::set_var(env_vars::SCHEDULE_HORIZON_DAYS, "3661");
    assert_eq!(AppConfig::from_env().unwrap_err().code, ErrorCode::ConfigInvalid);

    env::set_var(env_vars::SCHEDULE_HORIZON_DAYS, "3660");
    assert_eq!(AppConfig::from_env().unwrap().horizon_days, 3660);
    clear_env();
}

#[test]
#[serial]
fn test_template_url_requires_key() {
    clear_env();
    env::set_var(env_vars::TEMPLATES_URL, "https://templates.example.com");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert_eq!(err.context.resource_id.as_deref(), Some(env_vars::TEMPLATES_KEY));
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "prod");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.environment, "production");
}

#[test]
#[serial]
fn test_cli_logging_is_quiet_and_compact_by_default() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(LoggingConfig::for_cli(true).level, "debug");
}
