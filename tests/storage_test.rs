// ABOUTME: Integration tests for the key-value storage backends
// ABOUTME: Runs the same checks against in-memory and on-disk SQLite stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, date, template, StoreHarness};
use std::sync::Arc;
use tempfile::TempDir;
use workout_calendar::errors::ErrorCode;
use workout_calendar::models::{Template, WorkoutStatus};
use workout_calendar::storage::{read_json, write_json, InMemoryStore, KeyValueStore, SqliteStore};

async fn sqlite_in(dir: &TempDir) -> Result<SqliteStore> {
    let url = format!("sqlite:{}", dir.path().join("app.db").display());
    Ok(SqliteStore::connect(&url).await?)
}

async fn exercise_backend(store: &dyn KeyValueStore) -> Result<()> {
    assert!(store.get("tasks").await?.is_none());

    store.set("tasks", "{}").await?;
    store.set("tasks", r#"{"2024-01-01":[{"name":"Run","completed":false}]}"#).await?;
    assert_eq!(
        store.get("tasks").await?.as_deref(),
        Some(r#"{"2024-01-01":[{"name":"Run","completed":false}]}"#)
    );

    store.set("interaction-2024-01-01", "true").await?;
    store.set("interaction-2024-01-02", "true").await?;
    store.set("notificationTime", r#"{"hour":8,"minute":0}"#).await?;
    assert_eq!(
        store.keys().await?,
        vec![
            "interaction-2024-01-01",
            "interaction-2024-01-02",
            "notificationTime",
            "tasks"
        ]
    );

    assert_eq!(store.remove_prefixed("interaction-").await?, 2);
    assert_eq!(store.remove_prefixed("interaction-").await?, 0);
    assert!(store.remove("tasks").await?);
    assert!(!store.remove("tasks").await?);
    assert_eq!(
        store
            .remove_many(&["notificationTime".to_owned(), "missing".to_owned()])
            .await?,
        1
    );
    assert!(store.keys().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_in_memory_backend() -> Result<()> {
    exercise_backend(&InMemoryStore::new()).await
}

#[tokio::test]
async fn test_sqlite_backend() -> Result<()> {
    let dir = TempDir::new()?;
    exercise_backend(&sqlite_in(&dir).await?).await
}

#[tokio::test]
async fn test_sqlite_in_memory_url() -> Result<()> {
    exercise_backend(&SqliteStore::connect("sqlite::memory:").await?).await
}

#[tokio::test]
async fn test_sqlite_values_survive_reconnect() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let store = sqlite_in(&dir).await?;
        write_json(&store, "userTemplates", &vec![template(1, "Split", &["Push", "Pull"])]).await?;
        store.close().await;
    }

    let store = sqlite_in(&dir).await?;
    let templates: Vec<Template> = read_json(&store, "userTemplates").await?.unwrap();
    assert_eq!(templates, vec![template(1, "Split", &["Push", "Pull"])]);
    Ok(())
}

#[tokio::test]
async fn test_read_json_reports_key_on_corrupt_value() -> Result<()> {
    let store = InMemoryStore::new();
    store.set("workoutStatus", "[1,2").await?;

    let err = read_json::<serde_json::Value, _>(&store, "workoutStatus")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert_eq!(err.context.resource_id.as_deref(), Some("workoutStatus"));
    Ok(())
}

#[tokio::test]
async fn test_schedule_store_round_trip_on_sqlite() -> Result<()> {
    let dir = TempDir::new()?;
    let storage: Arc<dyn KeyValueStore> = Arc::new(sqlite_in(&dir).await?);
    let harness = StoreHarness::with_storage(storage, at(2024, 1, 1, 7, 0));

    let mut store = harness.store().await;
    store
        .apply_template(&template(9, "Alternating", &["Run", "Yoga"]))
        .await?;
    store.record_status(date(2024, 1, 1), WorkoutStatus::Skipped).await;
    let expected = store.schedule().clone();
    drop(store);

    let reopened = StoreHarness::with_storage(
        Arc::new(sqlite_in(&dir).await?),
        at(2024, 1, 2, 7, 0),
    );
    let store = reopened.store().await;
    assert_eq!(store.schedule(), &expected);
    assert_eq!(store.todays_workout().map(|t| t.name.as_str()), Some("Run"));
    assert!(store.has_interacted(date(2024, 1, 1)));
    Ok(())
}
