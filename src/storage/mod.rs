// ABOUTME: Durable key-value storage abstraction with JSON helpers
// ABOUTME: Pluggable backends (in-memory, SQLite) behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory backend for tests and ephemeral sessions
pub mod memory;
/// `SQLite` backend built on sqlx
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String-valued key-value store
///
/// Values are opaque strings; callers use [`read_json`] and [`write_json`]
/// for typed access.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<bool>;

    /// Every stored key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn keys(&self) -> AppResult<Vec<String>>;

    /// Remove every key in `keys`, returning how many existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove_many(&self, keys: &[String]) -> AppResult<u64> {
        let mut removed = 0;
        for key in keys {
            if self.remove(key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove every key starting with `prefix`, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written
    async fn remove_prefixed(&self, prefix: &str) -> AppResult<u64> {
        let matching: Vec<String> = self
            .keys()
            .await?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect();
        if matching.is_empty() {
            return Ok(0);
        }
        self.remove_many(&matching).await
    }
}

/// Read and deserialize the JSON value stored under `key`
///
/// # Errors
///
/// Returns a storage error if the read fails, or a serialization error
/// (carrying the key) if the stored text is not valid JSON for `T`.
pub async fn read_json<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AppError::from(e).with_resource_id(key)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns a serialization error if `value` cannot be encoded, or a storage
/// error if the write fails.
pub async fn write_json<T, S>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| AppError::from(e).with_resource_id(key))?;
    store.set(key, &raw).await
}
