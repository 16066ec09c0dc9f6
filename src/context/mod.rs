// ABOUTME: Explicit dependency wiring for the workout calendar
// ABOUTME: Owns storage, clock, reminder scheduler and template sources built from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application context
//!
//! Hosts build one [`AppContext`] and pass it (or the stores it creates)
//! explicitly. There is no global state.

use crate::clock::{Clock, SystemClock};
use crate::config::{env_vars, AppConfig};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::Template;
use crate::notifications::PendingReminders;
use crate::storage::{KeyValueStore, SqliteStore};
use crate::store::ScheduleStore;
use crate::templates::{RemoteTemplateClient, TemplateSource, UserTemplates};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared dependencies for every workout calendar operation
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    reminders: PendingReminders,
    user_templates: UserTemplates,
    remote_templates: Option<Arc<RemoteTemplateClient>>,
}

impl AppContext {
    /// Connect to the configured database and build every dependency
    ///
    /// # Errors
    ///
    /// Returns a storage error if the database directory cannot be created,
    /// a database error if the connection fails, or a config error if the
    /// remote template client cannot be built.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        if let Some(dir) = config.database_url.parent_dir() {
            tokio::fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", dir.display())).with_source(e)
            })?;
        }
        let storage = SqliteStore::connect(&config.database_url.to_connection_string()).await?;
        Self::new(config, Arc::new(storage), Arc::new(SystemClock))
    }

    /// Build a context around existing storage and clock
    ///
    /// # Errors
    ///
    /// Returns a config error if the remote template client cannot be built.
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let remote_templates = config
            .remote_templates
            .clone()
            .map(RemoteTemplateClient::new)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            user_templates: UserTemplates::new(Arc::clone(&storage)),
            config,
            storage,
            clock,
            reminders: PendingReminders::new(),
            remote_templates,
        })
    }

    /// Schedule store with persisted state loaded
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured horizon is out of range.
    pub async fn schedule_store(&self) -> AppResult<ScheduleStore> {
        let mut store = ScheduleStore::new(
            Arc::clone(&self.storage),
            Arc::new(self.reminders.clone()),
            Arc::clone(&self.clock),
        )
        .with_horizon_days(self.config.horizon_days)?;
        store.load_initial_state().await;
        Ok(store)
    }

    /// Loaded configuration
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Wall clock
    #[must_use]
    pub const fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// In-process reminder scheduler shared by every store from this context
    #[must_use]
    pub const fn reminders(&self) -> &PendingReminders {
        &self.reminders
    }

    /// User-created templates
    #[must_use]
    pub const fn user_templates(&self) -> &UserTemplates {
        &self.user_templates
    }

    /// Remote template catalogue, when configured
    #[must_use]
    pub fn remote_templates(&self) -> Option<&RemoteTemplateClient> {
        self.remote_templates.as_deref()
    }

    /// User templates followed by remote ones when `include_remote` is set
    ///
    /// A remote failure is logged and contributes no templates.
    pub async fn available_templates(&self, include_remote: bool) -> Vec<Template> {
        let mut templates = self.user_templates.list().await;
        if !include_remote {
            return templates;
        }
        match &self.remote_templates {
            Some(remote) => match remote.fetch_all().await {
                Ok(mut fetched) => templates.append(&mut fetched),
                Err(e) => warn!(source = remote.source_name(), error = %e, "Falling back to local templates"),
            },
            None => debug!("Remote template catalogue not configured"),
        }
        templates
    }

    /// Template `id` from the user library, then the remote catalogue
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no source has the template, or
    /// `ConfigMissing` when `include_remote` is set without a configured
    /// catalogue and the id is not a user template.
    pub async fn find_template(&self, id: i64, include_remote: bool) -> AppResult<Template> {
        match self.user_templates.find(id).await {
            Ok(template) => return Ok(template),
            Err(e) if !include_remote => return Err(e),
            Err(_) => {}
        }
        let remote = self.remote_templates.as_ref().ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "Remote template catalogue is not configured",
            )
            .with_resource_id(env_vars::TEMPLATES_URL)
        })?;
        remote.find(id).await
    }
}
