// ABOUTME: User-created templates persisted under the userTemplates key
// ABOUTME: Save appends after validation; listing tolerates unreadable data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TemplateSource;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::Template;
use crate::storage::{read_json, write_json, KeyValueStore};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Templates the user created on this device
#[derive(Clone)]
pub struct UserTemplates {
    storage: Arc<dyn KeyValueStore>,
}

impl UserTemplates {
    /// Library backed by `storage`
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Identifier for a newly created template (milliseconds since the epoch)
    #[must_use]
    pub fn next_id() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Stored templates in creation order
    ///
    /// Unreadable data is logged and treated as an empty library.
    pub async fn list(&self) -> Vec<Template> {
        match read_json::<Vec<Template>, _>(self.storage.as_ref(), storage_keys::USER_TEMPLATES).await {
            Ok(templates) => templates.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable user templates");
                Vec::new()
            }
        }
    }

    /// Validate `template` and append it to the library
    ///
    /// # Errors
    ///
    /// Returns the validation error, or the storage error if the library
    /// cannot be read or written.
    pub async fn save(&self, template: Template) -> AppResult<Template> {
        template.validate()?;

        let mut templates: Vec<Template> =
            read_json(self.storage.as_ref(), storage_keys::USER_TEMPLATES)
                .await?
                .unwrap_or_default();
        templates.push(template.clone());
        write_json(self.storage.as_ref(), storage_keys::USER_TEMPLATES, &templates).await?;

        info!(
            template.id = template.id,
            template.name = %template.name,
            total = templates.len(),
            "User template saved"
        );
        Ok(template)
    }
}

#[async_trait]
impl TemplateSource for UserTemplates {
    fn source_name(&self) -> &'static str {
        "user templates"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Template>> {
        Ok(self.list().await)
    }
}
