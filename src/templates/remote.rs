// ABOUTME: HTTP client for the shared workout template catalogue
// ABOUTME: Reads the workout_templates table through a PostgREST-style REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Remote template catalogue
//!
//! # Example
//! ```rust,no_run
//! use std::time::Duration;
//! use workout_calendar::templates::{RemoteTemplateClient, RemoteTemplateConfig, TemplateSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RemoteTemplateClient::new(RemoteTemplateConfig {
//!     base_url: "https://example.supabase.co".to_owned(),
//!     api_key: "anon-key".to_owned(),
//!     timeout: Duration::from_secs(10),
//! })?;
//! let templates = client.fetch_all().await?;
//! # Ok(())
//! # }
//! ```

use super::TemplateSource;
use crate::constants::templates::{DEFAULT_TIMEOUT_SECS, REMOTE_TABLE};
use crate::errors::{AppError, AppResult};
use crate::models::Template;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;
use tracing::debug;

const SERVICE: &str = "template API";

/// Remote catalogue connection settings
#[derive(Debug, Clone)]
pub struct RemoteTemplateConfig {
    /// Base URL of the REST API, without the `/rest/v1` suffix
    pub base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl RemoteTemplateConfig {
    /// Settings with the default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Client for the remote template table
pub struct RemoteTemplateClient {
    config: RemoteTemplateConfig,
    http_client: reqwest::Client,
}

impl RemoteTemplateClient {
    /// Build a client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the API key is not a valid header value, or
    /// `InternalError` if the HTTP client cannot be built.
    pub fn new(config: RemoteTemplateConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| AppError::config_invalid("WORKOUT_TEMPLATES_KEY", e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| AppError::config_invalid("WORKOUT_TEMPLATES_KEY", e.to_string()))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{REMOTE_TABLE}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn query(&self, filters: &[(&str, String)]) -> AppResult<Vec<Template>> {
        let url = self.table_url();
        let response = self
            .http_client
            .get(&url)
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP {status}: {}", response.text().await.unwrap_or_default()),
            ));
        }

        let templates: Vec<Template> = response
            .json()
            .await
            .map_err(|e| AppError::external_service(SERVICE, format!("JSON parse error: {e}")))?;
        debug!(count = templates.len(), "Fetched remote templates");
        Ok(templates)
    }

    /// Single template by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the table has no such row, otherwise
    /// the same errors as [`TemplateSource::fetch_all`].
    pub async fn fetch_by_id(&self, id: i64) -> AppResult<Template> {
        self.query(&[("id", format!("eq.{id}"))])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("Template {id}")).with_resource_id(id.to_string()))
    }
}

#[async_trait]
impl TemplateSource for RemoteTemplateClient {
    fn source_name(&self) -> &'static str {
        "remote templates"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Template>> {
        self.query(&[]).await
    }

    async fn find(&self, id: i64) -> AppResult<Template> {
        self.fetch_by_id(id).await
    }
}
