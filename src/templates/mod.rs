// ABOUTME: Workout template catalogue sources and editing helpers
// ABOUTME: User templates in local storage plus a remote PostgREST-style catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Editable template builder
pub mod draft;
/// User-created templates kept in local storage
pub mod library;
/// HTTP client for the shared template catalogue
pub mod remote;

pub use draft::TemplateDraft;
pub use library::UserTemplates;
pub use remote::{RemoteTemplateClient, RemoteTemplateConfig};

use crate::errors::{AppError, AppResult};
use crate::models::Template;
use async_trait::async_trait;

/// Anything that can list templates
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Human-readable name used in logs
    fn source_name(&self) -> &'static str;

    /// Every template this source offers
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    async fn fetch_all(&self) -> AppResult<Vec<Template>>;

    /// Template with identifier `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no template has that id, or the
    /// source's read error.
    async fn find(&self, id: i64) -> AppResult<Template> {
        self.fetch_all()
            .await?
            .into_iter()
            .find(|template| template.id == id)
            .ok_or_else(|| AppError::not_found(format!("Template {id}")).with_resource_id(id.to_string()))
    }
}
