// ABOUTME: Template commands for workout-cli
// ABOUTME: Lists, creates and applies workout templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;
use workout_calendar::context::AppContext;
use workout_calendar::errors::AppResult;
use workout_calendar::templates::{TemplateDraft, UserTemplates};

use crate::helpers::display::{display_decision, display_templates};

/// Print available templates
pub async fn list(context: &AppContext, include_remote: bool) {
    if include_remote && context.remote_templates().is_none() {
        warn!("WORKOUT_TEMPLATES_URL is not set; showing user templates only");
    }
    let templates = context.available_templates(include_remote).await;
    display_templates(&templates);
}

/// Build, validate and save a user template
pub async fn create(
    context: &AppContext,
    name: String,
    description: String,
    exercises: Vec<String>,
) -> AppResult<()> {
    let mut draft = TemplateDraft::new(name, description);
    for exercise in exercises {
        draft.add_exercise(exercise);
    }
    let template = draft.build(UserTemplates::next_id())?;
    let saved = context.user_templates().save(template).await?;
    println!(
        "Saved template '{}' (id {}) with {} exercise(s)",
        saved.name,
        saved.id,
        saved.cycle_len()
    );
    Ok(())
}

/// Replace the schedule with template `id` projected from today
pub async fn apply(context: &AppContext, id: i64, include_remote: bool) -> AppResult<()> {
    let template = context.find_template(id, include_remote).await?;
    let mut store = context.schedule_store().await?;
    let decision = store.apply_template(&template).await?;
    println!(
        "Applied '{}': {} day(s) scheduled from {}",
        template.name,
        store.schedule().len(),
        context.clock().today()
    );
    display_decision(&decision);
    Ok(())
}
