// ABOUTME: Workout template model describing a repeating exercise pattern
// ABOUTME: Shared by the remote catalogue, user-created templates and the projector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One position in a template's repeating cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// 1-based position in the cycle, used for display
    pub day: u32,
    /// Exercise performed on that position
    pub exercise: String,
}

/// A named, ordered list of exercises that repeats with period `tasks.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Identifier (database row id or creation timestamp in milliseconds)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Ordered cycle entries
    pub tasks: Vec<TemplateEntry>,
}

impl Template {
    /// Length of the repeating cycle in days
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.tasks.len()
    }

    /// Check the template can be saved and projected
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name or a blank exercise,
    /// and `InvalidInput` when the template has no entries.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.tasks.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Template '{}' has no exercises",
                self.name
            ))
            .with_resource_id(self.id.to_string()));
        }
        if let Some(entry) = self.tasks.iter().find(|t| t.exercise.trim().is_empty()) {
            return Err(AppError::missing_field("exercise")
                .with_details(serde_json::json!({ "day": entry.day })));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn entry(day: u32, exercise: &str) -> TemplateEntry {
        TemplateEntry {
            day,
            exercise: exercise.to_owned(),
        }
    }

    #[test]
    fn test_remote_row_with_extra_columns_parses() {
        let row = r#"{"id":7,"name":"Starter","description":"Easy week","created_at":"2024-01-01T00:00:00Z","tasks":[{"day":1,"exercise":"Run"}]}"#;
        let template: Template = serde_json::from_str(row).unwrap();
        assert_eq!(template.id, 7);
        assert_eq!(template.cycle_len(), 1);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut template = Template {
            id: 1,
            name: " ".to_owned(),
            description: String::new(),
            tasks: vec![entry(1, "Run")],
        };
        assert_eq!(
            template.validate().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );

        template.name = "Split".to_owned();
        template.tasks.push(entry(2, ""));
        let error = template.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.details["day"], 2);

        template.tasks.clear();
        assert_eq!(template.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }
}
