// ABOUTME: Editable template builder used while creating a custom template
// ABOUTME: Keeps day numbers contiguous as exercises are added and removed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Template, TemplateEntry};

/// Template under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    entries: Vec<TemplateEntry>,
}

impl TemplateDraft {
    /// Start a draft with a name and description and no exercises
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            entries: Vec::new(),
        }
    }

    /// Current entries in cycle order
    #[must_use]
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Append an exercise as the next day of the cycle
    pub fn add_exercise(&mut self, exercise: impl Into<String>) -> &mut Self {
        let day = self.next_day();
        self.entries.push(TemplateEntry {
            day,
            exercise: exercise.into(),
        });
        self
    }

    /// Rename the exercise at `index`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `index` is past the end.
    pub fn update_exercise(&mut self, index: usize, exercise: impl Into<String>) -> AppResult<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::out_of_range(format!("No exercise at index {index} (have {len})")))?;
        entry.exercise = exercise.into();
        Ok(())
    }

    /// Remove the exercise at `index` and renumber days from 1
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `index` is past the end.
    pub fn remove_exercise(&mut self, index: usize) -> AppResult<TemplateEntry> {
        if index >= self.entries.len() {
            return Err(AppError::out_of_range(format!(
                "No exercise at index {index} (have {})",
                self.entries.len()
            )));
        }
        let removed = self.entries.remove(index);
        for (position, entry) in self.entries.iter_mut().enumerate() {
            entry.day = day_number(position);
        }
        Ok(removed)
    }

    /// Finish the draft as a validated template
    ///
    /// # Errors
    ///
    /// Returns the validation error if the name or any exercise is blank or
    /// there are no exercises.
    pub fn build(&self, id: i64) -> AppResult<Template> {
        let template = Template {
            id,
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            tasks: self.entries.clone(),
        };
        template.validate()?;
        Ok(template)
    }

    fn next_day(&self) -> u32 {
        day_number(self.entries.len())
    }
}

fn day_number(position: usize) -> u32 {
    u32::try_from(position).map_or(u32::MAX, |p| p.saturating_add(1))
}

impl From<&Template> for TemplateDraft {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            description: template.description.clone(),
            entries: template.tasks.clone(),
        }
    }
}
