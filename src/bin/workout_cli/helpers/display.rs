// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for workout-cli
// ABOUTME: Renders the month grid, today's workout, templates and reminder decisions

use chrono::{Datelike, NaiveDate};
use workout_calendar::models::{Task, Template, WorkoutStatus};
use workout_calendar::notifications::ReminderRequest;
use workout_calendar::schedule::calendar::weekday_column;
use workout_calendar::schedule::DayMarking;
use workout_calendar::store::ReminderDecision;

/// Display today's workout and recorded outcome
pub fn display_today(today: NaiveDate, workout: Option<&Task>, status: Option<WorkoutStatus>) {
    println!("\nToday ({today})");
    println!("{}", "=".repeat(40));
    match workout {
        Some(task) => println!("   Workout: {}", task.name),
        None => println!("   Workout: nothing scheduled"),
    }
    match status {
        Some(status) => println!("   Status: {status}"),
        None => println!("   Status: not recorded"),
    }
}

/// Display a reminder that just fell due
pub fn display_reminder(reminder: &ReminderRequest) {
    println!("\n[{}] {}", reminder.fire_at.format("%H:%M"), reminder.title);
    println!("   {}", reminder.body);
}

/// Display a reminder decision on one line
pub fn display_decision(decision: &ReminderDecision) {
    println!("Reminder: {decision}");
}

/// Display a Monday-first month grid followed by the scheduled workouts
///
/// `*` marks a scheduled day, `x` a done day, `-` a skipped day and
/// brackets the selected day.
pub fn display_calendar(year: i32, month: u32, markings: &[DayMarking]) {
    println!("\n{year}-{month:02}");
    println!(" Mo   Tu   We   Th   Fr   Sa   Su");

    let mut line = String::new();
    if let Some(first) = markings.first() {
        line.push_str(&"     ".repeat(weekday_column(first.date)));
    }
    for marking in markings {
        line.push_str(&format_cell(marking));
        if weekday_column(marking.date) == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    println!();
    for marking in markings {
        if let Some(label) = &marking.task_label {
            let status = marking
                .status
                .map_or_else(String::new, |status| format!(" [{status}]"));
            println!("   {}  {label}{status}", marking.date);
        }
    }
}

fn format_cell(marking: &DayMarking) -> String {
    let flag = match (marking.status, marking.task_label.is_some()) {
        (Some(WorkoutStatus::Done), _) => 'x',
        (Some(WorkoutStatus::Skipped), _) => '-',
        (None, true) => '*',
        (None, false) => ' ',
    };
    let day = marking.date.day();
    if marking.selected {
        format!("[{day:>2}]{flag}")
    } else {
        format!(" {day:>2}{flag} ")
    }
}

/// Display a list of templates
pub fn display_templates(templates: &[Template]) {
    if templates.is_empty() {
        println!("No templates available");
        return;
    }
    println!("\nTemplates");
    println!("{}", "=".repeat(60));
    for template in templates {
        println!("{:>14}  {}", template.id, template.name);
        if !template.description.is_empty() {
            println!("{:>14}  {}", "", template.description);
        }
        let cycle: Vec<String> = template
            .tasks
            .iter()
            .map(|entry| format!("{}. {}", entry.day, entry.exercise))
            .collect();
        println!("{:>14}  {}", "", cycle.join(", "));
    }
}
