// ABOUTME: Schedule commands for workout-cli
// ABOUTME: Today's workout, month view, recording outcomes, random months and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use rand::thread_rng;
use tracing::info;
use workout_calendar::context::AppContext;
use workout_calendar::errors::AppResult;
use workout_calendar::models::WorkoutStatus;
use workout_calendar::schedule::generate_month;

use crate::helpers::display::{display_calendar, display_decision, display_today};

/// Print today's workout and reminder state
pub async fn today(context: &AppContext) -> AppResult<()> {
    let store = context.schedule_store().await?;
    let today = context.clock().today();
    display_today(
        today,
        store.todays_workout(),
        store.workout_status().get(&today),
    );
    display_decision(&store.evaluate_notification().await);
    Ok(())
}

/// Print the month grid for `year`/`month`, defaulting to the current month
pub async fn calendar(context: &AppContext, year: Option<i32>, month: Option<u32>) -> AppResult<()> {
    let today = context.clock().today();
    let (year, month) = (year.unwrap_or_else(|| today.year()), month.unwrap_or_else(|| today.month()));
    let store = context.schedule_store().await?;
    let markings = store.month_view(year, month, Some(today))?;
    display_calendar(year, month, &markings);
    Ok(())
}

/// Record `status` for `date`
///
/// A day that already has an outcome is refused unless `force` is set,
/// so a skip is never shifted twice by accident.
pub async fn mark(
    context: &AppContext,
    date: NaiveDate,
    status: WorkoutStatus,
    force: bool,
) -> AppResult<()> {
    let mut store = context.schedule_store().await?;
    let decision = if force {
        if let Some(previous) = store.workout_status().get(&date) {
            println!("{date} was already marked {previous}; recording {status} instead");
        }
        store.record_status(date, status).await
    } else {
        match store.record_status_once(date, status).await {
            Ok(decision) => decision,
            Err(e) => {
                println!("Run `workout-cli reset` or pass --force to record {date} again");
                return Err(e);
            }
        }
    };
    println!("Marked {date} as {status}");
    if status == WorkoutStatus::Skipped {
        if let Some(task) = store.schedule().first_task(&date) {
            println!("Later workouts moved back one day; {date} keeps {}", task.name);
        }
    }
    display_decision(&decision);
    Ok(())
}

/// Replace the schedule with a random month
pub async fn generate(context: &AppContext, year: Option<i32>, month: Option<u32>) -> AppResult<()> {
    let today = context.clock().today();
    let (year, month) = (year.unwrap_or_else(|| today.year()), month.unwrap_or_else(|| today.month()));
    let schedule = generate_month(year, month, &mut thread_rng())?;
    info!(year, month, days = schedule.len(), "Generated random month");

    let mut store = context.schedule_store().await?;
    let decision = store.replace_schedule(schedule).await;
    println!("Generated a random schedule for {year}-{month:02}");
    display_decision(&decision);
    Ok(())
}

/// Clear every recorded outcome
pub async fn reset(context: &AppContext) -> AppResult<()> {
    let mut store = context.schedule_store().await?;
    let cleared = store.workout_status().len();
    let decision = store.reset_interactions().await;
    println!("Cleared {cleared} recorded day(s)");
    display_decision(&decision);
    Ok(())
}
