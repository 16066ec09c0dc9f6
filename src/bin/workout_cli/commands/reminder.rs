// ABOUTME: Reminder commands for workout-cli
// ABOUTME: Shows and changes the daily reminder time and delivers reminders while watching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;
use workout_calendar::context::AppContext;
use workout_calendar::errors::AppResult;
use workout_calendar::models::NotificationTime;

use crate::helpers::display::{display_decision, display_reminder};

const WATCH_HINT: &str = "Reminders are delivered only while `workout-cli reminder watch` runs";

/// Print the reminder time and what would be pending now
pub async fn show(context: &AppContext) -> AppResult<()> {
    let store = context.schedule_store().await?;
    println!("Daily reminder time: {}", store.notification_time());
    display_decision(&store.evaluate_notification().await);
    println!("{WATCH_HINT}");
    Ok(())
}

/// Change the reminder time
pub async fn set(context: &AppContext, time: NotificationTime) -> AppResult<()> {
    let mut store = context.schedule_store().await?;
    let decision = store.set_notification_time(time).await;
    println!("Daily reminder time set to {time}");
    display_decision(&decision);
    println!("{WATCH_HINT}");
    Ok(())
}

/// Stay in the foreground and print each reminder when it falls due
///
/// State is reloaded on every tick so outcomes recorded from another
/// shell cancel the reminder. Runs until the process is interrupted.
pub async fn watch(context: &AppContext, poll: Duration) -> AppResult<()> {
    let mut last_decision = None;
    let mut ticker = interval(poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(poll_secs = poll.as_secs(), "Watching for due reminders");

    loop {
        ticker.tick().await;
        for reminder in context.reminders().fire_due(context.clock().now()).await {
            display_reminder(&reminder);
        }

        let store = context.schedule_store().await?;
        let decision = store.evaluate_notification().await;
        if last_decision.as_ref() != Some(&decision) {
            display_decision(&decision);
            last_decision = Some(decision);
        }
    }
}
