// ABOUTME: Workout CLI - command-line front end for the workout calendar
// ABOUTME: Shows today's workout and the month, records outcomes, manages templates and reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show today's workout and reminder state
//! workout-cli today
//!
//! # Month grid for March 2025
//! workout-cli calendar --year 2025 --month 3
//!
//! # Record an outcome; skipping pushes the rest of the schedule back a day
//! workout-cli mark 2025-03-10 skipped
//!
//! # Change the reminder time, then keep a shell open to receive it
//! workout-cli reminder set 07:30
//! workout-cli reminder watch
//!
//! # Create and apply a template
//! workout-cli templates create --name "Push Pull" --exercise Push --exercise Pull
//! workout-cli templates list --remote
//! workout-cli templates apply 1735689600000
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{value_parser, Parser, Subcommand};
use std::time::Duration;
use workout_calendar::config::{AppConfig, DatabaseUrl};
use workout_calendar::context::AppContext;
use workout_calendar::logging::LoggingConfig;
use workout_calendar::models::{NotificationTime, WorkoutStatus};

#[derive(Parser)]
#[command(
    name = "workout-cli",
    about = "Workout calendar",
    long_about = "Plan one workout per day, record what you did and get reminded about today's session."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to `WORKOUT_DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show today's workout and the pending reminder
    Today,

    /// Show a month of the calendar
    Calendar {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Record a day as done or skipped
    Mark {
        /// Date as YYYY-MM-DD
        date: NaiveDate,

        /// `done` or `skipped`
        status: WorkoutStatus,

        /// Overwrite an outcome already recorded for the date
        #[arg(long)]
        force: bool,
    },

    /// Reminder settings
    Reminder {
        #[command(subcommand)]
        action: ReminderCommand,
    },

    /// Template management
    Templates {
        #[command(subcommand)]
        action: TemplatesCommand,
    },

    /// Replace the schedule with one random workout per day of a month
    Generate {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Clear every recorded outcome
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ReminderCommand {
    /// Show the reminder time and what is pending
    Show,

    /// Set the daily reminder time
    Set {
        /// Time as HH:MM
        time: NotificationTime,
    },

    /// Stay running and print today's reminder when it falls due
    Watch {
        /// Seconds between checks
        #[arg(long, default_value_t = 30, value_parser = value_parser!(u64).range(1..))]
        poll_secs: u64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplatesCommand {
    /// List user templates, optionally with the remote catalogue
    List {
        /// Include the remote catalogue
        #[arg(long)]
        remote: bool,
    },

    /// Create a user template
    Create {
        /// Template name
        #[arg(long)]
        name: String,

        /// Template description
        #[arg(long, default_value = "")]
        description: String,

        /// Exercise for the next day of the cycle (repeatable, in order)
        #[arg(long = "exercise", required = true)]
        exercises: Vec<String>,
    },

    /// Replace the schedule with a template projected from today
    Apply {
        /// Template id
        id: i64,

        /// Look the template up in the remote catalogue too
        #[arg(long)]
        remote: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(url);
    }
    let context = AppContext::from_config(config).await?;

    match cli.command {
        Command::Today => commands::schedule::today(&context).await?,
        Command::Calendar { year, month } => {
            commands::schedule::calendar(&context, year, month).await?;
        }
        Command::Mark {
            date,
            status,
            force,
        } => commands::schedule::mark(&context, date, status, force).await?,
        Command::Reminder { action } => match action {
            ReminderCommand::Show => commands::reminder::show(&context).await?,
            ReminderCommand::Set { time } => commands::reminder::set(&context, time).await?,
            ReminderCommand::Watch { poll_secs } => {
                commands::reminder::watch(&context, Duration::from_secs(poll_secs)).await?;
            }
        },
        Command::Templates { action } => match action {
            TemplatesCommand::List { remote } => commands::templates::list(&context, remote).await,
            TemplatesCommand::Create {
                name,
                description,
                exercises,
            } => {
                commands::templates::create(&context, name, description, exercises).await?;
            }
            TemplatesCommand::Apply { id, remote } => {
                commands::templates::apply(&context, id, remote).await?;
            }
        },
        Command::Generate { year, month } => {
            commands::schedule::generate(&context, year, month).await?;
        }
        Command::Reset => commands::schedule::reset(&context).await?,
    }

    Ok(())
}
