// ABOUTME: In-process reminder scheduler holding pending reminders in memory
// ABOUTME: Broadcasts each reminder payload to subscribers once its fire time passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{NotificationScheduler, ReminderPayload, ReminderRequest};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 16;

/// Reminder scheduler that keeps reminders in memory
///
/// Nothing fires on its own: the owner calls [`PendingReminders::fire_due`]
/// from whatever loop drives the process, and subscribers receive the
/// payload of every reminder that came due. Pending reminders live only as
/// long as the process that scheduled them.
#[derive(Clone)]
pub struct PendingReminders {
    pending: Arc<RwLock<Vec<(String, ReminderRequest)>>>,
    sender: broadcast::Sender<ReminderPayload>,
    next_id: Arc<AtomicU64>,
}

impl Default for PendingReminders {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingReminders {
    /// Create a scheduler with nothing pending
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            pending: Arc::new(RwLock::new(Vec::new())),
            sender,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Receive payloads of reminders as they fire
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ReminderPayload> {
        self.sender.subscribe()
    }

    /// Snapshot of pending reminders in scheduling order
    pub async fn pending(&self) -> Vec<ReminderRequest> {
        self.pending
            .read()
            .await
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    /// Fire every reminder due at or before `now`
    ///
    /// Returns the fired reminders. Payloads are broadcast; having no
    /// subscriber is not an error.
    pub async fn fire_due(&self, now: NaiveDateTime) -> Vec<ReminderRequest> {
        let mut pending = self.pending.write().await;
        let (due, remaining): (Vec<_>, Vec<_>) = pending
            .drain(..)
            .partition(|(_, request)| request.fire_at <= now);
        *pending = remaining;
        drop(pending);

        due.into_iter()
            .map(|(id, request)| {
                let receivers = self.sender.send(request.payload.clone()).unwrap_or(0);
                info!(
                    reminder.id = %id,
                    workout = %request.payload.workout,
                    receivers,
                    "Reminder fired"
                );
                request
            })
            .collect()
    }
}

#[async_trait]
impl NotificationScheduler for PendingReminders {
    async fn cancel_all(&self) -> AppResult<()> {
        let mut pending = self.pending.write().await;
        if !pending.is_empty() {
            debug!(count = pending.len(), "Cancelling pending reminders");
        }
        pending.clear();
        Ok(())
    }

    async fn schedule(&self, request: ReminderRequest) -> AppResult<String> {
        let id = format!("reminder-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        debug!(reminder.id = %id, fire_at = %request.fire_at, "Reminder scheduled");
        self.pending.write().await.push((id.clone(), request));
        Ok(id)
    }
}
