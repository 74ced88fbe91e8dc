//! Transient status messages with a cancellable auto-dismiss deadline.
//!
//! Every [`NotificationCenter::show`] issues a new ticket. A pending
//! dismissal only applies to the ticket it was scheduled for, so a message
//! that replaces an older one always gets its own full display window.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub ticket: u64,
    pub shown_at: DateTime<Utc>,
    /// `None` when the window cannot be represented; the message then stays
    /// until dismissed explicitly.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    dismiss_after: Duration,
    next_ticket: u64,
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            next_ticket: 1,
            current: None,
        }
    }

    /// Shows `message`, cancelling whatever dismissal was pending for the
    /// previous one. Returns the ticket of the new message.
    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let expires_at = chrono::Duration::from_std(self.dismiss_after)
            .ok()
            .and_then(|window| now.checked_add_signed(window));
        let notification = Notification {
            message: message.into(),
            ticket,
            shown_at: now,
            expires_at,
        };
        if let Some(previous) = self.current.replace(notification) {
            tracing::trace!(ticket = previous.ticket, "pending dismissal cancelled");
        }
        ticket
    }

    /// Clears the current message once its deadline has passed and returns it.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Notification> {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            return self.current.take();
        }
        None
    }

    /// Fires the deferred dismissal scheduled for `ticket`. Stale tickets
    /// are ignored.
    pub fn expire(&mut self, ticket: u64) -> Option<Notification> {
        if self.current.as_ref().is_some_and(|n| n.ticket == ticket) {
            return self.current.take();
        }
        tracing::trace!(ticket, "ignoring stale dismissal");
        None
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}
