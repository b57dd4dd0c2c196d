// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every toast on screen, their auto-dismiss deadlines and
//! the exit transition. Time is passed in explicitly so the lifecycle can be
//! driven by a tick subscription and exercised in tests.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::{DEFAULT_TOAST_DURATION_MS, TOAST_EXIT_MS};
use std::time::{Duration, Instant};

/// Length of the fade-out played before a dismissed toast is removed.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(TOAST_EXIT_MS);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed.
    Dismiss(NotificationId),
    /// Pointer entered the toast.
    Hovered(NotificationId),
}

#[derive(Debug)]
pub struct Manager {
    /// Toasts in insertion order, including those fading out.
    toasts: Vec<Notification>,
    /// Set once the overlay container exists; never unset.
    container: bool,
    default_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_duration(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }

    #[must_use]
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            container: false,
            default_duration,
        }
    }

    /// Shows `message` with the default duration.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notify_at(Instant::now(), message, severity, self.default_duration)
    }

    /// Shows `message` for `duration` starting at `now`.
    pub fn notify_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> NotificationId {
        if !self.container {
            tracing::trace!("creating toast container");
            self.container = true;
        }
        let notification = Notification::new(severity, message, duration, now);
        let id = notification.id();
        self.toasts.push(notification);
        id
    }

    /// Cancels auto-dismiss for `id`. Leaving the toast later does not
    /// re-arm it.
    pub fn hover(&mut self, id: NotificationId) -> bool {
        self.find_mut(id)
            .is_some_and(Notification::cancel_auto_dismiss)
    }

    /// Starts the exit transition for `id`.
    ///
    /// Returns `false` if the toast is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.find_mut(id)
            .is_some_and(|notification| notification.start_leaving(now))
    }

    /// Fires due deadlines and removes toasts whose exit transition is over.
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.toasts {
            if notification.should_auto_dismiss(now) {
                // The exit is timed from the deadline, not from a late tick.
                let since = notification
                    .dismiss_deadline()
                    .map_or(now, |deadline| deadline.min(now));
                notification.start_leaving(since);
            }
        }
        self.toasts.retain(|n| {
            n.leaving_since()
                .is_none_or(|since| now.saturating_duration_since(since) < EXIT_TRANSITION)
        });
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Hovered(id) => {
                self.hover(*id);
            }
        }
    }

    /// Opacity of a toast at `now`, fading to zero during the exit.
    #[must_use]
    pub fn opacity(&self, notification: &Notification, now: Instant) -> f32 {
        match notification.leaving_since() {
            None => 1.0,
            Some(since) => {
                let progress = now.saturating_duration_since(since).as_secs_f32()
                    / EXIT_TRANSITION.as_secs_f32();
                (1.0 - progress).clamp(0.0, 1.0)
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.toasts.iter_mut().find(|n| n.id() == id)
    }
}
