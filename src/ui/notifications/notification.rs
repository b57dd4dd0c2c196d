// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of toast; selects the panel title and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// i18n key of the panel title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Info => "toast-title-info",
            Severity::Success => "toast-title-success",
            Severity::Error => "toast-title-error",
        }
    }
}

/// A toast on screen.
///
/// The auto-dismiss deadline is fixed at creation. Hovering clears it for
/// good; once dismissed the toast fades out before removal.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Literal body text; never interpreted as markup.
    message: String,
    created_at: Instant,
    dismiss_deadline: Option<Instant>,
    leaving_since: Option<Instant>,
}

impl Notification {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: now,
            dismiss_deadline: Some(now + duration),
            leaving_since: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the toast will start leaving on its own, if ever.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.dismiss_deadline
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.leaving_since.is_some()
    }

    pub(super) fn cancel_auto_dismiss(&mut self) -> bool {
        self.dismiss_deadline.take().is_some()
    }

    pub(super) fn start_leaving(&mut self, now: Instant) -> bool {
        if self.leaving_since.is_some() {
            return false;
        }
        self.dismiss_deadline = None;
        self.leaving_since = Some(now);
        true
    }

    pub(super) fn leaving_since(&self) -> Option<Instant> {
        self.leaving_since
    }

    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        self.leaving_since.is_none() && self.dismiss_deadline.is_some_and(|d| now >= d)
    }
}
