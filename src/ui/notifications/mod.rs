// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`] - a single toast and its severity
//! - [`manager`] - `Manager` owning deadlines, hover cancellation and the
//!   exit transition
//! - [`toast`] - rendering
//!
//! ```ignore
//! let id = manager.notify("Libro agregado a favoritos", Severity::Success);
//! // on every tick
//! manager.tick(now);
//! // in view
//! let overlay = Toast::view_overlay(&manager, now, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, EXIT_TRANSITION};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
