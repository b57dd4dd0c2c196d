// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Nothing runs while idle: the tick only exists while the auth screen is
//! animating or toasts are on screen, and frames are only requested for the
//! particle background.

use super::{Message, Screen};
use iced::{time, window, Subscription};
use std::time::Duration;

/// Interval of the general purpose tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Interval at which the system color scheme is re-read.
const THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Creates the periodic tick subscription.
///
/// The tick is needed on the login screen (phrase rotation and intro
/// marker) and whenever toasts are visible (auto-dismiss and exit fades).
pub fn create_tick_subscription(screen: Screen, has_notifications: bool) -> Subscription<Message> {
    if screen == Screen::Login || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Requests a frame per redraw while the particle background is shown.
pub fn create_frame_subscription(screen: Screen, particles_enabled: bool) -> Subscription<Message> {
    if screen == Screen::Login && particles_enabled {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Polls the system color scheme when the theme follows the system.
pub fn create_theme_subscription(follows_system: bool) -> Subscription<Message> {
    if follows_system {
        time::every(THEME_POLL_INTERVAL).map(Message::ThemePoll)
    } else {
        Subscription::none()
    }
}
