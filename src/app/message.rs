// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{LoginSuccess, RegisterResponse, UserRecord};
use crate::auth;
use crate::error::Error;
use crate::ui::home;
use crate::ui::notifications::NotificationMessage;
use crate::ui::particles::ParticleMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Auth(auth::Message),
    Home(home::Message),
    Particles(ParticleMessage),
    Notification(NotificationMessage),
    /// Periodic tick driving phrase rotation, the intro marker and toasts.
    Tick(Instant),
    /// Window frame while the particle background is animated.
    Frame(Instant),
    /// Re-reads the system color scheme.
    ThemePoll(Instant),
    LoginFinished(Result<LoginSuccess, Error>),
    RegisterFinished(Result<RegisterResponse, Error>),
    /// Profile lookup for the greeting on the home screen.
    UserFetched(Result<Option<UserRecord>, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL, taking precedence over `backend.api_url`.
    pub api_url: Option<String>,
    /// Optional data directory override (for the key/value store).
    /// Takes precedence over `BIBLIOSENA_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BIBLIOSENA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
