// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what they need through events; the handlers here turn
//! those events into side effects (HTTP requests, storage writes, screen
//! switches and toasts).

use super::{Message, Screen};
use crate::api::{ApiClient, LoginSuccess, RegisterResponse, UserRecord};
use crate::auth::{self, AuthController, Event as AuthEvent};
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::i18n::I18n;
use crate::session::{self, SessionKind};
use crate::storage::KeyValueStore;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::notifications::{self, Severity};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub storage: &'a dyn KeyValueStore,
    pub api: &'a ApiClient,
    pub auth: &'a mut AuthController,
    pub home: &'a mut home::State,
    pub notifications: &'a mut notifications::Manager,
    pub now: Instant,
}

/// Handles auth screen messages, starting a request when a form validates.
pub fn handle_auth_message(ctx: &mut UpdateContext<'_>, message: auth::Message) -> Task<Message> {
    match ctx.auth.update(message, ctx.now) {
        AuthEvent::None => Task::none(),
        AuthEvent::SubmitLogin(request) => {
            tracing::debug!(username = %request.username, "submitting login");
            let api = ctx.api.clone();
            Task::perform(
                async move { api.login(&request).await },
                Message::LoginFinished,
            )
        }
        AuthEvent::SubmitRegister(request) => {
            tracing::debug!(username = %request.username, "submitting registration");
            let api = ctx.api.clone();
            Task::perform(
                async move { api.register(&request).await },
                Message::RegisterFinished,
            )
        }
    }
}

/// Persists the session of a successful login and opens the home screen.
pub fn handle_login_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<LoginSuccess, Error>,
) -> Task<Message> {
    let Some(success) = ctx.auth.finish_login(result) else {
        return Task::none();
    };
    if let Err(err) = session::store_login(ctx.storage, &success.token, success.user.as_ref()) {
        tracing::error!(error = %err, "could not persist session");
    }
    enter_home(ctx)
}

pub fn handle_register_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<RegisterResponse, Error>,
) -> Task<Message> {
    ctx.auth.finish_register(result, ctx.now);
    Task::none()
}

/// Switches to the home screen, looking up the user's name when it is not
/// cached yet.
pub fn enter_home(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let favorites = FavoritesStore::new(ctx.storage).list();
    let name = session::cached_display_name(ctx.storage);
    let lookup = match (&name, session::kind(ctx.storage)) {
        (None, SessionKind::User(id)) => Some(id),
        _ => None,
    };

    *ctx.home = home::State::new(name, &favorites);
    *ctx.screen = Screen::Home;
    tracing::info!(favorites = favorites.len(), "home screen opened");

    match lookup {
        Some(id) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.fetch_user(&id).await },
                Message::UserFetched,
            )
        }
        None => Task::none(),
    }
}

/// Caches a fetched profile and fills in the greeting.
///
/// Lookups that fail or return no record greet with the generic name.
pub fn handle_user_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<UserRecord>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(record)) => session::cache_fetched_user(ctx.storage, &record),
        Ok(None) => tracing::debug!("user lookup returned no record"),
        Err(err) => tracing::warn!(error = %err, "user lookup failed"),
    }
    if *ctx.screen == Screen::Home {
        ctx.home.display_name = Some(session::display_name(ctx.storage));
    }
    Task::none()
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match ctx.home.update(message) {
        HomeEvent::None => {}
        HomeEvent::Toggle(id) => toggle_favorite(ctx, &id),
        HomeEvent::Add(id) => {
            let favorites = FavoritesStore::new(ctx.storage);
            if favorites.contains(&id) {
                favorites.refresh_indicators(&id, &mut ctx.home.indicators);
            } else {
                toggle_favorite(ctx, &id);
            }
        }
        HomeEvent::Logout => logout(ctx),
    }
    Task::none()
}

fn toggle_favorite(ctx: &mut UpdateContext<'_>, id: &str) {
    let favorites = FavoritesStore::new(ctx.storage);
    let added = favorites.toggle(id);
    favorites.refresh_indicators(id, &mut ctx.home.indicators);

    let (key, severity) = if added {
        ("home-favorite-added", Severity::Success)
    } else {
        ("home-favorite-removed", Severity::Info)
    };
    ctx.notifications
        .notify(ctx.i18n.tr_with_args(key, &[("id", id)]), severity);
}

fn logout(ctx: &mut UpdateContext<'_>) {
    session::logout(ctx.storage);
    *ctx.home = home::State::default();
    *ctx.auth = AuthController::new(ctx.now);
    *ctx.screen = Screen::Login;
    tracing::info!("logged out");
    ctx.notifications
        .notify(ctx.i18n.tr("home-logged-out"), Severity::Info);
}

/// Advances every time-based component.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Login {
        ctx.auth.tick(ctx.now);
    }
    ctx.notifications.tick(ctx.now);
    Task::none()
}
