// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers from bottom to top: the screen, the blocking dialog (auth alert
//! or log out confirmation) and the toast column.

use super::{Message, Screen};
use crate::auth::{self, Alert, AuthController};
use crate::i18n::I18n;
use crate::ui::home;
use crate::ui::notifications::{self, Toast};
use crate::ui::particles::{ParticleCanvas, ParticleField};
use crate::ui::{alert, login, styles};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub auth: &'a AuthController,
    pub home: &'a home::State,
    pub particles: Option<&'a ParticleField>,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => view_login(ctx.auth, ctx.particles, ctx.i18n, ctx.now),
        Screen::Home => ctx.home.view(ctx.i18n).map(Message::Home),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view);

    match ctx.screen {
        Screen::Login => {
            if let Some(current) = ctx.auth.alert() {
                layers = layers.push(view_alert(current, ctx.i18n));
            }
        }
        Screen::Home if ctx.home.confirming_logout => {
            layers = layers.push(view_logout_confirm(ctx.i18n));
        }
        Screen::Home => {}
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.now, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_login<'a>(
    auth: &'a AuthController,
    particles: Option<&'a ParticleField>,
    i18n: &'a I18n,
    now: Instant,
) -> Element<'a, Message> {
    let background = Container::new(iced::widget::Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::auth_background);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background);

    if let Some(field) = particles {
        layers = layers.push(ParticleCanvas::view(field).map(Message::Particles));
    }

    layers
        .push(login::view(auth, i18n, now).map(Message::Auth))
        .into()
}

fn view_alert<'a>(current: &Alert, i18n: &I18n) -> Element<'a, Message> {
    let text = match current {
        Alert::Key(key) => i18n.tr(key),
        Alert::Server(message) => message.clone(),
    };
    alert::view(
        text,
        i18n.tr("alert-accept"),
        Message::Auth(auth::Message::DismissAlert),
    )
}

fn view_logout_confirm<'a>(i18n: &I18n) -> Element<'a, Message> {
    alert::confirm(
        i18n.tr("home-logout-confirm"),
        i18n.tr("alert-cancel"),
        Message::Home(home::Message::CancelLogout),
        i18n.tr("home-logout"),
        Message::Home(home::Message::ConfirmLogout),
    )
}
