// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast is a titled card: the title comes from its severity, the body is
//! the message as plain text. Hovering a toast cancels its auto-dismiss.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};
use std::time::Instant;

pub struct Toast;

impl Toast {
    /// Renders a single toast notification at opacity `alpha`.
    pub fn view<'a>(notification: &'a Notification, alpha: f32, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();
        let id = notification.id();

        let title = Text::new(i18n.tr(notification.severity().title_key()))
            .size(typography::BODY)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            });
        let body = Text::new(notification.message()).size(typography::BODY);

        let close = button(text("×").size(typography::TITLE_MD))
            .on_press(Message::Dismiss(id))
            .padding([0.0, spacing::XS])
            .style(styles::button::dismiss(alpha));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title)
                    .push(body),
            )
            .push(close);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent, alpha));

        mouse_area(card).on_enter(Message::Hovered(id)).into()
    }

    /// Renders the toast container in the top-right corner.
    ///
    /// Before the first toast the container does not exist and nothing is
    /// laid out.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Instant, i18n: &'a I18n) -> Element<'a, Message> {
        if !manager.has_container() {
            return Container::new(text("")).width(Length::Shrink).height(Length::Shrink).into();
        }

        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, manager.opacity(notification, now), i18n))
            .collect();

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
    }
}
