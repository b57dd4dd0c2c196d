// SPDX-License-Identifier: MPL-2.0
//! Blocking dialogs: a dimmed backdrop with a message card.
//!
//! While shown they sit on top of the screen and swallow pointer input, so
//! the screen underneath cannot be used until a button is pressed.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, opaque, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Message with a single accept button.
pub fn view<'a, Message: Clone + 'a>(
    message: String,
    accept_label: String,
    on_accept: Message,
) -> Element<'a, Message> {
    let accept = button(text(accept_label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(on_accept);

    dialog(message, accept.into())
}

/// Question with cancel and confirm buttons.
pub fn confirm<'a, Message: Clone + 'a>(
    question: String,
    cancel_label: String,
    on_cancel: Message,
    confirm_label: String,
    on_confirm: Message,
) -> Element<'a, Message> {
    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(cancel_label).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::link)
                .on_press(on_cancel),
        )
        .push(
            button(text(confirm_label).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(on_confirm),
        );

    dialog(question, buttons.into())
}

fn dialog<'a, Message: 'a>(
    message: String,
    actions: Element<'a, Message>,
) -> Element<'a, Message> {
    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(text(message).size(typography::BODY).center())
            .push(actions),
    )
    .width(Length::Fixed(sizing::ALERT_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card);

    let backdrop = Container::new(center(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim);

    opaque(backdrop)
}
