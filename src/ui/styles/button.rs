// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Brand-green call to action (submit buttons).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_300,
        button::Status::Pressed => palette::BRAND_700,
        button::Status::Disabled => Color {
            a: opacity::MEDIUM,
            ..palette::BRAND_500
        },
        button::Status::Active => palette::BRAND_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::BRAND_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Text-only button used for "switch pane" and "log out" links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.palette().text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_300,
        button::Status::Disabled => Color {
            a: opacity::MEDIUM,
            ..base
        },
        button::Status::Active => base,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Star toggle next to a favorite; filled color when `active`.
pub fn favorite(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let idle = if active {
            palette::FAVORITE
        } else {
            theme.palette().text
        };
        let text_color = match status {
            button::Status::Hovered => palette::FAVORITE,
            _ => idle,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Close button on toasts; `alpha` follows the toast fade.
pub fn dismiss(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(Color {
                    a: opacity::SUBTLE * alpha,
                    ..palette::GRAY_400
                }))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: Color {
                a: alpha,
                ..base.text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
