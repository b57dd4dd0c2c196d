// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Raised card holding a form or the home content.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_raised)),
        border: Border {
            color: Color {
                a: opacity::MEDIUM,
                ..scheme.brand
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Night-green gradient behind the particle field.
pub fn auth_background(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, palette::NIGHT_TOP)
        .add_stop(1.0, palette::NIGHT_BOTTOM);
    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a blocking alert.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).scrim)),
        ..Default::default()
    }
}

/// Toast panel with a severity accent and an opacity for the exit fade.
pub fn toast(accent: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let bg = scheme.surface_raised;
        let text = scheme.text_primary;
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..bg })),
            border: Border {
                color: Color { a: alpha, ..accent },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(Color { a: alpha, ..text }),
            ..Default::default()
        }
    }
}
