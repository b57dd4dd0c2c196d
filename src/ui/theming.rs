// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.
//!
//! `ThemeMode::System` follows the OS preference. The application polls
//! [`ThemeMode::is_dark`] so a preference change made while running is
//! picked up without a restart.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors shared by the custom widget styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Background of cards and toasts.
    pub surface_raised: Color,
    pub text_primary: Color,
    /// Accent used for card outlines.
    pub brand: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_raised: palette::WHITE,
            text_primary: palette::GRAY_900,
            brand: palette::BRAND_700,
            scrim: Color {
                a: opacity::SCRIM_SOFT,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_raised: palette::GRAY_900,
            text_primary: palette::WHITE,
            brand: palette::BRAND_300,
            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching `theme`.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        Self::for_dark(theme.extended_palette().is_dark)
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors and "unspecified" fall back to dark.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Built-in Iced theme matching the effective mode. Brand colors are
/// applied by the widget styles in [`crate::ui::styles`].
#[must_use]
pub fn iced_theme(is_dark: bool) -> Theme {
    if is_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
