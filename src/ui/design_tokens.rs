// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the single source of colors, spacing and sizes.
//!
//! Components must take values from here rather than hard-coding them, so
//! the login screen, the home screen and the toasts stay consistent.
//!
//! ```
//! use bibliosena::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::SCRIM,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (scrim, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.13);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);

    // SENA green scale
    pub const BRAND_300: Color = Color::from_rgb(0.47, 0.82, 0.35);
    pub const BRAND_500: Color = Color::from_rgb(0.224, 0.663, 0.0); // #39A900
    pub const BRAND_700: Color = Color::from_rgb(0.15, 0.46, 0.0);

    // Auth background gradient stops
    pub const NIGHT_TOP: Color = Color::from_rgb(0.02, 0.13, 0.09);
    pub const NIGHT_BOTTOM: Color = Color::from_rgb(0.0, 0.05, 0.04);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.27);
    pub const SUCCESS_500: Color = Color::from_rgb(0.224, 0.663, 0.0);
    pub const INFO_500: Color = Color::from_rgb(0.2, 0.55, 0.9);

    pub const FAVORITE: Color = Color::from_rgb(0.98, 0.75, 0.14);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    /// Backdrop behind the blocking alert.
    pub const SCRIM: f32 = 0.6;
    /// Lighter backdrop used with the light theme.
    pub const SCRIM_SOFT: f32 = 0.4;
}

// ============================================================================
// Spacing Scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const FORM_WIDTH: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const ALERT_WIDTH: f32 = 400.0;
    pub const HOME_WIDTH: f32 = 560.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Brand title on the auth screen.
    pub const DISPLAY: f32 = 40.0;
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    /// Rotating welcome phrase.
    pub const PHRASE: f32 = 22.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::SCRIM_SOFT > opacity::SUBTLE && opacity::SCRIM_SOFT < opacity::SCRIM);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::PHRASE);
    assert!(typography::PHRASE > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::FORM_WIDTH < sizing::HOME_WIDTH);
};
