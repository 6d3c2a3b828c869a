// SPDX-License-Identifier: MPL-2.0
//! Design tokens for alert boxes.
//!
//! Colours, spacing and sizes shared by the alert overlay. Keep ratios
//! intact when changing values (e.g. `MD = XS * 2`).
//!
//! ```
//! use alert_stack::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let faded = Color { a: 0.5, ..palette::SUCCESS_500 };
//! let padding = spacing::MD;
//! # let _ = (faded, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const SURFACE_50: Color = Color::from_rgb(0.97, 0.97, 0.97);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Background of the progress strip track.
    pub const PROGRESS_TRACK: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Width of one alert box.
    pub const ALERT_WIDTH: f32 = 340.0;
    /// Height of the countdown strip along the bottom of an alert.
    pub const PROGRESS_HEIGHT: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Alert header.
    pub const TITLE_SM: f32 = 16.0;
    /// Alert body.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Borders, radii, shadows
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
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
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::PROGRESS_TRACK > 0.0 && opacity::PROGRESS_TRACK < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::ALERT_WIDTH > sizing::ICON_MD * 4.0);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
