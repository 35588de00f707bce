// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Single source of truth for colors, opacity levels, the spacing
//! scale, component sizes, the type scale, radii, and shadows. Tokens
//! are consistent by construction; adjust ratios together.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.08, 0.07);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.13, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.27, 0.25);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.53, 0.50);
    pub const GRAY_200: Color = Color::from_rgb(0.80, 0.78, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.91, 0.89);

    // Brand colors (gold scale)
    pub const GOLD_200: Color = Color::from_rgb(0.93, 0.87, 0.70);
    pub const GOLD_400: Color = Color::from_rgb(0.85, 0.72, 0.44);
    pub const GOLD_500: Color = Color::from_rgb(0.78, 0.63, 0.32);
    pub const GOLD_600: Color = Color::from_rgb(0.65, 0.51, 0.24);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.25, 0.60, 0.35);
    pub const WARNING_500: Color = Color::from_rgb(0.85, 0.60, 0.15);
    pub const ERROR_500: Color = Color::from_rgb(0.80, 0.25, 0.22);
    pub const INFO_500: Color = Color::from_rgb(0.30, 0.55, 0.80);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Backdrop behind modal/lightbox overlays.
    pub const BACKDROP: f32 = 0.92;
    /// Overlay indicator surfaces (counter, captions).
    pub const OVERLAY_STRONG: f32 = 0.75;
    /// Subtle overlay borders.
    pub const OVERLAY_SUBTLE: f32 = 0.25;
    /// Pressed overlay controls.
    pub const OVERLAY_PRESSED: f32 = 0.55;
    /// Card and panel surfaces.
    pub const SURFACE: f32 = 0.65;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Navbar height.
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    /// Small icon edge.
    pub const ICON_SM: f32 = 16.0;
    /// Medium icon edge.
    pub const ICON_MD: f32 = 22.0;
    /// Large icon edge (overlay arrows, play badge).
    pub const ICON_LG: f32 = 32.0;
    /// Video thumbnail card height.
    pub const VIDEO_THUMB_HEIGHT: f32 = 180.0;
    /// Photo thumbnail card height.
    pub const PHOTO_THUMB_HEIGHT: f32 = 220.0;
    /// Maximum content column width on wide windows.
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    /// Toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Hero display size.
    pub const DISPLAY: f32 = 44.0;
    /// Screen titles.
    pub const TITLE: f32 = 30.0;
    /// Section headings.
    pub const HEADING: f32 = 22.0;
    /// Emphasized body (card titles).
    pub const SUBHEADING: f32 = 17.0;
    /// Body text.
    pub const BODY: f32 = 14.0;
    /// Captions, metadata, chips.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Fully rounded chips and pill buttons.
    pub const PILL: f32 = 999.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.2,
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.3,
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}
