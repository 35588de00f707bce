// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary pill button (main call to action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_600,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_400)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_500,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Tab button; filled when the tab is active, outlined otherwise.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        if selected {
            return primary(theme, button::Status::Active);
        }
        let text = match status {
            button::Status::Hovered => palette::GOLD_400,
            _ => palette_ext.background.base.text,
        };
        button::Style {
            background: None,
            text_color: text,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette_ext.background.base.text
                },
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Category filter chip; accented when selected.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let (text, border_color) = if selected {
            (palette::GOLD_500, palette::GOLD_500)
        } else {
            match status {
                button::Status::Hovered => (
                    palette_ext.background.base.text,
                    Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette_ext.background.base.text
                    },
                ),
                _ => (palette::GRAY_400, Color::TRANSPARENT),
            }
        };
        button::Style {
            background: None,
            text_color: text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text-like button for navigation links.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let text = if active {
            palette::GOLD_500
        } else {
            match status {
                button::Status::Hovered => palette::GOLD_400,
                _ => palette_ext.background.base.text,
            }
        };
        button::Style {
            background: None,
            text_color: text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Dark translucent button for overlay controls (arrows, close, play).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Invisible button wrapping a thumbnail card.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_500,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
