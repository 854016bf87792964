// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action, filled with the accent color.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let accent = theme.palette().primary;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(accent)),
            text_color: WHITE,
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..accent
            })),
            text_color: WHITE,
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Navigation tab; the current screen is underlined with the accent color.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let text_color = if selected || matches!(status, button::Status::Hovered) {
            theme.palette().primary
        } else {
            palette.background.base.text
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if selected {
                    theme.palette().primary
                } else {
                    Color::TRANSPARENT
                },
                width: if selected { border::WIDTH_SM } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round color swatch for the accent picker.
pub fn swatch(color: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = if selected || matches!(status, button::Status::Hovered) {
            theme.palette().text
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                color: ring,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
