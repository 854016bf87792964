// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a kind-colored accent and a dismiss button.
//! The overlay stacks them under their anchor; toasts in their exit
//! transition are drawn faded and can no longer be dismissed.

use super::clock::Clock;
use super::manager::{Manager, Message};
use super::notification::{Kind, Notification, Position};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification, dismissing: bool) -> Element<'_, Message> {
        let accent = kind_color(notification.kind());
        let alpha = if dismissing {
            opacity::DISMISSING
        } else {
            opacity::OPAQUE
        };

        let glyph = Text::new(kind_glyph(notification.kind()))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let mut dismiss = button(Text::new("✕").size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        if !dismissing {
            dismiss = dismiss.on_press(Message::Dismiss(notification.id()));
        }

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders every anchor that currently holds at least one toast.
    pub fn view_overlay<C: Clock>(manager: &Manager<C>) -> Element<'_, Message> {
        let mut groups = manager.grouped_by_position();
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for position in Position::ALL {
            let active = groups.remove(&position).unwrap_or_default();
            let fading: Vec<&Notification> = manager
                .dismissing()
                .filter(|n| n.position() == position)
                .collect();
            if active.is_empty() && fading.is_empty() {
                continue;
            }

            let toasts = active
                .into_iter()
                .map(|n| Self::view(n, false))
                .chain(fading.into_iter().map(|n| Self::view(n, true)));

            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(horizontal(position));

            layers = layers.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(horizontal(position))
                    .align_y(vertical(position))
                    .padding(spacing::MD),
            );
        }

        layers.into()
    }
}

fn horizontal(position: Position) -> alignment::Horizontal {
    match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    }
}

fn vertical(position: Position) -> alignment::Vertical {
    if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    }
}

/// Accent color for a notification kind.
#[must_use]
pub fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
    }
}

fn kind_glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Warning => "!",
        Kind::Info => "i",
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&Theme::Dark, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismissing_toast_style_is_faded() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, opacity::DISMISSING);
        assert!((style.border.color.a - opacity::DISMISSING).abs() < f32::EPSILON);
    }

    #[test]
    fn every_kind_has_distinct_accent() {
        let colors = [
            kind_color(Kind::Success),
            kind_color(Kind::Error),
            kind_color(Kind::Warning),
            kind_color(Kind::Info),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn anchors_map_to_matching_alignment() {
        assert_eq!(horizontal(Position::TopLeft), alignment::Horizontal::Left);
        assert_eq!(horizontal(Position::BottomCenter), alignment::Horizontal::Center);
        assert_eq!(horizontal(Position::BottomRight), alignment::Horizontal::Right);
        assert_eq!(vertical(Position::TopCenter), alignment::Vertical::Top);
        assert_eq!(vertical(Position::BottomLeft), alignment::Vertical::Bottom);
    }

    #[test]
    fn overlay_renders_without_panicking() {
        let mut manager = Manager::new();
        let id = manager
            .info("hello", super::super::Options::default().at(Position::TopLeft))
            .expect("queued");
        manager.error("oops", super::super::Options::default());
        manager.remove(id);

        let _element = Toast::view_overlay(&manager);
    }
}
