// SPDX-License-Identifier: MPL-2.0
//! Experience timeline.
//!
//! Each entry sits next to a vertical rail with a marker; the entry closest
//! to the viewport center gets a filled marker and a highlighted card.

use super::{header, list_view};
use crate::content::Experience;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, text, Column, Container, Id, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub const SCROLLABLE_ID: &str = "experience-timeline";

pub const ROW_HEIGHT: f32 = sizing::TIMELINE_ROW_HEIGHT;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(Viewport),
}

pub struct ViewContext<'a> {
    pub entries: &'a [Experience],
    pub active: Option<usize>,
    pub accent: iced::Color,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let accent = ctx.accent;
    let rows = ctx
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| timeline_row(entry, ctx.active == Some(index), accent));

    let column = list_view(header("Work Experience", "What I have done so far"), rows, ROW_HEIGHT)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    scrollable(Container::new(column).center_x(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn timeline_row(entry: &Experience, active: bool, accent: iced::Color) -> Element<'_, Message> {
    let marker_color = if active { accent } else { palette::GRAY_700 };

    let rail = Container::new(
        Container::new(Text::new(""))
            .width(Length::Fixed(sizing::TIMELINE_MARKER))
            .height(Length::Fixed(sizing::TIMELINE_MARKER))
            .style(styles::container::fill(marker_color)),
    )
    .width(Length::Fixed(sizing::TIMELINE_MARKER))
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let points = entry.points.iter().fold(Column::new().spacing(spacing::XXS), |column, point| {
        column.push(Text::new(format!("- {point}")).size(typography::BODY_SM))
    });

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(entry.title.as_str()).size(typography::TITLE_MD))
            .push(
                Text::new(entry.company.as_str())
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().primary),
                    }),
            )
            .push(
                Text::new(entry.period())
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GRAY_400),
                    }),
            )
            .push(points),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::card(active));

    Row::new()
        .spacing(spacing::MD)
        .height(Length::Fill)
        .push(rail)
        .push(card)
        .into()
}
