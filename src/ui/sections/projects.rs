// SPDX-License-Identifier: MPL-2.0
//! Project cards. The card closest to the viewport center is highlighted.

use super::{header, list_view};
use crate::content::Project;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, text, Column, Container, Id, Row, Text};
use iced::{Element, Length, Theme};

pub const SCROLLABLE_ID: &str = "projects-list";

pub const ROW_HEIGHT: f32 = sizing::PROJECT_ROW_HEIGHT;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(Viewport),
}

pub struct ViewContext<'a> {
    pub projects: &'a [Project],
    pub active: Option<usize>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let rows = ctx
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| card(project, ctx.active == Some(index)));

    let column = list_view(header("Projects", "My work"), rows, ROW_HEIGHT)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    scrollable(Container::new(column).center_x(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card(project: &Project, active: bool) -> Element<'_, Message> {
    let tags = project.tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Text::new(format!("#{tag}"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
    });

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(project.name.as_str()).size(typography::TITLE_MD))
        .push(Text::new(project.description.as_str()).size(typography::BODY))
        .push(tags);

    if let Some(source) = &project.source {
        body = body.push(
            Text::new(source.as_str())
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    }

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::card(active))
        .into()
}
