// SPDX-License-Identifier: MPL-2.0
//! Landing screen: hero, about text and skills.

use crate::content::{Portfolio, Skill};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ContactRequested,
}

pub fn view(portfolio: &Portfolio) -> Element<'_, Message> {
    let profile = &portfolio.profile;

    let hero = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(format!("Hi, I'm {}", profile.name))
                .size(typography::DISPLAY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
        .push(Text::new(profile.role.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(profile.tagline.as_str())
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .push(
            button(Text::new("Get in touch").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::primary)
                .on_press(Message::ContactRequested),
        );

    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero);

    if !profile.about.is_empty() {
        content = content.push(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new("Overview").size(typography::TITLE_SM))
                .push(Text::new(profile.about.as_str()).size(typography::BODY)),
        );
    }

    let skills = portfolio.skills_by_category();
    if !skills.is_empty() {
        let groups = skills.into_iter().fold(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new("Skills").size(typography::TITLE_SM)),
            |column, (category, skills)| column.push(skill_group(category, skills)),
        );
        content = content.push(groups);
    }

    scrollable(Container::new(content).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn skill_group<'a>(category: &'a str, skills: Vec<&'a Skill>) -> Element<'a, Message> {
    let tags = skills.into_iter().fold(Row::new().spacing(spacing::XS), |row, skill| {
        row.push(
            Container::new(Text::new(skill.name.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::tag),
        )
    });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(category).size(typography::BODY_SM))
        .push(tags.wrap())
        .into()
}
