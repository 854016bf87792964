// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! Shows the brand name, one tab per screen, and the accent color picker.
//! The picker opens as a row of swatches below the bar.

use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeColor;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    pub screen: Screen,
    pub picker_open: bool,
    pub theme_color: ThemeColor,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectScreen(Screen),
    TogglePicker,
    PickColor(ThemeColor),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    ColorPicked(ThemeColor),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, picker_open: &mut bool) -> Event {
    match message {
        Message::SelectScreen(screen) => {
            *picker_open = false;
            Event::Navigate(screen)
        }
        Message::TogglePicker => {
            *picker_open = !*picker_open;
            Event::None
        }
        Message::PickColor(color) => {
            *picker_open = false;
            Event::ColorPicked(color)
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.picker_open {
        content = content.push(build_picker(ctx.theme_color));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand).size(typography::TITLE_MD);

    let tabs = Screen::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &screen| {
        row.push(
            button(Text::new(screen.label()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::tab(screen == ctx.screen))
                .on_press(Message::SelectScreen(screen)),
        )
    });

    let picker_toggle = button(Text::new(""))
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .style(styles::button::swatch(ctx.theme_color.to_color(), ctx.picker_open))
        .on_press(Message::TogglePicker);

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(tabs)
        .push(picker_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn build_picker<'a>(current: ThemeColor) -> Element<'a, Message> {
    let swatches = ThemeColor::PRESETS
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &color| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::SWATCH))
                    .height(Length::Fixed(sizing::SWATCH))
                    .style(styles::button::swatch(color.to_color(), color == current))
                    .on_press(Message::PickColor(color)),
            )
        });

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new("Accent").size(typography::CAPTION))
            .push(swatches),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .align_right(Length::Fill)
    .style(styles::container::navbar)
    .into()
}
