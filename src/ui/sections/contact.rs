// SPDX-License-Identifier: MPL-2.0
//! Contact form screen.

use crate::contact::{ContactForm, Field};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Text};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
}

pub struct ViewContext<'a> {
    pub form: &'a ContactForm,
    /// Whether a mail relay is configured; the form stays usable either way.
    pub relay_configured: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = ctx.form;
    let submitting = form.is_submitting();

    let mut fields = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new("Get in touch")
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
        .push(Text::new("Contact").size(typography::TITLE_LG))
        .push(input(form, Field::Name, "What's your name?"))
        .push(input(form, Field::Email, "What's your email address?"))
        .push(input(form, Field::Message, "What do you want to say?"));

    if !ctx.relay_configured {
        fields = fields.push(
            Text::new("Messages cannot be delivered from this build.")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }

    let label = if submitting { "Sending..." } else { "Send" };
    let send = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press_maybe((!submitting).then_some(Message::Submit));

    let panel = Container::new(fields.push(send))
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::panel);

    scrollable(
        Container::new(panel)
            .padding(spacing::LG)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn labelled<'a>(field: Field, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(field.label()).size(typography::BODY_SM))
        .push(control)
        .into()
}

fn input<'a>(form: &'a ContactForm, field: Field, placeholder: &'a str) -> Element<'a, Message> {
    let mut control = text_input(placeholder, form.value(field))
        .padding(spacing::SM)
        .size(typography::BODY);
    if !form.is_submitting() {
        control = control
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit);
    }
    labelled(field, control.into())
}
