// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top of the current screen; toasts are stacked over
//! both.

use super::{Message, Screen};
use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections::{contact, experience, home, projects, TrackedList};
use crate::ui::theming::ThemeColor;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub portfolio: &'a Portfolio,
    pub projects: &'a TrackedList,
    pub experience: &'a TrackedList,
    pub contact_form: &'a ContactForm,
    pub relay_configured: bool,
    pub notifications: &'a Manager,
    pub picker_open: bool,
    pub theme_color: ThemeColor,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(ctx.portfolio).map(Message::Home),
        Screen::Projects => projects::view(projects::ViewContext {
            projects: &ctx.portfolio.projects,
            active: ctx.projects.active_index(),
        })
        .map(Message::Projects),
        Screen::Experience => experience::view(experience::ViewContext {
            entries: &ctx.portfolio.experience,
            active: ctx.experience.active_index(),
            accent: ctx.theme_color.to_color(),
        })
        .map(Message::Experience),
        Screen::Contact => contact::view(contact::ViewContext {
            form: ctx.contact_form,
            relay_configured: ctx.relay_configured,
        })
        .map(Message::Contact),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        brand: &ctx.portfolio.profile.name,
        screen: ctx.screen,
        picker_open: ctx.picker_open,
        theme_color: ctx.theme_color,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_renders() {
        let portfolio = Portfolio::load().expect("embedded content");
        let projects = TrackedList::new(portfolio.projects.len(), projects::ROW_HEIGHT, 600.0, None);
        let experience =
            TrackedList::new(portfolio.experience.len(), experience::ROW_HEIGHT, 600.0, None);
        let form = ContactForm::new();
        let notifications = Manager::new();

        for screen in Screen::ALL {
            let _element = view(ViewContext {
                screen,
                portfolio: &portfolio,
                projects: &projects,
                experience: &experience,
                contact_form: &form,
                relay_configured: false,
                notifications: &notifications,
                picker_open: screen == Screen::Home,
                theme_color: ThemeColor::default(),
            });
        }
    }
}
