// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the message handlers called from `App::update`.
//! Each handler works on an [`UpdateContext`] borrowing the parts of the
//! application state it may touch.

use super::{Message, Screen};
use crate::application::port::RelayError;
use crate::contact::{self, ContactForm, FormError};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use crate::infrastructure::EmailJsRelay;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Clock, NotificationMessage, Options, SystemClock};
use crate::ui::sections::{self, contact as contact_section, TrackedList};
use crate::ui::theming::{ThemeColor, ThemeStore};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::path::Path;

/// Toast text when the accent color could not be persisted.
pub const THEME_SAVE_FAILED_MESSAGE: &str = "Your color choice could not be saved.";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a, C: Clock = SystemClock> {
    pub screen: &'a mut Screen,
    pub projects: &'a mut TrackedList,
    pub experience: &'a mut TrackedList,
    pub contact_form: &'a mut ContactForm,
    pub relay: &'a EmailJsRelay,
    pub theme_store: &'a mut ThemeStore,
    pub picker_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager<C>,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl<C: Clock> UpdateContext<'_, C> {
    /// Scroll tracking for `screen`, if it has any.
    fn tracked_list(&mut self, screen: Screen) -> Option<&mut TrackedList> {
        match screen {
            Screen::Projects => Some(&mut *self.projects),
            Screen::Experience => Some(&mut *self.experience),
            Screen::Home | Screen::Contact => None,
        }
    }
}

/// Id of the scrollable `screen` renders its tracked list in.
fn scrollable_id(screen: Screen) -> Option<&'static str> {
    match screen {
        Screen::Projects => Some(sections::projects::SCROLLABLE_ID),
        Screen::Experience => Some(sections::experience::SCROLLABLE_ID),
        Screen::Home | Screen::Contact => None,
    }
}

/// Height available to a screen's scrollable in a window of `size`.
#[must_use]
pub fn viewport_height(size: Size) -> f32 {
    (size.height - sizing::NAVBAR_HEIGHT).max(0.0)
}

/// Moves to `target`, detaching the tracker of the screen being left and
/// attaching the one of the screen being entered.
///
/// Screens share one widget tree slot, so the entered list is snapped to the
/// top to match the offset its tracker restarts from.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    let previous = *ctx.screen;
    if let Some(list) = ctx.tracked_list(previous) {
        list.detach();
    }
    *ctx.screen = target;
    if let Some(list) = ctx.tracked_list(target) {
        list.attach();
    }

    log::debug!("Screen changed: {previous} -> {target}");
    ctx.diagnostics.record(DiagnosticEventKind::ScreenChanged {
        screen: target.as_str().to_string(),
    });

    match scrollable_id(target) {
        Some(id) => operation::snap_to(Id::new(id), RelativeOffset::START),
        None => Task::none(),
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.picker_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => handle_screen_switch(ctx, screen),
        NavbarEvent::ColorPicked(color) => {
            handle_color_picked(ctx, color);
            Task::none()
        }
    }
}

/// Applies a new accent color. A storage failure keeps the color for this
/// session and warns the visitor.
pub fn handle_color_picked(ctx: &mut UpdateContext<'_>, color: ThemeColor) {
    if let Err(err) = ctx.theme_store.set_color(color) {
        log::warn!("Failed to persist theme color {color}: {err}");
        ctx.notifications
            .warning(THEME_SAVE_FAILED_MESSAGE, Options::default());
        ctx.diagnostics.record(DiagnosticEventKind::Warning {
            message: err.to_string(),
        });
    }
    ctx.diagnostics.record(DiagnosticEventKind::ThemeChanged {
        color: color.to_hex(),
    });
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: &sections::projects::Message,
) -> Task<Message> {
    match message {
        sections::projects::Message::Scrolled(viewport) => ctx.projects.on_scroll(viewport),
    }
    Task::none()
}

pub fn handle_experience_message(
    ctx: &mut UpdateContext<'_>,
    message: &sections::experience::Message,
) -> Task<Message> {
    match message {
        sections::experience::Message::Scrolled(viewport) => ctx.experience.on_scroll(viewport),
    }
    Task::none()
}

/// Runs pending activity recomputations on the rendered frame.
pub fn handle_frame(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.projects.on_frame();
    ctx.experience.on_frame();
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let height = viewport_height(size);
    ctx.projects.on_resize(height);
    ctx.experience.on_resize(height);
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_section::Message,
) -> Task<Message> {
    match message {
        contact_section::Message::FieldChanged(field, value) => {
            ctx.contact_form.update(field, value);
            Task::none()
        }
        contact_section::Message::Submit => handle_contact_submit(ctx),
    }
}

/// Validates the form and relays it in the background.
fn handle_contact_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.contact_form.begin_submit() {
        Ok(mail) => {
            log::info!("Sending contact message from {}", mail.from_email);
            let relay = ctx.relay.clone();
            Task::perform(
                async move { contact::submit(&relay, &mail).await },
                Message::ContactSent,
            )
        }
        Err(FormError::AlreadySubmitting) => Task::none(),
        Err(err) => {
            ctx.notifications.warning(err.to_string(), Options::default());
            Task::none()
        }
    }
}

/// Ends a submission and reports the outcome as a toast.
pub fn handle_contact_sent(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), RelayError>,
) -> Task<Message> {
    ctx.contact_form.finish_submit(result.is_ok());
    ctx.diagnostics.record(match &result {
        Ok(()) => DiagnosticEventKind::ContactDelivered,
        Err(err) => DiagnosticEventKind::ContactFailed {
            reason: err.to_string(),
        },
    });

    let (kind, text) = contact::outcome_notification(&result);
    ctx.notifications.add(kind, text, Options::default());
    Task::none()
}

pub fn handle_notification_message<C: Clock>(
    ctx: &mut UpdateContext<'_, C>,
    message: &NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Writes the diagnostics journal to `export_path`, if set, then exits.
pub fn handle_close_requested(
    ctx: &mut UpdateContext<'_>,
    export_path: Option<&Path>,
) -> Task<Message> {
    ctx.diagnostics.process_pending();
    if let Some(path) = export_path {
        match ctx.diagnostics.export_to_file(path) {
            Ok(()) => log::info!("Diagnostics written to {}", path.display()),
            Err(err) => log::error!("Failed to write diagnostics to {}: {err}", path.display()),
        }
    }
    iced::exit()
}

/// Periodic housekeeping: toast expiry and diagnostics intake.
pub fn handle_tick<C: Clock>(ctx: &mut UpdateContext<'_, C>) -> Task<Message> {
    ctx.notifications.handle_message(&NotificationMessage::Tick);
    ctx.diagnostics.process_pending();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::LocalStorage;
    use crate::config::ContactConfig;
    use crate::ui::notifications::{ManualClock, QueueSettings};
    use std::time::Duration;

    /// Owned application state an [`UpdateContext`] can borrow from.
    struct State {
        screen: Screen,
        projects: TrackedList,
        experience: TrackedList,
        contact_form: ContactForm,
        relay: EmailJsRelay,
        theme_store: ThemeStore,
        picker_open: bool,
        notifications: notifications::Manager<ManualClock>,
        diagnostics: DiagnosticsCollector,
    }

    impl State {
        fn new(settings: QueueSettings, clock: ManualClock) -> Self {
            Self {
                screen: Screen::Home,
                projects: TrackedList::new(4, 150.0, 600.0, None),
                experience: TrackedList::new(4, 220.0, 600.0, None),
                contact_form: ContactForm::new(),
                relay: EmailJsRelay::from_config(&ContactConfig::default()),
                theme_store: ThemeStore::load(LocalStorage::in_memory()),
                picker_open: false,
                notifications: notifications::Manager::with_clock(settings, clock),
                diagnostics: DiagnosticsCollector::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_, ManualClock> {
            UpdateContext {
                screen: &mut self.screen,
                projects: &mut self.projects,
                experience: &mut self.experience,
                contact_form: &mut self.contact_form,
                relay: &self.relay,
                theme_store: &mut self.theme_store,
                picker_open: &mut self.picker_open,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
            }
        }
    }

    #[test]
    fn tick_expires_toasts_once_their_duration_elapsed() {
        let settings = QueueSettings {
            default_duration: Duration::from_millis(100),
            exit_transition: Duration::from_millis(50),
            ..QueueSettings::default()
        };
        let clock = ManualClock::new();
        let mut state = State::new(settings, clock.clone());
        state.notifications.info("Hello", Options::default());

        clock.advance(Duration::from_millis(99));
        let _ = handle_tick(&mut state.ctx());
        assert_eq!(state.notifications.len(), 1);

        clock.advance(Duration::from_millis(1));
        let _ = handle_tick(&mut state.ctx());
        assert!(state.notifications.is_empty());
        assert!(state.notifications.has_notifications());

        clock.advance(Duration::from_millis(50));
        let _ = handle_tick(&mut state.ctx());
        assert!(!state.notifications.has_notifications());
    }

    #[test]
    fn tick_drains_pending_diagnostics() {
        let mut state = State::new(QueueSettings::default(), ManualClock::new());
        let handle = state.diagnostics.handle();
        handle.record(DiagnosticEventKind::ContactDelivered);
        assert!(state.diagnostics.is_empty());

        let _ = handle_tick(&mut state.ctx());
        assert_eq!(state.diagnostics.len(), 1);
    }
}
