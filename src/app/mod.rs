// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio screens.
//!
//! The `App` struct wires together content, navigation, the toast queue, the
//! scroll trackers and the contact relay, and translates messages into side
//! effects like storage writes or relay requests.

mod message;
pub mod paths;
mod screen;
pub mod storage;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use crate::infrastructure::EmailJsRelay;
use crate::ui::notifications::{self, Options, QueueSettings};
use crate::ui::sections::{experience, projects, TrackedList};
use crate::ui::theming::{ThemeMode, ThemeStore};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use storage::LocalStorage;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    portfolio: Portfolio,
    theme_mode: ThemeMode,
    theme_store: ThemeStore,
    /// Whether the accent color picker is open.
    picker_open: bool,
    projects: TrackedList,
    experience: TrackedList,
    contact_form: ContactForm,
    relay: EmailJsRelay,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Where the diagnostics journal is written on exit.
    diagnostics_out: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        // Close requests go through `Message::WindowCloseRequested`.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(
            Portfolio::default(),
            &Config::default(),
            LocalStorage::in_memory(),
        )
    }
}

impl App {
    /// Assembles the state from already loaded parts.
    fn from_parts(portfolio: Portfolio, config: &Config, storage: LocalStorage) -> Self {
        let viewport_height = update::viewport_height(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        let threshold = config.tracking.effective_threshold();

        let diagnostics = DiagnosticsCollector::default();
        let mut notifications =
            notifications::Manager::with_settings(QueueSettings::from(&config.notifications));
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            screen: Screen::default(),
            projects: TrackedList::new(
                portfolio.projects.len(),
                projects::ROW_HEIGHT,
                viewport_height,
                threshold,
            ),
            experience: TrackedList::new(
                portfolio.experience.len(),
                experience::ROW_HEIGHT,
                viewport_height,
                threshold,
            ),
            portfolio,
            theme_mode: config.appearance.theme_mode,
            theme_store: ThemeStore::load(storage),
            picker_open: false,
            contact_form: ContactForm::new(),
            relay: EmailJsRelay::from_config(&config.contact),
            notifications,
            diagnostics,
            diagnostics_out: None,
        }
    }

    /// Loads settings, storage and content, reporting recoverable problems
    /// as warning toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let (storage, storage_warning) = LocalStorage::open_in(flags.data_dir.map(PathBuf::from));
        let (portfolio, content_error) = match Portfolio::load() {
            Ok(portfolio) => (portfolio, None),
            Err(err) => {
                log::error!("Failed to load portfolio content: {err}");
                (Portfolio::default(), Some(err.to_string()))
            }
        };

        let mut app = Self::from_parts(portfolio, &config, storage);
        app.diagnostics_out = flags.diagnostics_out.map(PathBuf::from);

        if !app.relay.is_configured() {
            log::info!("Contact relay is not configured; messages will not be delivered");
        }

        for warning in [config_warning, storage_warning].into_iter().flatten() {
            app.diagnostics.record(DiagnosticEventKind::Warning {
                message: warning.clone(),
            });
            app.notifications.warning(warning, Options::default());
        }
        if let Some(message) = content_error {
            app.notifications.error(
                format!("Portfolio content could not be loaded: {message}"),
                Options::default(),
            );
        }

        let task = match flags.screen {
            Some(screen) => app.update(Message::Navbar(crate::ui::navbar::Message::SelectScreen(
                screen,
            ))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let name = self.portfolio.profile.name.trim();
        if name.is_empty() {
            format!("Portfolio - {}", self.screen.label())
        } else {
            format!("{name} - {}", self.screen.label())
        }
    }

    fn theme(&self) -> Theme {
        self.theme_store.theme(self.theme_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let frame_sub = subscription::create_frame_subscription(
            self.projects.needs_frame() || self.experience.needs_frame(),
        );

        Subscription::batch([event_sub, tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            projects: &mut self.projects,
            experience: &mut self.experience,
            contact_form: &mut self.contact_form,
            relay: &self.relay,
            theme_store: &mut self.theme_store,
            picker_open: &mut self.picker_open,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(crate::ui::sections::home::Message::ContactRequested) => {
                update::handle_screen_switch(&mut ctx, Screen::Contact)
            }
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, &projects_message)
            }
            Message::Experience(experience_message) => {
                update::handle_experience_message(&mut ctx, &experience_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::ContactSent(result) => update::handle_contact_sent(&mut ctx, result),
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
            Message::Frame => update::handle_frame(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowCloseRequested => {
                update::handle_close_requested(&mut ctx, self.diagnostics_out.as_deref())
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            portfolio: &self.portfolio,
            projects: &self.projects,
            experience: &self.experience,
            contact_form: &self.contact_form,
            relay_configured: self.relay.is_configured(),
            notifications: &self.notifications,
            picker_open: self.picker_open,
            theme_color: self.theme_store.color(),
        })
    }
}
