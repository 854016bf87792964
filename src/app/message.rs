// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::RelayError;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{contact, experience, home, projects};
use iced::Size;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Projects(projects::Message),
    Experience(experience::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// Result of relaying a contact message.
    ContactSent(Result<(), RelayError>),
    /// Periodic tick driving toast expiry while toasts are shown.
    Tick(Instant),
    /// Next rendered frame, delivered while an activity recomputation is pending.
    Frame,
    WindowResized(Size),
    /// The window asked to close; the app exports diagnostics and exits.
    WindowCloseRequested,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for local storage).
    /// Takes precedence over `FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Screen shown on startup.
    pub screen: Option<Screen>,
    /// File the diagnostics journal is written to on exit.
    pub diagnostics_out: Option<String>,
}
