// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.
//!
//! The form collects a name, an email address and a message, hands them to a
//! [`MailRelay`], and turns the outcome into a toast. Relay failures end at
//! the toast; nothing is propagated further.

pub mod form;

pub use form::{ContactForm, Field, FormError};

use crate::application::port::{MailMessage, MailRelay, RelayError};
use crate::ui::notifications::Kind;

/// Toast text after a successful delivery.
pub const SUCCESS_MESSAGE: &str = "Thank you. I will get back to you as soon as possible.";

/// Toast text when the relay failed without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Relays `message` through `relay`.
///
/// # Errors
///
/// Returns whatever the relay reported.
pub async fn submit<R: MailRelay>(relay: &R, message: &MailMessage) -> Result<(), RelayError> {
    relay.send(message).await
}

/// Maps a delivery outcome to the toast kind and text shown to the visitor.
#[must_use]
pub fn outcome_notification(result: &Result<(), RelayError>) -> (Kind, String) {
    match result {
        Ok(()) => (Kind::Success, SUCCESS_MESSAGE.to_string()),
        Err(err) => {
            log::warn!("Contact message not delivered: {err}");
            let text = err.visitor_message().unwrap_or(FALLBACK_ERROR_MESSAGE);
            (Kind::Error, text.to_string())
        }
    }
}
