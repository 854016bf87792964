// SPDX-License-Identifier: MPL-2.0
//! Mail relay port definition.
//!
//! This module defines the [`MailRelay`] trait used by the contact form to
//! hand a visitor's message to an external delivery service.
//!
//! # Design Notes
//!
//! - The only guarantee is that a relay call is made and its outcome reported
//! - Relays return owned futures so callers can move them into an iced `Task`

use std::fmt;
use std::future::Future;

// =============================================================================
// MailMessage
// =============================================================================

/// A validated message ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

// =============================================================================
// RelayError
// =============================================================================

/// Errors that can occur while relaying a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// Relay credentials are missing from the configuration.
    NotConfigured,

    /// The request never got a response (DNS, TLS, timeout...).
    Transport(String),

    /// The relay answered with a non-success status.
    Rejected {
        status: u16,
        /// Response body text, possibly empty.
        message: String,
    },
}

impl RelayError {
    /// Text suitable for showing to the visitor, if the relay gave any.
    #[must_use]
    pub fn visitor_message(&self) -> Option<&str> {
        match self {
            RelayError::Rejected { message, .. } if !message.trim().is_empty() => {
                Some(message.trim())
            }
            _ => None,
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::NotConfigured => write!(f, "Mail relay is not configured"),
            RelayError::Transport(msg) => write!(f, "Mail relay unreachable: {msg}"),
            RelayError::Rejected { status, message } => {
                write!(f, "Mail relay rejected the message ({status}): {message}")
            }
        }
    }
}

impl std::error::Error for RelayError {}

// =============================================================================
// MailRelay
// =============================================================================

/// Sends contact messages through an external service.
pub trait MailRelay {
    /// Relays `message`. Resolves once the service has accepted or refused it.
    fn send(&self, message: &MailMessage)
        -> impl Future<Output = Result<(), RelayError>> + Send + 'static;
}
