// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A producer tried to queue a toast with blank text.
    NotificationRejected {
        /// Kind of the rejected toast (`success`, `error`, ...).
        kind: String,
    },

    /// The toast queue was full and its oldest entry was dropped.
    NotificationEvicted {
        message: String,
    },

    /// The visitor navigated to another screen.
    ScreenChanged {
        screen: String,
    },

    /// The accent color changed.
    ThemeChanged {
        color: String,
    },

    /// A contact message was accepted by the relay.
    ContactDelivered,

    /// A contact message could not be delivered.
    ContactFailed {
        reason: String,
    },

    /// Non-critical problem (unreadable settings, storage, content).
    Warning {
        message: String,
    },
}
