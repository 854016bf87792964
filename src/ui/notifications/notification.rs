// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with its `Kind`,
//! screen anchor (`Position`) and display `Phase`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// What the notification reports; drives icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Something failed and the visitor should know.
    Error,
    /// Non-blocking problem.
    Warning,
    #[default]
    Info,
}

impl Kind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen anchor a toast is stacked under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    #[default]
    BottomRight,
    BottomCenter,
}

impl Position {
    /// All anchors, in rendering order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns true for the three anchors along the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }
}

/// Per-call overrides for [`super::Manager::add`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub position: Option<Position>,
    pub duration: Option<Duration>,
}

impl Options {
    /// Anchors the toast at `position` instead of the queue default.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Keeps the toast for `duration` instead of the queue default.
    /// A zero duration falls back to the default.
    #[must_use]
    pub fn lasting(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Display phase of a notification.
///
/// The queue drops an entry from its active set as soon as it expires or is
/// removed, but the display layer may keep drawing it while it fades out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// In the queue and counted against capacity.
    Active,
    /// Logically removed; still drawn with its last values during the exit transition.
    Dismissing,
    /// Fully gone, or never known.
    Gone,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    position: Position,
    duration: Duration,
    created_at: Instant,
}

impl Notification {
    /// Builds a notification. Text validation is the queue's job, which is
    /// why this is crate-private.
    pub(crate) fn new(
        kind: Kind,
        message: String,
        position: Position,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message,
            position,
            duration,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant at which the notification expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.created_at + self.duration
    }
}
