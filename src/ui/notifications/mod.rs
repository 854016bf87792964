// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for visitor feedback.
//!
//! Producers queue short messages through the [`Manager`]; the manager owns
//! their lifetime, evicts the oldest toast when the queue is full, and groups
//! toasts by screen anchor for the [`Toast`] overlay.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind`, anchor `Position` and display `Phase`
//! - [`manager`] - `Manager` for queuing, expiry and the exit transition
//! - [`clock`] - Injectable time source driving expiry
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```
//! use folio::ui::notifications::{Manager, Options, Position};
//!
//! let mut manager = Manager::new();
//! manager.success("Message sent", Options::default().at(Position::TopCenter));
//!
//! let groups = manager.grouped_by_position();
//! assert_eq!(groups[&Position::TopCenter].len(), 1);
//! ```

pub mod clock;
pub mod manager;
pub mod notification;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message as NotificationMessage, Settings as QueueSettings};
pub use notification::{Kind, Notification, NotificationId, Options, Phase, Position};
pub use toast::Toast;
