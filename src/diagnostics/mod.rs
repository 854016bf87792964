// SPDX-License-Identifier: MPL-2.0
//! In-memory journal of notable application events.
//!
//! Events are sent through a cheap, cloneable [`DiagnosticsHandle`] and stored
//! by the [`DiagnosticsCollector`] in a memory-bounded circular buffer. This
//! complements the `log` output: log lines go to stderr for developers, while
//! the journal stays inside the running app and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and the receiving channel end

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
