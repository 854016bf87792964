// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`mail`]: Contact message delivery
//!
//! # Design Notes
//!
//! - Traits use plain data types only (no iced or HTTP client types)
//! - Methods return `Result` with port-level error types

pub mod mail;

pub use mail::{MailMessage, MailRelay, RelayError};
