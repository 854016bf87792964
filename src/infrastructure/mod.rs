// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`emailjs`]: Contact message delivery over HTTP (implements [`MailRelay`])
//!
//! [`MailRelay`]: crate::application::port::MailRelay

pub mod emailjs;

pub use emailjs::EmailJsRelay;
