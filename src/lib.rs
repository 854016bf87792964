// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio built with the Iced GUI framework.
//!
//! Besides the static content (hero, skills, projects, experience, contact
//! form) it provides two reusable pieces:
//!
//! - a toast notification queue with bounded size, automatic expiry and
//!   per-anchor grouping ([`ui::notifications`]);
//! - a scroll-driven tracker reporting which item of a list is closest to the
//!   viewport center ([`ui::activity`]).

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
