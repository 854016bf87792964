// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sections`] - Home, projects, experience timeline and contact form
//!
//! # Shared Infrastructure
//!
//! - [`activity`] - Most-visible-item tracking for scrollable lists
//! - [`notifications`] - Toast notification system for user feedback
//! - [`navbar`] - Navigation bar with screen tabs and accent picker
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Theme mode and persisted accent color

pub mod activity;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
