// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast queue capacity and timing
//! - **Tracking**: Scroll-driven active item selection
//! - **Appearance**: Accent color
//! - **Contact**: Mail relay endpoint
//! - **Diagnostics**: In-memory event journal

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default maximum number of toasts visible at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum accepted toast capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum accepted toast capacity.
pub const MAX_MAX_TOASTS: usize = 20;

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Minimum configurable default toast lifetime in milliseconds.
pub const MIN_TOAST_DURATION_MS: u64 = 100;

/// Maximum configurable default toast lifetime in milliseconds.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// How long a dismissed toast keeps rendering while it fades out.
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Interval of the tick that drives toast expiry.
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Tracking Defaults
// ==========================================================================

/// Lowest accepted visibility threshold.
pub const MIN_ACTIVITY_THRESHOLD: f32 = 0.0;

/// Highest accepted visibility threshold (a score can never exceed 1.0).
pub const MAX_ACTIVITY_THRESHOLD: f32 = 0.99;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Accent color used until the visitor picks one.
pub const DEFAULT_THEME_COLOR: &str = "#915eff";

/// Local storage key under which the accent color is persisted.
pub const THEME_COLOR_STORAGE_KEY: &str = "theme-color";

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Default mail relay endpoint (EmailJS REST API).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Timeout applied to mail relay requests, in seconds.
pub const RELAY_TIMEOUT_SECS: u64 = 15;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics journal capacity (events).
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Capacity of the channel between handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_TOASTS > 0);
    assert!(MAX_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);

    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(NOTIFICATION_TICK_MS <= MIN_TOAST_DURATION_MS);

    assert!(MIN_ACTIVITY_THRESHOLD < MAX_ACTIVITY_THRESHOLD);
    assert!(MAX_ACTIVITY_THRESHOLD < 1.0);

    assert!(DEFAULT_THEME_COLOR.len() == 7);

    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= DIAGNOSTICS_CHANNEL_CAPACITY);
};
