// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[appearance]` - Theme mode (light, dark, or system)
//! - `[notifications]` - Toast capacity, lifetime, anchor and exit transition
//! - `[tracking]` - Optional visibility threshold for active item selection
//! - `[contact]` - Mail relay endpoint and credentials
//!
//! The accent color is not part of this file: it is visitor state, kept in
//! local storage (see [`crate::app::storage`]).
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.max_toasts = Some(3);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications::Position;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Look and feel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppearanceConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum number of toasts shown at once; older ones are evicted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Lifetime of a toast when the producer does not specify one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Anchor used when the producer does not specify one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// How long a dismissed toast keeps fading before it disappears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_toasts: Some(DEFAULT_MAX_TOASTS),
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            position: Some(Position::default()),
            exit_transition_ms: Some(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl NotificationsConfig {
    /// Capacity clamped to the supported range.
    #[must_use]
    pub fn effective_max_toasts(&self) -> usize {
        self.max_toasts
            .unwrap_or(DEFAULT_MAX_TOASTS)
            .clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS)
    }

    /// Default lifetime clamped to the supported range.
    #[must_use]
    pub fn effective_duration(&self) -> Duration {
        let ms = self
            .duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn effective_exit_transition(&self) -> Duration {
        Duration::from_millis(
            self.exit_transition_ms
                .unwrap_or(DEFAULT_EXIT_TRANSITION_MS),
        )
    }
}

/// Scroll tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrackingConfig {
    /// Minimum visibility score an item must exceed to become active.
    /// Unset means any overlapping item may be active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
}

impl TrackingConfig {
    /// Threshold clamped to the supported range. A non-finite value
    /// (`nan`, `inf`) is ignored.
    #[must_use]
    pub fn effective_threshold(&self) -> Option<f32> {
        let threshold = self.threshold?;
        if !threshold.is_finite() {
            log::warn!("Ignoring non-finite tracking threshold {threshold}");
            return None;
        }
        Some(threshold.clamp(MIN_ACTIVITY_THRESHOLD, MAX_ACTIVITY_THRESHOLD))
    }
}

/// Contact form mail relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactConfig {
    /// Relay endpoint; defaults to the public EmailJS API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Public key identifying the relay account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Name shown as the recipient in relayed messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    /// Address relayed messages are delivered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
}

impl ContactConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_RELAY_ENDPOINT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("Settings could not be read; defaults are in use.".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
