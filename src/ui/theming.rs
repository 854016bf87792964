// SPDX-License-Identifier: MPL-2.0
//! Theme mode and the visitor-chosen accent color.
//!
//! The light/dark mode comes from `settings.toml`. The accent color is picked
//! in the UI and persisted in local storage under [`THEME_COLOR_STORAGE_KEY`].

use crate::app::storage::LocalStorage;
use crate::config::THEME_COLOR_STORAGE_KEY;
use crate::error::{Result, ThemeError};
use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Accent color in `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColor {
    r: u8,
    g: u8,
    b: u8,
}

impl ThemeColor {
    /// Swatches offered by the color picker.
    pub const PRESETS: [ThemeColor; 6] = [
        ThemeColor::rgb(0x91, 0x5e, 0xff),
        ThemeColor::rgb(0x00, 0xce, 0xa8),
        ThemeColor::rgb(0xff, 0x6b, 0x6b),
        ThemeColor::rgb(0xf5, 0xa6, 0x23),
        ThemeColor::rgb(0x3b, 0x82, 0xf6),
        ThemeColor::rgb(0xec, 0x48, 0x99),
    ];

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` string (hex digits in either case).
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] when the length, prefix or digits are wrong.
    pub fn parse(value: &str) -> std::result::Result<Self, ThemeError> {
        let count = value.chars().count();
        if count != 7 {
            return Err(ThemeError::InvalidLength(count));
        }
        let Some(digits) = value.strip_prefix('#') else {
            return Err(ThemeError::MissingHash);
        };
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidDigit(bad));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::MissingHash)
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Owns the accent color and writes it through to local storage.
#[derive(Debug)]
pub struct ThemeStore {
    color: ThemeColor,
    storage: LocalStorage,
}

impl ThemeStore {
    /// Reads the stored accent color. Missing or invalid values fall back to
    /// the default.
    #[must_use]
    pub fn load(storage: LocalStorage) -> Self {
        let color = match storage.get(THEME_COLOR_STORAGE_KEY) {
            None => ThemeColor::default(),
            Some(stored) => ThemeColor::parse(stored).unwrap_or_else(|err| {
                log::warn!("Ignoring stored theme color {stored:?}: {err}");
                ThemeColor::default()
            }),
        };
        Self { color, storage }
    }

    #[must_use]
    pub fn color(&self) -> ThemeColor {
        self.color
    }

    /// Changes the accent color and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written. The new color stays in
    /// effect for this session.
    pub fn set_color(&mut self, color: ThemeColor) -> Result<()> {
        self.color = color;
        self.storage.set(THEME_COLOR_STORAGE_KEY, color.to_hex())
    }

    /// Builds the iced theme for `mode` with the current accent.
    #[must_use]
    pub fn theme(&self, mode: ThemeMode) -> Theme {
        let accent = self.color.to_color();
        let palette = if mode.is_dark() {
            Palette {
                background: palette::NIGHT_900,
                text: palette::WHITE,
                primary: accent,
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: palette::ERROR_500,
            }
        } else {
            Palette {
                background: palette::WHITE,
                text: palette::GRAY_900,
                primary: accent,
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: palette::ERROR_500,
            }
        };
        Theme::custom(format!("Folio {}", self.color), palette)
    }
}
