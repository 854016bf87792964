// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    Content(String),
    Diagnostics(String),
    Theme(ThemeError),
}

/// Reasons a theme color string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Value is not exactly seven characters long.
    InvalidLength(usize),

    /// Value does not start with `#`.
    MissingHash,

    /// One of the six hex digits is not `0-9a-fA-F`.
    InvalidDigit(char),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidLength(len) => {
                write!(f, "expected 7 characters (#rrggbb), got {len}")
            }
            ThemeError::MissingHash => write!(f, "color must start with '#'"),
            ThemeError::InvalidDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Storage(e) => write!(f, "Storage Error: {e}"),
            Error::Content(e) => write!(f, "Content Error: {e}"),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {e}"),
            Error::Theme(e) => write!(f, "Theme Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Error::Theme(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_conversion_preserves_message() {
        let err = io::Error::other("disk full");
        let converted: Error = err.into();
        match converted {
            Error::Io(message) => assert!(message.contains("disk full")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn display_prefixes_category() {
        assert_eq!(
            format!("{}", Error::Config("bad section".into())),
            "Config Error: bad section"
        );
        assert_eq!(
            format!("{}", Error::Storage("corrupt".into())),
            "Storage Error: corrupt"
        );
    }

    #[test]
    fn theme_error_converts_into_error() {
        let err: Error = ThemeError::MissingHash.into();
        assert_eq!(format!("{err}"), "Theme Error: color must start with '#'");
    }
}
