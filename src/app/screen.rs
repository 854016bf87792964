// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Hero, introduction and skills.
    #[default]
    Home,
    Projects,
    /// Work experience timeline.
    Experience,
    Contact,
}

impl Screen {
    /// All screens, in navbar order.
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Projects,
        Screen::Experience,
        Screen::Contact,
    ];

    /// Identifier used on the command line and in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Projects => "projects",
            Screen::Experience => "experience",
            Screen::Contact => "contact",
        }
    }

    /// Navbar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "About",
            Screen::Projects => "Work",
            Screen::Experience => "Experience",
            Screen::Contact => "Contact",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Screen::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown screen '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("projects".parse::<Screen>(), Ok(Screen::Projects));
        assert_eq!(" Contact ".parse::<Screen>(), Ok(Screen::Contact));
    }

    #[test]
    fn unknown_screen_lists_alternatives() {
        let err = "blog".parse::<Screen>().expect_err("unknown");
        assert!(err.contains("home, projects, experience, contact"));
    }

    #[test]
    fn display_round_trips() {
        for screen in Screen::ALL {
            assert_eq!(screen.to_string().parse::<Screen>(), Ok(screen));
        }
    }
}
