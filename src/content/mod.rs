// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Profile, skills, projects and experience are written in TOML under
//! `assets/content/` and embedded into the binary. They are parsed once at
//! startup and never change while the application runs.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const CONTENT_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub about: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Link to the source code, if public.
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    /// Start of the role, `YYYY-MM`.
    pub start: String,
    /// End of the role; `None` for the current position.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

impl Experience {
    /// Human-readable date range, e.g. `2019-06 - 2022-02` or `2022-03 - Present`.
    #[must_use]
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end.as_deref().unwrap_or("Present"))
    }
}

/// All content shown by the application.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Portfolio {
    /// Loads the embedded content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if the embedded file is missing or malformed.
    pub fn load() -> Result<Self> {
        let file = Asset::get(CONTENT_FILE)
            .ok_or_else(|| Error::Content(format!("{CONTENT_FILE} is not embedded")))?;
        let text = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Content(format!("{CONTENT_FILE}: {e}")))?;
        Self::parse(text)
    }

    /// Parses content from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if the text is not valid portfolio TOML.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Content(e.to_string()))
    }

    /// Skills grouped by category, categories sorted, file order kept within
    /// each category.
    #[must_use]
    pub fn skills_by_category(&self) -> BTreeMap<&str, Vec<&Skill>> {
        let mut groups: BTreeMap<&str, Vec<&Skill>> = BTreeMap::new();
        for skill in &self.skills {
            groups.entry(skill.category.as_str()).or_default().push(skill);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let portfolio = Portfolio::parse(
            r#"
            [profile]
            name = "Sam"
            role = "Designer"
            tagline = "Hi"
            "#,
        )
        .expect("valid content");

        assert_eq!(portfolio.profile.name, "Sam");
        assert!(portfolio.profile.about.is_empty());
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.experience.is_empty());
    }

    #[test]
    fn malformed_content_is_a_content_error() {
        let err = Portfolio::parse("[[projects]]\nname = 3").expect_err("invalid");
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn current_role_period_ends_with_present() {
        let role = Experience {
            title: "Engineer".into(),
            company: "Acme".into(),
            start: "2022-03".into(),
            end: None,
            points: Vec::new(),
        };
        assert_eq!(role.period(), "2022-03 - Present");
    }

    #[test]
    fn skills_are_grouped_by_category() {
        let portfolio = Portfolio::parse(
            r#"
            [[skills]]
            name = "Rust"
            category = "Languages"

            [[skills]]
            name = "Docker"
            category = "Tools"

            [[skills]]
            name = "Go"
            category = "Languages"
            "#,
        )
        .expect("valid content");

        let groups = portfolio.skills_by_category();
        let languages: Vec<&str> = groups["Languages"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(languages, vec!["Rust", "Go"]);
        assert_eq!(groups["Tools"].len(), 1);
    }
}
