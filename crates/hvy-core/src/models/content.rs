//! Read-only portfolio records consumed by the module views.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::CONTENT_TOML;
use crate::error::ContentError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Kind of an experience record, shown as its log tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
    Research,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StackGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// All portfolio records.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub stack: Vec<StackGroup>,
}

impl Portfolio {
    /// Parses a TOML document and checks that record ids are unique.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(source)?;
        ensure_unique("project", portfolio.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("experience", portfolio.experience.iter().map(|e| e.id.as_str()))?;
        Ok(portfolio)
    }

    /// Loads the records embedded at compile time.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(CONTENT_TOML)
    }

    pub fn featured_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.featured)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn package_count(&self) -> usize {
        self.stack.iter().map(|g| g.items.len()).sum()
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::embedded().expect("embedded content must parse");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert_eq!(
            portfolio.featured_project().map(|p| p.id.as_str()),
            Some("healiora")
        );
    }

    #[test]
    fn test_experience_type_field() {
        let source = r#"
            [[experience]]
            id = "a"
            role = "Engineer"
            company = "Acme"
            period = "2021-2023"
            type = "work"
            details = ["shipped things"]
        "#;
        let portfolio = Portfolio::from_toml(source).unwrap();
        assert_eq!(portfolio.experience[0].kind, ExperienceKind::Work);
        assert!(portfolio.projects.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let source = r#"
            [[projects]]
            id = "x"
            name = "One"
            tagline = "first"

            [[projects]]
            id = "x"
            name = "Two"
            tagline = "second"
        "#;
        match Portfolio::from_toml(source) {
            Err(ContentError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "project");
                assert_eq!(id, "x");
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Portfolio::from_toml("[[projects]\n"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_package_count() {
        let source = r#"
            [[stack]]
            category = "lang"
            items = ["rust", "go"]

            [[stack]]
            category = "infra"
            items = ["docker"]
        "#;
        assert_eq!(Portfolio::from_toml(source).unwrap().package_count(), 3);
    }
}
