//! Content loading.
//!
//! The content directory holds four JSON sources and an optional
//! `config.toml`:
//!
//! ```text
//! content/
//! ├── config.toml        # Site config (optional)
//! ├── personal.json      # Profile
//! ├── experience.json    # Work history, in display order
//! ├── projects.json      # Projects, in display order
//! ├── changelog.json     # Weekly entries, any order
//! └── assets/            # Photos and images, copied to the output root
//! ```
//!
//! Loading is all-or-nothing: the first source that cannot be read or parsed
//! fails the whole load.

use crate::types::{ChangelogEntry, Experience, Profile, Project};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PERSONAL_FILE: &str = "personal.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const CHANGELOG_FILE: &str = "changelog.json";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Everything the page renders.
#[derive(Debug, Clone)]
pub struct Content {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub changelog: Vec<ChangelogEntry>,
}

fn load_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, ContentError> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json { path, source })
}

pub fn load_profile(dir: &Path) -> Result<Profile, ContentError> {
    load_json(dir, PERSONAL_FILE)
}

pub fn load_experience(dir: &Path) -> Result<Vec<Experience>, ContentError> {
    load_json(dir, EXPERIENCE_FILE)
}

pub fn load_projects(dir: &Path) -> Result<Vec<Project>, ContentError> {
    load_json(dir, PROJECTS_FILE)
}

pub fn load_changelog(dir: &Path) -> Result<Vec<ChangelogEntry>, ContentError> {
    load_json(dir, CHANGELOG_FILE)
}

/// Load all four sources from `dir`.
pub fn load_content(dir: &Path) -> Result<Content, ContentError> {
    Ok(Content {
        profile: load_profile(dir)?,
        experience: load_experience(dir)?,
        projects: load_projects(dir)?,
        changelog: load_changelog(dir)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use crate::types::ProjectKind;

    #[test]
    fn loads_fixture_content() {
        let tmp = setup_fixtures();
        let content = load_content(tmp.path()).unwrap();

        assert_eq!(content.profile.name, "Илья Маслов");
        assert_eq!(content.experience.len(), 2);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.projects[1].kind, ProjectKind::Hobby);
        assert_eq!(content.changelog.len(), 4);
    }

    #[test]
    fn missing_source_names_the_file() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join(PROJECTS_FILE)).unwrap();

        let err = load_content(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("projects.json"));
    }

    #[test]
    fn malformed_source_names_the_file() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join(CHANGELOG_FILE), "[{\"week\": ").unwrap();

        let err = load_content(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
        assert!(err.to_string().contains("changelog.json"));
    }

    #[test]
    fn wrong_shape_is_a_json_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join(EXPERIENCE_FILE), r#"{"company": "x"}"#).unwrap();
        assert!(matches!(
            load_experience(tmp.path()),
            Err(ContentError::Json { .. })
        ));
    }

    #[test]
    fn empty_collections_are_fine() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join(CHANGELOG_FILE), "[]").unwrap();
        let content = load_content(tmp.path()).unwrap();
        assert!(content.changelog.is_empty());
    }
}
