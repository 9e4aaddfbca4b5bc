//! Shared test utilities for the simple-folio test suite.
//!
//! The sample records are parsed from `fixtures/content/`, so unit tests and
//! the on-disk fixtures always describe the same person.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = load_content(tmp.path()).unwrap();
//!
//! let groups = group_by_month(&sample_changelog(), Locale::Ru);
//! assert_eq!(task_titles(&groups[1]), vec!["Migrated CI to a self-hosted runner"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::changelog::MonthGroup;
use crate::content::Content;
use crate::types::{ChangelogEntry, ChangelogTask, Experience, Profile, Project};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Sample records (parsed from the fixtures)
// =========================================================================

pub fn sample_profile() -> Profile {
    serde_json::from_str(include_str!("../fixtures/content/personal.json")).unwrap()
}

pub fn sample_experience() -> Vec<Experience> {
    serde_json::from_str(include_str!("../fixtures/content/experience.json")).unwrap()
}

pub fn sample_projects() -> Vec<Project> {
    serde_json::from_str(include_str!("../fixtures/content/projects.json")).unwrap()
}

pub fn sample_changelog() -> Vec<ChangelogEntry> {
    serde_json::from_str(include_str!("../fixtures/content/changelog.json")).unwrap()
}

pub fn sample_content() -> Content {
    Content {
        profile: sample_profile(),
        experience: sample_experience(),
        projects: sample_projects(),
        changelog: sample_changelog(),
    }
}

// =========================================================================
// Changelog builders and extractors
// =========================================================================

/// A changelog week with one task per title, no descriptions or categories.
pub fn entry(week: &str, titles: &[&str]) -> ChangelogEntry {
    ChangelogEntry {
        week: week.to_string(),
        tasks: titles
            .iter()
            .map(|title| ChangelogTask {
                title: title.to_string(),
                description: String::new(),
                category: None,
            })
            .collect(),
    }
}

/// Task titles of a month group, in display order.
pub fn task_titles(group: &MonthGroup) -> Vec<&str> {
    group.tasks.iter().map(|t| t.task.title.as_str()).collect()
}
