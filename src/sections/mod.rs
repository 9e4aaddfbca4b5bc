//! Per-section views.
//!
//! Each view owns one container of the [`Document`] and maps one content
//! collection to markup. Views are built against the document so that a
//! missing container fails at construction, before any rendering happens.
//! Re-rendering always replaces the whole container.

pub mod experience;
pub mod footer;
pub mod header;
pub mod profile;
pub mod projects;

use crate::document::Document;
use thiserror::Error;

pub use experience::ExperienceView;
pub use footer::FooterView;
pub use header::HeaderView;
pub use profile::ProfileView;
pub use projects::{ProjectFilter, ProjectsView};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Container with id \"{0}\" not found")]
    MissingContainer(String),
}

/// Resolve the container a view will own.
pub(crate) fn claim_container(doc: &Document, id: &str) -> Result<String, RenderError> {
    if doc.has_container(id) {
        Ok(id.to_string())
    } else {
        Err(RenderError::MissingContainer(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{self, Document};

    #[test]
    fn claim_existing_container() {
        let doc = Document::skeleton();
        assert_eq!(
            claim_container(&doc, document::PROJECTS).unwrap(),
            "projects"
        );
    }

    #[test]
    fn claim_missing_container_names_it() {
        let doc = Document::with_containers([document::HEADER]);
        let err = claim_container(&doc, "changelog").unwrap_err();
        assert_eq!(err, RenderError::MissingContainer("changelog".into()));
        assert_eq!(err.to_string(), r#"Container with id "changelog" not found"#);
    }
}
