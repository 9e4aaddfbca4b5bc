//! Project cards with a type filter.
//!
//! The filter is the view's only state. Changing it re-renders the whole
//! container, filter buttons included, so the active button always matches.

use super::{RenderError, claim_container};
use crate::document::Document;
use crate::locale::Locale;
use crate::types::{Project, ProjectKind};
use maud::{Markup, html};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectKind),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectKind::Personal),
        ProjectFilter::Only(ProjectKind::Hobby),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(kind) => project.kind == kind,
        }
    }

    fn label(self, locale: Locale) -> &'static str {
        let s = locale.strings();
        match self {
            ProjectFilter::All => s.filter_all,
            ProjectFilter::Only(ProjectKind::Personal) => s.filter_personal,
            ProjectFilter::Only(ProjectKind::Hobby) => s.filter_hobby,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ProjectFilter::All),
            "hobby" => Ok(ProjectFilter::Only(ProjectKind::Hobby)),
            "personal" => Ok(ProjectFilter::Only(ProjectKind::Personal)),
            other => Err(format!("unknown project filter {other:?}")),
        }
    }
}

/// Projects accepted by `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub struct ProjectsView {
    container: String,
    locale: Locale,
    projects: Vec<Project>,
    filter: ProjectFilter,
}

impl ProjectsView {
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
            projects: Vec::new(),
            filter: ProjectFilter::All,
        })
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn render(&mut self, doc: &mut Document, projects: &[Project]) {
        self.projects = projects.to_vec();
        self.render_content(doc);
    }

    /// Switch the filter and re-render.
    pub fn set_filter(&mut self, doc: &mut Document, filter: ProjectFilter) {
        self.filter = filter;
        self.render_content(doc);
    }

    fn render_content(&self, doc: &mut Document) {
        let s = self.locale.strings();
        let visible = filter_projects(&self.projects, self.filter);
        let markup = html! {
            div.projects data-animate="fade-up" {
                h2.section-title { (s.projects_title) }
                div.filters {
                    @for filter in ProjectFilter::ALL {
                        button.filter-button.active[filter == self.filter]
                            type="button" data-filter=(filter.as_str()) {
                            (filter.label(self.locale))
                        }
                    }
                }
                div.project-grid {
                    @for project in visible {
                        (render_card(project, self.locale))
                    }
                }
            }
        };
        doc.set_container(&self.container, markup);
    }
}

fn render_card(project: &Project, locale: Locale) -> Markup {
    let initial: String = project.title.chars().take(1).collect();
    html! {
        div.project-card data-type=(project.kind.as_str()) {
            @if let Some(image) = &project.image {
                img.project-image src=(image) alt=(project.title);
            } @else {
                div.image-placeholder { (initial) }
            }
            div.card-content {
                h3.card-title { (project.title) }
                p.card-description { (project.description) }
                div.tech-tags {
                    @for tech in &project.technologies {
                        span.tech-tag { (tech) }
                    }
                }
                @if let Some(link) = &project.link {
                    a.project-link href=(link) target="_blank" rel="noopener noreferrer" {
                        (locale.strings().view_project)
                    }
                }
            }
        }
    }
}
