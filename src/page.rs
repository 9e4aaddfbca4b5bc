//! Page assembly.
//!
//! [`Page::bootstrap`] wires everything together in dependency order:
//!
//! ```text
//! theme manager ─▶ header ─▶ profile ─▶ experience ─▶ projects ─▶ changelog ─▶ footer
//! ```
//!
//! The theme is applied first so the document never exists without one.
//! If the content failed to load, nothing else is rendered: the `app` area
//! is replaced by a localized error message instead.
//!
//! After bootstrap, user interactions go through the page, and each one
//! re-renders only the view it concerns.

use crate::changelog::ChangelogView;
use crate::config::SiteConfig;
use crate::content::{Content, ContentError};
use crate::document::{self, Document};
use crate::locale::Locale;
use crate::sections::{
    ExperienceView, FooterView, HeaderView, ProfileView, ProjectFilter, ProjectsView, RenderError,
};
use crate::theme::{Theme, ThemeManager, ThemeStore, ThemeStoreError};
use maud::{Markup, html};

/// Views that stay interactive after the first render.
struct Interactive {
    header: HeaderView,
    projects: ProjectsView,
    changelog: ChangelogView,
    name: String,
}

pub struct Page<S: ThemeStore> {
    document: Document,
    theme: ThemeManager<S>,
    views: Option<Interactive>,
    load_error: Option<ContentError>,
}

impl<S: ThemeStore> Page<S> {
    /// Build the page from loaded (or failed) content.
    ///
    /// Returns `Err` only for integration errors (a missing container);
    /// a content failure produces an error page, see [`Page::load_error`].
    pub fn bootstrap(
        config: &SiteConfig,
        content: Result<Content, ContentError>,
        store: S,
        year: i32,
    ) -> Result<Self, RenderError> {
        Self::bootstrap_into(Document::skeleton(), config, content, store, year)
    }

    /// Like [`Page::bootstrap`], rendering into a caller-provided document.
    pub fn bootstrap_into(
        mut doc: Document,
        config: &SiteConfig,
        content: Result<Content, ContentError>,
        store: S,
        year: i32,
    ) -> Result<Self, RenderError> {
        let theme = ThemeManager::new(store, config.theme.system, &mut doc);
        let locale = config.locale;

        let content = match content {
            Ok(content) => content,
            Err(err) => {
                doc.replace_app(render_load_error(&err, locale));
                return Ok(Self {
                    document: doc,
                    theme,
                    views: None,
                    load_error: Some(err),
                });
            }
        };

        let header = HeaderView::new(&doc, document::HEADER, locale)?;
        let profile = ProfileView::new(&doc, document::PERSONAL_INFO, locale)?;
        let experience = ExperienceView::new(&doc, document::EXPERIENCE, locale)?;
        let mut projects = ProjectsView::new(&doc, document::PROJECTS, locale)?;
        let mut changelog = ChangelogView::new(&doc, document::CHANGELOG, locale)?;
        let footer = FooterView::new(&doc, document::FOOTER, locale)?;

        header.render(&mut doc, &content.profile.name, theme.get());
        profile.render(&mut doc, &content.profile);
        experience.render(&mut doc, &content.experience);
        projects.render(&mut doc, &content.projects);
        changelog.render(&mut doc, &content.changelog);
        footer.render(&mut doc, &content.profile, year);

        Ok(Self {
            document: doc,
            theme,
            views: Some(Interactive {
                header,
                projects,
                changelog,
                name: content.profile.name,
            }),
            load_error: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn load_error(&self) -> Option<&ContentError> {
        self.load_error.as_ref()
    }

    /// Take the load error out, leaving the error page in place.
    pub fn take_load_error(&mut self) -> Option<ContentError> {
        self.load_error.take()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// The explicit choice held by the theme store, if any.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.theme.stored()
    }

    /// Theme toggle clicked: flip, persist, apply, refresh the header icon.
    pub fn toggle_theme(&mut self) -> Result<Theme, ThemeStoreError> {
        let result = self.theme.toggle(&mut self.document);
        self.refresh_header();
        result
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        let result = self.theme.set(theme, &mut self.document);
        self.refresh_header();
        result
    }

    pub fn system_theme_changed(&mut self, system: Theme) {
        self.theme.system_changed(system, &mut self.document);
        self.refresh_header();
    }

    fn refresh_header(&mut self) {
        if let Some(views) = &self.views {
            views
                .header
                .render(&mut self.document, &views.name, self.theme.get());
        }
    }

    /// Month header clicked. Returns the new expansion state, or `None` on
    /// an error page.
    pub fn toggle_month(&mut self, key: &str) -> Option<bool> {
        let views = self.views.as_mut()?;
        Some(views.changelog.toggle(&mut self.document, key))
    }

    /// Filter button clicked. No-op on an error page.
    pub fn set_project_filter(&mut self, filter: ProjectFilter) {
        if let Some(views) = self.views.as_mut() {
            views.projects.set_filter(&mut self.document, filter);
        }
    }

    pub fn into_parts(self) -> (Document, S) {
        (self.document, self.theme.into_store())
    }
}

fn render_load_error(err: &ContentError, locale: Locale) -> Markup {
    let s = locale.strings();
    let message = err.to_string();
    html! {
        div.load-error {
            h1 { (s.load_error_title) }
            p {
                @if message.is_empty() { (s.unknown_error) } @else { (message) }
            }
        }
    }
}
