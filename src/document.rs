//! The page being built.
//!
//! A [`Document`] is the rendering target every view writes into. It holds
//! the theme of the root `<html>` element and a
//! fixed set of containers, each identified by a stable id and owned by
//! exactly one view. Views replace their container's markup wholesale; the
//! document never merges or diffs.
//!
//! ```text
//! <html data-theme=…>
//!   <body>
//!     <header id="header">
//!     <main id="app">
//!       <section id="personal-info">
//!       <section id="experience">
//!       <section id="projects">
//!       <section id="changelog">
//!     <footer id="footer">
//! ```

use crate::theme::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Container ids, in page order.
pub const HEADER: &str = "header";
pub const PERSONAL_INFO: &str = "personal-info";
pub const EXPERIENCE: &str = "experience";
pub const PROJECTS: &str = "projects";
pub const CHANGELOG: &str = "changelog";
pub const FOOTER: &str = "footer";

/// Attribute that flags an element for the scroll-reveal entrance animation.
pub const ANIMATE_ATTR: &str = "data-animate";

/// Class added to a flagged element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

const APP_SECTIONS: [&str; 4] = [PERSONAL_INFO, EXPERIENCE, PROJECTS, CHANGELOG];

#[derive(Debug, Clone)]
struct Container {
    id: String,
    markup: Markup,
}

/// Runtime settings for the page script, emitted as `data-*` attributes on
/// `<body>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSettings {
    /// `localStorage` key for the visitor's theme choice.
    pub theme_key: String,
    /// Theme chosen at build time. Used before the system preference while
    /// the visitor has made no choice of their own.
    pub theme_default: Option<Theme>,
    pub reveal_top: f64,
    pub reveal_bottom: f64,
    pub reveal_grace_ms: u64,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            theme_default: None,
            reveal_top: 0.95,
            reveal_bottom: -0.10,
            reveal_grace_ms: 1000,
        }
    }
}

/// Ordered collection of view containers plus the root element's theme.
#[derive(Debug, Clone)]
pub struct Document {
    theme: Option<Theme>,
    containers: Vec<Container>,
    /// Set when the whole `app` subtree has been replaced.
    app_override: Option<Markup>,
}

impl Document {
    /// Document with every standard container present and empty.
    pub fn skeleton() -> Self {
        let ids = [HEADER]
            .into_iter()
            .chain(APP_SECTIONS)
            .chain([FOOTER]);
        Self::with_containers(ids)
    }

    /// Document with only the given containers. Useful for embedding a
    /// subset of the views, and for exercising missing-container failures.
    pub fn with_containers<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            theme: None,
            containers: ids
                .into_iter()
                .map(|id| Container {
                    id: id.to_string(),
                    markup: html! {},
                })
                .collect(),
            app_override: None,
        }
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.iter().any(|c| c.id == id)
    }

    /// Current markup of a container.
    pub fn container(&self, id: &str) -> Option<&Markup> {
        self.containers.iter().find(|c| c.id == id).map(|c| &c.markup)
    }

    /// Replace a container's markup. Returns `false` if the id is unknown.
    pub fn set_container(&mut self, id: &str, markup: Markup) -> bool {
        match self.containers.iter_mut().find(|c| c.id == id) {
            Some(container) => {
                container.markup = markup;
                true
            }
            None => false,
        }
    }

    /// Theme applied to the root element (`data-theme`).
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    /// Replace everything inside `app` (the main content area).
    pub fn replace_app(&mut self, markup: Markup) {
        self.app_override = Some(markup);
    }

    pub fn app_replaced(&self) -> bool {
        self.app_override.is_some()
    }

    fn render_container(&self, id: &str) -> Markup {
        let inner = self.container(id).cloned().unwrap_or_else(|| html! {});
        html! {
            @match id {
                HEADER => header id=(id) { (inner) },
                FOOTER => footer id=(id) { (inner) },
                _ => section id=(id) { (inner) },
            }
        }
    }

    /// Render the full HTML document.
    pub fn render(
        &self,
        title: &str,
        lang: &str,
        css: &str,
        script: &str,
        settings: &ScriptSettings,
    ) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(lang) data-theme=[self.theme.map(Theme::as_str)] {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(css)) }
                }
                body
                    data-theme-key=(settings.theme_key)
                    data-theme-default=[settings.theme_default.map(Theme::as_str)]
                    data-reveal-top=(settings.reveal_top)
                    data-reveal-bottom=(settings.reveal_bottom)
                    data-reveal-grace=(settings.reveal_grace_ms)
                {
                    @if self.has_container(HEADER) {
                        (self.render_container(HEADER))
                    }
                    main id="app" {
                        @if let Some(replacement) = &self.app_override {
                            (replacement)
                        } @else {
                            @for id in APP_SECTIONS.iter().filter(|id| self.has_container(id)) {
                                (self.render_container(id))
                            }
                        }
                    }
                    @if self.has_container(FOOTER) {
                        (self.render_container(FOOTER))
                    }
                    script { (PreEscaped(script)) }
                }
            }
        }
    }
}
