//! Site header: name, section anchors, theme toggle and mobile menu button.

use super::{RenderError, claim_container};
use crate::document::{self, Document};
use crate::locale::Locale;
use crate::theme::Theme;
use maud::{Markup, html};

pub struct HeaderView {
    container: String,
    locale: Locale,
}

impl HeaderView {
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
        })
    }

    /// Render the header for the current theme. Call again after the theme
    /// changes so the toggle icon follows it.
    pub fn render(&self, doc: &mut Document, name: &str, theme: Theme) {
        let markup = render_header(name, theme, self.locale);
        doc.set_container(&self.container, markup);
    }
}

fn render_header(name: &str, theme: Theme, locale: Locale) -> Markup {
    let s = locale.strings();
    let links = [
        (document::PERSONAL_INFO, s.nav_about),
        (document::EXPERIENCE, s.nav_experience),
        (document::PROJECTS, s.nav_projects),
        (document::CHANGELOG, s.nav_changelog),
    ];

    html! {
        nav.site-nav {
            div.logo {
                a.logo-link href={ "#" (document::PERSONAL_INFO) } { (name) }
            }
            div.nav-right {
                ul.menu {
                    @for (target, label) in links {
                        li { a.menu-link href={ "#" (target) } { (label) } }
                    }
                }
                button.theme-toggle type="button" aria-label="Toggle theme" title=(s.theme_toggle_title) {
                    span.theme-icon { (theme.toggle_icon()) }
                }
                button.menu-toggle type="button" aria-label="Toggle menu" {
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(doc: &Document) -> String {
        doc.container(document::HEADER).unwrap().clone().into_string()
    }

    #[test]
    fn header_links_every_section() {
        let mut doc = Document::skeleton();
        let view = HeaderView::new(&doc, document::HEADER, Locale::Ru).unwrap();
        view.render(&mut doc, "Илья Маслов", Theme::Light);
        let html = rendered(&doc);

        assert!(html.contains("Илья Маслов"));
        for anchor in ["#personal-info", "#experience", "#projects", "#changelog"] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert!(html.contains("О себе"));
    }

    #[test]
    fn toggle_icon_follows_theme() {
        let mut doc = Document::skeleton();
        let view = HeaderView::new(&doc, document::HEADER, Locale::En).unwrap();

        view.render(&mut doc, "A", Theme::Light);
        assert!(rendered(&doc).contains("🌙"));

        view.render(&mut doc, "A", Theme::Dark);
        let html = rendered(&doc);
        assert!(html.contains("☀️"));
        assert!(!html.contains("🌙"));
    }

    #[test]
    fn missing_container_is_an_error() {
        let doc = Document::with_containers([document::FOOTER]);
        assert!(HeaderView::new(&doc, document::HEADER, Locale::Ru).is_err());
    }
}
