//! Footer with copyright line and social links.

use super::{RenderError, claim_container};
use crate::document::Document;
use crate::locale::Locale;
use crate::types::Profile;
use maud::html;

pub struct FooterView {
    container: String,
    locale: Locale,
}

impl FooterView {
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
        })
    }

    /// `year` is the copyright year, normally the current one.
    pub fn render(&self, doc: &mut Document, profile: &Profile, year: i32) {
        let contacts = &profile.contacts;
        let links = [
            ("GitHub", contacts.github_url()),
            ("LinkedIn", contacts.linkedin_url()),
            ("Telegram", contacts.telegram_url()),
            ("Email", contacts.email.as_ref().map(|e| format!("mailto:{e}"))),
        ];

        let markup = html! {
            div.footer-content data-animate="fade" {
                p.copyright {
                    "© " (year) " " (profile.name) ". " (self.locale.strings().rights)
                }
                div.social {
                    @for (label, url) in links {
                        @if let Some(url) = url {
                            @if url.starts_with("mailto:") {
                                a.social-link href=(url) aria-label=(label) { (label) }
                            } @else {
                                a.social-link href=(url) target="_blank" rel="noopener noreferrer" aria-label=(label) { (label) }
                            }
                        }
                    }
                }
            }
        };
        doc.set_container(&self.container, markup);
    }
}
