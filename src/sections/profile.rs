//! Biography card: photo, name, position, age and contact links.

use super::{RenderError, claim_container};
use crate::document::Document;
use crate::locale::Locale;
use crate::types::{Contacts, Profile};
use maud::{Markup, html};

pub struct ProfileView {
    container: String,
    locale: Locale,
}

impl ProfileView {
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
        })
    }

    pub fn render(&self, doc: &mut Document, profile: &Profile) {
        doc.set_container(&self.container, render_profile(profile, self.locale));
    }
}

fn render_profile(profile: &Profile, locale: Locale) -> Markup {
    let s = locale.strings();
    html! {
        div.profile data-animate="fade-up" {
            div.profile-content {
                div.photo-frame {
                    img.photo src=(profile.photo) alt=(profile.name);
                }
                div.profile-info {
                    div.name-section {
                        h1.name { (profile.name.to_uppercase()) }
                        div.divider {}
                    }
                    @if !profile.position.is_empty() {
                        p.position { (profile.position.to_uppercase()) }
                    }
                    @if let Some(age) = profile.age {
                        p.age { (s.age_label) ": " (age) }
                    }
                    div.contacts {
                        (render_contacts(&profile.contacts))
                    }
                }
            }
        }
    }
}

/// One link per present contact method, in a fixed order.
fn render_contacts(contacts: &Contacts) -> Markup {
    html! {
        @if let Some(email) = &contacts.email {
            a.contact-link href={ "mailto:" (email) } {
                span.contact-icon { "✉" }
                span.contact-text { (email) }
            }
        }
        @if let Some(phone) = &contacts.phone {
            a.contact-link href={ "tel:" (phone) } {
                span.contact-icon { "📞" }
                span.contact-text { (phone) }
            }
        }
        @if let (Some(handle), Some(url)) = (&contacts.telegram, contacts.telegram_url()) {
            a.contact-link href=(url) target="_blank" rel="noopener noreferrer" {
                span.contact-icon { "✈" }
                span.contact-text { (handle) }
            }
        }
        @if let Some(url) = contacts.github_url() {
            a.contact-link href=(url) target="_blank" rel="noopener noreferrer" {
                span.contact-icon { "🐙" }
                span.contact-text { "GitHub" }
            }
        }
        @if let Some(url) = contacts.linkedin_url() {
            a.contact-link href=(url) target="_blank" rel="noopener noreferrer" {
                span.contact-icon { "💼" }
                span.contact-text { "LinkedIn" }
            }
        }
    }
}
