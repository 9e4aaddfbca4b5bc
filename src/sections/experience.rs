//! Work history timeline.

use super::{RenderError, claim_container};
use crate::document::Document;
use crate::locale::Locale;
use crate::types::{Experience, Period, PeriodEnd};
use maud::{Markup, html};

pub struct ExperienceView {
    container: String,
    locale: Locale,
}

impl ExperienceView {
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
        })
    }

    pub fn render(&self, doc: &mut Document, entries: &[Experience]) {
        let s = self.locale.strings();
        let markup = html! {
            div.experience data-animate="fade-up" {
                h2.section-title { (s.experience_title) }
                div.timeline {
                    @for entry in entries {
                        (render_entry(entry, self.locale))
                    }
                }
            }
        };
        doc.set_container(&self.container, markup);
    }
}

/// "март 2022 г. — настоящее время", "January 2020 — June 2021".
pub fn format_period(period: &Period, locale: Locale) -> String {
    let start = locale.month_year(period.start.year, period.start.month);
    let end = match period.end {
        PeriodEnd::Present => locale.strings().present.to_string(),
        PeriodEnd::Month(ym) => locale.month_year(ym.year, ym.month),
    };
    format!("{start} — {end}")
}

fn render_entry(entry: &Experience, locale: Locale) -> Markup {
    html! {
        div.timeline-item {
            div.item-header {
                h3.company { (entry.company) }
                span.period { (format_period(&entry.period, locale)) }
            }
            p.role { (entry.position) }
            ul.duties {
                @for line in &entry.description {
                    li { (line) }
                }
            }
            @if !entry.technologies.is_empty() {
                div.tech-tags {
                    @for tech in &entry.technologies {
                        span.tech-tag { (tech) }
                    }
                }
            }
        }
    }
}
