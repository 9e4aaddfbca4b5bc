//! Changelog: weekly entries grouped into collapsible months.
//!
//! ## Grouping
//!
//! Entries are written one per week (`week` = the date the week starts on).
//! The view shows one section per calendar month instead:
//!
//! ```text
//! 2024-03-11 ─┐
//! 2024-03-04 ─┴─▶ "2024-03" (март 2024 г.)   tasks of 03-11, then 03-04
//! 2024-02-26 ───▶ "2024-02" (февраль 2024 г.)
//! ```
//!
//! A task belongs to the month of its parent week's start date, even when the
//! week spills into the next month. Groups are ordered most recent first, and
//! tasks inside a group by week, most recent first; tasks of the same week
//! keep their original order.
//!
//! Groups are derived data: [`group_by_month`] rebuilds them from scratch on
//! every render and never mutates its input.
//!
//! ## Expansion
//!
//! Every group starts collapsed. Clicking a header toggles that group only;
//! the set of expanded keys lives in [`ExpansionState`], owned by the view,
//! so it survives the full re-render that follows each toggle.

use crate::document::Document;
use crate::locale::Locale;
use crate::sections::{RenderError, claim_container};
use crate::types::{ChangelogEntry, ChangelogTask};
use chrono::{Datelike, NaiveDate};
use maud::{Markup, html};
use std::collections::{BTreeMap, BTreeSet};

/// Key of the group collecting entries whose week does not parse as a date.
pub const UNKNOWN_MONTH: &str = "unknown";

/// A task annotated with the week it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTask {
    pub task: ChangelogTask,
    /// Display label of the source week, e.g. "4 марта 2024 г. — 10 марта 2024 г.".
    pub week_label: String,
    /// Milliseconds since the epoch of the week start. Only used for ordering.
    pub timestamp: i64,
}

/// All tasks of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// `YYYY-MM`, or [`UNKNOWN_MONTH`].
    pub key: String,
    /// Localized month and year, e.g. "март 2024 г.".
    pub label: String,
    pub tasks: Vec<GroupedTask>,
}

impl MonthGroup {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_dated(&self) -> bool {
        self.key != UNKNOWN_MONTH
    }
}

fn parse_week(week: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(week.trim(), "%Y-%m-%d").ok()
}

/// `"2024-03"` for any date in March 2024.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Group weekly entries into months, most recent month first.
pub fn group_by_month(entries: &[ChangelogEntry], locale: Locale) -> Vec<MonthGroup> {
    let mut sorted: Vec<&ChangelogEntry> = entries.iter().collect();
    // Fixed-format dates: lexicographic order is chronological order.
    sorted.sort_by(|a, b| b.week.cmp(&a.week));

    let mut groups: BTreeMap<String, MonthGroup> = BTreeMap::new();
    for entry in sorted {
        let (key, label, span, timestamp) = match parse_week(&entry.week) {
            Some(date) => (
                month_key(date),
                locale.month_year(date.year(), date.month()),
                locale.week_span(date),
                date.and_hms_opt(0, 0, 0)
                    .map(|dt| dt.and_utc().timestamp_millis())
                    .unwrap_or(i64::MIN),
            ),
            None => (
                UNKNOWN_MONTH.to_string(),
                locale.strings().unknown_date.to_string(),
                entry.week.clone(),
                i64::MIN,
            ),
        };

        let group = groups.entry(key.clone()).or_insert_with(|| MonthGroup {
            key,
            label,
            tasks: Vec::new(),
        });
        group.tasks.extend(entry.tasks.iter().map(|task| GroupedTask {
            task: task.clone(),
            week_label: span.clone(),
            timestamp,
        }));
    }

    let mut groups: Vec<MonthGroup> = groups.into_values().collect();
    for group in &mut groups {
        // Stable: tasks of the same week keep their order.
        group.tasks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
    // Dated months newest first, the undated group last.
    groups.sort_by(|a, b| (b.is_dated(), &b.key).cmp(&(a.is_dated(), &a.key)));
    groups
}

/// Which month groups are currently expanded. Starts empty.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip one group. Returns the new state (`true` = expanded).
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn expanded_keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// The changelog section.
pub struct ChangelogView {
    container: String,
    locale: Locale,
    entries: Vec<ChangelogEntry>,
    expansion: ExpansionState,
}

impl ChangelogView {
    /// Claim container `id`. Fails if the document has no such container.
    pub fn new(doc: &Document, id: &str, locale: Locale) -> Result<Self, RenderError> {
        Ok(Self {
            container: claim_container(doc, id)?,
            locale,
            entries: Vec::new(),
            expansion: ExpansionState::default(),
        })
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Replace the entries and render them.
    pub fn render(&mut self, doc: &mut Document, entries: &[ChangelogEntry]) {
        self.entries = entries.to_vec();
        self.render_content(doc);
    }

    /// A header was clicked: flip that group and re-render everything.
    pub fn toggle(&mut self, doc: &mut Document, key: &str) -> bool {
        let expanded = self.expansion.toggle(key);
        self.render_content(doc);
        expanded
    }

    fn render_content(&self, doc: &mut Document) {
        let groups = group_by_month(&self.entries, self.locale);
        let markup = render_changelog(&groups, &self.expansion, self.locale);
        doc.set_container(&self.container, markup);
    }
}

fn render_changelog(groups: &[MonthGroup], expansion: &ExpansionState, locale: Locale) -> Markup {
    let s = locale.strings();
    html! {
        div.changelog data-animate="fade-up" {
            h2.section-title { (s.changelog_title) }
            p.changelog-subtitle { (s.changelog_subtitle) }
            div.changelog-months {
                @for group in groups {
                    (render_group(group, expansion.is_expanded(&group.key), locale))
                }
            }
        }
    }
}

fn render_group(group: &MonthGroup, expanded: bool, locale: Locale) -> Markup {
    html! {
        div.month {
            button.month-header.expanded[expanded] type="button"
                data-month=(group.key) aria-expanded=(if expanded { "true" } else { "false" }) {
                span.month-label { (group.label) }
                span.month-count { (locale.task_count(group.task_count())) }
                span.month-toggle { @if expanded { "▼" } @else { "▶" } }
            }
            div.month-content.expanded[expanded] {
                div.tasks {
                    @for item in &group.tasks {
                        div.task {
                            span.task-week { (item.week_label) }
                            div.task-header {
                                h4.task-title { (item.task.title) }
                                @if let Some(category) = &item.task.category {
                                    span.task-category { (category) }
                                }
                            }
                            p.task-description { (item.task.description) }
                        }
                    }
                }
            }
        }
    }
}
