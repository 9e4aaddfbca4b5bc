//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity
//! (position, project, month, task) is shown by its positional index and
//! title, with secondary details on indented context lines beneath it.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Илья Маслов, Backend developer
//!     Contacts: email, telegram, github
//!
//! Experience
//! 001 Acme
//!     Senior backend engineer, март 2022 г. — настоящее время
//!
//! Projects
//! 001 Folio [personal]
//! 002 Modular synth [hobby]
//!
//! Changelog
//!     4 weeks, 5 tasks, 3 months
//! ```
//!
//! ## Changelog
//!
//! ```text
//! март 2024 г. (3 задачи)
//!     001 Project filter
//!         Week: 11 марта 2024 г. — 17 марта 2024 г.
//!     002 Rewrote the rate limiter [backend]
//!         Week: 4 марта 2024 г. — 10 марта 2024 г.
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html (14.2 KB)
//!     Theme: light
//!     Assets: 3 files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::changelog::MonthGroup;
use crate::content::Content;
use crate::generate::GenerateReport;
use crate::locale::Locale;
use crate::sections::experience::format_period;
use crate::theme::Theme;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Entity line with an optional bracketed tag.
///
/// ```text
/// 001 Folio [personal]
/// 002 Added dark theme
/// ```
fn entity_line(index: usize, title: &str, tag: Option<&str>) -> String {
    match tag {
        Some(t) => format!("{} {} [{}]", format_index(index), title, t),
        None => format!("{} {}", format_index(index), title),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_content_summary(content: &Content, months: usize, locale: Locale) -> Vec<String> {
    let mut lines = Vec::new();
    let profile = &content.profile;

    lines.push("Profile".to_string());
    if profile.position.is_empty() {
        lines.push(format!("{}{}", indent(1), profile.name));
    } else {
        lines.push(format!("{}{}, {}", indent(1), profile.name, profile.position));
    }
    let c = &profile.contacts;
    let present: Vec<&str> = [
        ("email", c.email.is_some()),
        ("phone", c.phone.is_some()),
        ("telegram", c.telegram.is_some()),
        ("github", c.github.is_some()),
        ("linkedin", c.linkedin.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, has)| has.then_some(name))
    .collect();
    if present.is_empty() {
        lines.push(format!("{}Contacts: none", indent(1)));
    } else {
        lines.push(format!("{}Contacts: {}", indent(1), present.join(", ")));
    }

    lines.push(String::new());
    lines.push("Experience".to_string());
    for (i, entry) in content.experience.iter().enumerate() {
        lines.push(entity_line(i + 1, &entry.company, None));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            entry.position,
            format_period(&entry.period, locale)
        ));
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in content.projects.iter().enumerate() {
        lines.push(entity_line(i + 1, &project.title, Some(project.kind.as_str())));
    }

    let tasks: usize = content.changelog.iter().map(|e| e.tasks.len()).sum();
    lines.push(String::new());
    lines.push("Changelog".to_string());
    lines.push(format!(
        "{}{}, {}, {}",
        indent(1),
        plural(content.changelog.len(), "week", "weeks"),
        plural(tasks, "task", "tasks"),
        plural(months, "month", "months"),
    ));

    lines
}

pub fn print_content_summary(content: &Content, months: usize, locale: Locale) {
    for line in format_content_summary(content, months, locale) {
        println!("{}", line);
    }
}

// ============================================================================
// Changelog
// ============================================================================

pub fn format_changelog(groups: &[MonthGroup], locale: Locale) -> Vec<String> {
    let mut lines = Vec::new();
    for (g, group) in groups.iter().enumerate() {
        if g > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} ({})",
            group.label,
            locale.task_count(group.task_count())
        ));
        for (i, item) in group.tasks.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_line(i + 1, &item.task.title, item.task.category.as_deref())
            ));
            lines.push(format!("{}Week: {}", indent(2), item.week_label));
        }
    }
    lines
}

pub fn print_changelog(groups: &[MonthGroup], locale: Locale) {
    for line in format_changelog(groups, locale) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let name = report
        .index
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.index.display().to_string());
    vec![
        format!("{} ({})", name, format_size(report.bytes)),
        format!("{}Theme: {}", indent(1), report.theme),
        format!(
            "{}Assets: {}",
            indent(1),
            plural(report.assets_copied, "file", "files")
        ),
    ]
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Theme
// ============================================================================

/// `dark (stored)` or `light (system default)`.
pub fn format_theme(theme: Theme, explicit: bool) -> String {
    if explicit {
        format!("{} (stored)", theme)
    } else {
        format!("{} (system default)", theme)
    }
}

pub fn print_theme(theme: Theme, explicit: bool) {
    println!("{}", format_theme(theme, explicit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::group_by_month;
    use crate::test_helpers::{entry, sample_changelog, sample_content};
    use std::path::PathBuf;

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn entity_line_with_and_without_tag() {
        assert_eq!(entity_line(1, "Folio", Some("personal")), "001 Folio [personal]");
        assert_eq!(entity_line(2, "Folio", None), "002 Folio");
    }

    #[test]
    fn size_switches_to_kilobytes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn content_summary_lists_everything() {
        let lines = format_content_summary(&sample_content(), 3, Locale::Ru);

        assert_eq!(lines[0], "Profile");
        assert_eq!(lines[1], "    Илья Маслов, Backend developer");
        assert_eq!(lines[2], "    Contacts: email, telegram, github");
        assert!(lines.contains(&"001 Acme".to_string()));
        assert!(lines.contains(&"    Senior backend engineer, март 2022 г. — настоящее время".to_string()));
        assert!(lines.contains(&"002 Modular synth [hobby]".to_string()));
        assert_eq!(lines.last().unwrap(), "    4 weeks, 5 tasks, 3 months");
    }

    #[test]
    fn content_summary_without_contacts() {
        let mut content = sample_content();
        content.profile.contacts = Default::default();
        let lines = format_content_summary(&content, 0, Locale::Ru);
        assert_eq!(lines[2], "    Contacts: none");
    }

    // =========================================================================
    // Changelog
    // =========================================================================

    #[test]
    fn changelog_lists_months_then_tasks() {
        let groups = group_by_month(&sample_changelog(), Locale::Ru);
        let lines = format_changelog(&groups, Locale::Ru);

        assert_eq!(lines[0], "март 2024 г. (3 задачи)");
        assert_eq!(lines[1], "    001 Project filter");
        assert_eq!(lines[2], "        Week: 11 марта 2024 г. — 17 марта 2024 г.");
        assert_eq!(lines[3], "    002 Rewrote the rate limiter [backend]");
        assert!(lines.contains(&"февраль 2024 г. (1 задача)".to_string()));
    }

    #[test]
    fn changelog_separates_months_with_blank_line() {
        let groups = group_by_month(
            &[entry("2024-03-04", &["a"]), entry("2024-02-05", &["b"])],
            Locale::En,
        );
        let lines = format_changelog(&groups, Locale::En);
        assert_eq!(
            lines,
            vec![
                "March 2024 (1 task)",
                "    001 a",
                "        Week: March 4, 2024 — March 10, 2024",
                "",
                "February 2024 (1 task)",
                "    001 b",
                "        Week: February 5, 2024 — February 11, 2024",
            ]
        );
    }

    #[test]
    fn empty_changelog_prints_nothing() {
        assert!(format_changelog(&[], Locale::Ru).is_empty());
    }

    // =========================================================================
    // Build and theme
    // =========================================================================

    #[test]
    fn generate_output_shows_size_theme_and_assets() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            bytes: 14540,
            assets_copied: 1,
            theme: Theme::Dark,
        };
        assert_eq!(
            format_generate_output(&report),
            vec!["index.html (14.2 KB)", "    Theme: dark", "    Assets: 1 file"]
        );
    }

    #[test]
    fn theme_shows_its_origin() {
        assert_eq!(format_theme(Theme::Dark, true), "dark (stored)");
        assert_eq!(format_theme(Theme::Light, false), "light (system default)");
    }
}
