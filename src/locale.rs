//! Localized UI strings and date formatting.
//!
//! The page ships in one language, chosen by `locale` in `config.toml`.
//! Dates follow the conventions of that language: Russian uses the genitive
//! month name after a day number ("4 марта 2024 г.") and the nominative one
//! on its own ("март 2024 г."); English uses "March 4, 2024" / "March 2024".

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

const RU_MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Fixed strings rendered into the page.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub lang: &'static str,
    pub nav_about: &'static str,
    pub nav_experience: &'static str,
    pub nav_projects: &'static str,
    pub nav_changelog: &'static str,
    pub theme_toggle_title: &'static str,
    pub age_label: &'static str,
    pub experience_title: &'static str,
    pub present: &'static str,
    pub projects_title: &'static str,
    pub filter_all: &'static str,
    pub filter_personal: &'static str,
    pub filter_hobby: &'static str,
    pub view_project: &'static str,
    pub changelog_title: &'static str,
    pub changelog_subtitle: &'static str,
    pub unknown_date: &'static str,
    pub rights: &'static str,
    pub load_error_title: &'static str,
    pub unknown_error: &'static str,
}

const RU_STRINGS: Strings = Strings {
    lang: "ru",
    nav_about: "О себе",
    nav_experience: "Опыт",
    nav_projects: "Проекты",
    nav_changelog: "Changelog",
    theme_toggle_title: "Переключить тему",
    age_label: "ВОЗРАСТ",
    experience_title: "Опыт работы",
    present: "настоящее время",
    projects_title: "Проекты и увлечения",
    filter_all: "Все",
    filter_personal: "Личные проекты",
    filter_hobby: "Хобби",
    view_project: "СМОТРЕТЬ ПРОЕКТ →",
    changelog_title: "Changelog",
    changelog_subtitle: "Подробный отчет о задачах, решенных на каждой неделе",
    unknown_date: "Дата не указана",
    rights: "Все права защищены (или нет).",
    load_error_title: "Ошибка загрузки данных",
    unknown_error: "Неизвестная ошибка",
};

const EN_STRINGS: Strings = Strings {
    lang: "en",
    nav_about: "About",
    nav_experience: "Experience",
    nav_projects: "Projects",
    nav_changelog: "Changelog",
    theme_toggle_title: "Toggle theme",
    age_label: "AGE",
    experience_title: "Work experience",
    present: "present",
    projects_title: "Projects and hobbies",
    filter_all: "All",
    filter_personal: "Personal projects",
    filter_hobby: "Hobbies",
    view_project: "VIEW PROJECT →",
    changelog_title: "Changelog",
    changelog_subtitle: "A detailed report of the work done each week",
    unknown_date: "Unknown date",
    rights: "All rights reserved (or not).",
    load_error_title: "Failed to load data",
    unknown_error: "Unknown error",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ru => &RU_STRINGS,
            Locale::En => &EN_STRINGS,
        }
    }

    /// Month and year, e.g. "март 2024 г." or "March 2024".
    pub fn month_year(self, year: i32, month: u32) -> String {
        let idx = month_index(month);
        match self {
            Locale::Ru => format!("{} {year} г.", RU_MONTHS[idx]),
            Locale::En => format!("{} {year}", EN_MONTHS[idx]),
        }
    }

    /// Full date, e.g. "4 марта 2024 г." or "March 4, 2024".
    pub fn long_date(self, date: NaiveDate) -> String {
        let idx = month_index(date.month());
        match self {
            Locale::Ru => format!(
                "{} {} {} г.",
                date.day(),
                RU_MONTHS_GENITIVE[idx],
                date.year()
            ),
            Locale::En => format!("{} {}, {}", EN_MONTHS[idx], date.day(), date.year()),
        }
    }

    /// Seven-day span starting at `start`: "{start} — {start + 6 days}".
    /// Falls back to the start date alone when the end is past the
    /// calendar's range.
    pub fn week_span(self, start: NaiveDate) -> String {
        match start.checked_add_days(Days::new(6)) {
            Some(end) => format!("{} — {}", self.long_date(start), self.long_date(end)),
            None => self.long_date(start),
        }
    }

    /// Task counter with the right plural form.
    pub fn task_count(self, n: usize) -> String {
        match self {
            Locale::Ru => {
                let word = match (n % 10, n % 100) {
                    (1, r) if r != 11 => "задача",
                    (2..=4, r) if !(12..=14).contains(&r) => "задачи",
                    _ => "задач",
                };
                format!("{n} {word}")
            }
            Locale::En => {
                if n == 1 {
                    "1 task".to_string()
                } else {
                    format!("{n} tasks")
                }
            }
        }
    }
}

fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}
