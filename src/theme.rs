//! Light/dark theme preference.
//!
//! The [`ThemeManager`] owns the current theme, persists explicit choices to
//! a [`ThemeStore`], and applies the theme to a [`Document`] as the
//! `data-theme` attribute of the root element.
//!
//! ## Resolution
//!
//! 1. A stored explicit choice wins.
//! 2. Otherwise the system preference is used, and keeps being followed
//!    (see [`ThemeManager::system_changed`]) until the user toggles or sets
//!    a theme.
//!
//! The manager is page-scoped state: callers create one and pass it by
//! reference to whatever needs to read or change the theme.

use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: the theme you would switch *to*.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeStoreError::InvalidTheme(other.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum ThemeStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid theme {0:?} (expected \"light\" or \"dark\")")]
    InvalidTheme(String),
}

/// Durable storage for the explicit theme choice.
pub trait ThemeStore {
    /// The stored choice, or `None` if the user never made one.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;
    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// In-memory store. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<Theme>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(theme: Theme) -> Self {
        Self { value: Some(theme) }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(self.value)
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.value = Some(theme);
        Ok(())
    }
}

/// Key-value JSON file: `{ "<key>": "dark", ... }`.
///
/// Other keys in the file are preserved on save.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "preferences.json";

    /// Store at `<dir>/preferences.json` under `key`.
    pub fn in_dir(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(Self::FILE_NAME),
            key: key.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        self.read_map()?
            .get(&self.key)
            .map(|raw| raw.parse())
            .transpose()
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        let mut map = self.read_map()?;
        map.insert(self.key.clone(), theme.as_str().to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// Owns the current theme and keeps the document in sync with it.
pub struct ThemeManager<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeManager<S> {
    /// Resolve the initial theme and apply it to `doc` immediately.
    ///
    /// A store that cannot be read counts as holding no choice.
    pub fn new(store: S, system: Theme, doc: &mut Document) -> Self {
        let current = store.load().ok().flatten().unwrap_or(system);
        let manager = Self { store, current };
        manager.apply(doc);
        manager
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// The explicit, persisted choice, if any.
    pub fn stored(&self) -> Option<Theme> {
        self.store.load().ok().flatten()
    }

    /// Whether the user has made an explicit, persisted choice.
    pub fn has_explicit_choice(&self) -> bool {
        self.stored().is_some()
    }

    /// Flip the theme, persist it and apply it.
    pub fn toggle(&mut self, doc: &mut Document) -> Result<Theme, ThemeStoreError> {
        let next = self.current.toggled();
        self.set(next, doc)?;
        Ok(next)
    }

    /// Persist and apply an explicit choice.
    ///
    /// The document is updated even if persisting fails.
    pub fn set(&mut self, theme: Theme, doc: &mut Document) -> Result<(), ThemeStoreError> {
        self.current = theme;
        self.apply(doc);
        self.store.save(theme)
    }

    /// The system preference changed. Followed only while nothing is stored.
    pub fn system_changed(&mut self, system: Theme, doc: &mut Document) {
        if !self.has_explicit_choice() {
            self.current = system;
            self.apply(doc);
        }
    }

    fn apply(&self, doc: &mut Document) {
        doc.set_theme(self.current);
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
