//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory next to the JSON sources and is optional: stock
//! defaults are used for anything it does not set.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Portfolio"       # <title> of the generated page
//! locale = "ru"             # "ru" or "en"
//! assets_dir = "assets"     # Copied verbatim to the output root
//!
//! [theme]
//! system = "light"          # Theme used when the visitor has no stored choice
//! storage_key = "theme"     # Key of the stored choice
//!
//! [reveal]
//! band_top = 0.95           # Top edge must be above this fraction of the viewport
//! band_bottom = -0.1        # Bottom edge must be below this fraction
//! grace_ms = 1000           # Safety sweep delay after the load event
//!
//! [colors.light]
//! background = "#f4f1ea"
//! surface = "#ffffff"
//! text = "#1b1b1b"
//! text_muted = "#6b6b6b"
//! border = "#d8d2c4"
//! accent = "#c2410c"
//! accent_hover = "#9a3412"
//!
//! [colors.dark]
//! background = "#111111"
//! surface = "#1b1b1b"
//! text = "#ededed"
//! text_muted = "#9a9a9a"
//! border = "#333333"
//! accent = "#fb923c"
//! accent_hover = "#fdba74"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! locale = "en"
//!
//! [colors.dark]
//! accent = "#22d3ee"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::locale::Locale;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title.
    pub title: String,
    /// Language of every fixed string and date on the page.
    pub locale: Locale,
    /// Directory (relative to the content root) copied to the output root.
    pub assets_dir: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Theme selection and persistence.
    pub theme: ThemeConfig,
    /// Scroll-reveal tuning.
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            locale: Locale::default(),
            assets_dir: "assets".to_string(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal.grace_ms == 0 {
            return Err(ConfigError::Validation(
                "reveal.grace_ms must be greater than 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.band_top) {
            return Err(ConfigError::Validation(
                "reveal.band_top must be between 0 and 1".into(),
            ));
        }
        if self.reveal.band_bottom >= self.reveal.band_top {
            return Err(ConfigError::Validation(
                "reveal.band_bottom must be below reveal.band_top".into(),
            ));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Theme selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme applied when no explicit choice is stored. At build time this
    /// stands in for the visitor's system preference.
    pub system: Theme,
    /// Key under which the explicit choice is stored.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            system: Theme::Light,
            storage_key: "theme".to_string(),
        }
    }
}

/// Scroll-reveal tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of viewport height the element's top must be above.
    pub band_top: f64,
    /// Fraction of viewport height the element's bottom must be below.
    /// Negative values reach above the top of the viewport.
    pub band_bottom: f64,
    /// Delay after the load event before everything is force-revealed.
    pub grace_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            band_top: 0.95,
            band_bottom: -0.10,
            grace_ms: 1000,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and panel background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (periods, week labels, counters).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Links, tags and active filter.
    pub accent: String,
    /// Accent on hover.
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f4f1ea".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1b1b1b".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#d8d2c4".to_string(),
            accent: "#c2410c".to_string(),
            accent_hover: "#9a3412".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111111".to_string(),
            surface: "#1b1b1b".to_string(),
            text: "#ededed".to_string(),
            text_muted: "#9a9a9a".to_string(),
            border: "#333333".to_string(),
            accent: "#fb923c".to_string(),
            accent_hover: "#fdba74".to_string(),
        }
    }

    fn css_vars(&self) -> String {
        format!(
            "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-accent: {};\n    --color-accent-hover: {};",
            self.background,
            self.surface,
            self.text,
            self.text_muted,
            self.border,
            self.accent,
            self.accent_hover,
        )
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content directory, next to personal.json,
# experience.json, projects.json and changelog.json.
# Unknown keys will cause an error.

# Title of the generated page.
title = "Portfolio"

# Language of fixed strings and dates: "ru" or "en".
locale = "ru"

# Directory (relative to the content directory) copied to the output root.
# Put the profile photo and project images here.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Theme used when the visitor has not picked one. Visitors' system
# preference takes over in the browser until they toggle explicitly.
system = "light"

# Storage key for the visitor's explicit choice.
storage_key = "theme"

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# An element is revealed once its top edge is above band_top * viewport
# height and its bottom edge is below band_bottom * viewport height.
band_top = 0.95
band_bottom = -0.1

# After the page load event, anything still hidden is revealed after this
# many milliseconds. Must be greater than 0.
grace_ms = 1000

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#f4f1ea"
surface = "#ffffff"
text = "#1b1b1b"
text_muted = "#6b6b6b"    # Periods, week labels, counters
border = "#d8d2c4"
accent = "#c2410c"        # Links, tags, active filter
accent_hover = "#9a3412"

# ---------------------------------------------------------------------------
# Colors - Dark mode
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111111"
surface = "#1b1b1b"
text = "#ededed"
text_muted = "#9a9a9a"
border = "#333333"
accent = "#fb923c"
accent_hover = "#fdba74"
"##
}

/// Generate CSS custom properties for both themes.
///
/// Light values apply by default; dark values apply under
/// `[data-theme="dark"]` on the root element.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root,\n[data-theme=\"light\"] {{\n{}\n}}\n\n[data-theme=\"dark\"] {{\n{}\n}}",
        colors.light.css_vars(),
        colors.dark.css_vars(),
    )
}
