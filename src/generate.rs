//! Site generation.
//!
//! Loads the config and content from the source directory, assembles the
//! page and writes a single self-contained `index.html`.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The whole site: inline CSS, inline script
//! └── assets/             # Copied verbatim from content/assets/
//!     ├── photo.jpg
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/page.js`: Theme toggle, menu, changelog, project filter, scroll reveal
//!
//! The script reads its settings from `data-*` attributes on `<body>`, so
//! the same embedded file serves every configuration. A theme stored with
//! `simple-folio theme set` becomes the page's default theme: visitors see
//! it until they toggle, ahead of their system preference.
//!
//! ## Content failures
//!
//! If the content cannot be loaded, `index.html` is still written, showing
//! the localized error page, and the load error is returned to the caller.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, ContentError};
use crate::document::{Document, ScriptSettings};
use crate::page::Page;
use crate::sections::RenderError;
use crate::theme::{FileStore, Theme};
use chrono::Datelike;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/page.js");

pub const INDEX_FILE: &str = "index.html";

/// What a successful build produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub bytes: usize,
    pub assets_copied: usize,
    pub theme: Theme,
}

/// Build the site from `source` into `output`.
///
/// `state_dir` holds the persisted theme preference.
pub fn generate(
    source: &Path,
    output: &Path,
    state_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let content = content::load_content(source);
    let store = FileStore::in_dir(state_dir, &config.theme.storage_key);
    let year = chrono::Local::now().year();

    let mut page = Page::bootstrap(&config, content, store, year)?;
    let html = render_html(page.document(), &config, page.stored_theme()).into_string();

    fs::create_dir_all(output)?;
    let index = output.join(INDEX_FILE);
    fs::write(&index, &html)?;

    if let Some(err) = page.take_load_error() {
        return Err(err.into());
    }

    let assets_copied = copy_assets(
        &source.join(&config.assets_dir),
        &output.join(&config.assets_dir),
    )?;

    Ok(GenerateReport {
        index,
        bytes: html.len(),
        assets_copied,
        theme: page.theme(),
    })
}

/// Render the final HTML document with the configured styles and settings.
pub fn render_html(doc: &Document, config: &SiteConfig, theme_default: Option<Theme>) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let lang = config.locale.strings().lang;
    let settings = script_settings(config, theme_default);
    doc.render(&config.title, lang, &css, JS, &settings)
}

/// Runtime settings handed to `page.js`.
pub fn script_settings(config: &SiteConfig, theme_default: Option<Theme>) -> ScriptSettings {
    ScriptSettings {
        theme_key: config.theme.storage_key.clone(),
        theme_default,
        reveal_top: config.reveal.band_top,
        reveal_bottom: config.reveal.band_bottom,
        reveal_grace_ms: config.reveal.grace_ms,
    }
}

/// Copy the assets directory if present. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> std::io::Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    fs::create_dir_all(dst)?;
    copy_dir_recursive(src, dst)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}
