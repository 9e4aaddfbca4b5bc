//! # Simple Folio
//!
//! A single-page static site generator for personal portfolios. Four JSON
//! files are the data source: a profile, a work history, a list of
//! projects, and a weekly changelog. The output is one `index.html`.
//!
//! # Architecture: Document and Views
//!
//! The page is a [`document::Document`] with a fixed set of containers.
//! Each section is a view that owns exactly one container and replaces its
//! markup wholesale whenever it re-renders:
//!
//! ```text
//! content/*.json ──▶ content::load_content ──▶ page::Page::bootstrap ──▶ Document ──▶ index.html
//!                                                   │
//!                                                   ├─ theme    (data-theme on the root)
//!                                                   ├─ sections (header, profile, experience, projects, footer)
//!                                                   └─ changelog (weekly entries grouped by month)
//! ```
//!
//! Views are constructed against the document, so a missing container is an
//! error at construction time rather than a silently blank section.
//! Interactive state (project filter, expanded months, theme) lives in the
//! view that uses it; the same behavior ships to the browser in
//! `static/page.js`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content records deserialized from the JSON sources |
//! | [`content`] | Loads the four JSON sources, all-or-nothing |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`locale`] | Fixed UI strings and localized dates (Russian, English) |
//! | [`document`] | The rendering target: root attributes and section containers |
//! | [`theme`] | Light/dark preference: resolution, persistence, application |
//! | [`sections`] | Header, profile, experience, projects, and footer views |
//! | [`changelog`] | Month grouping and the collapsible changelog view |
//! | [`reveal`] | Scroll-reveal controller over a host-provided surface |
//! | [`page`] | Assembles the page and routes user interactions |
//! | [`generate`] | Writes the final site to disk |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed templates are build errors, and all
//! interpolation is auto-escaped, which matters here: every string on the
//! page comes from user-written JSON.
//!
//! ## One File Out
//!
//! CSS and JavaScript are embedded at compile time and inlined into
//! `index.html`. The only other output is the copied `assets/` directory.
//! The generated page works from any file server, or straight from disk.
//!
//! ## Month Grouping Is Derived
//!
//! The changelog is authored per week but read per month. Groups are never
//! stored; [`changelog::group_by_month`] rebuilds them from the entries on
//! every render, so the JSON stays the single source of truth.

pub mod changelog;
pub mod config;
pub mod content;
pub mod document;
pub mod generate;
pub mod locale;
pub mod output;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
