//! Per-screen controller configuration.
//!
//! # Responsibility
//! - Capture everything a list screen varies: page size, searchable
//!   fields, optional facet field, REST resource path, and the wording of
//!   the fallback notice.
//!
//! # Invariants
//! - `slug` is non-empty, lowercase ascii with digits/`-` only.
//! - `per_page` is >= 1.
//! - `resource_path` starts with `/`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Screen configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenConfigError {
    InvalidSlug(String),
    InvalidResourcePath(String),
    ZeroPerPage(String),
}

impl Display for ScreenConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlug(value) => write!(f, "screen slug is invalid: {value}"),
            Self::InvalidResourcePath(slug) => {
                write!(f, "screen `{slug}` resource path must start with `/`")
            }
            Self::ZeroPerPage(slug) => write!(f, "screen `{slug}` page size must be >= 1"),
        }
    }
}

impl Error for ScreenConfigError {}

/// Static configuration for one list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Stable registry key, e.g. `goal-templates`.
    pub slug: String,
    /// Human-facing screen title.
    pub title: String,
    /// REST resource path appended to the source base URL.
    pub resource_path: String,
    /// Rows per page; 10 for tables, 12 for the media grid.
    pub per_page: u32,
    /// Field names the free-text search runs over. Empty when the screen
    /// has no search box.
    #[serde(default)]
    pub search_fields: Vec<String>,
    /// Field driving the optional exact-match facet chips.
    #[serde(default)]
    pub facet_field: Option<String>,
    /// Toast wording shown when falling back to sample data. `None` for
    /// screens that fall back silently.
    #[serde(default)]
    pub failure_notice: Option<String>,
}

impl ScreenConfig {
    /// Validates slug, resource path and page size.
    pub fn validate(&self) -> Result<(), ScreenConfigError> {
        if !is_valid_slug(&self.slug) {
            return Err(ScreenConfigError::InvalidSlug(self.slug.clone()));
        }
        if !self.resource_path.starts_with('/') {
            return Err(ScreenConfigError::InvalidResourcePath(self.slug.clone()));
        }
        if self.per_page == 0 {
            return Err(ScreenConfigError::ZeroPerPage(self.slug.clone()));
        }
        Ok(())
    }
}

fn is_valid_slug(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
