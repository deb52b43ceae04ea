//! In-process screen registry.
//!
//! One registry entry pairs a screen's configuration with its fallback
//! dataset; screens configure the shared controller instead of each
//! reimplementing it.

use crate::model::record::Record;
use crate::screen::config::{ScreenConfig, ScreenConfigError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Screen registration/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenRegistryError {
    InvalidConfig(ScreenConfigError),
    DuplicateSlug(String),
    ScreenNotFound(String),
}

impl Display for ScreenRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "{err}"),
            Self::DuplicateSlug(value) => write!(f, "screen slug already registered: {value}"),
            Self::ScreenNotFound(value) => write!(f, "screen not found: {value}"),
        }
    }
}

impl Error for ScreenRegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScreenConfigError> for ScreenRegistryError {
    fn from(value: ScreenConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

/// One registered screen: configuration plus fallback dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub config: ScreenConfig,
    /// Sample rows served when the live fetch fails or no token exists.
    pub fallback: Vec<Record>,
}

/// Slug-keyed screen registry.
#[derive(Debug, Default)]
pub struct ScreenRegistry {
    screens: BTreeMap<String, Screen>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one screen.
    ///
    /// # Errors
    /// - Returns an error when the configuration is invalid.
    /// - Returns an error when the slug is already registered.
    pub fn register(&mut self, screen: Screen) -> Result<(), ScreenRegistryError> {
        screen.config.validate()?;
        let slug = screen.config.slug.clone();
        if self.screens.contains_key(slug.as_str()) {
            return Err(ScreenRegistryError::DuplicateSlug(slug));
        }
        self.screens.insert(slug, screen);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Returns sorted screen slugs.
    pub fn slugs(&self) -> Vec<String> {
        self.screens.keys().cloned().collect()
    }

    /// Returns one screen by slug.
    pub fn get(&self, slug: &str) -> Option<&Screen> {
        self.screens.get(slug.trim())
    }

    /// Returns one screen by slug, erroring when absent.
    pub fn require(&self, slug: &str) -> Result<&Screen, ScreenRegistryError> {
        let normalized = slug.trim();
        self.screens
            .get(normalized)
            .ok_or_else(|| ScreenRegistryError::ScreenNotFound(normalized.to_string()))
    }
}
