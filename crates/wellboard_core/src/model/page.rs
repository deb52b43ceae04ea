//! Page request/result models.
//!
//! # Invariants
//! - `PageRequest.page` and `PageRequest.per_page` are always >= 1.
//! - `PageResult.items.len()` never exceeds the requested page size.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page request validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequestError {
    ZeroPage,
    ZeroPerPage,
}

impl Display for PageRequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPage => write!(f, "page number must be >= 1"),
            Self::ZeroPerPage => write!(f, "page size must be >= 1"),
        }
    }
}

impl Error for PageRequestError {}

/// One requested window of a collection, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a validated page request.
    pub fn new(page: u32, per_page: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if per_page == 0 {
            return Err(PageRequestError::ZeroPerPage);
        }
        Ok(Self { page, per_page })
    }

    /// Builds a request from values already known to satisfy the
    /// invariants, clamping zeros rather than erroring.
    pub(crate) fn clamped(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the 0-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }
}

/// One resolved page of records plus the collection-wide total.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<Record>,
    pub total_count: usize,
}

impl PageResult {
    /// Returns the page count for this result at the given page size.
    pub fn total_pages(&self, per_page: u32) -> u32 {
        total_pages(self.total_count, per_page)
    }
}

/// Returns `ceil(total_count / per_page)`, clamped to at least one page.
///
/// Screens always render a pagination strip, so an empty collection still
/// reports a single (empty) page.
pub fn total_pages(total_count: usize, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as usize;
    let pages = total_count.div_ceil(per_page);
    pages.max(1) as u32
}
