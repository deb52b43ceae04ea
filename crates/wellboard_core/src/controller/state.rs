//! Observable controller state.

use crate::model::record::Record;

/// Lifecycle phase of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no fetch issued yet.
    Idle,
    /// A fetch intent is outstanding.
    Loading,
    /// Last applied completion was a live page.
    Ready,
    /// Last applied completion was synthesized from fallback data.
    FallbackActive,
}

/// Everything a screen reads to render its list.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    /// 1-based active page.
    pub current_page: u32,
    /// Page count of the current (possibly filtered) collection.
    pub total_pages: u32,
    /// Live free-text search term.
    pub search_term: String,
    /// Selected facet value; `None` renders as "all".
    pub facet: Option<String>,
    /// Rows of the active page.
    pub items: Vec<Record>,
    pub phase: Phase,
    /// Human-readable description of the last fetch failure, cleared on
    /// the next successful completion.
    pub last_error: Option<String>,
}

impl ControllerState {
    pub(crate) fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            search_term: String::new(),
            facet: None,
            items: Vec::new(),
            phase: Phase::Idle,
            last_error: None,
        }
    }
}
