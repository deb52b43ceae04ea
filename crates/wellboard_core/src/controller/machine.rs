//! Paginated-collection controller state machine.
//!
//! # Responsibility
//! - Drive one list screen: page changes, search/facet changes, fetch
//!   completion, and local fallback synthesis on failure.
//!
//! # Invariants
//! - Out-of-range page changes are pure no-ops.
//! - Term or facet changes always reset to page 1.
//! - A completion is applied only when its ticket still matches the live
//!   page/term/facet snapshot and no newer completion has been applied
//!   (last-request-wins); stale results are discarded, never merged.
//! - Fetch failures never propagate: the state machine answers them with
//!   a page synthesized from the screen's fallback dataset.
//!
//! The machine is sans-IO: entry points return `FetchTicket`s describing
//! the fetch the caller must perform, and `complete` feeds the outcome
//! back in. `ScreenSession` wraps this with actual async fetching.

use crate::controller::state::{ControllerState, Phase};
use crate::fetch::error::FetchError;
use crate::filter::filter_records;
use crate::model::page::{total_pages, PageRequest, PageResult};
use crate::model::record::Record;
use crate::paging::slice::slice_page;
use crate::screen::config::{ScreenConfig, ScreenConfigError};
use crate::screen::registry::Screen;
use log::{debug, info};

/// Snapshot tag carried by one in-flight fetch.
///
/// `complete` uses it to recognize responses that arrive after the user
/// has already moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    request: PageRequest,
    search_term: String,
    facet: Option<String>,
}

impl FetchTicket {
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn facet(&self) -> Option<&str> {
        self.facet.as_deref()
    }
}

/// Result of feeding one fetch outcome back into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Live page adopted verbatim.
    Applied,
    /// Failure absorbed; fallback page now showing.
    AppliedFallback,
    /// Ticket no longer matches current state; nothing changed.
    Stale,
}

/// One screen's collection controller.
pub struct Controller {
    config: ScreenConfig,
    fallback: Vec<Record>,
    state: ControllerState,
    next_seq: u64,
    last_applied_seq: Option<u64>,
}

impl Controller {
    /// Creates a controller from a validated screen definition.
    pub fn new(screen: Screen) -> Result<Self, ScreenConfigError> {
        screen.config.validate()?;
        Ok(Self {
            config: screen.config,
            fallback: screen.fallback,
            state: ControllerState::new(),
            next_seq: 0,
            last_applied_seq: None,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Current observable state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Issues the initial (or a manual) reload of the current snapshot.
    pub fn refresh(&mut self) -> FetchTicket {
        self.state.phase = Phase::Loading;
        self.issue_ticket()
    }

    /// Moves to page `n`.
    ///
    /// Returns `None` without any state change when `n` is outside
    /// `[1, total_pages]`, matching the disabled-button convention at the
    /// range boundaries.
    pub fn page_changed(&mut self, n: u32) -> Option<FetchTicket> {
        if n == 0 || n > self.state.total_pages {
            debug!(
                "event=page_change_ignored module=core screen={} requested={} total_pages={}",
                self.config.slug, n, self.state.total_pages
            );
            return None;
        }
        self.state.current_page = n;
        self.state.phase = Phase::Loading;
        info!(
            "event=page_changed module=core screen={} page={}",
            self.config.slug, n
        );
        Some(self.issue_ticket())
    }

    /// Replaces the search term and restarts from page 1.
    pub fn search_changed(&mut self, term: impl Into<String>) -> FetchTicket {
        self.state.search_term = term.into();
        self.state.current_page = 1;
        self.state.phase = Phase::Loading;
        info!(
            "event=search_changed module=core screen={} term_len={}",
            self.config.slug,
            self.state.search_term.len()
        );
        self.issue_ticket()
    }

    /// Replaces the facet selection (`None` = "all") and restarts from
    /// page 1.
    pub fn facet_changed(&mut self, facet: Option<&str>) -> FetchTicket {
        self.state.facet = facet.map(str::to_string);
        self.state.current_page = 1;
        self.state.phase = Phase::Loading;
        info!(
            "event=facet_changed module=core screen={} facet={}",
            self.config.slug,
            self.state.facet.as_deref().unwrap_or("all")
        );
        self.issue_ticket()
    }

    /// Applies one fetch outcome, unless the ticket went stale.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PageResult, FetchError>,
    ) -> Completion {
        if self.is_stale(ticket) {
            debug!(
                "event=stale_discarded module=core screen={} seq={}",
                self.config.slug, ticket.seq
            );
            return Completion::Stale;
        }
        self.last_applied_seq = Some(ticket.seq);

        match outcome {
            Ok(page) => {
                self.state.total_pages = total_pages(page.total_count, self.config.per_page);
                self.state.items = page.items;
                self.state.phase = Phase::Ready;
                self.state.last_error = None;
                info!(
                    "event=fetch_completed module=core status=ok screen={} page={} rows={}",
                    self.config.slug,
                    self.state.current_page,
                    self.state.items.len()
                );
                Completion::Applied
            }
            Err(error) => {
                let page = self.fallback_page(ticket);
                self.state.total_pages = total_pages(page.total_count, self.config.per_page);
                self.state.items = page.items;
                self.state.phase = Phase::FallbackActive;
                self.state.last_error = Some(error.to_string());
                info!(
                    "event=fetch_completed module=core status=fallback screen={} page={} error={}",
                    self.config.slug, self.state.current_page, error
                );
                Completion::AppliedFallback
            }
        }
    }

    /// Synthesizes the page a ticket would show from the fallback
    /// dataset, honoring the ticket's term and facet.
    pub fn fallback_page(&self, ticket: &FetchTicket) -> PageResult {
        let filtered = filter_records(
            &self.fallback,
            &self.config.search_fields,
            &ticket.search_term,
            self.config.facet_field.as_deref(),
            ticket.facet.as_deref(),
        );
        PageResult {
            total_count: filtered.len(),
            items: slice_page(&filtered, &ticket.request),
        }
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.next_seq += 1;
        // current_page and per_page are kept in range by the entry points.
        let request = PageRequest::clamped(self.state.current_page, self.config.per_page);
        debug!(
            "event=fetch_started module=core screen={} seq={} page={}",
            self.config.slug, self.next_seq, self.state.current_page
        );
        FetchTicket {
            seq: self.next_seq,
            request,
            search_term: self.state.search_term.clone(),
            facet: self.state.facet.clone(),
        }
    }

    fn is_stale(&self, ticket: &FetchTicket) -> bool {
        if let Some(applied) = self.last_applied_seq {
            if ticket.seq <= applied {
                return true;
            }
        }
        ticket.request.page() != self.state.current_page
            || ticket.search_term != self.state.search_term
            || ticket.facet != self.state.facet
    }
}
