//! Async screen session facade.
//!
//! # Responsibility
//! - Own one controller plus its injected fetch/notifier capabilities and
//!   drive the full event round-trip: issue ticket, await fetch,
//!   normalize, complete, notify on fallback.
//!
//! # Invariants
//! - Fetches within one session are serialized; the sans-IO controller
//!   stays available for event loops that interleave completions.
//! - With no auth token available the session never touches the network:
//!   it serves the fallback dataset as a regular (non-error) page and
//!   emits no failure notice.

use crate::controller::machine::{Completion, Controller, FetchTicket};
use crate::controller::state::ControllerState;
use crate::fetch::normalize::{normalize_page, LocalFilter};
use crate::fetch::rest::TokenProvider;
use crate::fetch::PageFetch;
use crate::notify::{FailureNotice, FailureNotifier};
use crate::screen::config::ScreenConfigError;
use crate::screen::registry::Screen;
use std::sync::Arc;

/// One live screen: controller + fetch capability + notifier.
pub struct ScreenSession<F: PageFetch, N: FailureNotifier> {
    controller: Controller,
    fetcher: F,
    notifier: N,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl<F: PageFetch, N: FailureNotifier> ScreenSession<F, N> {
    /// Creates a session that always attempts the live fetch.
    pub fn new(screen: Screen, fetcher: F, notifier: N) -> Result<Self, ScreenConfigError> {
        Ok(Self {
            controller: Controller::new(screen)?,
            fetcher,
            notifier,
            tokens: None,
        })
    }

    /// Creates a session gated on an auth token: when the provider has
    /// none, fetches short-circuit to the fallback dataset.
    pub fn with_tokens(
        screen: Screen,
        fetcher: F,
        notifier: N,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ScreenConfigError> {
        Ok(Self {
            controller: Controller::new(screen)?,
            fetcher,
            notifier,
            tokens: Some(tokens),
        })
    }

    /// Current observable state.
    pub fn state(&self) -> &ControllerState {
        self.controller.state()
    }

    /// Initial (or manual) reload of the current snapshot.
    pub async fn refresh(&mut self) -> Completion {
        let ticket = self.controller.refresh();
        self.run(ticket).await
    }

    /// Navigates to page `n`; out-of-range values are ignored.
    pub async fn change_page(&mut self, n: u32) -> Option<Completion> {
        let ticket = self.controller.page_changed(n)?;
        Some(self.run(ticket).await)
    }

    /// Replaces the search term and reloads from page 1.
    pub async fn change_search(&mut self, term: impl Into<String>) -> Completion {
        let ticket = self.controller.search_changed(term);
        self.run(ticket).await
    }

    /// Replaces the facet selection and reloads from page 1.
    pub async fn change_facet(&mut self, facet: Option<&str>) -> Completion {
        let ticket = self.controller.facet_changed(facet);
        self.run(ticket).await
    }

    async fn run(&mut self, ticket: FetchTicket) -> Completion {
        if self.signed_out() {
            // Not an error: a signed-out session renders the sample
            // dataset without a failure notice.
            let page = self.controller.fallback_page(&ticket);
            return self.controller.complete(&ticket, Ok(page));
        }

        let outcome = match self.fetcher.fetch_page(ticket.request()).await {
            Ok(raw) => {
                // Full-collection payloads get the ticket's term and
                // facet applied locally, like a fallback dataset.
                let config = self.controller.config();
                let filter = LocalFilter {
                    search_fields: &config.search_fields,
                    term: ticket.search_term(),
                    facet_field: config.facet_field.as_deref(),
                    facet: ticket.facet(),
                };
                normalize_page(raw, ticket.request(), filter)
            }
            Err(error) => Err(error),
        };

        let completion = self.controller.complete(&ticket, outcome);
        if completion == Completion::AppliedFallback {
            if let Some(message) = self.controller.config().failure_notice.clone() {
                self.notifier.notify(&FailureNotice {
                    screen_slug: self.controller.config().slug.clone(),
                    message,
                });
            }
        }
        completion
    }

    fn signed_out(&self) -> bool {
        self.tokens
            .as_ref()
            .is_some_and(|provider| provider.token().is_none())
    }
}
