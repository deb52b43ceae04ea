//! Core collection-controller logic for the wellness admin console.
//! This crate is the single source of truth for list-screen invariants.

pub mod controller;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod model;
pub mod notify;
pub mod paging;
pub mod screen;
pub mod session;

pub use controller::machine::{Completion, Controller, FetchTicket};
pub use controller::state::{ControllerState, Phase};
pub use fetch::error::FetchError;
pub use fetch::fixture::FixturePageFetch;
pub use fetch::normalize::{normalize_page, normalize_payload, LocalFilter, RawPage};
pub use fetch::rest::{
    NoToken, RestConfigError, RestPageFetch, RestSourceConfig, StaticToken, TokenProvider,
};
pub use fetch::PageFetch;
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::page::{total_pages, PageRequest, PageRequestError, PageResult};
pub use model::record::{Record, RecordId, RecordValidationError};
pub use notify::{FailureNotice, FailureNotifier, LogNotifier};
pub use paging::range::{pagination_range, PageMarker};
pub use screen::catalog::{builtin_catalog, CatalogError};
pub use screen::config::{ScreenConfig, ScreenConfigError};
pub use screen::registry::{Screen, ScreenRegistry, ScreenRegistryError};
pub use session::ScreenSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
