//! In-memory page-fetch adapter.
//!
//! Serves a fixed dataset through the same normalization path as the REST
//! adapter. Used by the demo binary and by tests exercising success,
//! failure and mixed-envelope behavior without a server.

use crate::fetch::error::FetchError;
use crate::fetch::normalize::RawPage;
use crate::fetch::PageFetch;
use crate::model::page::PageRequest;
use async_trait::async_trait;
use serde_json::Value;

enum Behavior {
    /// Serve the dataset as a bare array (unpaged server).
    FullSet(Vec<Value>),
    /// Serve `{data, total}` windows (paged server).
    Paged(Vec<Value>),
    /// Reject every request.
    Failing(FetchError),
}

/// Scriptable fetcher over an in-memory dataset.
pub struct FixturePageFetch {
    behavior: Behavior,
}

impl FixturePageFetch {
    /// Serves `rows` as a bare array on every request.
    pub fn full_set(rows: Vec<Value>) -> Self {
        Self {
            behavior: Behavior::FullSet(rows),
        }
    }

    /// Serves `rows` windowed into `{data, total}` envelopes.
    pub fn paged(rows: Vec<Value>) -> Self {
        Self {
            behavior: Behavior::Paged(rows),
        }
    }

    /// Rejects every request with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            behavior: Behavior::Failing(error),
        }
    }
}

#[async_trait]
impl PageFetch for FixturePageFetch {
    async fn fetch_page(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
        match &self.behavior {
            Behavior::FullSet(rows) => Ok(RawPage {
                rows: rows.clone(),
                total: None,
            }),
            Behavior::Paged(rows) => {
                let start = request.offset().min(rows.len());
                let end = (start + request.per_page() as usize).min(rows.len());
                Ok(RawPage {
                    rows: rows[start..end].to_vec(),
                    total: Some(rows.len()),
                })
            }
            Behavior::Failing(error) => Err(error.clone()),
        }
    }
}
