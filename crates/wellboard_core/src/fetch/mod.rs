//! Page-fetch boundary: the async capability screens consume, plus the
//! REST and in-memory adapters implementing it.

pub mod error;
pub mod fixture;
pub mod normalize;
pub mod rest;

use crate::fetch::error::FetchError;
use crate::fetch::normalize::RawPage;
use crate::model::page::PageRequest;
use async_trait::async_trait;

/// Async page-fetch capability injected into sessions.
///
/// Adapters return the unnormalized payload; envelope normalization
/// happens at this boundary (`normalize::normalize_page`), never inside
/// the controller.
#[async_trait]
pub trait PageFetch: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<RawPage, FetchError>;
}
