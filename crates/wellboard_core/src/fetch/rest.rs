//! REST page-fetch adapter.
//!
//! # Responsibility
//! - Issue `GET <base_url><resource_path>?page=<n>&limit=<k>` with a
//!   bearer token and decode the JSON payload.
//!
//! # Invariants
//! - Token retrieval goes through one injected `TokenProvider`; no
//!   adapter reads ambient token state on its own.
//! - Every request carries the configured timeout.

use crate::fetch::error::FetchError;
use crate::fetch::normalize::{normalize_payload, RawPage};
use crate::fetch::PageFetch;
use crate::model::page::PageRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Single auth-token capability shared by all screens.
///
/// `None` means "not signed in"; sessions then serve fallback data
/// without touching the network.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed-token provider for embedders that manage tokens elsewhere.
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider representing a signed-out session.
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// REST source configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestConfigError {
    EmptyBaseUrl,
    InvalidBaseUrl(String),
    ZeroTimeout,
    ClientBuild(String),
}

impl Display for RestConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBaseUrl => write!(f, "base_url cannot be empty"),
            Self::InvalidBaseUrl(value) => {
                write!(f, "base_url must start with http:// or https://, got `{value}`")
            }
            Self::ZeroTimeout => write!(f, "timeout_secs must be >= 1"),
            Self::ClientBuild(detail) => write!(f, "failed to build HTTP client: {detail}"),
        }
    }
}

impl Error for RestConfigError {}

/// REST data-source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestSourceConfig {
    /// Server root, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Per-request deadline in seconds. A timed-out request surfaces as
    /// `FetchError::Timeout` and triggers the usual fallback path.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl RestSourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validates the base URL and timeout.
    pub fn validate(&self) -> Result<(), RestConfigError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(RestConfigError::EmptyBaseUrl);
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(RestConfigError::InvalidBaseUrl(trimmed.to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(RestConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// `reqwest`-backed page fetcher for one screen's resource.
pub struct RestPageFetch {
    client: reqwest::Client,
    base_url: String,
    resource_path: String,
    tokens: Arc<dyn TokenProvider>,
}

impl RestPageFetch {
    /// Creates a fetcher for `resource_path` against the configured source.
    pub fn new(
        config: &RestSourceConfig,
        resource_path: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, RestConfigError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| RestConfigError::ClientBuild(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            resource_path: resource_path.into(),
            tokens,
        })
    }

    fn page_url(&self, request: &PageRequest) -> String {
        format!(
            "{}{}?page={}&limit={}",
            self.base_url,
            self.resource_path,
            request.page(),
            request.per_page()
        )
    }
}

#[async_trait]
impl PageFetch for RestPageFetch {
    async fn fetch_page(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
        let mut builder = self.client.get(self.page_url(request));
        if let Some(token) = self.tokens.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| FetchError::MalformedPayload(err.to_string()))?;
        normalize_payload(payload)
    }
}
