//! HTTP client for the external movie metadata API.
//!
//! This crate provides a Rust client for the two list endpoints the browser
//! uses. It handles:
//! - Validating and normalising the configured base URL
//! - Turning a [`MovieRequest`] into an HTTP GET
//! - Mapping non-success statuses and transport failures to [`ApiError`]
//! - Decoding the body into a [`MoviePage`]
//!
//! It deliberately does not retry: a failed request is reported once and the
//! caller decides what to do.

use async_trait::async_trait;
use catalog::{CatalogError, MoviePage};
use query::MovieRequest;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Base URL of the public v3 API
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Errors that can occur when talking to the movie API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network-level failure (DNS, refused connection, reset, body read)
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered, but not with a 2xx status
    #[error("Movie API responded with HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid response from movie API: {0}")]
    InvalidResponse(#[from] CatalogError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest embeds the request URL in its errors, and ours carries the api_key
        ApiError::Transport(err.without_url())
    }
}

/// Abstraction over the list endpoints.
///
/// The browser depends on this trait rather than on [`TmdbClient`], so tests
/// can substitute a scripted implementation.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch one page from the endpoint selected by `request`
    async fn fetch_movies(&self, request: &MovieRequest) -> Result<MoviePage, ApiError>;
}

/// reqwest-backed [`MovieApi`] implementation.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
}

impl TmdbClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - e.g. `https://api.themoviedb.org/3`; a trailing slash is
    ///   dropped
    ///
    /// # Errors
    /// `ApiError::InvalidBaseUrl` if the URL does not parse or is not http(s)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_http_client(base_url, Client::new())
    }

    /// Same as [`TmdbClient::new`], reusing an existing reqwest client
    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL this client sends requests to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, request: &MovieRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn fetch_movies(&self, request: &MovieRequest) -> Result<MoviePage, ApiError> {
        debug!(
            path = request.path(),
            page = request.page,
            search = request.endpoint.is_search(),
            "requesting movie list"
        );

        let response = self
            .http
            .get(self.endpoint_url(request))
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), path = request.path(), "movie list request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let page = catalog::parse_movie_page(&body)?;
        debug!(
            results = page.results.len(),
            total_pages = page.total_pages,
            "received movie list"
        );
        Ok(page)
    }
}
