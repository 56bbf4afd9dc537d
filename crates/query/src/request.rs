//! Request derivation: turning a [`QueryState`] into an API call.
//!
//! ## Endpoint selection
//! - **Search mode** (`/search/movie`) when the trimmed search term is
//!   non-empty; the term is sent as `query`
//! - **Discover mode** (`/discover/movie`) otherwise, ordered server-side
//!   with `sort_by=popularity.desc`
//!
//! Both variants carry the credential, a fixed locale and the page number.

use std::fmt;

use crate::types::QueryState;

/// Locale sent with every request
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Server-side ordering used in discover mode
pub const DISCOVER_SORT_BY: &str = "popularity.desc";

// =============================================================================
// ApiKey
// =============================================================================

/// The single static credential the API authenticates with.
///
/// `Debug` never prints the secret, so requests can be logged freely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// =============================================================================
// EndpointMode
// =============================================================================

/// Which list endpoint a request goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointMode {
    Search { query: String },
    Discover,
}

impl EndpointMode {
    /// Pick the endpoint for the current query state
    pub fn for_query(state: &QueryState) -> Self {
        if state.is_search() {
            EndpointMode::Search {
                query: state.search_term().to_string(),
            }
        } else {
            EndpointMode::Discover
        }
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            EndpointMode::Search { .. } => "/search/movie",
            EndpointMode::Discover => "/discover/movie",
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, EndpointMode::Search { .. })
    }
}

// =============================================================================
// MovieRequest
// =============================================================================

/// A fully-specified list request, independent of any HTTP library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRequest {
    pub endpoint: EndpointMode,
    pub page: u32,
    pub language: String,
    pub api_key: ApiKey,
}

impl MovieRequest {
    /// Derive the request for `state`
    pub fn from_query(state: &QueryState, api_key: &ApiKey, language: &str) -> Self {
        Self {
            endpoint: EndpointMode::for_query(state),
            page: state.page(),
            language: language.to_string(),
            api_key: api_key.clone(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.endpoint.path()
    }

    /// Query-string parameters, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("api_key", self.api_key.expose().to_string()),
            ("language", self.language.clone()),
            ("page", self.page.to_string()),
        ];
        match &self.endpoint {
            EndpointMode::Search { query } => pairs.push(("query", query.clone())),
            EndpointMode::Discover => pairs.push(("sort_by", DISCOVER_SORT_BY.to_string())),
        }
        pairs
    }
}
