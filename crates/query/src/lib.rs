//! # Query Crate
//!
//! Everything that decides *what* the browser asks the API for.
//!
//! ## Components
//!
//! ### Query State
//! Search term, page and sort mode, with the rule that a new search term
//! always starts again from page 1.
//!
//! ### Page Bounds
//! The API reports `total_pages` but only serves up to page 500. Navigation
//! is clamped to `[1, min(total_pages, 500)]`.
//!
//! ### Request Derivation
//! Picks search or discover mode and builds the parameters for the call.
//!
//! ## Example Usage
//!
//! ```ignore
//! use query::{ApiKey, MovieRequest, PageBounds, QueryState, DEFAULT_LANGUAGE};
//!
//! let mut state = QueryState::new();
//! state.set_search_term("alien");
//! state.go_next(&PageBounds::new(total_pages));
//!
//! let request = MovieRequest::from_query(&state, &ApiKey::new(key), DEFAULT_LANGUAGE);
//! ```

// Public modules
pub mod error;
pub mod pagination;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use error::QueryError;
pub use pagination::{MAX_PAGES, PageBounds};
pub use request::{ApiKey, DEFAULT_LANGUAGE, DISCOVER_SORT_BY, EndpointMode, MovieRequest};
pub use types::{FetchKey, QueryState, SortMode};
