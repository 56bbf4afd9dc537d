//! Query state: what the user is currently asking for.
//!
//! Rust concepts demonstrated here:
//! - Private fields with accessor methods, so invariants can't be bypassed
//! - `FromStr` / `Display` for round-tripping user-facing names
//! - Returning `bool` from mutators to signal "something changed"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::pagination::PageBounds;

// =============================================================================
// SortMode
// =============================================================================

/// Client-side ordering applied to a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the order the API returned
    #[default]
    None,
    /// Newest release first
    Date,
    /// Highest average rating first
    Rating,
}

impl SortMode {
    /// All options, in the order a selector lists them
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Date, SortMode::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Date => "date",
            SortMode::Rating => "rating",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(SortMode::None),
            "date" | "release_date" => Ok(SortMode::Date),
            "rating" | "vote_average" => Ok(SortMode::Rating),
            _ => Err(QueryError::UnknownSortMode(s.to_string())),
        }
    }
}

// =============================================================================
// FetchKey
// =============================================================================

/// The part of the query state that decides which request is made.
///
/// Sort mode is deliberately absent: re-sorting never hits the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub search_term: String,
    pub page: u32,
}

// =============================================================================
// QueryState
// =============================================================================

/// Current search term, page and sort mode.
///
/// ## Invariants
/// - `page >= 1`
/// - every change to the search term resets `page` to 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    page: u32,
    sort_mode: SortMode,
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            sort_mode: SortMode::None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Search mode is selected when the trimmed term is non-empty
    pub fn is_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn fetch_key(&self) -> FetchKey {
        FetchKey {
            search_term: self.search_term.clone(),
            page: self.page,
        }
    }

    /// Replace the search term and go back to page 1.
    ///
    /// Returns `true` when the fetch key changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let before = self.fetch_key();
        self.search_term = term.into();
        self.page = 1;
        self.fetch_key() != before
    }

    /// Returns `true` when the sort mode changed
    pub fn set_sort_mode(&mut self, mode: SortMode) -> bool {
        let changed = self.sort_mode != mode;
        self.sort_mode = mode;
        changed
    }

    /// Step back one page. Returns `true` when the page moved.
    pub fn go_prev(&mut self, bounds: &PageBounds) -> bool {
        if !bounds.can_go_prev(self.page) {
            return false;
        }
        self.page = bounds.prev(self.page);
        true
    }

    /// Step forward one page. Returns `true` when the page moved.
    pub fn go_next(&mut self, bounds: &PageBounds) -> bool {
        if !bounds.can_go_next(self.page) {
            return false;
        }
        self.page = bounds.next(self.page);
        true
    }

    /// Jump straight to `page`, clamped into `bounds`. Returns `true` when the
    /// page moved.
    pub fn go_to(&mut self, page: u32, bounds: &PageBounds) -> bool {
        let target = bounds.clamp(page);
        let moved = target != self.page;
        self.page = target;
        moved
    }

    /// Pull the page back inside `bounds`. Returns `true` when the page moved.
    pub fn clamp_page(&mut self, bounds: &PageBounds) -> bool {
        let clamped = bounds.clamp(self.page);
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
