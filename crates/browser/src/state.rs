//! Result state: what the last completed fetch produced.

use catalog::{DEFAULT_TOTAL_PAGES, Movie, MoviePage};
use query::PageBounds;

/// Outcome of the most recent fetch, plus the loading flag.
///
/// Replaced wholesale when a fetch settles; never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultState {
    /// Movies in API order. Sorting happens on a copy at render time.
    pub movies: Vec<Movie>,
    pub total_pages: u32,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ResultState {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            total_pages: DEFAULT_TOTAL_PAGES,
            is_loading: false,
            error: None,
        }
    }

    /// Navigation limits implied by the last reported page count
    pub fn bounds(&self) -> PageBounds {
        PageBounds::new(self.total_pages)
    }

    /// Replace movies and page count from a successful fetch
    pub(crate) fn replace_with(&mut self, page: MoviePage) {
        self.movies = page.results;
        self.total_pages = page.total_pages.max(DEFAULT_TOTAL_PAGES);
        self.error = None;
        self.is_loading = false;
    }

    /// Record a failed fetch.
    ///
    /// The movie list is dropped, but the page count is kept so the user can
    /// still navigate away from the failing page.
    pub(crate) fn fail_with(&mut self, message: impl Into<String>) {
        self.movies.clear();
        self.error = Some(message.into());
        self.is_loading = false;
    }
}

impl Default for ResultState {
    fn default() -> Self {
        Self::new()
    }
}
