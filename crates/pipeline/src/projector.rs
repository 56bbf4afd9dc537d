//! The Projector turns a fetched page into display order.
//!
//! It never touches the slice it is given: the result is a reordered copy,
//! so re-sorting on a mode change cannot disturb the fetched data that a
//! later fetch will replace wholesale.

use crate::orderings::{RatingOrdering, ReleaseDateOrdering};
use crate::traits::MovieOrdering;
use catalog::Movie;
use query::SortMode;

/// Applies at most one ordering to a page of movies.
///
/// ## Usage
/// ```ignore
/// let ordered = Projector::for_mode(SortMode::Rating).project(&page.results);
/// ```
pub struct Projector {
    ordering: Option<Box<dyn MovieOrdering>>,
}

impl Projector {
    /// A projector that keeps the API order.
    pub fn new() -> Self {
        Self { ordering: None }
    }

    /// Use a custom ordering (builder pattern).
    pub fn with_ordering(mut self, ordering: impl MovieOrdering + 'static) -> Self {
        self.ordering = Some(Box::new(ordering));
        self
    }

    /// The projector for one of the sort selector's options
    pub fn for_mode(mode: SortMode) -> Self {
        match mode {
            SortMode::None => Self::new(),
            SortMode::Date => Self::new().with_ordering(ReleaseDateOrdering),
            SortMode::Rating => Self::new().with_ordering(RatingOrdering),
        }
    }

    /// Name of the active ordering, or `"ApiOrder"` when there is none
    pub fn name(&self) -> &str {
        self.ordering
            .as_ref()
            .map(|ordering| ordering.name())
            .unwrap_or("ApiOrder")
    }

    /// Return a reordered copy of `movies`.
    ///
    /// ## Algorithm
    /// 1. Clone the input
    /// 2. If an ordering is set, stable-sort the copy with it
    ///    (equal elements keep their API order)
    pub fn project(&self, movies: &[Movie]) -> Vec<Movie> {
        let mut ordered = movies.to_vec();
        if let Some(ordering) = &self.ordering {
            ordered.sort_by(|a, b| ordering.compare(a, b));
        }
        tracing::debug!(
            "Projected {} movies with {}",
            ordered.len(),
            self.name()
        );
        ordered
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `Projector::for_mode(mode).project(movies)`
pub fn project(movies: &[Movie], mode: SortMode) -> Vec<Movie> {
    Projector::for_mode(mode).project(movies)
}
