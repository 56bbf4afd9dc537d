//! Highest-rated-first ordering.
//!
//! Missing ratings count as 0, so unrated movies sink below every rated one
//! (ties with genuine zero ratings keep API order).

use crate::traits::MovieOrdering;
use catalog::Movie;
use std::cmp::Ordering;

/// Orders movies by average rating, highest first.
pub struct RatingOrdering;

impl MovieOrdering for RatingOrdering {
    fn name(&self) -> &str {
        "RatingOrdering"
    }

    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        b.rating()
            .partial_cmp(&a.rating())
            .unwrap_or(Ordering::Equal)
    }
}
