//! Newest-first ordering by release date.
//!
//! Movies without a usable release date (absent, blank or malformed) are
//! treated as the oldest possible value and end up at the bottom.

use crate::traits::MovieOrdering;
use catalog::Movie;
use std::cmp::Ordering;

/// Orders movies by release date, most recent first.
///
/// ## Algorithm
/// `Option<NaiveDate>` already orders `None` below every `Some`, so comparing
/// `b` against `a` gives "descending, undated last" in one step.
pub struct ReleaseDateOrdering;

impl MovieOrdering for ReleaseDateOrdering {
    fn name(&self) -> &str {
        "ReleaseDateOrdering"
    }

    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        b.release_date().cmp(&a.release_date())
    }
}
