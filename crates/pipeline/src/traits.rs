//! Core traits for result projection.
//!
//! This module defines the MovieOrdering trait that lets each sort mode be
//! written as a small, independently tested comparator.

use catalog::Movie;
use std::cmp::Ordering;

/// A client-side ordering of fetched movies.
///
/// ## Design Note
/// - `Send + Sync` so a projector can be shared with render code on any thread
/// - `compare` returns `Less` when `a` should be shown before `b`
/// - Implementations must be total: missing fields get a defined position
pub trait MovieOrdering: Send + Sync {
    /// Returns the name of this ordering (for logging/debugging)
    fn name(&self) -> &str;

    /// Compare two movies for display order
    fn compare(&self, a: &Movie, b: &Movie) -> Ordering;
}
