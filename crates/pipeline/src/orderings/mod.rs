//! Ordering implementations for the result projector.
//!
//! One module per sort mode that actually reorders; `SortMode::None` has no
//! ordering and keeps the API's order.

pub mod rating;
pub mod release_date;

// Re-export for convenience
pub use rating::RatingOrdering;
pub use release_date::ReleaseDateOrdering;
