//! Result projection for fetched movie pages.
//!
//! This crate provides:
//! - MovieOrdering trait and implementations for each sort mode
//! - Projector for applying the active ordering to a page
//!
//! ## Architecture
//! A fetched page is stored exactly as the API returned it. Display order is
//! derived on demand:
//! 1. The active `SortMode` selects an ordering (or none)
//! 2. The Projector copies the page and stable-sorts the copy
//! 3. The copy goes to the renderer; the stored page is untouched
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::project;
//! use query::SortMode;
//!
//! let ordered = project(&page.results, SortMode::Date);
//! ```

pub mod traits;
pub mod orderings;
pub mod projector;

// Re-export main types
pub use traits::MovieOrdering;
pub use projector::{Projector, project};
