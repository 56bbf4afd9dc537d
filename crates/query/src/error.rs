//! Error types for the query crate.

use thiserror::Error;

/// Errors raised while interpreting user input for the query state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The sort selector only knows three options
    #[error("Unknown sort mode {0:?}; expected one of: none, date, rating")]
    UnknownSortMode(String),
}
