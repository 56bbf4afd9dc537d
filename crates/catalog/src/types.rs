//! Core domain types for movie listings returned by the metadata API.
//!
//! These mirror the external schema. The API owns the data: the client only
//! reads it, copies it, and reorders the copies.
//!
//! Key Rust concepts demonstrated here:
//! - `Option<T>` for fields the API may omit or send as `null`
//! - Derive macros for serde (de)serialization
//! - Builder-style `with_*` methods that consume and return `Self`

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::parser;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie in the external catalog
pub type MovieId = u64;

/// Fallback for a missing or nonsensical `total_pages`
pub const DEFAULT_TOTAL_PAGES: u32 = 1;

// =============================================================================
// Movie
// =============================================================================

/// A single movie as reported by the API.
///
/// Only the fields the browser displays or sorts on are kept; everything
/// else in the payload is ignored by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    /// Raw `YYYY-MM-DD` string. TMDB sends `""` for unknown dates.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Path fragment such as `/abc123.jpg`, joined onto the image base URL
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Create a movie with only the required fields set
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            vote_average: None,
            poster_path: None,
        }
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    /// Parsed release date.
    ///
    /// Returns `None` when the date is absent, blank, or malformed, so callers
    /// only ever deal with "known date" vs "unknown date".
    pub fn release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?;
        match parser::parse_release_date(raw) {
            Ok(date) => date,
            Err(err) => {
                tracing::debug!(movie_id = self.id, "ignoring release date: {}", err);
                None
            }
        }
    }

    /// Release year, if the release date is known
    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|date| date.year())
    }

    /// Average rating used for ordering. Missing or non-finite ratings count as 0.
    pub fn rating(&self) -> f64 {
        self.vote_average
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }
}

// =============================================================================
// MoviePage
// =============================================================================

/// One page of results from either the search or discover endpoint.
///
/// Deserialization goes through the parser's wire struct, which applies the
/// defaults for absent fields, so `total_pages` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "parser::RawMoviePage")]
pub struct MoviePage {
    pub results: Vec<Movie>,
    pub total_pages: u32,
}

impl MoviePage {
    pub fn new(results: Vec<Movie>, total_pages: u32) -> Self {
        Self {
            results,
            total_pages: total_pages.max(DEFAULT_TOTAL_PAGES),
        }
    }

    /// A page with no results and a single page of total
    pub fn empty() -> Self {
        Self::new(Vec::new(), DEFAULT_TOTAL_PAGES)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Default for MoviePage {
    fn default() -> Self {
        Self::empty()
    }
}
