//! Parser for movie-list payloads.
//!
//! Both list endpoints answer with the same envelope:
//!
//! ```text
//! { "page": 1, "results": [ { "id": 550, "title": "...", ... } ], "total_pages": 42 }
//! ```
//!
//! The envelope is owned by a third party, so every field is treated as
//! optional and normalised here:
//! - absent or `null` `results` -> empty list
//! - absent, `null` or `0` `total_pages` -> 1
//!
//! Rust concepts you'll learn here:
//! - Private "raw" structs that mirror the wire format
//! - Converting between the wire shape and the domain shape with `From`
//! - Error handling with `?` and `#[from]`

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{DEFAULT_TOTAL_PAGES, Movie, MoviePage};

/// Wire format of a list response, before defaults are applied
#[derive(Debug, Deserialize)]
pub(crate) struct RawMoviePage {
    #[serde(default)]
    results: Option<Vec<Movie>>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl From<RawMoviePage> for MoviePage {
    fn from(raw: RawMoviePage) -> Self {
        MoviePage::new(
            raw.results.unwrap_or_default(),
            raw.total_pages.unwrap_or(DEFAULT_TOTAL_PAGES),
        )
    }
}

/// Parse a list response body into a [`MoviePage`]
pub fn parse_movie_page(body: &[u8]) -> Result<MoviePage> {
    let page: MoviePage = serde_json::from_slice(body)?;
    Ok(page)
}

/// Parse a `YYYY-MM-DD` release date.
///
/// Blank strings mean "unknown" and yield `Ok(None)`; anything else that
/// does not parse is an error.
pub fn parse_release_date(raw: &str) -> Result<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CatalogError::InvalidReleaseDate {
            value: raw.to_string(),
        })
}
