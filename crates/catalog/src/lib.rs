//! # Catalog Crate
//!
//! This crate holds the movie data the browser receives from the external
//! metadata API, and the small amount of interpretation the browser does on
//! top of it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MoviePage, MovieId)
//! - **parser**: Parse list payloads and release dates
//! - **poster**: Turn poster paths into displayable image URLs
//! - **error**: Error types for payload parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_movie_page, PosterResolver};
//!
//! let page = parse_movie_page(&body)?;
//! let posters = PosterResolver::default();
//!
//! for movie in &page.results {
//!     println!("{} -> {}", movie.title, posters.resolve(movie.poster_path.as_deref()).url());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod poster;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_movie_page, parse_release_date};
pub use poster::{DEFAULT_IMAGE_BASE_URL, POSTER_PLACEHOLDER_URL, Poster, PosterResolver};
pub use types::{DEFAULT_TOTAL_PAGES, Movie, MovieId, MoviePage};
