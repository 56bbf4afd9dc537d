//! Poster image URLs.
//!
//! The image host serves posters at `<base>/<poster_path>`. A movie without a
//! poster path gets a placeholder image instead of a dangling URL.

use serde::Serialize;

/// Image host prefix for w500-sized posters
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Shown in place of a missing poster
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Either a real poster or the placeholder that stands in for one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Poster {
    Image(String),
    Placeholder(String),
}

impl Poster {
    /// The URL to display, whichever variant this is
    pub fn url(&self) -> &str {
        match self {
            Poster::Image(url) | Poster::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Poster::Placeholder(_))
    }
}

/// Joins poster paths onto a fixed image base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterResolver {
    base_url: String,
    placeholder_url: String,
}

impl PosterResolver {
    /// Create a resolver for the given image base URL.
    ///
    /// Trailing slashes are dropped so joining never produces `//`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            placeholder_url: POSTER_PLACEHOLDER_URL.to_string(),
        }
    }

    /// Override the placeholder image (default: [`POSTER_PLACEHOLDER_URL`])
    pub fn with_placeholder(mut self, placeholder_url: impl Into<String>) -> Self {
        self.placeholder_url = placeholder_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a movie's poster path. Absent or blank paths give the placeholder.
    pub fn resolve(&self, poster_path: Option<&str>) -> Poster {
        match poster_path.map(str::trim).filter(|path| !path.is_empty()) {
            Some(path) if path.starts_with('/') => {
                Poster::Image(format!("{}{}", self.base_url, path))
            }
            Some(path) => Poster::Image(format!("{}/{}", self.base_url, path)),
            None => Poster::Placeholder(self.placeholder_url.clone()),
        }
    }
}

impl Default for PosterResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}
