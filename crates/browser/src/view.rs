//! # View Rendering
//!
//! A pure mapping from controller state to what the user sees. Nothing here
//! touches the network or mutates state, so any front end (terminal, JSON,
//! a future GUI) can render the same [`BrowserView`].
//!
//! ## Precedence
//! Exactly one body is shown, picked in this order:
//! 1. Configuration error (terminal)
//! 2. Loading
//! 3. Fetch error
//! 4. Empty results
//! 5. The movie grid, with page controls

use catalog::{Movie, MovieId, PosterResolver};
use query::{PageBounds, QueryState};
use serde::Serialize;

use crate::config::ConfigError;
use crate::state::ResultState;

pub const EMPTY_RESULTS_MESSAGE: &str = "No movies found";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown in place of a missing year or rating
pub const NOT_AVAILABLE: &str = "N/A";

/// One movie as displayed in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub poster: String,
}

impl MovieCard {
    pub fn from_movie(movie: &Movie, posters: &PosterResolver) -> Self {
        let year = movie
            .release_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let rating = movie
            .vote_average
            .filter(|rating| rating.is_finite())
            .map(|rating| format!("{:.1}", rating))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            id: movie.id,
            title: movie.title.clone(),
            year,
            rating,
            poster: posters.resolve(movie.poster_path.as_deref()).url().to_string(),
        }
    }
}

/// Previous/next controls under the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub page: u32,
    /// Reported total, capped at the API's page limit
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    pub fn new(page: u32, bounds: &PageBounds) -> Self {
        Self {
            page,
            total_pages: bounds.last_page(),
            prev_enabled: bounds.can_go_prev(page),
            next_enabled: bounds.can_go_next(page),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum ViewBody {
    ConfigurationError(String),
    Loading,
    Error(String),
    Empty,
    Grid(Vec<MovieCard>),
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserView {
    pub search_term: String,
    pub sort_mode: String,
    pub body: ViewBody,
    /// Only present alongside the grid
    pub controls: Option<PageControls>,
}

impl BrowserView {
    /// The message to print for non-grid bodies
    pub fn message(&self) -> Option<&str> {
        match &self.body {
            ViewBody::ConfigurationError(message) | ViewBody::Error(message) => Some(message),
            ViewBody::Loading => Some(LOADING_MESSAGE),
            ViewBody::Empty => Some(EMPTY_RESULTS_MESSAGE),
            ViewBody::Grid(_) => None,
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        match &self.body {
            ViewBody::Grid(cards) => cards,
            _ => &[],
        }
    }
}

/// Render a frame.
///
/// # Arguments
/// * `config_error` - Set when the controller could not be configured
/// * `query` - Current search term, page and sort mode
/// * `results` - Last settled fetch and the loading flag
/// * `visible` - `results.movies` already ordered for display
/// * `posters` - Poster URL resolution
pub fn render(
    config_error: Option<&ConfigError>,
    query: &QueryState,
    results: &ResultState,
    visible: &[Movie],
    posters: &PosterResolver,
) -> BrowserView {
    let body = if let Some(err) = config_error {
        ViewBody::ConfigurationError(err.to_string())
    } else if results.is_loading {
        ViewBody::Loading
    } else if let Some(message) = &results.error {
        ViewBody::Error(message.clone())
    } else if visible.is_empty() {
        ViewBody::Empty
    } else {
        ViewBody::Grid(
            visible
                .iter()
                .map(|movie| MovieCard::from_movie(movie, posters))
                .collect(),
        )
    };

    let controls = matches!(body, ViewBody::Grid(_))
        .then(|| PageControls::new(query.page(), &results.bounds()));

    BrowserView {
        search_term: query.search_term().to_string(),
        sort_mode: query.sort_mode().to_string(),
        body,
        controls,
    }
}
