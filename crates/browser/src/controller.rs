//! # Movie Browser Controller
//!
//! The single stateful component. It owns the query state, the result state
//! and the fetch orchestrator, and keeps them in sync:
//!
//! - Changing the search term (which resets the page) or moving between pages
//!   dispatches a new request, superseding any pending one
//! - Changing the sort mode never touches the network; ordering is applied
//!   to a copy when the view is rendered
//! - Settled fetches replace the result state wholesale
//!
//! ## Learning Goals
//!
//! - Driving background work from a synchronous API and applying its results
//!   through an explicit `await` point
//! - Keeping error handling inside the component: nothing here returns a
//!   fetch error, failures become view state
//! - Generic over the API trait so tests can script responses

use std::sync::Arc;

use catalog::{Movie, MoviePage, PosterResolver};
use query::{ApiKey, MovieRequest, QueryState, SortMode};
use tmdb_client::{ApiError, MovieApi, TmdbClient};
use tracing::{debug, info, instrument, warn};

use crate::config::{BrowserConfig, ConfigError};
use crate::orchestrator::{FetchError, FetchOrchestrator};
use crate::state::ResultState;
use crate::view::{self, BrowserView, FETCH_FAILED_MESSAGE};

/// Controller for one browsing session.
///
/// Dropping the controller aborts any outstanding request.
pub struct MovieBrowserController<A: MovieApi + ?Sized + 'static> {
    credential: Result<ApiKey, ConfigError>,
    language: String,
    posters: PosterResolver,
    query: QueryState,
    results: ResultState,
    orchestrator: FetchOrchestrator<A>,
}

impl MovieBrowserController<TmdbClient> {
    /// Build a controller backed by the HTTP client.
    ///
    /// A missing credential is not an error here; it becomes the
    /// controller's configuration-error state.
    ///
    /// # Errors
    /// `ApiError::InvalidBaseUrl` if `config.api_base_url` is unusable
    pub fn from_config(config: &BrowserConfig) -> Result<Self, ApiError> {
        let client = TmdbClient::new(&config.api_base_url)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

impl<A: MovieApi + ?Sized + 'static> MovieBrowserController<A> {
    pub fn new(config: &BrowserConfig, api: Arc<A>) -> Self {
        let credential = config.api_key();
        let mut results = ResultState::new();
        if let Err(err) = &credential {
            warn!("{}", err);
            results.error = Some(err.to_string());
        }

        Self {
            credential,
            language: config.language.clone(),
            posters: PosterResolver::new(config.image_base_url.clone()),
            query: QueryState::new(),
            results,
            orchestrator: FetchOrchestrator::new(api, config.debounce),
        }
    }

    // ========================================================================
    // User input
    // ========================================================================

    /// Issue the request for the initial state (discover, page 1).
    ///
    /// Must be called from within a tokio runtime, like every other method
    /// that may fetch.
    pub fn start(&mut self) {
        self.refresh();
    }

    /// Update the search term; the page goes back to 1.
    ///
    /// Returns `true` if a new request was issued.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let changed = self.query.set_search_term(term);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Set the search term and fetch, even when the term is unchanged.
    ///
    /// For one-shot lookups on a fresh controller, where an empty term
    /// leaves the fetch key as it was and `set_search_term` would not fetch.
    pub fn search(&mut self, term: impl Into<String>) {
        if !self.set_search_term(term) {
            self.refresh();
        }
    }

    /// Change the client-side ordering. Never fetches.
    pub fn set_sort_mode(&mut self, mode: SortMode) -> bool {
        let changed = self.query.set_sort_mode(mode);
        if changed {
            debug!(sort = %mode, "sort mode changed");
        }
        changed
    }

    /// Previous page; a no-op on page 1. Returns `true` if the page moved.
    pub fn go_prev(&mut self) -> bool {
        let moved = self.query.go_prev(&self.results.bounds());
        if moved {
            self.refresh();
        }
        moved
    }

    /// Next page; a no-op on the last reachable page. Returns `true` if the
    /// page moved.
    pub fn go_next(&mut self) -> bool {
        let moved = self.query.go_next(&self.results.bounds());
        if moved {
            self.refresh();
        }
        moved
    }

    /// Jump to `page`, clamped to the pages the last fetch reported.
    /// Returns `true` if the page moved.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let moved = self.query.go_to(page, &self.results.bounds());
        if moved {
            self.refresh();
        }
        moved
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    #[instrument(level = "debug", skip(self), fields(search = self.query.is_search(), page = self.query.page()))]
    fn refresh(&mut self) {
        let api_key = match &self.credential {
            Ok(key) => key,
            Err(err) => {
                // Terminal state: keep showing the configuration error
                self.results.error = Some(err.to_string());
                self.results.is_loading = false;
                return;
            }
        };

        let request = MovieRequest::from_query(&self.query, api_key, &self.language);
        self.results.is_loading = true;
        self.results.error = None;
        self.orchestrator.dispatch(request);
    }

    /// Wait for the pending request and apply its outcome.
    ///
    /// Returns `false` when nothing was pending.
    pub async fn next_outcome(&mut self) -> bool {
        match self.orchestrator.next_outcome().await {
            Some(outcome) => {
                self.apply(outcome.result);
                true
            }
            None => false,
        }
    }

    /// Apply outcomes until no request is pending
    pub async fn settle(&mut self) {
        while self.next_outcome().await {}
    }

    fn apply(&mut self, result: Result<MoviePage, FetchError>) {
        match result {
            Ok(page) => {
                info!(
                    results = page.results.len(),
                    total_pages = page.total_pages,
                    page = self.query.page(),
                    "movies loaded"
                );
                self.results.replace_with(page);

                // The result set may have shrunk under the current page
                if self.query.clamp_page(&self.results.bounds()) {
                    info!(page = self.query.page(), "page out of range, refetching");
                    self.refresh();
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch movies");
                let message = match err {
                    FetchError::Api(ApiError::Status { .. }) => FETCH_FAILED_MESSAGE.to_string(),
                    other => other.to_string(),
                };
                self.results.fail_with(message);
            }
        }
    }

    /// Abort any outstanding request. Its result will never be applied.
    pub fn shutdown(&mut self) {
        if self.orchestrator.cancel() {
            self.results.is_loading = false;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self) -> &ResultState {
        &self.results
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_ok()
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.credential.as_ref().err()
    }

    pub fn is_in_flight(&self) -> bool {
        self.orchestrator.is_in_flight()
    }

    /// Fetched movies ordered by the current sort mode
    pub fn visible_movies(&self) -> Vec<Movie> {
        pipeline::project(&self.results.movies, self.query.sort_mode())
    }

    pub fn view(&self) -> BrowserView {
        view::render(
            self.config_error(),
            &self.query,
            &self.results,
            &self.visible_movies(),
            &self.posters,
        )
    }
}
