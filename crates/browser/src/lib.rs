//! Browser crate for the movie browser.
//!
//! This crate contains the controller that keeps the query, the in-flight
//! request and the displayed results in sync, plus the pure view renderer.
//!
//! ```ignore
//! use browser::{BrowserConfig, MovieBrowserController};
//!
//! let config = BrowserConfig::new(std::env::var("TMDB_API_KEY").ok());
//! let mut controller = MovieBrowserController::from_config(&config)?;
//! controller.start();
//! controller.settle().await;
//! println!("{:?}", controller.view());
//! ```

pub mod config;
pub mod controller;
pub mod orchestrator;
pub mod state;
pub mod view;

pub use config::{BrowserConfig, ConfigError};
pub use controller::MovieBrowserController;
pub use orchestrator::{FetchError, FetchOrchestrator, FetchOutcome};
pub use state::ResultState;
pub use view::{
    BrowserView, EMPTY_RESULTS_MESSAGE, FETCH_FAILED_MESSAGE, LOADING_MESSAGE, MovieCard,
    NOT_AVAILABLE, PageControls, ViewBody, render,
};
