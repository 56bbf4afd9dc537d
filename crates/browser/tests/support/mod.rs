//! Scripted `MovieApi` implementations shared by the controller tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::{Movie, MoviePage};
use query::MovieRequest;
use tmdb_client::{ApiError, MovieApi};
use tokio::sync::oneshot;

/// What a request asked for, recorded in call order
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: &'static str,
    pub page: u32,
    pub pairs: Vec<(&'static str, String)>,
}

impl Call {
    fn from_request(request: &MovieRequest) -> Self {
        Self {
            path: request.path(),
            page: request.page,
            pairs: request.query_pairs(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

// ============================================================================
// StaticApi: answers immediately
// ============================================================================

type Responder = dyn Fn(&MovieRequest) -> Result<MoviePage, ApiError> + Send + Sync;

pub struct StaticApi {
    responder: Box<Responder>,
    calls: Mutex<Vec<Call>>,
}

impl StaticApi {
    pub fn new(
        responder: impl Fn(&MovieRequest) -> Result<MoviePage, ApiError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Every request gets the same page
    pub fn always(page: MoviePage) -> Arc<Self> {
        Self::new(move |_| Ok(page.clone()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieApi for StaticApi {
    async fn fetch_movies(&self, request: &MovieRequest) -> Result<MoviePage, ApiError> {
        self.calls.lock().unwrap().push(Call::from_request(request));
        (self.responder)(request)
    }
}

// ============================================================================
// GatedApi: each call waits until the test releases it
// ============================================================================

type Gate = oneshot::Sender<Result<MoviePage, ApiError>>;

#[derive(Default)]
pub struct GatedApi {
    calls: Mutex<Vec<(Call, Option<Gate>)>>,
}

impl GatedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call(&self, index: usize) -> Call {
        self.calls.lock().unwrap()[index].0.clone()
    }

    /// Resolve call `index`. Returns `false` if that request was already
    /// released or has been aborted.
    pub fn release(&self, index: usize, result: Result<MoviePage, ApiError>) -> bool {
        let gate = self.calls.lock().unwrap()[index].1.take();
        match gate {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    /// True once the request behind call `index` is gone (aborted or released)
    pub fn is_abandoned(&self, index: usize) -> bool {
        self.calls.lock().unwrap()[index]
            .1
            .as_ref()
            .map(|tx| tx.is_closed())
            .unwrap_or(true)
    }

    /// Yield to the runtime until at least `n` calls have arrived
    pub async fn wait_for_calls(&self, n: usize) {
        while self.call_count() < n {
            tokio::task::yield_now().await;
        }
    }

    pub async fn wait_until_abandoned(&self, index: usize) {
        while !self.is_abandoned(index) {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl MovieApi for GatedApi {
    async fn fetch_movies(&self, request: &MovieRequest) -> Result<MoviePage, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.calls
            .lock()
            .unwrap()
            .push((Call::from_request(request), Some(tx)));
        rx.await.unwrap_or(Err(ApiError::Status { status: 599 }))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn movie(id: u64, title: &str) -> Movie {
    Movie::new(id, title)
}

pub fn page_of(titles: &[&str], total_pages: u32) -> MoviePage {
    let results = titles
        .iter()
        .enumerate()
        .map(|(i, title)| movie(i as u64 + 1, title))
        .collect();
    MoviePage::new(results, total_pages)
}

pub fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}
