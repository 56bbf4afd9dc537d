//! # Fetch Orchestrator
//!
//! Owns the single in-flight list request and decides which responses are
//! allowed to reach the result state.
//!
//! ## Supersession
//! 1. Every dispatch bumps a generation counter and tags the spawned task
//!    with it
//! 2. Dispatching while a request is pending aborts the pending task first
//! 3. Finished tasks post `(generation, result)` on a channel
//! 4. [`FetchOrchestrator::next_outcome`] drops anything whose generation is
//!    not the current one
//!
//! Aborting stops superseded work early; the generation check is what makes
//! stale results impossible to apply, even when a task finished just before
//! it was aborted.
//!
//! Dropping the orchestrator aborts whatever is still pending.

use std::sync::Arc;
use std::time::Duration;

use catalog::MoviePage;
use query::MovieRequest;
use thiserror::Error;
use tmdb_client::{ApiError, MovieApi};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Why a fetch produced no page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The fetch task died without reporting (it panicked)
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

/// A settled fetch, tagged with the generation that issued it
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<MoviePage, FetchError>,
}

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
    joined: bool,
}

/// Issues list requests, at most one at a time.
pub struct FetchOrchestrator<A: MovieApi + ?Sized + 'static> {
    api: Arc<A>,
    debounce: Duration,
    generation: u64,
    in_flight: Option<InFlight>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<A: MovieApi + ?Sized + 'static> FetchOrchestrator<A> {
    /// Create an orchestrator.
    ///
    /// # Arguments
    /// * `api` - The list endpoints to call
    /// * `debounce` - Delay before each request is sent; a request superseded
    ///   during the delay never reaches the network
    pub fn new(api: Arc<A>, debounce: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            api,
            debounce,
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Generation of the most recent dispatch (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Cancel any pending request, then issue `request`.
    ///
    /// Must be called from within a tokio runtime. Returns the new generation.
    pub fn dispatch(&mut self, request: MovieRequest) -> u64 {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        debug!(
            generation,
            path = request.path(),
            page = request.page,
            "dispatching movie request"
        );

        let api = Arc::clone(&self.api);
        let outcome_tx = self.outcome_tx.clone();
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            let result = api.fetch_movies(&request).await.map_err(FetchError::from);
            // The receiver lives as long as the orchestrator; a send error only
            // means the orchestrator is gone and nobody wants the result.
            let _ = outcome_tx.send(FetchOutcome { generation, result });
        });

        self.in_flight = Some(InFlight {
            generation,
            handle,
            joined: false,
        });
        generation
    }

    /// Abort the pending request, if any. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.handle.abort();
                debug!(generation = in_flight.generation, "cancelled pending movie request");
                true
            }
            None => false,
        }
    }

    /// Wait for the pending request to settle.
    ///
    /// Returns `None` immediately when nothing is pending. Outcomes from
    /// superseded generations are discarded while waiting.
    ///
    /// Cancel-safe: if this future is dropped, the pending request keeps
    /// running and a later call picks up its outcome.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        loop {
            let current = self.in_flight.as_ref()?.generation;

            let outcome = tokio::select! {
                biased;
                received = self.outcome_rx.recv() => received?,
                joined = Self::join_in_flight(&mut self.in_flight) => {
                    // The task ended. If it reported, its message is already
                    // queued and the next loop iteration will receive it.
                    match joined {
                        Ok(()) => continue,
                        Err(reason) => FetchOutcome {
                            generation: current,
                            result: Err(FetchError::TaskFailed(reason)),
                        },
                    }
                }
            };

            if outcome.generation != current {
                debug!(
                    stale = outcome.generation,
                    current,
                    "discarding superseded movie response"
                );
                continue;
            }

            self.in_flight = None;
            return Some(outcome);
        }
    }

    /// Await the pending task's handle, leaving it in place.
    ///
    /// A handle is joined at most once; afterwards this pends forever so
    /// `select!` falls through to the channel.
    async fn join_in_flight(in_flight: &mut Option<InFlight>) -> Result<(), String> {
        match in_flight.as_mut() {
            Some(task) if !task.joined => {
                let joined = (&mut task.handle).await;
                task.joined = true;
                joined.map_err(|err| {
                    warn!(generation = task.generation, "movie fetch task failed: {}", err);
                    err.to_string()
                })
            }
            _ => std::future::pending().await,
        }
    }
}

impl<A: MovieApi + ?Sized + 'static> Drop for FetchOrchestrator<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
