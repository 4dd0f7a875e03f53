//! Debounced, cancel-safe drug search.
//!
//! Mirrors the behavior of an incremental search box: keystrokes arrive
//! through [`DrugSearchSession::on_input`], a request is only issued once
//! the input has been quiet for the configured delay, and a response that
//! belongs to a superseded input never overwrites newer results.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use medmanager_client::DrugApi;
use medmanager_types::{DrugSummary, EntityId};

use crate::debounce::{schedule, CancellableHandle};

/// Quiet period before a keystroke turns into a search request.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

struct SearchState {
    /// Bumped on every input; a response only lands if its input is
    /// still the latest one.
    generation: AtomicU64,
    results: Mutex<Vec<DrugSummary>>,
}

/// Incremental drug search with debouncing and stale-response
/// suppression.
///
/// Search failures are not surfaced to the caller; they log a warning
/// and present as an empty result list, so a flaky backend degrades to
/// "no suggestions" rather than an error state in the middle of typing.
pub struct DrugSearchSession {
    api: DrugApi,
    delay: Duration,
    state: Arc<SearchState>,
    exclusions: Mutex<HashSet<EntityId>>,
    pending: Mutex<Option<CancellableHandle>>,
}

impl DrugSearchSession {
    /// Creates a session with the default quiet period.
    pub fn new(api: DrugApi) -> Self {
        Self::with_delay(api, DEFAULT_SEARCH_DELAY)
    }

    /// Creates a session with a custom quiet period.
    pub fn with_delay(api: DrugApi, delay: Duration) -> Self {
        Self {
            api,
            delay,
            state: Arc::new(SearchState {
                generation: AtomicU64::new(0),
                results: Mutex::new(Vec::new()),
            }),
            exclusions: Mutex::new(HashSet::new()),
            pending: Mutex::new(None),
        }
    }

    /// Feeds the current content of the search box.
    ///
    /// A previously scheduled, not-yet-issued request is cancelled. An
    /// empty (or whitespace) input clears the results immediately without
    /// touching the backend.
    pub fn on_input(&self, term: &str) {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.cancel();
        }

        let term = term.trim().to_string();
        if term.is_empty() {
            self.state.results.lock().unwrap().clear();
            return;
        }

        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        let exclude = self.exclusions.lock().unwrap().clone();

        let handle = schedule(self.delay, async move {
            let results = match api.search_excluding(&term, &exclude).await {
                Ok(results) => results,
                Err(error) => {
                    tracing::warn!(%term, %error, "drug search failed");
                    Vec::new()
                }
            };
            // Drop the response if a newer input superseded this one
            // while the request was in flight.
            if state.generation.load(Ordering::SeqCst) == generation {
                *state.results.lock().unwrap() = results;
            }
        });
        *self.pending.lock().unwrap() = Some(handle);
    }

    /// The results of the latest completed, still-current search.
    pub fn results(&self) -> Vec<DrugSummary> {
        self.state.results.lock().unwrap().clone()
    }

    /// Replaces the set of drug ids filtered out of every result list.
    ///
    /// Takes effect from the next issued request.
    pub fn set_exclusions(&self, exclude: HashSet<EntityId>) {
        *self.exclusions.lock().unwrap() = exclude;
    }

    /// Cancels any scheduled request and clears the results.
    pub fn clear(&self) {
        self.state.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.cancel();
        }
        self.state.results.lock().unwrap().clear();
    }

    /// Waits for the most recently scheduled request to finish.
    pub async fn settled(&self) {
        let handle = self.pending.lock().unwrap().take();
        if let Some(handle) = handle {
            handle.join().await;
        }
    }
}
