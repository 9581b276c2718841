//! In-memory run storage and shared application state.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;

use bsim_runner::RunBudget;

use crate::api::SimulateResponse;

/// Oldest runs are evicted past this many entries; an evicted `run_id`
/// answers "not found" like any unknown identifier.
pub const MAX_STORED_RUNS: usize = 1024;

/// Bounded FIFO store of completed simulation responses, keyed by `run_id`.
#[derive(Default)]
pub struct RunStore {
    inner: RwLock<Stored>,
}

#[derive(Default)]
struct Stored {
    by_id: HashMap<String, SimulateResponse>,
    order: VecDeque<String>,
}

impl RunStore {
    pub async fn insert(&self, response: SimulateResponse) {
        let mut stored = self.inner.write().await;
        if stored.order.len() == MAX_STORED_RUNS {
            if let Some(evicted) = stored.order.pop_front() {
                stored.by_id.remove(&evicted);
            }
        }
        stored.order.push_back(response.run_id.clone());
        stored.by_id.insert(response.run_id.clone(), response);
    }

    /// A clone of the stored response — the stored value itself is never
    /// mutated, so repeated fetches are identical.
    pub async fn get(&self, run_id: &str) -> Option<SimulateResponse> {
        self.inner.read().await.by_id.get(run_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }
}

/// Shared application state behind an `Arc` in every handler.
pub struct AppState {
    pub runs: RunStore,
    pub budget: RunBudget,
}

impl AppState {
    pub fn new(budget: RunBudget) -> Arc<Self> {
        Arc::new(Self { runs: RunStore::default(), budget })
    }
}
