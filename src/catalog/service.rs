use crate::index::engine::{lookup, sample_names, NameIndex};
use crate::index::types::SearchOutcome;
use crate::loader::fetch::{Loader, RecordSource};
use crate::loader::types::FetchError;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

/// Point-in-time view of the load state, for the status endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub loaded: bool,
    pub item_count: usize,
    pub index_ready: bool,
}

/// The dataset triple. Replaced as a unit under the write lock; a failed
/// reload never touches it.
#[derive(Default)]
struct CatalogState {
    records: Vec<Value>,
    index: NameIndex,
    loaded: bool,
}

/// Owns the current dataset and coordinates reloads.
///
/// Readers take the `state` read lock just long enough to resolve against a
/// consistent (records, index) snapshot. Reloads serialize on `reload_gate`;
/// the loader's retry sleeps happen while holding only the gate, so readers
/// keep answering from the last-good state throughout.
pub struct CatalogService<S> {
    loader: Loader<S>,
    state: RwLock<CatalogState>,
    reload_gate: Mutex<()>,
}

impl<S: RecordSource> CatalogService<S> {
    pub fn new(loader: Loader<S>) -> Self {
        Self {
            loader,
            state: RwLock::new(CatalogState::default()),
            reload_gate: Mutex::new(()),
        }
    }

    /// Fetches the dataset and swaps in a freshly built index. On total fetch
    /// failure the previous state stays in place, stale but consistent, and
    /// the error goes back to whoever triggered the reload.
    pub async fn reload(&self) -> Result<usize, FetchError> {
        let _gate = self.reload_gate.lock().await;
        self.refresh().await
    }

    /// Cold-start check for the lookup path: if nothing has ever loaded,
    /// attempt exactly one synchronous load. Double-checked around the gate so
    /// simultaneous cold lookups trigger a single fetch.
    pub async fn ensure_loaded(&self) -> Result<(), FetchError> {
        if self.state.read().await.loaded {
            return Ok(());
        }
        let _gate = self.reload_gate.lock().await;
        if self.state.read().await.loaded {
            return Ok(());
        }
        self.refresh().await.map(|_| ())
    }

    /// Caller must hold `reload_gate`.
    async fn refresh(&self) -> Result<usize, FetchError> {
        let records = self.loader.load().await?;
        let index = NameIndex::build(&records);
        let count = records.len();

        let mut state = self.state.write().await;
        state.records = records;
        state.index = index;
        state.loaded = true;
        tracing::info!(
            "Installed dataset: {} records, {} indexed names",
            count,
            state.index.len()
        );
        Ok(count)
    }

    /// Resolves a query through the match cascade. Attempts one load first if
    /// no dataset has ever been installed; that failure is the only error this
    /// can return.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, FetchError> {
        self.ensure_loaded().await?;
        let state = self.state.read().await;
        Ok(lookup(&state.index, &state.records, query))
    }

    /// Total record count plus the names of the first `limit` records.
    /// A pure read; never triggers a load.
    pub async fn sample(&self, limit: usize) -> (usize, Vec<String>) {
        let state = self.state.read().await;
        (state.records.len(), sample_names(&state.records, limit))
    }

    /// Pure read of the load state; never triggers a load. The index is only
    /// ever built together with a successful load, so readiness tracks the
    /// loaded flag.
    pub async fn status(&self) -> StatusSnapshot {
        let state = self.state.read().await;
        StatusSnapshot {
            loaded: state.loaded,
            item_count: state.records.len(),
            index_ready: state.loaded,
        }
    }
}
