use namecore::{
    error::ApiError,
    platform::NameBackend,
};
use parking_lot::Mutex;
use std::sync::Arc;

use super::{
    Completion,
    ListFilter,
    PageRequest,
    Paginator,
    Status,
};

/// A [`Paginator`] shared between whoever issues triggers and whoever
/// renders, fetching through `backend`.
///
/// The lock is only held to issue and to complete a request, never across
/// the network round-trip; a filter change made meanwhile turns the
/// pending result stale.
pub struct PaginatedList<B> {
    backend: B,
    state: Arc<Mutex<Paginator>>,
}

impl<B: Clone> Clone for PaginatedList<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            state: self.state.clone(),
        }
    }
}

impl<B: NameBackend> PaginatedList<B> {
    pub fn new(backend: B, paginator: Paginator) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(paginator)),
        }
    }

    /// Runs `f` against the current state.
    pub fn with<R>(&self, f: impl FnOnce(&Paginator) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn status(&self) -> Status {
        self.state.lock().status().clone()
    }

    pub fn set_filter(&self, filter: ListFilter) -> bool {
        self.state.lock().set_filter(filter)
    }

    async fn fetch(&self, request: Option<PageRequest>) -> Option<Completion> {
        let request = request?;
        let result = self.backend.list_names(&request.query()).await;
        Some(self.state.lock().complete(&request, result))
    }

    /// Fetches the next page if one is due; `None` when nothing was issued.
    pub async fn load(&self) -> Option<Completion> {
        let request = self.state.lock().begin();
        self.fetch(request).await
    }

    pub async fn on_sentinel(&self, visible_ratio: f64) -> Option<Completion> {
        let request = self.state.lock().on_sentinel(visible_ratio);
        self.fetch(request).await
    }

    pub async fn retry(&self) -> Option<Completion> {
        let request = self.state.lock().retry();
        self.fetch(request).await
    }

    /// Keeps loading until the last page, stopping at the first failure.
    pub async fn load_all(&self) -> Result<(), ApiError> {
        while self.load().await.is_some() {
            if let Some(e) = self.with(|p| p.error().cloned()) {
                return Err(e);
            }
        }
        Ok(())
    }
}
