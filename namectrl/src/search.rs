use namecore::{
    error::ApiError,
    name::{
        Gender,
        Name,
    },
    platform::NameBackend,
    query::DEFAULT_SEARCH_LIMIT,
    storage::Storage,
};
use nameprefs::PreferenceStore;

use crate::debounce::Debouncer;

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// A newer input arrived before this one settled or resolved.
    Superseded,
    /// The input was blank; nothing was queried.
    Empty,
    Results(Vec<Name>),
}

/// Search-as-you-type: inputs are debounced, settled terms are recorded
/// as recent searches and queried against the backend.
pub struct SearchSession<B, S> {
    backend: B,
    prefs: PreferenceStore<S>,
    debouncer: Debouncer,
    limit: u32,
}

impl<B: NameBackend, S: Storage> SearchSession<B, S> {
    pub fn new(backend: B, prefs: PreferenceStore<S>) -> Self {
        Self {
            backend,
            prefs,
            debouncer: Debouncer::default(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn debouncer(mut self, debouncer: Debouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn prefs(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    /// Handles one keystroke worth of input.
    pub async fn input(
        &self,
        text: &str,
        gender: Option<Gender>,
    ) -> Result<SearchOutcome, ApiError> {
        let Some(ticket) = self.debouncer.settle().await else {
            return Ok(SearchOutcome::Superseded);
        };
        let outcome = self.submit(text, gender).await;
        // a slower response, failed or not, must not replace results of a
        // newer input
        if !self.debouncer.is_current(ticket) {
            return Ok(SearchOutcome::Superseded);
        }
        outcome
    }

    /// Runs the search for `text` right away, bypassing the debounce.
    pub async fn submit(
        &self,
        text: &str,
        gender: Option<Gender>,
    ) -> Result<SearchOutcome, ApiError> {
        let term = text.trim();
        if term.is_empty() {
            return Ok(SearchOutcome::Empty);
        }
        self.prefs.add_recent_search(term);
        let names = self.backend
            .search_names(term, Some(self.limit), gender)
            .await?;
        Ok(SearchOutcome::Results(names))
    }
}
