use namecore::{
    error::StorageError,
    storage::Storage,
};
use serde::{
    de::DeserializeOwned,
    Serialize,
};

pub const FAVORITES_KEY: &str = "favorites";
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const ONBOARDING_KEY: &str = "hasSeenWelcome";
pub const RECENT_SEARCHES_CAPACITY: usize = 5;

/// Favorites, recent searches and the onboarding latch, each under its own
/// key of the injected [`Storage`].
///
/// None of the operations fail: storage that is unavailable or holds
/// malformed data reads as empty, and write failures are logged and
/// dropped, as these preferences are conveniences only.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    recent_capacity: usize,
}

impl<S: Storage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            recent_capacity: RECENT_SEARCHES_CAPACITY,
        }
    }

    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let result = self.storage.get_item(key)
            .and_then(|value| value
                .map(|value| serde_json::from_str(&value)
                    .map_err(|source| StorageError::Malformed {
                        key: key.to_string(),
                        source,
                    })
                )
                .transpose()
            );
        match result {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log::warn!("treating preference as empty: {e}");
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })
            .and_then(|value| self.storage.set_item(key, &value));
        if let Err(e) = result {
            log::warn!("preference not saved: {e}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("preference not removed: {e}");
        }
    }
}

// Favorites
impl<S: Storage> PreferenceStore<S> {
    /// Favorite ids in insertion order, oldest first.
    pub fn list_favorites(&self) -> Vec<i64> {
        self.read(FAVORITES_KEY)
    }

    pub fn add_favorite(&self, id: i64) {
        let mut favorites = self.list_favorites();
        if !favorites.contains(&id) {
            favorites.push(id);
            self.write(FAVORITES_KEY, &favorites);
        }
    }

    pub fn remove_favorite(&self, id: i64) {
        let mut favorites = self.list_favorites();
        let before = favorites.len();
        favorites.retain(|fav| *fav != id);
        if favorites.len() != before {
            self.write(FAVORITES_KEY, &favorites);
        }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.list_favorites().contains(&id)
    }

    /// Flips membership of `id`, returning whether it is now a favorite.
    pub fn toggle_favorite(&self, id: i64) -> bool {
        if self.is_favorite(id) {
            self.remove_favorite(id);
            false
        } else {
            self.add_favorite(id);
            true
        }
    }
}

// Recent searches
impl<S: Storage> PreferenceStore<S> {
    /// Recent search terms, most recent first.
    pub fn list_recent_searches(&self) -> Vec<String> {
        self.read(RECENT_SEARCHES_KEY)
    }

    /// Records a search term at the front of the list.
    ///
    /// Blank terms are ignored, and so are terms already present: an
    /// existing entry keeps its position rather than moving to the front.
    pub fn add_recent_search(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        let mut recent = self.list_recent_searches();
        if recent.iter().any(|t| t == term) {
            return;
        }
        recent.insert(0, term.to_string());
        recent.truncate(self.recent_capacity);
        self.write(RECENT_SEARCHES_KEY, &recent);
    }

    pub fn clear_recent_searches(&self) {
        self.remove(RECENT_SEARCHES_KEY);
    }
}

// Onboarding
impl<S: Storage> PreferenceStore<S> {
    pub fn has_completed_onboarding(&self) -> bool {
        match self.storage.get_item(ONBOARDING_KEY) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("treating onboarding as incomplete: {e}");
                false
            }
        }
    }

    /// One-way latch; nothing in the store ever resets it.
    pub fn mark_onboarding_complete(&self) {
        if let Err(e) = self.storage.set_item(ONBOARDING_KEY, "true") {
            log::warn!("onboarding flag not saved: {e}");
        }
    }
}
