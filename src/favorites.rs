//! Watchlist ("Мой список") backed by the local store

use std::cell::OnceCell;
use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::storage::{LocalStore, WATCHLIST_KEY};

/// Set of favorited item ids.
///
/// The set is read from storage on first access and written back on every
/// toggle. Unreadable or malformed data counts as an empty list.
pub struct FavoritesStore {
    storage: LocalStore,
    ids: OnceCell<BTreeSet<String>>,
}

impl FavoritesStore {
    pub fn new(storage: LocalStore) -> Self {
        Self {
            storage,
            ids: OnceCell::new(),
        }
    }

    fn loaded(&self) -> &BTreeSet<String> {
        self.ids.get_or_init(|| load_ids(&self.storage))
    }

    pub fn has(&self, id: &str) -> bool {
        self.loaded().contains(id)
    }

    /// Flip membership of `id`, persist, and return the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let mut ids = self.loaded().clone();
        let now_member = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };

        match serde_json::to_string(&ids) {
            Ok(json) => self.storage.set(WATCHLIST_KEY, json),
            Err(e) => warn!(error = %e, "failed to encode watchlist"),
        }
        debug!(id, now_member, "watchlist toggled");

        self.ids = OnceCell::from(ids);
        now_member
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        self.loaded()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &LocalStore {
        &self.storage
    }

    /// Shared access to the theme key living next to the watchlist
    pub fn storage_mut(&mut self) -> &mut LocalStore {
        &mut self.storage
    }
}

fn load_ids(storage: &LocalStore) -> BTreeSet<String> {
    let Some(raw) = storage.get(WATCHLIST_KEY) else {
        return BTreeSet::new();
    };

    serde_json::from_str::<Vec<String>>(raw)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_else(|e| {
            warn!(error = %e, "watchlist malformed, treating as empty");
            BTreeSet::new()
        })
}
