use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::ProfileId;

/// Profile ids the user has saved
///
/// Lives for the whole session and is only changed by [`BookmarkSet::toggle`];
/// filter, sort and page changes never touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSet {
    ids: HashSet<ProfileId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` and return the new saved state
    pub fn toggle(&mut self, id: ProfileId) -> bool {
        let saved = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        };
        tracing::trace!("Bookmark toggled: {} -> {}", id, saved);
        saved
    }

    pub fn is_saved(&self, id: &ProfileId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Saved ids in ascending order
    pub fn ids(&self) -> Vec<ProfileId> {
        let mut ids: Vec<_> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<ProfileId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = ProfileId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Bookmark set shared between threads
///
/// Toggles are serialized through one mutex so concurrent clicks cannot
/// lose updates. Queries take a [`snapshot`](SharedBookmarks::snapshot) and
/// release the lock before touching the catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedBookmarks {
    inner: Arc<Mutex<BookmarkSet>>,
}

impl SharedBookmarks {
    pub fn new(bookmarks: BookmarkSet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bookmarks)),
        }
    }

    // A panic while holding the lock cannot leave a HashSet half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, BookmarkSet> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn toggle(&self, id: ProfileId) -> bool {
        self.lock().toggle(id)
    }

    pub fn is_saved(&self, id: &ProfileId) -> bool {
        self.lock().is_saved(id)
    }

    pub fn snapshot(&self) -> BookmarkSet {
        self.lock().clone()
    }
}
