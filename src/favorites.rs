// SPDX-License-Identifier: MPL-2.0
//! Favorites list persisted under the `favoritos` key.
//!
//! The list is an ordered JSON array of unique item identifiers. Reads never
//! fail: an absent, unreadable or malformed value is treated as "no
//! favorites". Write failures are logged and otherwise ignored.

use crate::storage::{keys, KeyValueStore};

/// Tooltip shown on an active favorite toggle.
pub const TITLE_REMOVE: &str = "Quitar de favoritos";

/// Tooltip shown on an inactive favorite toggle.
pub const TITLE_ADD: &str = "Agregar a favoritos";

/// Favorites backed by a key/value store.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current favorites in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let raw = match self.store.get_item(keys::FAVORITES) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::debug!(error = %err, "favorites unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => list,
            Err(err) => {
                tracing::debug!(error = %err, "favorites malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns whether `id` is currently a favorite.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|fav| fav == id)
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns `true` when `id` is a favorite after the call. An empty or
    /// whitespace-only `id` is ignored and returns `false` without touching
    /// storage. Unlike the web client, a blank id is never stored.
    pub fn toggle(&self, id: &str) -> bool {
        if id.trim().is_empty() {
            return false;
        }

        let mut favorites = self.list();
        let added = if let Some(pos) = favorites.iter().position(|fav| fav == id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(id.to_string());
            true
        };

        self.save(&favorites);
        added
    }

    fn save(&self, favorites: &[String]) {
        let serialized = match serde_json::to_string(favorites) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::error!(error = %err, "could not serialize favorites");
                return;
            }
        };
        if let Err(err) = self.store.set_item(keys::FAVORITES, &serialized) {
            tracing::error!(error = %err, "could not save favorites");
        }
    }

    /// Brings every indicator in line with the stored favorites.
    ///
    /// The detail toggle (if any) reflects membership of `id`; each list
    /// toggle reflects membership of its own identifier.
    pub fn refresh_indicators(&self, id: &str, indicators: &mut FavoriteIndicators) {
        let favorites = self.list();
        if let Some(detail) = indicators.detail.as_mut() {
            detail.active = favorites.iter().any(|fav| fav == id);
        }
        indicators.sync_list(&favorites);
    }
}

/// Visual state of one favorite toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub fav_id: String,
    pub active: bool,
}

impl FavoriteToggle {
    pub fn new(fav_id: impl Into<String>) -> Self {
        Self {
            fav_id: fav_id.into(),
            active: false,
        }
    }

    /// Tooltip describing what pressing the toggle will do.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.active {
            TITLE_REMOVE
        } else {
            TITLE_ADD
        }
    }
}

/// All favorite toggles shown on the current screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteIndicators {
    /// Toggle on a single-item detail view.
    pub detail: Option<FavoriteToggle>,
    /// Toggles next to list entries.
    pub list: Vec<FavoriteToggle>,
}

impl FavoriteIndicators {
    /// Builds list toggles for `ids`, marking those already in `favorites`.
    #[must_use]
    pub fn initialize<I, T>(ids: I, favorites: &[String]) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut indicators = Self {
            detail: None,
            list: ids.into_iter().map(FavoriteToggle::new).collect(),
        };
        indicators.sync_list(favorites);
        indicators
    }

    fn sync_list(&mut self, favorites: &[String]) {
        for toggle in &mut self.list {
            if toggle.fav_id.is_empty() {
                continue;
            }
            toggle.active = favorites.iter().any(|fav| *fav == toggle.fav_id);
        }
    }
}
