//! # Favourites Store
//!
//! Favourite product ids persisted in device settings.
//!
//! ## Toggle Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    toggle_favorite("p-7")                               │
//! │                                                                         │
//! │  get_string("favoriteProducts", "[]")      ← 1 read                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  decode  ──(garbage)──► []                  ← fail-open                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  contains "p-7"?  yes → remove   no → push                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_string("favoriteProducts", encoded)   ← 1 write, full overwrite    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Read and write are separate statements with no lock in between. Two
//! toggles racing on the same device can lose one of them (last write
//! wins). Nothing is cached between calls: every operation reads storage.

use nutrio_core::{FavouriteIds, EMPTY_FAVOURITES, FAVOURITES_KEY};
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::settings::SettingsStore;

/// Favourites list over any [`SettingsStore`].
#[derive(Debug, Clone)]
pub struct FavouritesStore<S> {
    settings: S,
}

impl<S: SettingsStore> FavouritesStore<S> {
    /// Creates a store on top of `settings`.
    pub fn new(settings: S) -> Self {
        FavouritesStore { settings }
    }

    /// Returns the favourite ids in stored order.
    ///
    /// A stored value that isn't a JSON array of strings reads as an empty
    /// list. Storage failures are returned as errors.
    pub async fn get_favorite_ids(&self) -> DbResult<Vec<String>> {
        Ok(self.load().await?.into_vec())
    }

    /// Returns true if `id` is currently a favourite.
    pub async fn is_favorite(&self, id: &str) -> DbResult<bool> {
        Ok(self.load().await?.contains(id))
    }

    /// Adds `id` if absent, removes it if present, and persists the list.
    pub async fn toggle_favorite(&self, id: &str) -> DbResult<()> {
        self.toggle_favorite_state(id).await.map(|_| ())
    }

    /// Same as [`toggle_favorite`](Self::toggle_favorite), returning the new
    /// membership of `id` without reading storage again.
    pub async fn toggle_favorite_state(&self, id: &str) -> DbResult<bool> {
        let mut ids = self.load().await?;
        let now_favourite = ids.toggle(id);

        let encoded = ids.encode()?;
        self.settings.set_string(FAVOURITES_KEY, &encoded).await?;

        debug!(id = %id, favourite = now_favourite, total = ids.len(), "Toggled favourite");
        Ok(now_favourite)
    }

    async fn load(&self) -> DbResult<FavouriteIds> {
        let raw = self
            .settings
            .get_string(FAVOURITES_KEY, EMPTY_FAVOURITES)
            .await?;

        match FavouriteIds::decode(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable favourites");
                Ok(FavouriteIds::new())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
