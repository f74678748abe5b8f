//! # Favourite Commands
//!
//! Heart-button commands on the product list and detail screens.

use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the favourite product ids in the order they were added.
///
/// Never fails because of stored content: a corrupt list reads as empty.
pub async fn get_favorite_ids(state: &AppState) -> Result<Vec<String>, ApiError> {
    debug!("get_favorite_ids command");
    let ids = state.favourites().get_favorite_ids().await?;
    Ok(ids)
}

/// Flips the favourite state of `id`.
///
/// ## Returns
/// The new state: `true` if `id` is now a favourite.
pub async fn toggle_favorite(state: &AppState, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "toggle_favorite command");

    Ok(state.favourites().toggle_favorite_state(&id).await?)
}

/// Returns true if `id` is a favourite.
pub async fn is_favorite(state: &AppState, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "is_favorite command");
    Ok(state.favourites().is_favorite(&id).await?)
}

// =============================================================================
// Unit Tests
// =============================================================================
