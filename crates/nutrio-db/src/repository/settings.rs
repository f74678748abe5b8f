//! # Settings Repository
//!
//! Device key-value settings stored in the local `app_settings` table.
//!
//! ## Contract
//! ```text
//! get_string(key, default) → stored value, or `default` if never set
//! set_string(key, value)   → insert or overwrite, last write wins
//! ```
//!
//! The [`SettingsStore`] trait is the seam the favourites store is written
//! against, so it can run on any key-value backend.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// String key-value storage.
///
/// Failures of the underlying storage are returned as errors and are never
/// replaced by the default value.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads `key`, returning `default` when it has never been written.
    async fn get_string(&self, key: &str, default: &str) -> DbResult<String>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set_string(&self, key: &str, value: &str) -> DbResult<()>;
}

/// Repository over the `app_settings` table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads `key`, returning `default` when no row exists.
    pub async fn get_string(&self, key: &str, default: &str) -> DbResult<String> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM app_settings WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    /// Upserts `value` under `key`.
    pub async fn set_string(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing setting");

        sqlx::query(
            r#"
            INSERT INTO app_settings (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn get_string(&self, key: &str, default: &str) -> DbResult<String> {
        SettingsRepository::get_string(self, key, default).await
    }

    async fn set_string(&self, key: &str, value: &str) -> DbResult<()> {
        SettingsRepository::set_string(self, key, value).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
