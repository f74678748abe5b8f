//! # Database Error Types
//!
//! Error types for storage and catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error (SQLite settings / Postgres catalog)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError::Backend ← carried as-is, no reclassification                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in mobile app) ← Serialized for front end                   │
//! │                                                                         │
//! │  Malformed favourites payloads never get here: they read as empty.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use nutrio_core::CoreError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The database client reported an error.
    ///
    /// ## When This Occurs
    /// - Catalog query rejected by the backend
    /// - Network unreachable / pool timed out
    /// - Settings table unavailable
    ///
    /// The original `sqlx::Error` is kept untouched so callers can inspect it.
    #[error(transparent)]
    Backend(#[from] sqlx::Error),

    /// Database connection could not be configured or opened.
    ///
    /// ## When This Occurs
    /// - Invalid database URL or path
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Local schema migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Domain error from nutrio-core (favourites encoding).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
