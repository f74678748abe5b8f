//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Nutrio                                 │
//! │                                                                         │
//! │  fetch_products(filter)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  DbError::Backend(sqlx::Error) ──────────► BACKEND_ERROR               │
//! │  DbError::ConnectionFailed / Migration ──► DATABASE_ERROR              │
//! │  DbError::Core(CoreError) ───────────────► INTERNAL                    │
//! │  ConfigError ────────────────────────────► CONFIG_ERROR                │
//! │                                                                         │
//! │  Front end receives:                                                    │
//! │    { "code": "BACKEND_ERROR", "message": "error returned from ..." }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backend messages are passed through unchanged so the catalog screen can
//! show what the server said. Unreadable favourites never get here; they
//! read as an empty list.

use nutrio_db::DbError;
use serde::Serialize;

use crate::config::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "BACKEND_ERROR",
///   "message": "error returned from database: relation \"products\" does not exist"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Local store could not be opened or migrated
    DatabaseError,

    /// A query failed in the database or on the way to it
    BackendError,

    /// Environment configuration is invalid
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Backend(e) => {
                tracing::error!(error = %e, "Backend query failed");
                ApiError::new(ErrorCode::BackendError, e.to_string())
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::Core(e) => {
                tracing::error!("Internal error: {}", e);
                ApiError::internal(e.to_string())
            }
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
