//! # Error Types
//!
//! Domain-specific error types for nutrio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nutrio-core errors (this file)                                        │
//! │  └── CoreError        - Favourites payload encode/decode               │
//! │                                                                         │
//! │  nutrio-db errors (separate crate)                                     │
//! │  └── DbError          - Storage and backend failures                   │
//! │                                                                         │
//! │  mobile API errors (in app)                                            │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CoreError → DbError → ApiError → Front end                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decode failures are usually swallowed one level up: a broken favourites
//! record reads as "no favourites". [`CoreError::Decode`] exists so that the
//! caller can decide that, and log what it threw away.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persisted favourites value is not a JSON array of strings.
    ///
    /// ## When This Occurs
    /// - Storage was edited by hand or corrupted
    /// - An older build stored something else under the same key
    /// - The value is valid JSON of the wrong shape (`null`, `{}`, `[1, 2]`)
    #[error("Malformed favourites payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The favourites list could not be serialized.
    #[error("Failed to encode favourites: {0}")]
    Encode(#[source] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = CoreError::Decode(source);
        assert!(err.to_string().starts_with("Malformed favourites payload: "));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<Vec<String>>("null").unwrap_err();
        let err = CoreError::Decode(source);
        assert!(err.source().is_some());
    }
}
