//! # nutrio-core: Pure Types and Logic for Nutrio
//!
//! This crate holds the domain types and the pure logic behind the two
//! data-access helpers of the Nutrio mobile app. Nothing in here touches a
//! database, the network, or the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nutrio Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile front end                             │   │
//! │  │        Catalog screen ──► Product card ──► ☆ Favourite          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nutrio-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌──────────────┐            │   │
//! │  │   │   types   │  │  favourites  │  │    query     │            │   │
//! │  │   │  Product  │  │ FavouriteIds │  │ CatalogQuery │            │   │
//! │  │   │  Filter   │  │ encode/toggle│  │ LIKE pattern │            │   │
//! │  │   └───────────┘  └──────────────┘  └──────────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nutrio-db (Database Layer)                   │   │
//! │  │        SQLite settings + catalog, Postgres remote catalog       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductFilter)
//! - [`favourites`] - JSON-encoded favourite id list and its toggle
//! - [`query`] - Query shape for the product catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrio_core::favourites::FavouriteIds;
//!
//! let mut ids = FavouriteIds::decode(r#"["p-1"]"#).unwrap();
//! ids.toggle("p-2");
//! ids.toggle("p-1");
//!
//! assert!(ids.contains("p-2"));
//! assert_eq!(ids.encode().unwrap(), r#"["p-2"]"#);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod favourites;
pub mod query;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use favourites::FavouriteIds;
pub use query::{CatalogQuery, Clause};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Settings key holding the favourites list.
///
/// ## Compatibility
/// Devices that already ran the app have their favourites stored under this
/// exact key as a JSON array of strings. Changing it drops everyone's
/// favourites.
pub const FAVOURITES_KEY: &str = "favoriteProducts";

/// Value returned for [`FAVOURITES_KEY`] when it has never been written.
pub const EMPTY_FAVOURITES: &str = "[]";

/// Category value meaning "all categories" ("Все").
///
/// The catalog screen offers it as the first entry of the category picker.
/// It never reaches the database as a filter value.
pub const ALL_CATEGORIES: &str = "Все";

/// Name of the catalog collection (table).
pub const PRODUCTS_TABLE: &str = "products";
