//! # nutrio-db: Database Layer for Nutrio
//!
//! Storage for the two data-access helpers of the app: the favourites list
//! in on-device settings and the product catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nutrio Data Flow                                 │
//! │                                                                         │
//! │  Command (toggle_favorite / fetch_products)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     nutrio-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌─────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │   │  Repositories   │   │ RemoteCatalog│   │   │
//! │  │   │   (pool.rs)   │◄──│ settings.rs     │──►│ (remote.rs)  │   │   │
//! │  │   │  SqlitePool   │   │ favourites.rs   │   │   PgPool     │   │   │
//! │  │   │               │   │ product.rs      │   │              │   │   │
//! │  │   └───────────────┘   └─────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                              │                  │
//! │       ▼                                              ▼                  │
//! │  ┌───────────────────────┐              ┌───────────────────────┐      │
//! │  │  SQLite on the device │              │  Hosted Postgres      │      │
//! │  │  app_settings         │              │  products             │      │
//! │  └───────────────────────┘              └───────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Local SQLite pool creation and configuration
//! - [`remote`] - Hosted catalog pool
//! - [`migrations`] - Embedded local migrations
//! - [`error`] - Database error types
//! - [`repository`] - Settings, favourites and catalog repositories
//! - [`seed`] - Development catalog loader
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nutrio_core::ProductFilter;
//! use nutrio_db::{Database, DbConfig, RemoteCatalog, RemoteConfig};
//!
//! let db = Database::new(DbConfig::new("nutrio.db")).await?;
//! db.favourites().toggle_favorite("p-42").await?;
//!
//! let catalog = RemoteCatalog::connect(RemoteConfig::new(url))?;
//! let dairy = catalog
//!     .products()
//!     .fetch_products(Some(&ProductFilter::category("Dairy")))
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod remote;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use remote::{RemoteCatalog, RemoteConfig};

// Repository re-exports for convenience
pub use repository::favourites::FavouritesStore;
pub use repository::product::{ProductCatalog, ProductRepository, RemoteProductRepository};
pub use repository::settings::{SettingsRepository, SettingsStore};
