//! # Repository Module
//!
//! Storage repositories for Nutrio.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories at a glance                             │
//! │                                                                         │
//! │  Command layer                                                         │
//! │       │                                                                 │
//! │       ├── db.favourites().toggle_favorite("p-7")                       │
//! │       │        └── FavouritesStore<S: SettingsStore>                    │
//! │       │               └── SettingsRepository  (app_settings table)      │
//! │       │                                                                 │
//! │       └── catalog.fetch_products(Some(&filter))                        │
//! │                └── dyn ProductCatalog                                  │
//! │                      ├── RemoteProductRepository (Postgres)             │
//! │                      └── ProductRepository       (local SQLite)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SettingsRepository`](settings::SettingsRepository) - Device key-value settings
//! - [`FavouritesStore`](favourites::FavouritesStore) - Favourite product ids
//! - [`ProductRepository`](product::ProductRepository) - Local catalog
//! - [`RemoteProductRepository`](product::RemoteProductRepository) - Hosted catalog

pub mod favourites;
pub mod product;
pub mod settings;
