//! # Commands Module
//!
//! All commands exposed to the mobile front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── favourites.rs  ◄─── Favourite ids: list, toggle, membership
//! └── product.rs     ◄─── Catalog fetch
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  const products = await bridge.fetchProducts({ search: 'milk' });       │
//! │         │                                                               │
//! │         │ (JSON over the native bridge)                                 │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  async fn fetch_products(                                               │
//! │      state: &AppState,                ◄── built once at startup         │
//! │      filter: Option<ProductFilter>,   ◄── from the call params          │
//! │  ) -> Result<Vec<Product>, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Front end receives: Product[]  or  { code, message }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod favourites;
pub mod product;
