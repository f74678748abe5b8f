//! # Domain Types
//!
//! Types shared by the catalog and the favourites helpers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │       Product        │        │    ProductFilter     │              │
//! │  │  ──────────────────  │        │  ──────────────────  │              │
//! │  │  id, name, category  │        │  search?   (substr)  │              │
//! │  │  calories? proteins? │        │  category? (exact)   │              │
//! │  │  fats?     carbs?    │        └──────────────────────┘              │
//! │  │  ingredients?        │                                               │
//! │  │  harmful?            │        ? = nullable                           │
//! │  │  contraindications?  │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are read-only projections of catalog rows. The app never writes
//! them back.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ALL_CATEGORIES;

// =============================================================================
// Product
// =============================================================================

/// One catalog entry.
///
/// Field names match the catalog columns one-to-one, so rows decode
/// straight into this struct (`SELECT *`).
///
/// ## Column types
/// Decoding is strict. The hosted `products` table must use:
///
/// | Column | Postgres | SQLite |
/// |--------|----------|--------|
/// | `id`, `name`, `category` | `text` / `varchar`, not null | `TEXT NOT NULL` |
/// | `calories`, `proteins`, `fats`, `carbs` | `float8` (double precision), nullable | `REAL` |
/// | `ingredients`, `harmful`, `contraindications` | `text`, nullable | `TEXT` |
///
/// A `uuid` id or `numeric`/`real` (float4) nutrients make every row fail
/// with `DbError::Backend(sqlx::Error::ColumnDecode)`. Cast in a view if the
/// backend schema differs. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Stable unique identifier.
    pub id: String,

    /// Display name. The catalog is always sorted by it.
    pub name: String,

    /// Category name, e.g. "Молочные продукты" or "Dairy".
    pub category: String,

    /// Energy per 100 g, kcal.
    pub calories: Option<f64>,

    /// Proteins per 100 g, grams.
    pub proteins: Option<f64>,

    /// Fats per 100 g, grams.
    pub fats: Option<f64>,

    /// Carbohydrates per 100 g, grams.
    pub carbs: Option<f64>,

    /// Free-text ingredient list.
    pub ingredients: Option<String>,

    /// Note on harmful effects.
    pub harmful: Option<String>,

    /// Who should avoid the product.
    pub contraindications: Option<String>,
}

// =============================================================================
// Product Filter
// =============================================================================

/// Criteria for one catalog read.
///
/// Both fields are optional; an absent filter and a filter with both fields
/// `None` mean the same thing. Built by the catalog screen on every search
/// keystroke or category change, used once, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductFilter {
    /// Free-text search over product names.
    #[serde(default)]
    pub search: Option<String>,

    /// Exact category name, or [`ALL_CATEGORIES`].
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductFilter {
    /// Filter on a search term only.
    pub fn search(term: impl Into<String>) -> Self {
        ProductFilter {
            search: Some(term.into()),
            category: None,
        }
    }

    /// Filter on a category only.
    pub fn category(name: impl Into<String>) -> Self {
        ProductFilter {
            search: None,
            category: Some(name.into()),
        }
    }

    /// Adds a search term to this filter.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Category that should restrict the query, if any.
    ///
    /// Empty strings and the [`ALL_CATEGORIES`] sentinel do not restrict.
    /// Anything else is compared verbatim, whitespace included.
    pub fn effective_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Trimmed search term, if it has any content.
    pub fn effective_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returns true when this filter would not restrict the catalog at all.
    pub fn is_unrestricted(&self) -> bool {
        self.effective_category().is_none() && self.effective_search().is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
