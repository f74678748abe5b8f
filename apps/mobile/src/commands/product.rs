//! # Product Commands
//!
//! The catalog screen's only data call.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch Flow                                   │
//! │                                                                         │
//! │  User types "молоко" / picks a category chip                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch_products({ search: "молоко", category: "Все" })                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppState.catalog() ── remote Postgres or local SQLite                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> sorted by name   (or ApiError BACKEND_ERROR)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use nutrio_core::{Product, ProductFilter};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Fetches the catalog, optionally narrowed by `filter`.
///
/// ## Arguments
/// * `filter` - Search term and/or category; `None` returns everything
///
/// ## Returns
/// Products sorted by name. No match is an empty list, not an error.
pub async fn fetch_products(
    state: &AppState,
    filter: Option<ProductFilter>,
) -> Result<Vec<Product>, ApiError> {
    let start = Instant::now();
    debug!(
        ?filter,
        unrestricted = filter.as_ref().map_or(true, ProductFilter::is_unrestricted),
        remote = state.is_remote(),
        "fetch_products command"
    );

    let products = state.catalog().fetch_products(filter.as_ref()).await?;

    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        count = products.len(),
        "fetch_products complete"
    );

    Ok(products)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use nutrio_core::ALL_CATEGORIES;
    use nutrio_db::seed::insert_products;
    use nutrio_db::{Database, DbConfig};

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            calories: Some(100.0),
            proteins: None,
            fats: None,
            carbs: None,
            ingredients: None,
            harmful: None,
            contraindications: None,
        }
    }

    async fn setup() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        insert_products(
            db.pool(),
            &[
                product("1", "Kefir", "Dairy"),
                product("2", "Apple Juice", "Drinks"),
                product("3", "Goat Milk", "Dairy"),
            ],
        )
        .await
        .unwrap();
        AppState::local(db)
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_without_filter() {
        let state = setup().await;
        let products = fetch_products(&state, None).await.unwrap();
        assert_eq!(names(&products), vec!["Apple Juice", "Goat Milk", "Kefir"]);
    }

    #[tokio::test]
    async fn test_fetch_with_filter() {
        let state = setup().await;

        let filter = ProductFilter::category("Dairy").with_search(" MILK ");
        let products = fetch_products(&state, Some(filter)).await.unwrap();
        assert_eq!(names(&products), vec!["Goat Milk"]);

        let filter = ProductFilter::category(ALL_CATEGORIES);
        assert_eq!(fetch_products(&state, Some(filter)).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_filter_from_json_params() {
        let state = setup().await;
        let filter: ProductFilter = serde_json::from_str(r#"{"category":"Drinks"}"#).unwrap();

        let products = fetch_products(&state, Some(filter)).await.unwrap();
        assert_eq!(names(&products), vec!["Apple Juice"]);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_as_api_error() {
        let state = setup().await;
        sqlx::query("DROP TABLE products")
            .execute(state.db().pool())
            .await
            .unwrap();

        let err = fetch_products(&state, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BackendError);
        assert!(err.message.contains("products"));
    }
}
