//! # Development Catalog Data
//!
//! Loads products into the local SQLite catalog. Used by the `seed` binary
//! and by tests; the catalog API itself never writes products.

use nutrio_core::Product;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Inserts `products` in one transaction.
///
/// ## Returns
/// Number of rows inserted. Existing ids are left untouched.
pub async fn insert_products(pool: &SqlitePool, products: &[Product]) -> DbResult<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for product in products {
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                id, name, category,
                calories, proteins, fats, carbs,
                ingredients, harmful, contraindications
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.calories)
        .bind(product.proteins)
        .bind(product.fats)
        .bind(product.carbs)
        .bind(&product.ingredients)
        .bind(&product.harmful)
        .bind(&product.contraindications)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;

    debug!(inserted, "Inserted products");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "Test".to_string(),
            calories: None,
            proteins: None,
            fats: None,
            carbs: None,
            ingredients: None,
            harmful: None,
            contraindications: None,
        }
    }

    #[tokio::test]
    async fn test_insert_skips_existing_ids() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let first = insert_products(db.pool(), &[product("a"), product("b")]).await.unwrap();
        let second = insert_products(db.pool(), &[product("b"), product("c")]).await.unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 1);
        assert_eq!(db.products().count().await.unwrap(), 3);
    }
}
