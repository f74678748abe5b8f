//! # Product Catalog
//!
//! The single catalog read: all columns, sorted by name, optionally narrowed
//! by category and a name search.
//!
//! ## Query Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    fetch_products(filter)                               │
//! │                                                                         │
//! │  ProductFilter { search: "  milk ", category: "Dairy" }                 │
//! │       │                                                                 │
//! │       ▼  CatalogQuery::from_filter (nutrio-core)                        │
//! │  [Equals(category, "Dairy"), ContainsIgnoreCase(name, "milk")]          │
//! │       │                                                                 │
//! │       ▼  build_catalog_select (this module)                             │
//! │  ┌──────────────────────────────────────────────────────────────┐       │
//! │  │ Postgres: SELECT * FROM products                             │       │
//! │  │           WHERE category = $1 AND name ILIKE $2 ESCAPE '\'   │       │
//! │  │           ORDER BY name ASC                                  │       │
//! │  │ SQLite:   ... WHERE category = ? ORDER BY name ASC           │       │
//! │  │           then name match in memory (Clause::matches)        │       │
//! │  └──────────────────────────────────────────────────────────────┘       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product>  (empty on no match, backend error passed through)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Case folding must work for Cyrillic names. Postgres `ILIKE` folds any
//! script. SQLite `LIKE` only folds ASCII, so on SQLite the name search is
//! not pushed into SQL: rows are narrowed by category and sorted by the
//! database, then filtered with Unicode lowercasing.

use async_trait::async_trait;
use nutrio_core::query::{like_pattern, LIKE_ESCAPE};
use nutrio_core::{CatalogQuery, Clause, Product, ProductFilter};
use sqlx::{PgPool, Postgres, QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// Read access to a product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the products matching `filter`, sorted by name.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - nothing matched
    /// * `Err(DbError::Backend)` - the database rejected or failed the read
    async fn fetch_products(&self, filter: Option<&ProductFilter>) -> DbResult<Vec<Product>>;
}

/// SQL flavour used to render a [`CatalogQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
}

impl Dialect {
    /// Returns true if `clause` can be rendered into SQL for this dialect.
    ///
    /// Clauses that are not rendered must be applied to the decoded rows.
    pub fn renders(self, clause: &Clause) -> bool {
        match self {
            Dialect::Postgres => true,
            Dialect::Sqlite => !clause.is_text_search(),
        }
    }
}

/// Renders `query` into a ready-to-run builder with bound parameters.
///
/// Clauses the dialect doesn't [render](Dialect::renders) are skipped.
/// Identifiers come from `CatalogQuery` constants; user text only ever
/// reaches the statement as a bind parameter.
pub fn build_catalog_select<'args, DB>(query: &CatalogQuery, dialect: Dialect) -> QueryBuilder<'args, DB>
where
    DB: sqlx::Database,
    <DB as sqlx::Database>::Arguments<'args>: Default,
    String: sqlx::Encode<'args, DB> + sqlx::Type<DB>,
{
    let mut builder = QueryBuilder::new("SELECT * FROM ");
    builder.push(query.table());

    let rendered = query.clauses().iter().filter(|c| dialect.renders(c));
    for (i, clause) in rendered.enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });

        match clause {
            Clause::Equals { column, value } => {
                builder.push(*column).push(" = ").push_bind(value.clone());
            }
            Clause::ContainsIgnoreCase { column, needle } => {
                builder
                    .push(*column)
                    .push(" ILIKE ")
                    .push_bind(like_pattern(needle))
                    .push(format!(" ESCAPE '{LIKE_ESCAPE}'"));
            }
        }
    }

    builder
        .push(" ORDER BY ")
        .push(query.order_by())
        .push(if query.ascending() { " ASC" } else { " DESC" });

    builder
}

// =============================================================================
// Local (SQLite) catalog
// =============================================================================

/// Catalog read from the local SQLite `products` table.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let dairy = repo.fetch_products(Some(&ProductFilter::category("Dairy"))).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns the products matching `filter`, sorted by name.
    pub async fn fetch_products(&self, filter: Option<&ProductFilter>) -> DbResult<Vec<Product>> {
        let query = CatalogQuery::from_filter(filter);
        let mut builder = build_catalog_select::<Sqlite>(&query, Dialect::Sqlite);

        debug!(sql = %builder.sql(), "Fetching products (local)");

        let mut products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        let in_memory: Vec<&Clause> = query
            .clauses()
            .iter()
            .filter(|c| !Dialect::Sqlite.renders(c))
            .collect();
        if !in_memory.is_empty() {
            products.retain(|p| in_memory.iter().all(|c| c.matches(p)));
        }

        debug!(count = products.len(), "Local catalog returned products");
        Ok(products)
    }

    /// Counts catalog rows (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductCatalog for ProductRepository {
    async fn fetch_products(&self, filter: Option<&ProductFilter>) -> DbResult<Vec<Product>> {
        ProductRepository::fetch_products(self, filter).await
    }
}

// =============================================================================
// Remote (Postgres) catalog
// =============================================================================

/// Catalog read from the hosted Postgres database.
///
/// Each call is one round trip. No retry, no caching; timeouts are whatever
/// the pool was configured with.
#[derive(Debug, Clone)]
pub struct RemoteProductRepository {
    pool: PgPool,
}

impl RemoteProductRepository {
    /// Creates a new RemoteProductRepository.
    pub fn new(pool: PgPool) -> Self {
        RemoteProductRepository { pool }
    }

    /// Returns the products matching `filter`, sorted by name.
    pub async fn fetch_products(&self, filter: Option<&ProductFilter>) -> DbResult<Vec<Product>> {
        let query = CatalogQuery::from_filter(filter);
        let mut builder = build_catalog_select::<Postgres>(&query, Dialect::Postgres);

        debug!(sql = %builder.sql(), "Fetching products (remote)");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Remote catalog returned products");
        Ok(products)
    }
}

#[async_trait]
impl ProductCatalog for RemoteProductRepository {
    async fn fetch_products(&self, filter: Option<&ProductFilter>) -> DbResult<Vec<Product>> {
        RemoteProductRepository::fetch_products(self, filter).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::seed::insert_products;
    use nutrio_core::ALL_CATEGORIES;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            calories: Some(50.0),
            proteins: Some(3.0),
            fats: None,
            carbs: Some(4.5),
            ingredients: None,
            harmful: None,
            contraindications: Some("Lactose intolerance".to_string()),
        }
    }

    async fn setup() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        insert_products(
            db.pool(),
            &[
                product("4", "Whole Milk", "Dairy"),
                product("1", "Almond Milk", "Drinks"),
                product("3", "Cheddar", "Dairy"),
                product("2", "Buttermilk", "Dairy"),
                product("5", "Orange Juice", "Drinks"),
                product("6", "Rice 100% Whole_grain", "Grocery"),
            ],
        )
        .await
        .unwrap();
        db
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn render_postgres(filter: Option<&ProductFilter>) -> String {
        let query = CatalogQuery::from_filter(filter);
        build_catalog_select::<Postgres>(&query, Dialect::Postgres)
            .sql()
            .to_string()
    }

    fn render_sqlite(filter: Option<&ProductFilter>) -> String {
        let query = CatalogQuery::from_filter(filter);
        build_catalog_select::<Sqlite>(&query, Dialect::Sqlite)
            .sql()
            .to_string()
    }

    #[test]
    fn test_render_unfiltered() {
        assert_eq!(
            render_postgres(None),
            "SELECT * FROM products ORDER BY name ASC"
        );
        assert_eq!(render_sqlite(None), render_postgres(None));
    }

    #[test]
    fn test_render_postgres_with_both_filters() {
        let filter = ProductFilter::category("Dairy").with_search("milk");
        assert_eq!(
            render_postgres(Some(&filter)),
            "SELECT * FROM products WHERE category = $1 AND name ILIKE $2 ESCAPE '\\' ORDER BY name ASC"
        );
    }

    #[test]
    fn test_render_sqlite_leaves_search_to_memory() {
        let filter = ProductFilter::search("milk");
        assert_eq!(
            render_sqlite(Some(&filter)),
            "SELECT * FROM products ORDER BY name ASC"
        );

        let filter = ProductFilter::category("Dairy").with_search("milk");
        assert_eq!(
            render_sqlite(Some(&filter)),
            "SELECT * FROM products WHERE category = ? ORDER BY name ASC"
        );
    }

    #[test]
    fn test_render_sentinel_category() {
        let filter = ProductFilter::category(ALL_CATEGORIES);
        assert_eq!(
            render_postgres(Some(&filter)),
            "SELECT * FROM products ORDER BY name ASC"
        );
    }

    #[tokio::test]
    async fn test_no_filter_returns_all_sorted_by_name() {
        let db = setup().await;
        let products = db.products().fetch_products(None).await.unwrap();

        assert_eq!(
            names(&products),
            vec![
                "Almond Milk",
                "Buttermilk",
                "Cheddar",
                "Orange Juice",
                "Rice 100% Whole_grain",
                "Whole Milk"
            ]
        );
    }

    #[tokio::test]
    async fn test_category_filter_is_exact() {
        let db = setup().await;
        let filter = ProductFilter::category("Dairy");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();

        assert_eq!(names(&products), vec!["Buttermilk", "Cheddar", "Whole Milk"]);
        assert!(products.iter().all(|p| p.category == "Dairy"));

        let filter = ProductFilter::category("dairy");
        assert!(db.products().fetch_products(Some(&filter)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sentinel_category_returns_everything() {
        let db = setup().await;
        let filter = ProductFilter::category(ALL_CATEGORIES);
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(products.len(), 6);
    }

    #[tokio::test]
    async fn test_search_is_trimmed_and_case_insensitive() {
        let db = setup().await;
        let filter = ProductFilter::search("  milk  ");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();

        assert_eq!(names(&products), vec!["Almond Milk", "Buttermilk", "Whole Milk"]);
    }

    #[tokio::test]
    async fn test_search_folds_cyrillic_case() {
        let db = setup().await;
        insert_products(
            db.pool(),
            &[
                product("7", "Молоко 3,2%", "Молочные продукты"),
                product("8", "Миндальное молоко", "Напитки"),
                product("9", "Кефир 1%", "Молочные продукты"),
            ],
        )
        .await
        .unwrap();

        for term in ["молоко", "МОЛОКО", "  Молоко "] {
            let filter = ProductFilter::search(term);
            let products = db.products().fetch_products(Some(&filter)).await.unwrap();
            assert_eq!(
                names(&products),
                vec!["Миндальное молоко", "Молоко 3,2%"],
                "search {term:?}"
            );
        }

        let filter = ProductFilter::category("Молочные продукты").with_search("МОЛОКО");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(names(&products), vec!["Молоко 3,2%"]);
    }

    #[tokio::test]
    async fn test_blank_search_returns_everything() {
        let db = setup().await;
        let filter = ProductFilter::search("   ");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(products.len(), 6);
    }

    #[tokio::test]
    async fn test_category_and_search_combine() {
        let db = setup().await;
        let filter = ProductFilter::category("Drinks").with_search("MILK");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();

        assert_eq!(names(&products), vec!["Almond Milk"]);
    }

    #[tokio::test]
    async fn test_wildcards_in_search_are_literal() {
        let db = setup().await;

        let filter = ProductFilter::search("%");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(names(&products), vec!["Rice 100% Whole_grain"]);

        let filter = ProductFilter::search("e_g");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(names(&products), vec!["Rice 100% Whole_grain"]);

        let filter = ProductFilter::search("M_lk");
        assert!(db.products().fetch_products(Some(&filter)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let db = setup().await;
        let filter = ProductFilter::search("caviar");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_rows_decode_all_columns() {
        let db = setup().await;
        let filter = ProductFilter::search("cheddar");
        let products = db.products().fetch_products(Some(&filter)).await.unwrap();

        assert_eq!(products, vec![product("3", "Cheddar", "Dairy")]);
    }

    #[tokio::test]
    async fn test_backend_error_is_passed_through() {
        let db = setup().await;
        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let result = db.products().fetch_products(None).await;
        assert!(matches!(
            result,
            Err(DbError::Backend(sqlx::Error::Database(_)))
        ));
    }

    #[tokio::test]
    async fn test_usable_through_trait_object() {
        let db = setup().await;
        let catalog: Box<dyn ProductCatalog> = Box::new(db.products());

        let filter = ProductFilter::category("Grocery");
        let products = catalog.fetch_products(Some(&filter)).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_count() {
        let db = setup().await;
        assert_eq!(db.products().count().await.unwrap(), 6);
    }
}
