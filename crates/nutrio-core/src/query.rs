//! # Catalog Query Shape
//!
//! Describes the one read the catalog ever performs, independent of the SQL
//! dialect that ends up executing it.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT * FROM products                                                 │
//! │    [WHERE category = :category]            ← Clause::Equals             │
//! │    [AND   name ILIKE '%' || :search || '%'] ← Clause::ContainsIgnoreCase │
//! │  ORDER BY name ASC                                                      │
//! │                                                                         │
//! │  0, 1 or 2 clauses. Category always comes before search.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering to SQL lives in nutrio-db; this module only decides *which*
//! clauses apply. A backend that cannot fold case for every script
//! evaluates text clauses in memory with [`Clause::matches`].

use crate::types::{Product, ProductFilter};
use crate::PRODUCTS_TABLE;

/// Escape character used in LIKE patterns built by [`like_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// A single WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `column = value`
    Equals {
        column: &'static str,
        value: String,
    },
    /// Case-insensitive substring match of `needle` in `column`.
    ///
    /// `needle` is the raw (trimmed) user text. Use [`like_pattern`] to
    /// turn it into a bound LIKE pattern.
    ContainsIgnoreCase {
        column: &'static str,
        needle: String,
    },
}

impl Clause {
    /// Evaluates the clause against a decoded product.
    ///
    /// Case folding is full Unicode lowercasing, so `"МОЛОКО"` finds
    /// `"Миндальное молоко"`. A clause on a column `Product` doesn't carry
    /// never matches.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Clause::Equals { column, value } => {
                column_value(product, column).is_some_and(|v| v == value.as_str())
            }
            Clause::ContainsIgnoreCase { column, needle } => {
                column_value(product, column).is_some_and(|v| contains_ignore_case(v, needle))
            }
        }
    }

    /// Returns true for clauses that need case folding.
    pub fn is_text_search(&self) -> bool {
        matches!(self, Clause::ContainsIgnoreCase { .. })
    }
}

fn column_value<'a>(product: &'a Product, column: &str) -> Option<&'a str> {
    match column {
        "id" => Some(&product.id),
        "name" => Some(&product.name),
        "category" => Some(&product.category),
        _ => None,
    }
}

/// Unicode-aware case-insensitive substring test. Wildcards have no meaning.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Read over a catalog table: all columns, one sort key, AND-ed clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    table: &'static str,
    order_by: &'static str,
    ascending: bool,
    clauses: Vec<Clause>,
}

impl CatalogQuery {
    /// Unfiltered product listing, sorted by name.
    pub fn products() -> Self {
        CatalogQuery {
            table: PRODUCTS_TABLE,
            order_by: "name",
            ascending: true,
            clauses: Vec::new(),
        }
    }

    /// Builds the product query for an optional filter.
    ///
    /// ## Example
    /// ```rust
    /// use nutrio_core::{CatalogQuery, Clause, ProductFilter};
    ///
    /// let filter = ProductFilter::category("Dairy").with_search("  milk ");
    /// let query = CatalogQuery::from_filter(Some(&filter));
    ///
    /// assert_eq!(
    ///     query.clauses(),
    ///     [
    ///         Clause::Equals { column: "category", value: "Dairy".into() },
    ///         Clause::ContainsIgnoreCase { column: "name", needle: "milk".into() },
    ///     ]
    /// );
    /// ```
    pub fn from_filter(filter: Option<&ProductFilter>) -> Self {
        let mut query = Self::products();

        let Some(filter) = filter else {
            return query;
        };

        if let Some(category) = filter.effective_category() {
            query = query.with_clause(Clause::Equals {
                column: "category",
                value: category.to_string(),
            });
        }

        if let Some(search) = filter.effective_search() {
            query = query.with_clause(Clause::ContainsIgnoreCase {
                column: "name",
                needle: search.to_string(),
            });
        }

        query
    }

    /// Appends a clause.
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Table to read from.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Sort column.
    pub fn order_by(&self) -> &'static str {
        self.order_by
    }

    /// Sort direction.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Clauses in the order they are applied.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

/// Builds a `%needle%` LIKE pattern that matches `needle` literally.
///
/// `%`, `_` and the escape character itself are prefixed with
/// [`LIKE_ESCAPE`]; the statement must declare `ESCAPE '\'`.
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_CATEGORIES;

    #[test]
    fn test_no_filter_has_no_clauses() {
        let query = CatalogQuery::from_filter(None);
        assert_eq!(query.table(), "products");
        assert_eq!(query.order_by(), "name");
        assert!(query.ascending());
        assert!(query.clauses().is_empty());
    }

    #[test]
    fn test_sentinel_and_blank_search_have_no_clauses() {
        let filter = ProductFilter::category(ALL_CATEGORIES).with_search("   ");
        assert_eq!(CatalogQuery::from_filter(Some(&filter)), CatalogQuery::products());
    }

    #[test]
    fn test_category_only() {
        let query = CatalogQuery::from_filter(Some(&ProductFilter::category("Dairy")));
        assert_eq!(
            query.clauses(),
            [Clause::Equals {
                column: "category",
                value: "Dairy".to_string()
            }]
        );
    }

    #[test]
    fn test_search_is_trimmed() {
        let query = CatalogQuery::from_filter(Some(&ProductFilter::search("  milk  ")));
        assert_eq!(
            query.clauses(),
            [Clause::ContainsIgnoreCase {
                column: "name",
                needle: "milk".to_string()
            }]
        );
    }

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: "p-1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            calories: None,
            proteins: None,
            fats: None,
            carbs: None,
            ingredients: None,
            harmful: None,
            contraindications: None,
        }
    }

    #[test]
    fn test_text_match_folds_cyrillic() {
        assert!(contains_ignore_case("Миндальное молоко", "МОЛОКО"));
        assert!(contains_ignore_case("Молоко 3,2%", "молоко"));
        assert!(contains_ignore_case("Whole Milk", "mILK"));
        assert!(!contains_ignore_case("Кефир 1%", "молоко"));
    }

    #[test]
    fn test_text_match_is_literal() {
        assert!(contains_ignore_case("Rice 100% Whole_grain", "e_g"));
        assert!(!contains_ignore_case("Whole Milk", "M_lk"));
        assert!(!contains_ignore_case("Whole Milk", "%"));
    }

    #[test]
    fn test_clause_matches_product() {
        let filter = ProductFilter::category("Молочные продукты").with_search(" МОЛОКО ");
        let query = CatalogQuery::from_filter(Some(&filter));

        let milk = product("Молоко 3,2%", "Молочные продукты");
        let almond = product("Миндальное молоко", "Напитки");

        assert!(query.clauses().iter().all(|c| c.matches(&milk)));
        assert!(!query.clauses().iter().all(|c| c.matches(&almond)));
        assert!(query.clauses()[1].is_text_search());
        assert!(!query.clauses()[0].is_text_search());
    }

    #[test]
    fn test_clause_on_unknown_column_never_matches() {
        let clause = Clause::Equals {
            column: "brand",
            value: "Acme".to_string(),
        };
        assert!(!clause.matches(&product("Acme Milk", "Dairy")));
    }

    #[test]
    fn test_like_pattern_wraps_needle() {
        assert_eq!(like_pattern("milk"), "%milk%");
        assert_eq!(like_pattern("кефир"), "%кефир%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }
}
