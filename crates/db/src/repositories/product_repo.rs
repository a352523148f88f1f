//! Repository for the `product` table.

use chrono::Utc;
use shoplist_core::normalize::{like_pattern, normalize_query};
use shoplist_core::types::DbId;

use crate::models::product::{Product, ProductWithItem, SearchResults};
use crate::DbPool;

/// Column list for product queries.
const COLUMNS: &str = "id, name, normalized_name, category_id, created_at";

/// Column list for the product-with-item outer join.
const JOINED_COLUMNS: &str = "p.id, p.name, p.normalized_name, p.category_id, \
                              i.id AS item_id, i.description AS item_description";

/// Pairs each product with its lowest-id item so that duplicate items per
/// product stay deterministic.
const ITEM_JOIN: &str =
    "LEFT JOIN item i ON i.id = (SELECT MIN(id) FROM item WHERE product_id = p.id)";

/// Provides CRUD and search operations for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(
        pool: &DbPool,
        name: &str,
        normalized_name: &str,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO product (name, normalized_name, created_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .bind(normalized_name)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a product by id, paired with its item if one exists.
    pub async fn find_with_item(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ProductWithItem>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM product p {ITEM_JOIN} WHERE p.id = $1");
        sqlx::query_as::<_, ProductWithItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search the catalog.
    ///
    /// Matches every product whose `normalized_name` contains the normalized
    /// query as a substring (an empty or absent query matches all), ordered
    /// by `normalized_name` ascending, each paired with its item if any.
    /// Also reports whether a product with the exact raw `name` exists.
    pub async fn search(pool: &DbPool, name: Option<&str>) -> Result<SearchResults, sqlx::Error> {
        let pattern = name.and_then(normalize_query).map(|q| like_pattern(&q));

        let products = match &pattern {
            Some(pattern) => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM product p {ITEM_JOIN}
                     WHERE p.normalized_name LIKE $1 ESCAPE '\\'
                     ORDER BY p.normalized_name ASC"
                );
                sqlx::query_as::<_, ProductWithItem>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM product p {ITEM_JOIN}
                     ORDER BY p.normalized_name ASC"
                );
                sqlx::query_as::<_, ProductWithItem>(&query)
                    .fetch_all(pool)
                    .await?
            }
        };

        let exact_match = match name {
            Some(name) => Self::exists_by_name(pool, name).await?,
            None => false,
        };

        Ok(SearchResults {
            products,
            exact_match,
        })
    }

    /// Whether a product with this exact (non-normalized) name exists.
    pub async fn exists_by_name(pool: &DbPool, name: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM product WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// Rename a product, replacing its matching key. Returns the updated
    /// row, or `None` if the product does not exist.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        name: &str,
        normalized_name: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE product SET name = $2, normalized_name = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(name)
            .bind(normalized_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by id, returning the deleted row.
    ///
    /// A single `DELETE ... RETURNING` statement: the deletion is attempted
    /// before any existence check, and items referencing the product are
    /// left in place.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("DELETE FROM product WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
