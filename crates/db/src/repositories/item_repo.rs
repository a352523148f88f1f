//! Repository for the `item` table.
//!
//! "The item for a product" is never unique by schema; operations that need
//! a single item (pairing, deletion, description overwrite) take the
//! lowest-id match.

use chrono::Utc;
use shoplist_core::types::DbId;

use crate::models::item::{Item, ItemWithProduct};
use crate::DbPool;

/// Column list for item queries.
const COLUMNS: &str = "id, description, product_id, created_at";

/// Column list for the item-with-product join.
const JOINED_COLUMNS: &str = "i.id, i.description, i.product_id, p.name AS product_name";

/// Provides CRUD operations for shopping-list items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item for a product, returning the created row.
    ///
    /// The product id is not checked: references are application-managed.
    pub async fn create(
        pool: &DbPool,
        product_id: DbId,
        description: Option<&str>,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO item (description, product_id, created_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(description)
            .bind(product_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an item by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by its id, joined with its product's display name.
    /// Orphaned items (product deleted) yield `None`.
    pub async fn find_with_product(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ItemWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM item i
             JOIN product p ON p.id = i.product_id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, ItemWithProduct>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items with their product names, oldest first.
    pub async fn list_with_products(pool: &DbPool) -> Result<Vec<ItemWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM item i
             JOIN product p ON p.id = i.product_id
             ORDER BY i.id ASC"
        );
        sqlx::query_as::<_, ItemWithProduct>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace an item's description, returning the updated row.
    pub async fn update_description(
        pool: &DbPool,
        id: DbId,
        description: &str,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE item SET description = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Replace the description of a product's first item, if the product
    /// has any. Used when a product edit carries a description.
    pub async fn update_description_for_product(
        pool: &DbPool,
        product_id: DbId,
        description: &str,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE item SET description = $2
             WHERE id = (SELECT MIN(id) FROM item WHERE product_id = $1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(product_id)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by id, returning the deleted row.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("DELETE FROM item WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the first (lowest-id) item referencing a product, returning
    /// the deleted row. `None` when the product has no items.
    pub async fn delete_first_for_product(
        pool: &DbPool,
        product_id: DbId,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "DELETE FROM item
             WHERE id = (SELECT MIN(id) FROM item WHERE product_id = $1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }
}
