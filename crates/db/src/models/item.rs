//! Shopping-list item models and form DTOs.

use serde::{Deserialize, Serialize};
use shoplist_core::types::{DbId, Timestamp};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `item` table. Existence means "currently needed".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    /// Free-text note (quantity, brand).
    pub description: Option<String>,
    /// Owning product. Immutable after creation.
    pub product_id: DbId,
    pub created_at: Timestamp,
}

/// An item joined with its product's display name, for list rendering.
/// Skips the audit column the views do not need.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemWithProduct {
    pub id: DbId,
    pub description: Option<String>,
    pub product_id: DbId,
    pub product_name: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Form payload for `POST /items/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub product_id: DbId,
    pub description: Option<String>,
}

/// Form payload for `PATCH /items/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub description: String,
}

/// Form payload for `POST /products/needs` and `POST /products/notneed`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRef {
    pub product_id: DbId,
}
