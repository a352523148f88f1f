//! Product models and form DTOs.

use serde::{Deserialize, Serialize};
use shoplist_core::types::{DbId, Timestamp};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `product` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    /// Display string. User-editable, not required to be unique.
    pub name: String,
    /// Canonical matching key; always `normalize(name)` after any write.
    pub normalized_name: String,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A product paired with its shopping-list item, if one exists.
///
/// Flattened outer-join row: `item_id`/`item_description` are NULL when the
/// product is not currently in the list. When several items reference the
/// same product, the lowest-id one is paired.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductWithItem {
    pub id: DbId,
    pub name: String,
    pub normalized_name: String,
    pub category_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub item_description: Option<String>,
}

impl ProductWithItem {
    /// Whether the product currently has a shopping-list item.
    pub fn in_list(&self) -> bool {
        self.item_id.is_some()
    }
}

/// Catalog search outcome: the matches plus the exact-name hint.
#[derive(Debug)]
pub struct SearchResults {
    /// Products whose normalized name contains the normalized query,
    /// ordered by normalized name ascending.
    pub products: Vec<ProductWithItem>,
    /// Whether a product with the exact (non-normalized) queried name
    /// exists. Drives the "already in catalog" hint.
    pub exact_match: bool,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Form payload for `POST /products/quick_add`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickAddProduct {
    pub name: String,
}

/// Form payload for `PATCH /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    /// When present and the product has an item, overwrites that item's
    /// description.
    pub description: Option<String>,
}

/// Query parameters for `GET /products/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchParams {
    pub name: Option<String>,
}
