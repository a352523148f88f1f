use serde::Serialize;
use shoplist_core::types::DbId;
use sqlx::FromRow;

/// A row from the `category` table.
///
/// Stored but not yet driven by any route; products may reference a
/// category, nothing filters on it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
