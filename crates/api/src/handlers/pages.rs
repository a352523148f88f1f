//! Full-page handlers.

use axum::extract::State;
use axum::response::Html;
use shoplist_db::repositories::{ItemRepo, ProductRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET / -- the shopping list with all current items.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items = ItemRepo::list_with_products(&state.pool).await?;
    Ok(Html(views::pages::index(&items)))
}

/// GET /products/search -- the catalog page, seeded with the full catalog.
pub async fn search(State(state): State<AppState>) -> AppResult<Html<String>> {
    let results = ProductRepo::search(&state.pool, None).await?;
    let catalog = views::products::catalog(&results, None);
    Ok(Html(views::pages::search(&catalog)))
}
