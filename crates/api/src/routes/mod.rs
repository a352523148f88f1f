pub mod health;
pub mod items;
pub mod products;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                 shopping list page
/// /health           service health (JSON)
/// /products/...     catalog page and fragments
/// /items/...        item fragments
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .merge(health::router())
        .nest("/products", products::router())
        .nest("/items", items::router())
}
