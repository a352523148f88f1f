//! Route definitions for shopping-list items, mounted at `/items`.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_items (JSON)
/// POST   /              -> create_item
/// GET    /{id}          -> get_item
/// PATCH  /{id}          -> update_item
/// DELETE /{id}          -> delete_item
/// GET    /{id}/edit     -> edit_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route(
            "/{id}",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route("/{id}/edit", get(items::edit_item))
}
