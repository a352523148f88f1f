//! Route definitions for the product catalog, mounted at `/products`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{pages, products};
use crate::state::AppState;

/// ```text
/// GET    /              -> search (catalog panel fragment)
/// GET    /search        -> catalog page
/// POST   /quick_add     -> quick_add
/// POST   /needs         -> needed
/// POST   /notneed       -> not_needed
/// GET    /{id}          -> get_product
/// PATCH  /{id}          -> update_product
/// DELETE /{id}          -> delete_product
/// GET    /{id}/edit     -> edit_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::search))
        .route("/search", get(pages::search))
        .route("/quick_add", post(products::quick_add))
        .route("/needs", post(products::needed))
        .route("/notneed", post(products::not_needed))
        .route(
            "/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route("/{id}/edit", get(products::edit_product))
}
