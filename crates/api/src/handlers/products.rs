//! Handlers for the product catalog.
//!
//! Mutating handlers always re-read the row after committing so the
//! rendered fragment reflects the persisted state, not in-memory values.

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use shoplist_core::error::CoreError;
use shoplist_core::normalize::normalize;
use shoplist_core::types::DbId;
use shoplist_db::models::item::ProductRef;
use shoplist_db::models::product::{ProductSearchParams, QuickAddProduct, UpdateProduct};
use shoplist_db::repositories::{ItemRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /products/
///
/// The catalog panel: search box plus products matching the optional
/// `name` query, each paired with its item if any.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ProductSearchParams>,
) -> AppResult<Html<String>> {
    let results = ProductRepo::search(&state.pool, params.name.as_deref()).await?;

    Ok(Html(views::products::catalog(
        &results,
        params.name.as_deref(),
    )))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let product = ProductRepo::find_with_item(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Html(views::products::product(&product)))
}

/// GET /products/{id}/edit
pub async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let product = ProductRepo::find_with_item(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Html(views::products::product_form(&product)))
}

/// PATCH /products/{id}
///
/// Renames the product, recomputing its matching key. When the product is
/// in the list and the form carried a description, the item's note is
/// overwritten in the same request.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateProduct>,
) -> AppResult<Html<String>> {
    let normalized = normalize(&input.name);
    let updated = ProductRepo::update(&state.pool, id, &input.name, &normalized)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    if let Some(description) = input.description.as_deref() {
        ItemRepo::update_description_for_product(&state.pool, id, description).await?;
    }

    tracing::info!(product_id = updated.id, "Product updated");

    let product = ProductRepo::find_with_item(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Html(views::products::product(&product)))
}

/// POST /products/quick_add
///
/// Creates a product from the search box and responds with the refreshed
/// search results filtered by that name.
pub async fn quick_add(
    State(state): State<AppState>,
    Form(input): Form<QuickAddProduct>,
) -> AppResult<Html<String>> {
    let normalized = normalize(&input.name);
    let product = ProductRepo::create(&state.pool, &input.name, &normalized).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    let results = ProductRepo::search(&state.pool, Some(&input.name)).await?;

    Ok(Html(views::products::search_results(
        &results,
        Some(&input.name),
    )))
}

/// DELETE /products/{id}
///
/// Responds with the deleted row. The `DELETE` runs before any existence
/// check; items referencing the product are left in place.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    tracing::info!(product_id = product.id, "Product deleted");

    Ok(Json(product))
}

/// POST /products/needs
///
/// Marks a product as needed by creating an item for it. The product id is
/// not pre-checked; a missing product surfaces when the fragment reloads.
pub async fn needed(
    State(state): State<AppState>,
    Form(input): Form<ProductRef>,
) -> AppResult<Html<String>> {
    let item = ItemRepo::create(&state.pool, input.product_id, None).await?;

    tracing::info!(
        item_id = item.id,
        product_id = input.product_id,
        "Item added to list"
    );

    let product = ProductRepo::find_with_item(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    Ok(Html(views::products::product(&product)))
}

/// POST /products/notneed
///
/// Marks a product as no longer needed by deleting its first item;
/// 404 when the product has none.
pub async fn not_needed(
    State(state): State<AppState>,
    Form(input): Form<ProductRef>,
) -> AppResult<Html<String>> {
    let item = ItemRepo::delete_first_for_product(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    tracing::info!(
        item_id = item.id,
        product_id = input.product_id,
        "Item removed from list"
    );

    let product = ProductRepo::find_with_item(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    Ok(Html(views::products::product(&product)))
}
