//! Handlers for shopping-list items.

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use shoplist_core::error::CoreError;
use shoplist_core::types::DbId;
use shoplist_db::models::item::{CreateItem, UpdateItem};
use shoplist_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /items/ -- all items with their product names, as JSON.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list_with_products(&state.pool).await?;

    Ok(Json(items))
}

/// POST /items/
///
/// Creates an item directly (the usual path is `/products/needs`); the
/// response is the rendered entry.
pub async fn create_item(
    State(state): State<AppState>,
    Form(input): Form<CreateItem>,
) -> AppResult<Html<String>> {
    let item = ItemRepo::create(&state.pool, input.product_id, input.description.as_deref())
        .await?;

    tracing::info!(
        item_id = item.id,
        product_id = input.product_id,
        "Item created"
    );

    let item = ItemRepo::find_with_product(&state.pool, item.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Item",
            id: item.id,
        }))?;

    Ok(Html(views::items::item(&item)))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let item = ItemRepo::find_with_product(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(Html(views::items::item(&item)))
}

/// GET /items/{id}/edit
pub async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(Html(views::items::item_form(&item)))
}

/// PATCH /items/{id} -- replace the item's note.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateItem>,
) -> AppResult<Html<String>> {
    ItemRepo::update_description(&state.pool, id, &input.description)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = id, "Item updated");

    let item = ItemRepo::find_with_product(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(Html(views::items::item(&item)))
}

/// DELETE /items/{id} -- responds with the deleted row.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = item.id, "Item deleted");

    Ok(Json(item))
}
