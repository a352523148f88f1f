//! HTTP-level integration tests for the shopping-list item endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, patch_form, post_form};
use shoplist_core::normalize::normalize;
use shoplist_db::models::item::Item;
use shoplist_db::repositories::{ItemRepo, ProductRepo};
use sqlx::SqlitePool;

async fn seed_item(pool: &SqlitePool, name: &str, description: Option<&str>) -> Item {
    let product = ProductRepo::create(pool, name, &normalize(name))
        .await
        .unwrap();
    ItemRepo::create(pool, product.id, description).await.unwrap()
}

// ---------------------------------------------------------------------------
// GET /items/
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_items_returns_json_with_product_names(pool: SqlitePool) {
    seed_item(&pool, "Тестовый товар", Some("Тестовый комментарий")).await;
    seed_item(&pool, "Хлеб", None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/items/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["product_name"], "Тестовый товар");
    assert_eq!(items[0]["description"], "Тестовый комментарий");
    assert_eq!(items[1]["product_name"], "Хлеб");
    assert!(items[1]["description"].is_null());
}

// ---------------------------------------------------------------------------
// POST /items/
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_renders_fragment(pool: SqlitePool) {
    let product = ProductRepo::create(&pool, "Молоко", "молоко").await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/items/",
        &[
            ("product_id", &product.id.to_string()),
            ("description", "2 litres"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<li id=\"item-"));
    assert!(body.contains("class=\"item-name\">Молоко<"));
    assert!(body.contains("class=\"item-description\">2 litres<"));
}

// ---------------------------------------------------------------------------
// GET /items/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_item_renders_fragment(pool: SqlitePool) {
    let item = seed_item(&pool, "Тестовый товар", Some("Тестовый комментарий")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/items/{}", item.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(&format!("id=\"item-{}\"", item.id)));
    assert!(body.contains(&format!("hx-delete=\"/items/{}\"", item.id)));
    assert!(body.contains("class=\"item-name\">Тестовый товар<"));
    assert!(body.contains("class=\"item-description\">Тестовый комментарий<"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_item_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/items/123").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// GET /items/{id}/edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn edit_item_renders_form(pool: SqlitePool) {
    let item = seed_item(&pool, "Тестовый товар", Some("Тестовый комментарий")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/items/{}/edit", item.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("id=\"itemForm\""));
    assert!(body.contains(&format!("hx-patch=\"/items/{}\"", item.id)));
    assert!(body.contains("id=\"descriptionInput\""));
    assert!(body.contains("value=\"Тестовый комментарий\""));
    assert!(body.contains(&format!("hx-delete=\"/items/{}\"", item.id)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn edit_item_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/items/123/edit").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// PATCH /items/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_item_replaces_description(pool: SqlitePool) {
    let item = seed_item(&pool, "Тестовый товар", Some("old")).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_form(
        app,
        &format!("/items/{}", item.id),
        &[("description", "С маком")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("class=\"item-description\">С маком<"));

    let reloaded = ItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(reloaded.description.as_deref(), Some("С маком"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_item_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = patch_form(app, "/items/123", &[("description", "x")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// DELETE /items/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_item_returns_deleted_row(pool: SqlitePool) {
    let item = seed_item(&pool, "Тестовый товар", None).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/items/{}", item.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], item.id);

    assert!(ItemRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_item_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/items/123").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
