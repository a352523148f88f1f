//! Product fragments: list entry, edit form, search results, catalog panel.

use shoplist_db::models::product::{ProductWithItem, SearchResults};

use super::escape;

/// One catalog entry.
///
/// In-list products carry the `inlist` class and a not-needed toggle;
/// everything else gets a needed toggle. The span posts the toggle, the
/// button opens the edit form; both swap the whole `<li>`.
pub fn product(p: &ProductWithItem) -> String {
    let (class, toggle) = if p.in_list() {
        ("product inlist", "/products/notneed")
    } else {
        ("product", "/products/needs")
    };
    format!(
        r##"<li id="product-{id}" class="{class}">
  <span hx-post="{toggle}" hx-vals='{{"product_id": {id}}}' hx-target="#product-{id}" hx-swap="outerHTML">{name}</span>
  <button hx-get="/products/{id}/edit" hx-target="#product-{id}" hx-swap="outerHTML">edit</button>
</li>"##,
        id = p.id,
        class = class,
        toggle = toggle,
        name = escape(&p.name),
    )
}

/// Edit form for a product.
///
/// When the product is in the list, the form also exposes the item's
/// description so both can be saved in one patch.
pub fn product_form(p: &ProductWithItem) -> String {
    let class = if p.in_list() {
        "product inlist"
    } else {
        "product"
    };
    let description_input = if p.in_list() {
        format!(
            "\n    <input id=\"descriptionInput\" name=\"description\" value=\"{}\">",
            escape(p.item_description.as_deref().unwrap_or(""))
        )
    } else {
        String::new()
    };
    format!(
        r##"<li id="product-{id}" class="{class}">
  <form id="productForm" hx-patch="/products/{id}" hx-target="#product-{id}" hx-swap="outerHTML">
    <input id="nameInput" name="name" value="{name}">{description_input}
    <button type="submit">Save</button>
  </form>
  <button hx-get="/products/{id}" hx-target="#product-{id}" hx-swap="outerHTML">Cancel</button>
  <button hx-delete="/products/{id}" hx-target="#product-{id}" hx-swap="outerHTML">Delete</button>
</li>"##,
        id = p.id,
        class = class,
        name = escape(&p.name),
        description_input = description_input,
    )
}

/// Search results: the matching products plus, for a non-empty query,
/// either the "already in catalog" hint or the quick-add affordance.
pub fn search_results(results: &SearchResults, name: Option<&str>) -> String {
    let entries: String = results
        .products
        .iter()
        .map(|p| product(p))
        .collect::<Vec<_>>()
        .join("\n");
    let mut html = format!("<ul id=\"products\">\n{entries}\n</ul>");

    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        if results.exact_match {
            html.push_str(&format!(
                "\n<p class=\"hint\">\u{201c}{}\u{201d} is already in the catalog</p>",
                escape(name)
            ));
        } else {
            html.push_str(&format!(
                r##"
<button id="quickAdd" hx-post="/products/quick_add" hx-vals='{{"name": "{name}"}}' hx-target="#search-results" hx-swap="innerHTML">Add "{name}"</button>"##,
                name = escape(name),
            ));
        }
    }
    html
}

/// The catalog panel: search box plus results. `GET /products/` swaps the
/// whole panel so the box reflects the active query.
pub fn catalog(results: &SearchResults, name: Option<&str>) -> String {
    format!(
        r##"<div id="catalog">
  <form id="searchForm">
    <input id="searchInput" type="search" name="name" value="{name}" placeholder="Search products"
           hx-get="/products/" hx-trigger="keyup changed delay:300ms" hx-target="#catalog" hx-swap="outerHTML">
  </form>
  <div id="search-results">
{results}
  </div>
</div>"##,
        name = escape(name.unwrap_or("")),
        results = search_results(results, name),
    )
}
