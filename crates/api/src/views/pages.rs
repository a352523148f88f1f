//! Full-page documents. htmx is wired once in the layout; everything else
//! arrives as fragments.

use shoplist_db::models::item::ItemWithProduct;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <script src="{HTMX_SRC}"></script>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// The shopping list page (`GET /`).
pub fn index(items: &[ItemWithProduct]) -> String {
    let entries: String = items
        .iter()
        .map(super::items::item)
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        r#"<h1>Shopping list</h1>
<nav><a href="/products/search">Catalog</a></nav>
<ul id="items">
{entries}
</ul>"#
    );
    layout("Shopping list", &body)
}

/// The catalog search page (`GET /products/search`); `catalog` is the
/// pre-rendered panel fragment.
pub fn search(catalog: &str) -> String {
    let body = format!(
        r#"<h1>Catalog</h1>
<nav><a href="/">Shopping list</a></nav>
{catalog}"#
    );
    layout("Catalog", &body)
}
