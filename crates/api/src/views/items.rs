//! Shopping-list item fragments.

use shoplist_db::models::item::{Item, ItemWithProduct};

use super::escape;

/// One shopping-list entry. Clicking the row marks it purchased (deletes
/// the item); the button opens the note editor.
pub fn item(i: &ItemWithProduct) -> String {
    format!(
        r##"<li id="item-{id}" hx-delete="/items/{id}" hx-target="#item-{id}" hx-swap="outerHTML">
  <span class="item-name">{name}</span>
  <span class="item-description">{description}</span>
  <button hx-get="/items/{id}/edit" hx-target="#item-{id}" hx-swap="outerHTML">edit</button>
</li>"##,
        id = i.id,
        name = escape(&i.product_name),
        description = escape(i.description.as_deref().unwrap_or("")),
    )
}

/// Edit form for an item's note.
pub fn item_form(i: &Item) -> String {
    format!(
        r##"<li id="item-{id}">
  <form id="itemForm" hx-patch="/items/{id}" hx-target="#item-{id}" hx-swap="outerHTML">
    <input id="descriptionInput" name="description" value="{description}">
    <button type="submit">Save</button>
  </form>
  <button hx-get="/items/{id}" hx-target="#item-{id}" hx-swap="outerHTML">Cancel</button>
  <button hx-delete="/items/{id}" hx-target="#item-{id}" hx-swap="outerHTML">Delete</button>
</li>"##,
        id = i.id,
        description = escape(i.description.as_deref().unwrap_or("")),
    )
}
