//! UI Components
//!
//! Leptos components for the item list page.

mod create_item_form;
mod item_list;
mod pagination_controls;
mod search_form;

pub use create_item_form::CreateItemForm;
pub use item_list::ItemList;
pub use pagination_controls::PaginationControls;
pub use search_form::SearchForm;
