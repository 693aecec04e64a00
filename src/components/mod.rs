//! UI Components
//!
//! Leptos components for the form, filter, row list and clear button.

mod clear_button;
mod confirm_button;
mod filter_input;
mod item_form;
mod item_list_view;
mod item_row;

pub use clear_button::ClearButton;
pub use confirm_button::ConfirmButton;
pub use filter_input::FilterInput;
pub use item_form::ItemForm;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;
