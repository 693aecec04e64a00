//! Item List View Component
//!
//! Draws one `ItemRow` per row of the controller's row model.

use leptos::prelude::*;

use item_list_core::RowId;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemListView() -> impl IntoView {
    let ctx = use_app_context();
    let row_ids = move || ctx.with(|c| c.view().rows().iter().map(|row| row.id).collect::<Vec<RowId>>());

    view! {
        <ul id="item-list" class="items">
            <For each=row_ids key=|id| *id children=move |id| view! { <ItemRow id=id /> } />
        </ul>
    }
}
