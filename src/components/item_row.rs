//! Item Row Component
//!
//! One list entry. Clicking the row starts editing it; the × button
//! removes it after confirmation.

use leptos::prelude::*;

use item_list_core::{Confirmation, RowId};

use crate::components::ConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn ItemRow(id: RowId) -> impl IntoView {
    let ctx = use_app_context();

    // Row text never changes; an edit replaces the row
    let text = ctx.with_untracked(|c| c.view().get(id).map(|row| row.text.clone())).unwrap_or_default();
    let visible = move || ctx.with(|c| c.view().get(id).is_some_and(|row| row.visible));
    let editing = move || ctx.with(|c| c.is_editing(id));

    let on_remove = move |decision: Confirmation| {
        ctx.dispatch(|c| c.remove_item(id, decision));
    };

    view! {
        <li
            class=move || if editing() { "edit-mode" } else { "" }
            style:display=move || if visible() { "flex" } else { "none" }
            on:click=move |_| ctx.update(|c| c.select_row(id))
        >
            {text}
            <ConfirmButton button_class="remove-item btn-link text-red" on_decide=on_remove>
                <i class="fa-solid fa-xmark"></i>
            </ConfirmButton>
        </li>
    }
}
