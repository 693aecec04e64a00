//! Clear Button Component

use leptos::prelude::*;

use item_list_core::Confirmation;

use crate::components::ConfirmButton;
use crate::context::use_app_context;

/// Removes every item after confirmation; hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_app_context();

    let on_clear = move |decision: Confirmation| {
        if ctx.dispatch(|c| c.clear_all(decision)) == Some(true) {
            tracing::info!("[APP] list cleared");
        }
    };

    view! {
        <div
            class="clear"
            style:display=move || if ctx.with(|c| c.affordances().show_clear) { "block" } else { "none" }
        >
            <ConfirmButton button_class="btn-clear" on_decide=on_clear>
                "Clear All"
            </ConfirmButton>
        </div>
    }
}
