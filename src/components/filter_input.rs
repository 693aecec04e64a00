//! Filter Input Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Hides rows not containing the typed text; hidden while the list is empty
#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            class="filter"
            style:display=move || if ctx.with(|c| c.affordances().show_filter) { "block" } else { "none" }
        >
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                prop:value=move || ctx.with(|c| c.filter().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.update(|c| c.set_filter(value));
                }
            />
        </div>
    }
}
