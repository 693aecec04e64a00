//! Item Form Component
//!
//! Text input plus a submit button that reads "Add Item" or "Update Item"
//! depending on edit mode.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let submit_button = move || ctx.with(|c| c.affordances().submit);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|c| c.submit());
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    name="item"
                    placeholder="Enter Item"
                    prop:value=move || ctx.with(|c| c.input().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.update(|c| c.set_input(value));
                    }
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class="btn"
                    style:background-color=move || submit_button().color()
                >
                    <i class=move || submit_button().icon_class()></i>
                    " "
                    {move || submit_button().label()}
                </button>
            </div>
        </form>
    }
}
