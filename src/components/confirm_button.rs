//! Confirm Button Component
//!
//! Inline confirmation for destructive actions: the button first turns
//! into an "Are you sure?" prompt with ✓/✗, and reports the answer.

use leptos::prelude::*;

use item_list_core::Confirmation;

/// Inline confirm button
///
/// # Arguments
/// * `button_class` - CSS class for the initial button (e.g., "remove-item" or "btn-clear")
/// * `children` - Content of the initial button
/// * `on_decide` - Receives the user's answer; `Declined` when ✗ is pressed
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_decide: Callback<Confirmation>,
    children: ChildrenFn,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {children()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm-prompt" on:click=|ev| ev.stop_propagation()>
                <span class="confirm-text">"Are you sure?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_decide.run(Confirmation::Accepted);
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_decide.run(Confirmation::Declined);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
