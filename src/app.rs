//! Item List App
//!
//! Loads the stored list and lays out the form, filter, rows and clear button.

use leptos::prelude::*;

use item_list_core::{ListConfig, ListController, MemoryStore};

use crate::components::{ClearButton, FilterInput, ItemForm, ItemListView};
use crate::context::{AppContext, Controller};
use crate::storage::PageStore;

fn load_controller(config: ListConfig) -> Controller {
    match ListController::load(PageStore::detect(), config.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("[APP] could not read saved items: {}; starting empty", e);
            ListController::new(PageStore::Memory(MemoryStore::new()), config)
        }
    }
}

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let ctx = AppContext::new(load_controller(config));
    provide_context(ctx);

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>
            <ItemForm />
            <FilterInput />
            <ItemListView />
            <ClearButton />
        </div>
    }
}
