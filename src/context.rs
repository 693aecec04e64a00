//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use item_list_core::{ListController, ListError, ListResult};

use crate::storage::PageStore;

pub type Controller = ListController<PageStore>;

/// The list controller, held in one signal
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: RwSignal<Controller>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Read controller state, tracking it reactively
    pub fn with<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.controller.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.controller.with_untracked(f)
    }

    /// Infallible mutation (input and filter bindings)
    pub fn update(&self, f: impl FnOnce(&mut Controller)) {
        self.controller.update(f);
    }

    /// Run a fallible controller operation, surfacing any error to the user
    pub fn dispatch<T>(&self, action: impl FnOnce(&mut Controller) -> ListResult<T>) -> Option<T> {
        match self.controller.try_update(action)? {
            Ok(value) => Some(value),
            Err(e) => {
                report(&e);
                None
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn report(error: &ListError) {
    if error.is_validation() {
        tracing::debug!("[APP] rejected submit: {}", error);
    } else {
        tracing::error!("[APP] {}", error);
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&error.user_message()) {
            tracing::warn!("[APP] could not show notice: {:?}", e);
        }
    }
}
