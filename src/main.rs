//! Item List Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use app::App;
use item_list_core::ListConfig;
use leptos::prelude::*;
use rolling_logger::{LoggerConfig, RecentLines};

/// Dumps the retained log lines, then reports the panic as usual
fn install_panic_hook(recent: Option<RecentLines>) {
    std::panic::set_hook(Box::new(move |info| {
        if let Some(recent) = &recent {
            let recent = recent.snapshot().join("\n");
            web_sys::console::error_1(&format!("[APP] recent log:\n{}", recent).into());
        }
        console_error_panic_hook::hook(info);
    }));
}

fn main() {
    let (config, config_issue) = match storage::load_config() {
        Ok(config) => (config, None),
        Err(issue) => (ListConfig::default(), Some(issue)),
    };

    let recent = rolling_logger::init(LoggerConfig {
        level: config.level_filter(),
        capacity: config.log_capacity,
    })
    .ok();
    install_panic_hook(recent);

    if let Some(issue) = config_issue {
        tracing::warn!("[APP] ignoring config override: {}", issue);
    }

    mount_to_body(move || view! { <App config=config /> });
}
