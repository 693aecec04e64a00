//! Browser Storage Backend
//!
//! `KeyValueStore` over `window.localStorage`, with an in-memory fallback
//! for pages where localStorage is disabled.

use item_list_core::{KeyValueStore, ListConfig, MemoryStore, StorageError, CONFIG_STORAGE_KEY};
use wasm_bindgen::JsValue;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_error(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
}

/// Where the list lives for this page
#[derive(Debug, Clone)]
pub enum PageStore {
    /// `window.localStorage`, survives reloads
    Browser,
    /// Lost on reload
    Memory(MemoryStore),
}

impl PageStore {
    pub fn detect() -> Self {
        match local_storage() {
            Ok(_) => PageStore::Browser,
            Err(e) => {
                tracing::warn!("[STORAGE] {}; keeping items in memory", e);
                PageStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            PageStore::Browser => local_storage()?.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: js_error(&e),
            }),
            PageStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            PageStore::Browser => local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_error(&e),
            }),
            PageStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            PageStore::Browser => local_storage()?.remove_item(key).map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_error(&e),
            }),
            PageStore::Memory(store) => store.remove(key),
        }
    }
}

/// Reads the optional config override; absent means defaults
///
/// Runs before the logger exists, so problems are returned rather than logged.
pub fn load_config() -> Result<ListConfig, String> {
    let Some(raw) = PageStore::Browser.get(CONFIG_STORAGE_KEY).map_err(|e| e.to_string())? else {
        return Ok(ListConfig::default());
    };
    ListConfig::from_json(&raw).map_err(|e| format!("`{}`: {}", CONFIG_STORAGE_KEY, e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use item_list_core::ItemStorage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let mut storage = ItemStorage::new(PageStore::Browser, "items.test");
        let items = vec!["Milk".to_string(), "Eggs".to_string()];
        storage.save_all(&items).unwrap();
        assert_eq!(storage.load_all().unwrap(), items);

        storage.remove_one("Milk").unwrap();
        assert_eq!(storage.load_all().unwrap(), vec!["Eggs".to_string()]);

        storage.clear_all().unwrap();
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[wasm_bindgen_test]
    fn config_override_is_read() {
        let mut store = PageStore::Browser;
        store.set(CONFIG_STORAGE_KEY, r#"{"log_level":"debug"}"#).unwrap();
        let config = load_config().unwrap();
        assert_eq!(config.log_level, "debug");
        store.remove(CONFIG_STORAGE_KEY).unwrap();
        assert_eq!(load_config().unwrap(), ListConfig::default());
    }
}
