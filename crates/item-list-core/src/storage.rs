//! Storage Adapter
//!
//! Persists the ordered item list as one JSON array under a single key.
//! The key-value backend is abstract: browser localStorage in the app,
//! an in-memory map in tests.

use std::collections::HashMap;

use crate::error::StorageError;

/// Minimal string key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes the whole item list on every call
#[derive(Debug, Clone)]
pub struct ItemStorage<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ItemStorage<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// All stored items; an absent or unreadable slot is an empty list
    pub fn load_all(&self) -> Result<Vec<String>, StorageError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("[storage] ignoring malformed `{}` slot: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    pub fn save_all(&mut self, items: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &json)
    }

    pub fn add_one(&mut self, text: &str) -> Result<(), StorageError> {
        let mut items = self.load_all()?;
        items.push(text.to_string());
        self.save_all(&items)
    }

    /// Drops every exact match of `text`
    pub fn remove_one(&mut self, text: &str) -> Result<(), StorageError> {
        let mut items = self.load_all()?;
        items.retain(|item| item != text);
        self.save_all(&items)
    }

    /// Drops every exact match of `old` and appends `new`, in one write
    pub fn replace_one(&mut self, old: &str, new: &str) -> Result<(), StorageError> {
        let mut items = self.load_all()?;
        items.retain(|item| item != old);
        items.push(new.to_string());
        self.save_all(&items)
    }

    pub fn contains(&self, text: &str) -> Result<bool, StorageError> {
        Ok(self.load_all()?.iter().any(|item| item == text))
    }

    /// Removes only this list's key
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.backend.remove(&self.key)
    }
}
