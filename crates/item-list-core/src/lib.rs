//! Item List Core
//!
//! Storage adapter, row model and edit-mode state machine behind the
//! item list widget. Has no browser dependencies, so everything here is
//! testable natively.

pub mod config;
pub mod controller;
pub mod edit_mode;
pub mod error;
pub mod filter;
pub mod storage;
pub mod view;


pub use config::{ListConfig, CONFIG_STORAGE_KEY, DEFAULT_STORAGE_KEY};
pub use controller::{Affordances, Confirmation, ListController, SubmitOutcome};
pub use edit_mode::{EditMode, EditTracker, SubmitButton};
pub use error::{ListError, ListResult, StorageError};
pub use storage::{ItemStorage, KeyValueStore, MemoryStore};
pub use view::{ListView, Row, RowId};
