//! Event Controller
//!
//! One method per user interaction. Owns the storage adapter, the row
//! model, the edit-mode tracker and the two text inputs, and keeps them
//! consistent across `Create` / `Edit` transitions.

use crate::config::ListConfig;
use crate::edit_mode::{EditMode, EditTracker, SubmitButton};
use crate::error::{ListError, ListResult, StorageError};
use crate::filter;
use crate::storage::{ItemStorage, KeyValueStore};
use crate::view::{ListView, RowId};

/// User's answer to a destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

/// Visibility and label state of the form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub show_clear: bool,
    pub show_filter: bool,
    pub submit: SubmitButton,
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(RowId),
    Replaced { old: String, new_row: RowId },
}

pub struct ListController<S: KeyValueStore> {
    storage: ItemStorage<S>,
    view: ListView,
    tracker: EditTracker,
    input: String,
    filter: String,
    config: ListConfig,
}

impl<S: KeyValueStore> ListController<S> {
    /// Controller with no rows; nothing is read from storage
    pub fn new(backend: S, config: ListConfig) -> Self {
        Self {
            storage: ItemStorage::new(backend, config.storage_key.clone()),
            view: ListView::new(),
            tracker: EditTracker::new(),
            input: String::new(),
            filter: String::new(),
            config,
        }
    }

    /// Renders one row per stored item, in stored order
    pub fn load(backend: S, config: ListConfig) -> Result<Self, StorageError> {
        let mut controller = Self::new(backend, config);
        for item in controller.storage.load_all()? {
            controller.view.render(item);
        }
        tracing::info!(
            "[controller] loaded {} items from `{}`",
            controller.view.len(),
            controller.storage.key()
        );
        Ok(controller)
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn storage(&self) -> &ItemStorage<S> {
        &self.storage
    }

    pub fn mode(&self) -> EditMode {
        self.tracker.mode()
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.tracker.is_editing(id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn affordances(&self) -> Affordances {
        let has_rows = !self.view.is_empty();
        Affordances {
            show_clear: has_rows,
            show_filter: has_rows,
            submit: self.tracker.submit_button(),
        }
    }

    /// Enters edit mode for `id` and pre-fills the input with its text
    pub fn select_row(&mut self, id: RowId) {
        let Some(row) = self.view.get(id) else {
            tracing::debug!("[controller] select ignored, no row {:?}", id);
            return;
        };
        self.input = row.text.clone();
        self.tracker.begin(id);
        tracing::debug!("[controller] editing {:?} ({})", id, self.input);
    }

    /// Adds the input as a new item, or replaces the edited item with it
    pub fn submit(&mut self) -> ListResult<SubmitOutcome> {
        let text = self.input.clone();
        if text.trim().is_empty() {
            return Err(ListError::EmptyInput);
        }

        let outcome = match self.tracker.mode() {
            EditMode::Create => {
                if self.storage.contains(&text)? {
                    return Err(ListError::DuplicateItem(text));
                }
                self.storage.add_one(&text)?;
                SubmitOutcome::Added(self.view.render(text))
            }
            EditMode::Edit(id) => {
                let Some(old) = self.view.get(id).map(|row| row.text.clone()) else {
                    tracing::warn!("[controller] edited row {:?} is gone, leaving edit mode", id);
                    self.tracker.end();
                    return self.submit();
                };
                if self.config.validate_unique_on_edit && text != old && self.storage.contains(&text)? {
                    return Err(ListError::DuplicateItem(text));
                }
                self.storage.replace_one(&old, &text)?;
                self.view.remove(id);
                let new_row = self.view.render(text);
                self.tracker.end();
                SubmitOutcome::Replaced { old, new_row }
            }
        };

        self.input.clear();
        tracing::debug!("[controller] submit: {:?}", outcome);
        Ok(outcome)
    }

    /// Removes one row and its stored text, then returns to `Create`;
    /// returns whether anything changed
    pub fn remove_item(&mut self, id: RowId, confirmation: Confirmation) -> ListResult<bool> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        let Some(text) = self.view.get(id).map(|row| row.text.clone()) else {
            return Ok(false);
        };

        self.storage.remove_one(&text)?;
        self.view.remove(id);
        self.tracker.end();
        self.input.clear();
        tracing::debug!("[controller] removed {:?} ({})", id, text);
        Ok(true)
    }

    /// Empties the view and storage; returns whether anything changed
    pub fn clear_all(&mut self, confirmation: Confirmation) -> ListResult<bool> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        self.storage.clear_all()?;
        self.view.clear();
        self.tracker.end();
        self.input.clear();
        tracing::debug!("[controller] cleared all items");
        Ok(true)
    }

    /// Shows only rows containing `text`, ignoring case
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        let query = self.filter.clone();
        self.view.apply_filter(|item| filter::matches(item, &query));
    }
}
