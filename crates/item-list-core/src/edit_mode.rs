//! Edit-Mode Tracker
//!
//! Whether the form creates a new item or replaces the text of one row.

use crate::view::RowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Create,
    /// Replacing the text of this row
    Edit(RowId),
}

/// Submit button state derived from the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitButton {
    #[default]
    Add,
    Update,
}

impl SubmitButton {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitButton::Add => "Add Item",
            SubmitButton::Update => "Update Item",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SubmitButton::Add => "fa-solid fa-plus",
            SubmitButton::Update => "fa-solid fa-pen",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SubmitButton::Add => "#333",
            SubmitButton::Update => "#228822",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditTracker {
    mode: EditMode,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the only row being edited
    pub fn begin(&mut self, id: RowId) {
        self.mode = EditMode::Edit(id);
    }

    pub fn end(&mut self) {
        self.mode = EditMode::Create;
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn editing(&self) -> Option<RowId> {
        match self.mode {
            EditMode::Edit(id) => Some(id),
            EditMode::Create => None,
        }
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.editing() == Some(id)
    }

    pub fn submit_button(&self) -> SubmitButton {
        match self.mode {
            EditMode::Create => SubmitButton::Add,
            EditMode::Edit(_) => SubmitButton::Update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_replaces_previous_mark() {
        let mut tracker = EditTracker::new();
        tracker.begin(RowId(1));
        tracker.begin(RowId(4));
        assert!(!tracker.is_editing(RowId(1)));
        assert!(tracker.is_editing(RowId(4)));
        assert_eq!(tracker.submit_button(), SubmitButton::Update);
    }

    #[test]
    fn end_restores_create_affordance() {
        let mut tracker = EditTracker::new();
        tracker.begin(RowId(0));
        tracker.end();
        assert_eq!(tracker.mode(), EditMode::Create);
        assert_eq!(tracker.submit_button().label(), "Add Item");
        assert_eq!(tracker.submit_button().color(), "#333");
    }
}
