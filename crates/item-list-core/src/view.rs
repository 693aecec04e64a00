//! List Renderer
//!
//! Row model the UI draws: one row per rendered item, each with a
//! session-local id and a visibility flag.

/// Identifies a rendered row for the lifetime of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<Row>,
    next_id: u32,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visible row; no dedup against existing rows
    pub fn render(&mut self, text: impl Into<String>) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row {
            id,
            text: text.into(),
            visible: true,
        });
        id
    }

    pub fn remove(&mut self, id: RowId) -> Option<Row> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index))
    }

    /// Removes all rows; ids keep increasing
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn apply_filter(&mut self, predicate: impl Fn(&str) -> bool) {
        for row in &mut self.rows {
            row.visible = predicate(&row.text);
        }
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_appends_in_order_with_fresh_ids() {
        let mut view = ListView::new();
        let a = view.render("Eggs");
        let b = view.render("Eggs");
        assert_ne!(a, b);
        let texts: Vec<_> = view.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["Eggs", "Eggs"]);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut view = ListView::new();
        let first = view.render("Milk");
        view.clear();
        assert!(view.is_empty());
        let second = view.render("Milk");
        assert_ne!(first, second);
        assert!(view.get(first).is_none());
    }

    #[test]
    fn filter_toggles_visibility_only() {
        let mut view = ListView::new();
        view.render("Bread");
        view.render("Butter");
        view.render("Cheese");
        view.apply_filter(|text| text.starts_with('B'));
        assert_eq!(view.len(), 3);
        assert_eq!(view.visible_rows().count(), 2);
        view.apply_filter(|_| true);
        assert_eq!(view.visible_rows().count(), 3);
    }
}
