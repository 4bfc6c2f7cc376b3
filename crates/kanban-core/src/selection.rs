//! Generic selection state utilities.
//!
//! Holds at most one selected identifier. The board keeps one of these per
//! level of the project/sprint hierarchy.

/// State for a single selected item, addressed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy + PartialEq> Selection<Id> {
    /// Create a new selection with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected id.
    pub fn get(&self) -> Option<Id> {
        self.selected
    }

    /// Select an id.
    pub fn select(&mut self, id: Id) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Check if anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
