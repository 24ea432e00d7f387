//! Selection set for the Tree.

use indexmap::IndexSet;

use super::item::ItemId;

/// Selected items in the order they were selected.
///
/// The last entry is the most recently selected item, which anchors
/// range selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: IndexSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Most recently selected item.
    pub fn last(&self) -> Option<ItemId> {
        self.selected.last().copied()
    }

    /// Selected items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.selected.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<ItemId> {
        self.iter().collect()
    }

    /// Returns true if the item was not selected before.
    pub(super) fn insert(&mut self, id: ItemId) -> bool {
        self.selected.insert(id)
    }

    /// Returns true if the item was selected. Keeps the order of the rest.
    pub(super) fn remove(&mut self, id: ItemId) -> bool {
        self.selected.shift_remove(&id)
    }
}
