//! TreeItem payload.

use scenedom::ElementId;

/// Handle to an item of a [`Tree`](super::Tree).
pub type ItemId = ElementId;

/// One node of the hierarchy view.
///
/// Hierarchy (parent, children, sibling order) lives in the Tree's arena;
/// this struct only carries the per-row attributes. `selected` and `open`
/// are changed through the Tree so events and state flags stay in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub(super) text: String,
    pub(super) selected: bool,
    pub(super) open: bool,
    pub(super) allow_drop: bool,
    pub(super) selectable: bool,
}

impl TreeItem {
    /// A closed, unselected item that accepts drops and can be selected.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
            open: false,
            allow_drop: true,
            selectable: true,
        }
    }

    /// Start open (only visible once the item has children).
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Start selected. Applied when the item is added to a tree, and
    /// ignored for items that are not selectable.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn allow_drop(mut self, allow_drop: bool) -> Self {
        self.allow_drop = allow_drop;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The stored open flag. It has no visual effect while the item has
    /// no children.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn allows_drop(&self) -> bool {
        self.allow_drop
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }
}
