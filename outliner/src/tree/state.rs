//! Tree widget state.

use scenedom::{ElementTree, Emitter, ListenerId, Modifiers, Parent, Rect};

use crate::config::TreeConfig;
use crate::error::TreeError;

use super::drag::DragState;
use super::events::{TreeEvent, TreeEventKind};
use super::flags;
use super::item::{ItemId, TreeItem};
use super::selection::Selection;

/// A pointer press waiting to become either a click or a drag.
#[derive(Debug, Clone, Copy)]
pub(super) struct Press {
    pub item: ItemId,
    pub modifiers: Modifiers,
    /// Selection waits for the release, so pressing an already selected
    /// row can still start a group drag.
    pub deferred: bool,
    /// Set once the pointer moved with the button held.
    pub moved: bool,
}

/// Hierarchy view with multi-selection and drag-and-drop reparenting.
///
/// Items are addressed by [`ItemId`] handles. A top-level item has
/// [`Parent::Root`] as its parent; every other item sits under exactly one
/// other item. The visible rows are a projection of the hierarchy (see
/// [`Tree::flatten`]) and can be regenerated at any time.
#[derive(Debug, Default)]
pub struct Tree {
    pub(super) items: ElementTree<TreeItem>,
    pub(super) selection: Selection,
    pub(super) config: TreeConfig,
    pub(super) drag: DragState,
    /// Keyboard focus, the row arrow keys move from.
    pub(super) focus: Option<ItemId>,
    pub(super) press: Option<Press>,
    pub(super) viewport: Rect,
    pub(super) emitter: Emitter<TreeEvent>,
}

impl Tree {
    /// Create an empty tree with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TreeConfig) {
        self.config = config;
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.config.draggable = draggable;
    }

    pub fn set_reordering(&mut self, reordering: bool) {
        self.config.reordering = reordering;
    }

    pub fn set_drag_instant(&mut self, drag_instant: bool) {
        self.config.drag_instant = drag_instant;
    }

    pub fn set_allow_renaming(&mut self, allow_renaming: bool) {
        self.config.allow_renaming = allow_renaming;
    }

    /// Area the rows are laid out in (see [`Tree::row_rect`]).
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    pub fn on(
        &mut self,
        kind: TreeEventKind,
        handler: impl FnMut(&TreeEvent) + 'static,
    ) -> ListenerId {
        self.emitter.on(kind, handler)
    }

    pub fn once(
        &mut self,
        kind: TreeEventKind,
        handler: impl FnMut(&TreeEvent) + 'static,
    ) -> ListenerId {
        self.emitter.once(kind, handler)
    }

    pub fn on_any(&mut self, handler: impl FnMut(&TreeEvent) + 'static) -> ListenerId {
        self.emitter.on_any(handler)
    }

    pub fn unbind(&mut self, listener: ListenerId) -> bool {
        self.emitter.unbind(listener)
    }

    pub(super) fn emit(&mut self, event: TreeEvent) {
        log::trace!("[tree] emit {:?}", event);
        self.emitter.emit(&event);
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(id)
    }

    pub fn item(&self, id: ItemId) -> Option<&TreeItem> {
        self.items.get(id)
    }

    pub(super) fn try_item(&self, id: ItemId) -> Result<&TreeItem, TreeError> {
        self.items.get(id).ok_or(TreeError::UnknownItem(id))
    }

    pub(super) fn try_item_mut(&mut self, id: ItemId) -> Result<&mut TreeItem, TreeError> {
        self.items.get_mut(id).ok_or(TreeError::UnknownItem(id))
    }

    pub fn text(&self, id: ItemId) -> Option<&str> {
        self.items.get(id).map(TreeItem::text)
    }

    pub fn parent(&self, id: ItemId) -> Option<Parent> {
        self.items.parent(id)
    }

    /// Children of the tree root or of an item, in display order.
    pub fn children(&self, parent: Parent) -> &[ItemId] {
        self.items.children(parent)
    }

    /// Top-level items.
    pub fn roots(&self) -> &[ItemId] {
        self.items.roots()
    }

    /// Previous sibling.
    pub fn prev(&self, id: ItemId) -> Option<ItemId> {
        self.items.prev_sibling(id)
    }

    /// Next sibling.
    pub fn next(&self, id: ItemId) -> Option<ItemId> {
        self.items.next_sibling(id)
    }

    /// Nesting level; top-level items are at depth 0.
    pub fn depth(&self, id: ItemId) -> Option<usize> {
        self.items.depth(id)
    }

    /// Whether `ancestor` is strictly above `id`.
    pub fn is_ancestor(&self, ancestor: ItemId, id: ItemId) -> bool {
        self.items.is_ancestor(ancestor, id)
    }

    /// Every item in document order (closed subtrees included).
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter()
    }

    /// First item in document order whose text matches.
    pub fn find_by_text(&self, text: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|&id| self.items.get(id).is_some_and(|item| item.text == text))
    }

    /// Whether a visual state flag is set on an item.
    pub fn has_state(&self, id: ItemId, state: &str) -> bool {
        self.items.has_state(id, state)
    }

    pub fn states(&self, id: ItemId) -> Vec<&'static str> {
        self.items.states(id)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Add an item as the last child of `parent`.
    pub fn add_item(&mut self, parent: Parent, item: TreeItem) -> Result<ItemId, TreeError> {
        if let Parent::Element(id) = parent {
            self.try_item(id)?;
        }
        let id = self.create(item);
        self.items.append(parent, id)?;
        self.sync_created(id)?;
        Ok(id)
    }

    /// Add an item as the sibling right before `reference`.
    pub fn add_item_before(
        &mut self,
        item: TreeItem,
        reference: ItemId,
    ) -> Result<ItemId, TreeError> {
        self.try_item(reference)?;
        let id = self.create(item);
        if let Err(err) = self.items.append_before(id, reference) {
            self.items.destroy(id)?;
            return Err(err.into());
        }
        self.sync_created(id)?;
        Ok(id)
    }

    /// Add an item as the sibling right after `reference`.
    pub fn add_item_after(
        &mut self,
        item: TreeItem,
        reference: ItemId,
    ) -> Result<ItemId, TreeError> {
        self.try_item(reference)?;
        let id = self.create(item);
        if let Err(err) = self.items.append_after(id, reference) {
            self.items.destroy(id)?;
            return Err(err.into());
        }
        self.sync_created(id)?;
        Ok(id)
    }

    fn create(&mut self, mut item: TreeItem) -> ItemId {
        // Selection goes through `set_selected` once the item is attached.
        let selected = std::mem::replace(&mut item.selected, false) && item.selectable;
        let open = item.open;
        let id = self.items.create(item);
        self.items.set_state(id, flags::OPEN, open);
        if selected {
            self.items.add_state(id, flags::SELECTED);
        }
        id
    }

    fn sync_created(&mut self, id: ItemId) -> Result<(), TreeError> {
        if self.items.remove_state(id, flags::SELECTED) {
            self.set_selected(id, true)?;
        }
        Ok(())
    }

    /// Move an item under a new parent (appended last).
    ///
    /// Moving an item into its own subtree is an error.
    pub fn reparent(&mut self, id: ItemId, parent: Parent) -> Result<(), TreeError> {
        self.try_item(id)?;
        self.items.append(parent, id)?;
        Ok(())
    }

    /// Move an item right before `reference`.
    pub fn move_before(&mut self, id: ItemId, reference: ItemId) -> Result<(), TreeError> {
        self.items.append_before(id, reference)?;
        Ok(())
    }

    /// Move an item right after `reference`.
    pub fn move_after(&mut self, id: ItemId, reference: ItemId) -> Result<(), TreeError> {
        self.items.append_after(id, reference)?;
        Ok(())
    }

    /// Destroy an item and all its descendants.
    ///
    /// Destroyed items leave the selection without `deselect` events.
    /// Returns the destroyed handles.
    pub fn destroy_item(&mut self, id: ItemId) -> Result<Vec<ItemId>, TreeError> {
        self.try_item(id)?;
        let destroyed = self.items.destroy(id)?;

        for &gone in &destroyed {
            self.selection.remove(gone);
        }
        if self.focus.is_some_and(|f| destroyed.contains(&f)) {
            self.focus = None;
        }
        if self.press.is_some_and(|p| destroyed.contains(&p.item)) {
            self.press = None;
        }
        self.forget_dragged(&destroyed);
        Ok(destroyed)
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    /// Set the label without going through the rename permission.
    pub fn set_text(&mut self, id: ItemId, text: impl Into<String>) -> Result<(), TreeError> {
        self.try_item_mut(id)?.text = text.into();
        Ok(())
    }

    /// User rename. Requires `allow_renaming`; emits `rename` when the
    /// text changes.
    pub fn rename(&mut self, id: ItemId, text: impl Into<String>) -> Result<(), TreeError> {
        if !self.config.allow_renaming {
            return Err(TreeError::RenamingDisabled);
        }
        let text = text.into();
        let item = self.try_item_mut(id)?;
        if item.text == text {
            return Ok(());
        }
        item.text = text.clone();
        self.emit(TreeEvent::Rename { item: id, text });
        Ok(())
    }

    pub fn set_allow_drop(&mut self, id: ItemId, allow_drop: bool) -> Result<(), TreeError> {
        self.try_item_mut(id)?.allow_drop = allow_drop;
        Ok(())
    }

    /// Changing an item to non-selectable also deselects it.
    pub fn set_selectable(&mut self, id: ItemId, selectable: bool) -> Result<(), TreeError> {
        if !selectable {
            self.set_selected(id, false)?;
        }
        self.try_item_mut(id)?.selectable = selectable;
        Ok(())
    }

    pub fn is_open(&self, id: ItemId) -> bool {
        self.items.get(id).is_some_and(|item| item.open)
    }

    /// Open or close an item. Returns true if the flag changed.
    pub fn set_open(&mut self, id: ItemId, open: bool) -> Result<bool, TreeError> {
        let item = self.try_item_mut(id)?;
        if item.open == open {
            return Ok(false);
        }
        item.open = open;
        self.items.set_state(id, flags::OPEN, open);
        self.emit(if open {
            TreeEvent::Open(id)
        } else {
            TreeEvent::Close(id)
        });
        Ok(true)
    }

    pub fn toggle_open(&mut self, id: ItemId) -> Result<bool, TreeError> {
        let open = self.try_item(id)?.open;
        self.set_open(id, !open)
    }

    /// Open every item that has children.
    pub fn expand_all(&mut self) {
        let parents: Vec<ItemId> = self
            .items
            .iter()
            .filter(|&id| !self.items.children(Parent::Element(id)).is_empty())
            .collect();
        for id in parents {
            // Ids come straight from the arena walk, so this cannot fail.
            self.set_open(id, true).ok();
        }
    }

    /// Close every open item.
    pub fn collapse_all(&mut self) {
        let open: Vec<ItemId> = self.items.iter().filter(|&id| self.is_open(id)).collect();
        for id in open {
            // Ids come straight from the arena walk, so this cannot fail.
            self.set_open(id, false).ok();
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected items in the order they were selected.
    pub fn selected(&self) -> Vec<ItemId> {
        self.selection.to_vec()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(id)
    }

    pub fn is_selectable(&self, id: ItemId) -> bool {
        self.items.get(id).is_some_and(|item| item.selectable)
    }

    /// Select or deselect one item, emitting `select`/`deselect`.
    /// Returns true if the selection changed.
    pub fn set_selected(&mut self, id: ItemId, selected: bool) -> Result<bool, TreeError> {
        let item = self.try_item_mut(id)?;
        if selected && !item.selectable {
            return Err(TreeError::NotSelectable(id));
        }
        if item.selected == selected {
            return Ok(false);
        }
        item.selected = selected;
        self.items.set_state(id, flags::SELECTED, selected);

        if selected {
            self.selection.insert(id);
            self.emit(TreeEvent::Select(id));
        } else {
            self.selection.remove(id);
            self.emit(TreeEvent::Deselect(id));
        }
        Ok(true)
    }

    /// Deselect everything. Returns the items that were deselected.
    pub fn clear_selection(&mut self) -> Vec<ItemId> {
        let removed = self.selection.to_vec();
        for &id in &removed {
            self.select_known(id, false);
        }
        removed
    }

    /// [`Tree::set_selected`] for ids already known to be live.
    ///
    /// Deselecting never fails for a live item, and callers check
    /// [`Tree::is_selectable`] before selecting. A refusal counts as no
    /// change.
    pub(super) fn select_known(&mut self, id: ItemId, selected: bool) -> bool {
        self.set_selected(id, selected).unwrap_or(false)
    }

    /// Item the keyboard currently points at.
    pub fn focused(&self) -> Option<ItemId> {
        self.focus
    }
}
