//! Visual order and row geometry.
//!
//! The rows a user sees are a projection of the hierarchy: roots in order,
//! each open item followed by its children, closed subtrees skipped.

use scenedom::{Parent, Rect};

use super::item::ItemId;
use super::state::Tree;

/// A visible row of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatNode {
    /// The item shown on this row.
    pub item: ItemId,
    /// Depth in tree (0 = top level).
    pub depth: u16,
    /// Whether this item has children.
    pub has_children: bool,
    /// Whether the children are currently shown.
    pub is_open: bool,
}

/// Number of horizontal bands a row is split into for drop classification.
pub(super) const BANDS: u8 = 5;

impl Tree {
    /// Open and has children, so the children are on screen.
    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.is_open(id) && !self.children(Parent::Element(id)).is_empty()
    }

    /// Every ancestor is expanded.
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.items.is_attached(id) && self.items.ancestors(id).all(|a| self.is_expanded(a))
    }

    /// The row `id` is shown on: itself when visible, else the outermost
    /// collapsed ancestor hiding it.
    pub fn visible_row(&self, id: ItemId) -> Option<ItemId> {
        if !self.items.is_attached(id) {
            return None;
        }
        let mut row = id;
        for ancestor in self.items.ancestors(id) {
            if !self.is_expanded(ancestor) {
                row = ancestor;
            }
        }
        Some(row)
    }

    /// The visible rows, top to bottom.
    pub fn flatten(&self) -> Vec<FlatNode> {
        let mut rows = Vec::new();
        self.flatten_into(Parent::Root, 0, &mut rows);
        rows
    }

    fn flatten_into(&self, parent: Parent, depth: u16, rows: &mut Vec<FlatNode>) {
        for &item in self.children(parent) {
            let has_children = !self.children(Parent::Element(item)).is_empty();
            let is_open = has_children && self.is_open(item);
            rows.push(FlatNode {
                item,
                depth,
                has_children,
                is_open,
            });
            if is_open {
                self.flatten_into(Parent::Element(item), depth.saturating_add(1), rows);
            }
        }
    }

    /// Row index of a visible item.
    pub fn visible_index(&self, id: ItemId) -> Option<usize> {
        self.flatten().iter().position(|row| row.item == id)
    }

    pub fn first_visible(&self) -> Option<ItemId> {
        self.roots().first().copied()
    }

    pub fn last_visible(&self) -> Option<ItemId> {
        let mut last = self.roots().last().copied()?;
        while self.is_expanded(last) {
            match self.children(Parent::Element(last)).last() {
                Some(&child) => last = child,
                None => break,
            }
        }
        Some(last)
    }

    /// The row below `id`: its first child if expanded, else the next
    /// sibling of the nearest item that has one.
    pub fn next_visible(&self, id: ItemId) -> Option<ItemId> {
        if self.is_expanded(id) {
            return self.children(Parent::Element(id)).first().copied();
        }
        let mut current = id;
        loop {
            if let Some(next) = self.next(current) {
                return Some(next);
            }
            current = self.parent(current)?.element()?;
        }
    }

    /// The row above `id`: the deepest visible descendant of the previous
    /// sibling, or the parent.
    pub fn prev_visible(&self, id: ItemId) -> Option<ItemId> {
        let Some(mut current) = self.prev(id) else {
            return self.parent(id)?.element();
        };
        while self.is_expanded(current) {
            match self.children(Parent::Element(current)).last() {
                Some(&child) => current = child,
                None => break,
            }
        }
        Some(current)
    }

    /// Number of items before `id` in document order, closed subtrees
    /// included.
    ///
    /// Each preceding sibling contributes its whole subtree and each
    /// ancestor contributes one, so sorting by ordinal gives top-to-bottom
    /// order.
    pub fn ordinal(&self, id: ItemId) -> Option<usize> {
        self.items.parent(id)?;
        let mut ordinal = 0;
        let mut current = id;
        loop {
            let mut sibling = self.prev(current);
            while let Some(prev) = sibling {
                ordinal += self.items.subtree_len(prev);
                sibling = self.prev(prev);
            }
            match self.parent(current) {
                Some(Parent::Element(parent)) => {
                    ordinal += 1;
                    current = parent;
                }
                _ => return Some(ordinal),
            }
        }
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Area of a visible row inside the viewport, indented by depth.
    ///
    /// Rows below the viewport are still placed (not clipped).
    pub fn row_rect(&self, id: ItemId) -> Option<Rect> {
        let rows = self.flatten();
        let index = rows.iter().position(|row| row.item == id)?;
        Some(self.rect_for_row(index, rows[index].depth))
    }

    fn rect_for_row(&self, index: usize, depth: u16) -> Rect {
        let row_height = self.config.row_height.max(1);
        let offset = u16::try_from(index)
            .unwrap_or(u16::MAX)
            .saturating_mul(row_height);
        Rect::new(
            self.viewport.x,
            self.viewport.y.saturating_add(offset),
            self.viewport.width,
            row_height,
        )
        .indent(depth.saturating_mul(self.config.indent))
    }

    /// The visible item under viewport position `y` and the band
    /// (0..[`BANDS`]) the position falls into within its row.
    ///
    /// Each unit of the row is sampled at its center. Rows shorter than
    /// [`BANDS`] units cannot reach every band: a one-unit row always lands
    /// in the middle band.
    pub(super) fn row_at(&self, y: u16) -> Option<(ItemId, u8)> {
        let offset = y.checked_sub(self.viewport.y)?;
        let row_height = self.config.row_height.max(1);
        let index = usize::from(offset / row_height);
        let row = self.flatten().get(index).copied()?;
        let within = u32::from(offset % row_height);
        let band = (2 * within + 1) * u32::from(BANDS) / (2 * u32::from(row_height));
        Some((row.item, band as u8))
    }
}
