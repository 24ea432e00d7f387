//! Drag-and-drop reparenting.
//!
//! A drag session is a small state machine owned by the Tree:
//! `Idle -> Dragging -> Idle`. `drag_start` freezes the set of items being
//! moved, hover calls keep the drop target and zone up to date, and
//! `drag_end` commits (or only reports) the moves and resets the session
//! in one step.

use log::{debug, trace, warn};
use scenedom::{Parent, PointerEvent, Rect};

use crate::error::TreeError;

use super::events::TreeEvent;
use super::flags;
use super::item::ItemId;
use super::order::BANDS;
use super::state::Tree;

/// Where dragged items land relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropArea {
    /// Sibling, right above the target.
    Before,
    /// Last child of the target.
    #[default]
    Inside,
    /// Sibling, below the target.
    After,
}

impl DropArea {
    /// Visual state flag marking the target row.
    pub fn state_flag(self) -> &'static str {
        match self {
            DropArea::Before => flags::DROP_BEFORE,
            DropArea::Inside => flags::DROP_INSIDE,
            DropArea::After => flags::DROP_AFTER,
        }
    }
}

/// Computed position of one moved item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Insert right before this item.
    Before(ItemId),
    /// Append as the last child of this item.
    Inside(ItemId),
    /// Insert right after this item.
    After(ItemId),
}

/// One line of the `reparent` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReparentEntry {
    pub item: ItemId,
    pub old_parent: Parent,
    pub new_parent: Parent,
    pub placement: Placement,
}

impl ReparentEntry {
    /// Dropped inside its current parent; nothing moves.
    pub fn is_noop(&self) -> bool {
        self.old_parent == self.new_parent && matches!(self.placement, Placement::Inside(_))
    }
}

/// Where the drop marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub target: ItemId,
    pub area: DropArea,
    /// Zero-height line on the row's top (`Before`) or bottom (`After`)
    /// edge, or the whole row (`Inside`).
    pub rect: Rect,
}

#[derive(Debug, Clone, Default)]
pub(super) struct DragSession {
    /// Frozen drag set, in document order.
    pub items: Vec<ItemId>,
    /// Last valid row under the pointer.
    pub hovered: Option<ItemId>,
    /// Drop target; `None` means there is no valid target.
    pub over: Option<ItemId>,
    pub area: DropArea,
    pub indicator: Option<DropIndicator>,
}

#[derive(Debug, Clone, Default)]
pub(super) enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Band assumed when a target is entered without a position.
const MIDDLE_BAND: u8 = BANDS / 2;

fn band_of(position: f32) -> u8 {
    let band = (position.clamp(0.0, 1.0) * f32::from(BANDS)).floor() as u8;
    band.min(BANDS - 1)
}

impl Tree {
    fn session(&self) -> Option<&DragSession> {
        match &self.drag {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.drag {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Items of the active drag, in document order.
    pub fn drag_items(&self) -> &[ItemId] {
        self.session().map(|s| s.items.as_slice()).unwrap_or(&[])
    }

    /// Current drop target.
    pub fn drag_over(&self) -> Option<ItemId> {
        self.session().and_then(|s| s.over)
    }

    /// Current drop zone, `None` without a valid target.
    pub fn drag_area(&self) -> Option<DropArea> {
        self.session().filter(|s| s.over.is_some()).map(|s| s.area)
    }

    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        self.session().and_then(|s| s.indicator)
    }

    // -------------------------------------------------------------------------
    // Drag start
    // -------------------------------------------------------------------------

    /// Begin dragging from `item`.
    ///
    /// Returns false when dragging is off, a drag is already running, or
    /// the drag set is rejected (group drags touching the top level or
    /// spanning several nesting levels).
    pub fn drag_start(&mut self, item: ItemId) -> bool {
        if !self.config.draggable || self.is_dragging() || !self.items.is_attached(item) {
            return false;
        }
        let Some(items) = self.resolve_drag_set(item) else {
            return false;
        };

        for &id in &items {
            self.items.add_state(id, flags::DRAGGED);
        }
        debug!("[tree] drag start with {} item(s)", items.len());
        self.drag = DragState::Dragging(DragSession {
            items: items.clone(),
            ..Default::default()
        });
        self.emit(TreeEvent::DragStart { items });
        true
    }

    fn resolve_drag_set(&self, item: ItemId) -> Option<Vec<ItemId>> {
        if self.selection.len() <= 1 || !self.selection.contains(item) {
            return Some(vec![item]);
        }

        if self
            .selection
            .iter()
            .any(|id| self.parent(id) == Some(Parent::Root))
        {
            debug!("[tree] group drag rejected: selection touches the top level");
            return None;
        }

        let mut items = Vec::new();
        let mut level = None;
        for id in self.selection.iter() {
            // Covered by a selected ancestor, moves along with it.
            if self.items.ancestors(id).any(|a| self.selection.contains(a)) {
                continue;
            }
            let depth = self.items.ancestors(id).count();
            match level {
                None => level = Some(depth),
                Some(expected) if expected != depth => {
                    debug!("[tree] group drag rejected: items on depths {expected} and {depth}");
                    return None;
                }
                Some(_) => {}
            }
            items.push(id);
        }

        items.sort_by_key(|&id| self.ordinal(id));
        Some(items)
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    /// The pointer entered `target`. Returns whether it is a valid drop
    /// target. Entering the current target again changes nothing.
    pub fn drag_enter(&mut self, target: ItemId) -> bool {
        let Some(session) = self.session() else {
            return false;
        };
        if session.hovered == Some(target) {
            return session.over.is_some();
        }
        self.hover(target, MIDDLE_BAND, None).is_some()
    }

    /// The pointer is over `target` at `position`, the fraction (0.0 top,
    /// 1.0 bottom) of the row height. Returns the drop zone, `None` if the
    /// target is rejected.
    pub fn drag_hover(&mut self, target: ItemId, position: f32) -> Option<DropArea> {
        self.hover(target, band_of(position), None)
    }

    /// The pointer moved within the current target's row.
    pub fn drag_move(&mut self, position: f32) -> Option<DropArea> {
        let hovered = self.session()?.hovered?;
        self.hover(hovered, band_of(position), None)
    }

    /// Hover from raw pointer coordinates, hit-testing the visible rows.
    /// Outside the rows there is no target.
    pub fn drag_pointer(&mut self, event: PointerEvent) -> Option<DropArea> {
        if !self.is_dragging() {
            return None;
        }
        let hit = self
            .viewport
            .contains(event.x, event.y)
            .then(|| self.row_at(event.y))
            .flatten();
        match hit {
            Some((target, band)) => self.hover(target, band, Some(event)),
            None => {
                self.drag_out();
                None
            }
        }
    }

    /// The pointer left every drop target. The session stays alive.
    pub fn drag_out(&mut self) {
        if self.is_dragging() {
            self.set_drop(None, None, None);
        }
    }

    fn hover(
        &mut self,
        target: ItemId,
        band: u8,
        pointer: Option<PointerEvent>,
    ) -> Option<DropArea> {
        let session = self.session()?;
        let drop = self
            .accepts_drop(&session.items, target)
            .then(|| self.classify(&session.items, target, band));
        let hovered = drop.is_some().then_some(target);
        self.set_drop(hovered, drop, pointer)
    }

    fn accepts_drop(&self, items: &[ItemId], target: ItemId) -> bool {
        let Some(item) = self.item(target) else {
            return false;
        };
        if !self.items.is_attached(target) || items.contains(&target) {
            return false;
        }
        if !item.allow_drop && !self.hosts_any(items, target) {
            return false;
        }
        if items.iter().any(|&dragged| self.is_ancestor(dragged, target)) {
            debug!("[tree] {} rejected as drop target: inside a dragged item", target);
            return false;
        }
        true
    }

    /// Some dragged item is a direct child of `target`.
    fn hosts_any(&self, items: &[ItemId], target: ItemId) -> bool {
        items
            .iter()
            .any(|&dragged| self.parent(dragged) == Some(Parent::Element(target)))
    }

    /// Pick the drop target and zone for a row. An open row that already
    /// holds dragged items sends them back to the top of its children.
    fn classify(&self, items: &[ItemId], target: ItemId, band: u8) -> (ItemId, DropArea) {
        if self.parent(target) == Some(Parent::Root) {
            return (target, DropArea::Inside);
        }
        if !self.config.reordering {
            return (target, DropArea::Inside);
        }

        let dragged = |sibling: Option<ItemId>| sibling.is_some_and(|s| items.contains(&s));
        if band <= 1 && !dragged(self.prev(target)) {
            return (target, DropArea::Before);
        }
        if band >= BANDS - 1 && !dragged(self.next(target)) && !self.is_expanded(target) {
            return (target, DropArea::After);
        }
        if self.is_expanded(target) && self.hosts_any(items, target) {
            let first = self
                .children(Parent::Element(target))
                .iter()
                .copied()
                .find(|child| !items.contains(child));
            if let Some(first) = first {
                return (first, DropArea::Before);
            }
        }
        (target, DropArea::Inside)
    }

    fn indicator_for(&self, target: ItemId, area: DropArea) -> Option<DropIndicator> {
        let row = self.row_rect(target)?;
        let rect = match area {
            DropArea::Before => row.hline(row.top()),
            DropArea::Inside => row,
            DropArea::After => row.hline(row.bottom()),
        };
        Some(DropIndicator { target, area, rect })
    }

    /// Store the new target and zone, keep flags and the indicator in sync
    /// and publish the change.
    fn set_drop(
        &mut self,
        hovered: Option<ItemId>,
        drop: Option<(ItemId, DropArea)>,
        pointer: Option<PointerEvent>,
    ) -> Option<DropArea> {
        let indicator = drop.and_then(|(target, area)| self.indicator_for(target, area));
        let session = self.session_mut()?;
        session.hovered = hovered;

        let previous = session.over.map(|over| (over, session.area));
        if previous == drop {
            session.indicator = indicator;
            return drop.map(|(_, area)| area);
        }
        session.over = drop.map(|(target, _)| target);
        session.area = drop.map(|(_, area)| area).unwrap_or_default();
        session.indicator = indicator;

        if let Some((old, area)) = previous {
            self.items.remove_state(old, flags::DRAG_OVER);
            self.items.remove_state(old, area.state_flag());
        }
        if let Some((target, area)) = drop {
            trace!("[tree] drop zone {:?} on {}", area, target);
            self.items.add_state(target, flags::DRAG_OVER);
            self.items.add_state(target, area.state_flag());
        }

        let old_target = previous.map(|(target, _)| target);
        match drop {
            Some((target, area)) => {
                if old_target != Some(target) {
                    self.emit(TreeEvent::DragOver { target });
                }
                self.emit(TreeEvent::DragMove {
                    target,
                    area,
                    pointer,
                });
                Some(area)
            }
            None => {
                if let Some(previous) = old_target {
                    self.emit(TreeEvent::DragOut { previous });
                }
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drop
    // -------------------------------------------------------------------------

    /// Finish the drag: compute each item's new place, apply it when
    /// `drag_instant` is on, publish `reparent` then `dragend`.
    ///
    /// Returns the report; empty when no drag was running or there was no
    /// valid target. Items dropped inside their current parent are
    /// reported with `old_parent == new_parent` and stay where they are.
    pub fn drag_end(&mut self) -> Vec<ReparentEntry> {
        let DragState::Dragging(session) = std::mem::take(&mut self.drag) else {
            return Vec::new();
        };
        let DragSession {
            items, over, area, ..
        } = session;

        let mut entries = Vec::new();
        // `after` drops chain behind the previously placed item.
        let mut anchor = None;
        for &item in &items {
            self.items.remove_state(item, flags::DRAGGED);

            let Some(target) = over.filter(|&t| t != item && self.contains(t)) else {
                continue;
            };
            let (Some(old_parent), Some(target_parent)) = (self.parent(item), self.parent(target))
            else {
                continue;
            };

            if old_parent == Parent::Element(target) && area == DropArea::Inside {
                entries.push(ReparentEntry {
                    item,
                    old_parent,
                    new_parent: old_parent,
                    placement: Placement::Inside(target),
                });
                continue;
            }

            let (new_parent, placement) = match area {
                DropArea::Before => (target_parent, Placement::Before(target)),
                DropArea::Inside => (Parent::Element(target), Placement::Inside(target)),
                DropArea::After => (target_parent, Placement::After(anchor.unwrap_or(target))),
            };

            if self.config.drag_instant
                && let Err(err) = self.apply_placement(item, placement)
            {
                warn!("[tree] dropping {} failed: {}", item, err);
                continue;
            }
            if area == DropArea::After {
                anchor = Some(item);
            }
            entries.push(ReparentEntry {
                item,
                old_parent,
                new_parent,
                placement,
            });
        }

        if let Some(target) = over {
            self.items.remove_state(target, flags::DRAG_OVER);
            self.items.remove_state(target, area.state_flag());
        }

        debug!("[tree] drag end, {} reparent entr(ies)", entries.len());
        self.emit(TreeEvent::Reparent(entries.clone()));
        self.emit(TreeEvent::DragEnd);
        entries
    }

    /// Apply moves reported while `drag_instant` was off, in order.
    pub fn apply_reparents(&mut self, entries: &[ReparentEntry]) -> Result<(), TreeError> {
        for entry in entries.iter().filter(|e| !e.is_noop()) {
            self.apply_placement(entry.item, entry.placement)?;
        }
        Ok(())
    }

    fn apply_placement(&mut self, item: ItemId, placement: Placement) -> Result<(), TreeError> {
        match placement {
            Placement::Before(reference) => self.items.append_before(item, reference)?,
            Placement::After(reference) => self.items.append_after(item, reference)?,
            Placement::Inside(target) => {
                self.items.append(Parent::Element(target), item)?;
                self.set_open(target, true)?;
            }
        }
        Ok(())
    }

    /// Drop destroyed items from a running session.
    pub(super) fn forget_dragged(&mut self, destroyed: &[ItemId]) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let before = session.items.len();
        session.items.retain(|id| !destroyed.contains(id));
        let mut changed = session.items.len() != before;
        if session.hovered.is_some_and(|h| destroyed.contains(&h)) {
            session.hovered = None;
            changed = true;
        }
        if session.over.is_some_and(|o| destroyed.contains(&o)) {
            session.over = None;
            session.indicator = None;
            changed = true;
        }
        if changed {
            warn!("[tree] dragged or hovered item destroyed during a drag");
        }
    }
}
