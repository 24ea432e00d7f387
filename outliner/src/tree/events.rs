//! Events published by the Tree.

use scenedom::{Event, PointerEvent};

use super::drag::{DropArea, ReparentEntry};
use super::item::ItemId;

/// Everything a host can observe on a Tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// A drag session started with these items, in document order.
    DragStart { items: Vec<ItemId> },
    /// The drop target or drop zone changed.
    DragMove {
        target: ItemId,
        area: DropArea,
        /// The pointer that caused the change, when driven by pointer input.
        pointer: Option<PointerEvent>,
    },
    /// The pointer entered a valid drop target.
    DragOver { target: ItemId },
    /// The pointer left the last valid drop target.
    DragOut { previous: ItemId },
    /// The drag session ended; session state has been reset.
    DragEnd,
    /// Moves computed at drop time (applied already when `drag_instant`).
    Reparent(Vec<ReparentEntry>),
    Select(ItemId),
    Deselect(ItemId),
    Open(ItemId),
    Close(ItemId),
    Rename { item: ItemId, text: String },
}

/// Discriminant of [`TreeEvent`], used to subscribe to one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeEventKind {
    DragStart,
    DragMove,
    DragOver,
    DragOut,
    DragEnd,
    Reparent,
    Select,
    Deselect,
    Open,
    Close,
    Rename,
}

impl Event for TreeEvent {
    type Kind = TreeEventKind;

    fn kind(&self) -> TreeEventKind {
        match self {
            TreeEvent::DragStart { .. } => TreeEventKind::DragStart,
            TreeEvent::DragMove { .. } => TreeEventKind::DragMove,
            TreeEvent::DragOver { .. } => TreeEventKind::DragOver,
            TreeEvent::DragOut { .. } => TreeEventKind::DragOut,
            TreeEvent::DragEnd => TreeEventKind::DragEnd,
            TreeEvent::Reparent(_) => TreeEventKind::Reparent,
            TreeEvent::Select(_) => TreeEventKind::Select,
            TreeEvent::Deselect(_) => TreeEventKind::Deselect,
            TreeEvent::Open(_) => TreeEventKind::Open,
            TreeEvent::Close(_) => TreeEventKind::Close,
            TreeEvent::Rename { .. } => TreeEventKind::Rename,
        }
    }
}
