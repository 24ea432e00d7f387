//! Tree widget for the scene hierarchy.
//!
//! The Tree owns its items in an element arena, tracks a multi-selection
//! and runs the drag-and-drop reparenting engine:
//!
//! - drag start resolves the set of items being moved (group drags keep
//!   only the topmost selected item of each branch and must stay on one
//!   nesting level),
//! - hovering classifies the drop zone (`before` / `inside` / `after`)
//!   of the row under the pointer,
//! - release commits the moves, or only reports them when
//!   `drag_instant` is off.
//!
//! # Example
//!
//! ```
//! use outliner::{DropArea, Parent, Tree, TreeEvent, TreeEventKind, TreeItem};
//!
//! let mut tree = Tree::new();
//! let folder1 = tree.add_item(Parent::Root, TreeItem::new("Folder1")).unwrap();
//! let folder2 = tree.add_item(Parent::Root, TreeItem::new("Folder2")).unwrap();
//! let item_a = tree.add_item(folder1.into(), TreeItem::new("ItemA")).unwrap();
//!
//! tree.on(TreeEventKind::Reparent, |event| {
//!     if let TreeEvent::Reparent(entries) = event {
//!         println!("{} item(s) moved", entries.len());
//!     }
//! });
//!
//! assert!(tree.drag_start(item_a));
//! assert_eq!(tree.drag_hover(folder2, 0.5), Some(DropArea::Inside));
//! let moved = tree.drag_end();
//! assert_eq!(moved.len(), 1);
//! assert_eq!(tree.children(folder2.into()), &[item_a]);
//! ```

mod drag;
mod events;
mod input;
mod item;
mod order;
mod selection;
mod state;

pub use drag::{DropArea, DropIndicator, Placement, ReparentEntry};
pub use events::{TreeEvent, TreeEventKind};
pub use item::{ItemId, TreeItem};
pub use order::FlatNode;
pub use selection::Selection;
pub use state::Tree;

/// Visual state flags mirrored onto item elements.
pub mod flags {
    pub const SELECTED: &str = "selected";
    pub const OPEN: &str = "open";
    /// Item is part of the active drag set.
    pub const DRAGGED: &str = "dragged";
    /// Item is the current drop target.
    pub const DRAG_OVER: &str = "drag-over";
    pub const DROP_BEFORE: &str = "drop-before";
    pub const DROP_INSIDE: &str = "drop-inside";
    pub const DROP_AFTER: &str = "drop-after";
}
