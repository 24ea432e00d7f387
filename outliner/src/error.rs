//! Tree error types.

use scenedom::DomError;
use thiserror::Error;

use crate::tree::ItemId;

/// Errors returned by the Tree's structural and editing API.
///
/// Drag-and-drop policy rejections (group drags across levels, cyclic or
/// disallowed drop targets) are not errors; those paths simply leave the
/// tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A containment operation was rejected by the element layer.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// The handle does not name a live item of this tree.
    #[error("Item {0} is not part of this tree")]
    UnknownItem(ItemId),

    /// `rename` was called while renaming is switched off.
    #[error("Renaming is disabled for this tree")]
    RenamingDisabled,

    /// The item refuses selection.
    #[error("Item {0} is not selectable")]
    NotSelectable(ItemId),
}
