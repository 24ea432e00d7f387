//! Errors raised by structural element operations.

use thiserror::Error;

use crate::element::ElementId;

/// Errors returned by [`ElementTree`](crate::ElementTree) container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// The id refers to a slot that was destroyed (or never existed).
    #[error("Element {0} does not exist")]
    StaleElement(ElementId),

    /// The element has no parent, so sibling-relative placement is impossible.
    #[error("Element {0} is not attached to a parent")]
    Detached(ElementId),

    /// The move would place an element inside its own subtree.
    #[error("Element {child} cannot be placed under its own descendant {parent}")]
    Cycle {
        /// The element being moved.
        child: ElementId,
        /// The requested new parent.
        parent: ElementId,
    },

    /// The element was used as its own parent or sibling reference.
    #[error("Element {0} cannot be placed relative to itself")]
    SelfReference(ElementId),
}
