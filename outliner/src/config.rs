//! Tree configuration.

use serde::{Deserialize, Serialize};

/// Behaviour switches and row geometry for a [`Tree`](crate::Tree).
///
/// Deserializes from partial documents; missing fields take their
/// defaults, so a host can persist only the switches it changes.
///
/// # Example
///
/// ```
/// use outliner::TreeConfig;
///
/// let config = TreeConfig::default()
///     .with_reordering(false)
///     .with_drag_instant(false);
/// assert!(config.draggable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Master switch for drag and drop.
    ///
    /// Default: true
    pub draggable: bool,

    /// Allow `before`/`after` placement in addition to `inside`.
    ///
    /// Default: true
    pub reordering: bool,

    /// Apply drops to the tree immediately. When false the tree only
    /// reports the intended moves and the host applies them.
    ///
    /// Default: true
    pub drag_instant: bool,

    /// Allow `rename`.
    ///
    /// Default: false
    pub allow_renaming: bool,

    /// Height of one row in layout units.
    ///
    /// Pointer drops tell the before, inside and after zones apart only on
    /// rows at least 3 units high. On one-unit rows, as in a terminal,
    /// every pointer drop goes inside its row.
    ///
    /// Default: 20
    pub row_height: u16,

    /// Horizontal indent per nesting level in layout units.
    ///
    /// Default: 16
    pub indent: u16,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            draggable: true,
            reordering: true,
            drag_instant: true,
            allow_renaming: false,
            row_height: 20,
            indent: 16,
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_reordering(mut self, reordering: bool) -> Self {
        self.reordering = reordering;
        self
    }

    pub fn with_drag_instant(mut self, drag_instant: bool) -> Self {
        self.drag_instant = drag_instant;
        self
    }

    pub fn with_allow_renaming(mut self, allow_renaming: bool) -> Self {
        self.allow_renaming = allow_renaming;
        self
    }

    /// Sets the row height (clamped to at least 1).
    pub fn with_row_height(mut self, row_height: u16) -> Self {
        self.row_height = row_height.max(1);
        self
    }

    pub fn with_indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }
}
