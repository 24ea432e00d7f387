//! Input routing for widgets.
//!
//! The host translates raw terminal or window input into these calls;
//! each widget decides how to react and reports back whether it consumed
//! the input.

use scenedom::{Key, Modifiers, PointerEvent};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// The press landed on something draggable; route the following
    /// pointer moves to `on_drag` and the release to `on_release`.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that handle pointer and keyboard input.
///
/// All methods default to `EventResult::Ignored`, so widgets only
/// implement the events they care about.
pub trait WidgetEvents {
    /// Pointer button pressed.
    fn on_click(&mut self, _event: PointerEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer moved while the button is held.
    fn on_drag(&mut self, _event: PointerEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer button released.
    fn on_release(&mut self, _event: PointerEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Key pressed while the widget has focus.
    fn on_key(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }
}
