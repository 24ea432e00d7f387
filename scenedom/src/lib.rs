pub mod element;
pub mod emitter;
pub mod error;
pub mod event;
pub mod layout;

pub use element::{Ancestors, Descendants, ElementId, ElementTree, Parent};
pub use emitter::{Emitter, Event, ListenerId};
pub use error::DomError;
pub use event::{Key, Modifiers, MouseButton, PointerEvent};
pub use layout::Rect;
