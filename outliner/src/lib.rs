pub mod config;
pub mod error;
pub mod tree;
pub mod widget;

pub use config::TreeConfig;
pub use error::TreeError;
pub use scenedom::{Key, Modifiers, MouseButton, Parent, PointerEvent, Rect};
pub use tree::{
    DropArea, DropIndicator, FlatNode, ItemId, Placement, ReparentEntry, Tree, TreeEvent,
    TreeEventKind, TreeItem,
};
pub use widget::{EventResult, WidgetEvents};

pub mod prelude {
    pub use crate::config::TreeConfig;
    pub use crate::error::TreeError;
    pub use crate::tree::{
        DropArea, DropIndicator, FlatNode, ItemId, Placement, ReparentEntry, Tree, TreeEvent,
        TreeEventKind, TreeItem,
    };
    pub use crate::widget::{EventResult, WidgetEvents};
    pub use scenedom::{Key, Modifiers, Parent, PointerEvent, Rect};
}
