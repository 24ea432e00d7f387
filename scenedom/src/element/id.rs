use std::fmt;

/// Handle to an element stored in an [`ElementTree`](super::ElementTree).
///
/// The generation is bumped whenever a slot is freed, so a handle kept
/// across a `destroy` never aliases the element that reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl ElementId {
    /// Slot index inside the arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}.{}", self.index, self.generation)
    }
}

/// The container an element lives in: the top level of the tree or
/// another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Element(ElementId),
}

impl Parent {
    /// The parent element, or `None` for the top level.
    pub fn element(self) -> Option<ElementId> {
        match self {
            Parent::Root => None,
            Parent::Element(id) => Some(id),
        }
    }

    pub fn is_root(self) -> bool {
        matches!(self, Parent::Root)
    }
}

impl From<ElementId> for Parent {
    fn from(id: ElementId) -> Self {
        Parent::Element(id)
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => f.write_str("root"),
            Parent::Element(id) => id.fmt(f),
        }
    }
}
