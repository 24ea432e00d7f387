use super::id::{ElementId, Parent};
use super::tree::ElementTree;

/// Walks from an element's parent up to its top-level ancestor.
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    pub(super) tree: &'a ElementTree<T>,
    pub(super) next: Option<ElementId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let current = self.next?;
        self.next = self.tree.parent(current).and_then(Parent::element);
        Some(current)
    }
}

/// Pre-order walk over one or more subtrees.
///
/// Children are visited in their stored order, which is also their
/// display order.
#[derive(Debug)]
pub struct Descendants<'a, T> {
    pub(super) tree: &'a ElementTree<T>,
    pub(super) stack: Vec<ElementId>,
}

impl<'a, T> Descendants<'a, T> {
    pub(super) fn new(tree: &'a ElementTree<T>, start: &[ElementId]) -> Self {
        Self {
            tree,
            stack: start.iter().rev().copied().collect(),
        }
    }
}

impl<T> Iterator for Descendants<'_, T> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let current = self.stack.pop()?;
        let children = self.tree.children(Parent::Element(current));
        self.stack.extend(children.iter().rev().copied());
        Some(current)
    }
}
