use std::collections::BTreeSet;

use crate::error::DomError;

use super::id::{ElementId, Parent};
use super::iter::{Ancestors, Descendants};

#[derive(Debug, Clone)]
struct Node<T> {
    /// `None` while the element is detached.
    parent: Option<Parent>,
    children: Vec<ElementId>,
    /// Named visual state flags (the CSS class list of a DOM element).
    states: BTreeSet<&'static str>,
    data: T,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Arena of elements forming an ordered hierarchy.
///
/// Elements are addressed by [`ElementId`]. Each element has at most one
/// parent (the top level or another element) and an ordered child list;
/// sibling order is display order. Containment operations follow DOM
/// semantics: appending an element that is already attached moves it.
#[derive(Debug, Clone)]
pub struct ElementTree<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    roots: Vec<ElementId>,
    len: usize,
}

impl<T> Default for ElementTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementTree<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            len: 0,
        }
    }

    /// Number of live elements (attached or not).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: ElementId) -> Option<&Node<T>> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn try_node(&self, id: ElementId) -> Result<&Node<T>, DomError> {
        self.node(id).ok_or(DomError::StaleElement(id))
    }

    fn try_node_mut(&mut self, id: ElementId) -> Result<&mut Node<T>, DomError> {
        self.node_mut(id).ok_or(DomError::StaleElement(id))
    }

    // -------------------------------------------------------------------------
    // Creation / payload access
    // -------------------------------------------------------------------------

    /// Create a detached element.
    pub fn create(&mut self, data: T) -> ElementId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            states: BTreeSet::new(),
            data,
        };
        self.len += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            ElementId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            ElementId {
                index,
                generation: 0,
            }
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&T> {
        self.node(id).map(|n| &n.data)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.node_mut(id).map(|n| &mut n.data)
    }

    /// Destroy an element and its whole subtree.
    ///
    /// Returns the destroyed ids, the element itself first, then its
    /// descendants in pre-order.
    pub fn destroy(&mut self, id: ElementId) -> Result<Vec<ElementId>, DomError> {
        self.remove(id)?;
        let doomed: Vec<ElementId> = std::iter::once(id).chain(self.descendants(id)).collect();

        for element in &doomed {
            let slot = &mut self.slots[element.index as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free_list.push(element.index);
            self.len -= 1;
        }

        log::trace!("[dom] destroyed {} element(s) under {}", doomed.len(), id);
        Ok(doomed)
    }

    // -------------------------------------------------------------------------
    // Structure queries
    // -------------------------------------------------------------------------

    /// The element's container, `None` if detached or stale.
    pub fn parent(&self, id: ElementId) -> Option<Parent> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.parent(id).is_some()
    }

    /// Children of a container in display order.
    pub fn children(&self, parent: Parent) -> &[ElementId] {
        match parent {
            Parent::Root => &self.roots,
            Parent::Element(id) => self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[]),
        }
    }

    /// Top-level elements in display order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn index_in_parent(&self, id: ElementId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    pub fn prev_sibling(&self, id: ElementId) -> Option<ElementId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    pub fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        siblings.get(index + 1).copied()
    }

    /// Element ancestors from the direct parent upwards (the top level
    /// itself is not an element and is not yielded).
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.parent(id).and_then(Parent::element),
        }
    }

    /// Whether `ancestor` appears strictly above `id`.
    pub fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Number of element ancestors; top-level elements have depth 0.
    pub fn depth(&self, id: ElementId) -> Option<usize> {
        self.node(id)?;
        Some(self.ancestors(id).count())
    }

    /// Descendants of `id` in pre-order, excluding `id`.
    pub fn descendants(&self, id: ElementId) -> Descendants<'_, T> {
        Descendants::new(self, self.children(Parent::Element(id)))
    }

    /// Every attached element in pre-order.
    pub fn iter(&self) -> Descendants<'_, T> {
        Descendants::new(self, &self.roots)
    }

    /// Size of the subtree rooted at `id`, counting `id` itself.
    pub fn subtree_len(&self, id: ElementId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        1 + self.descendants(id).count()
    }

    // -------------------------------------------------------------------------
    // Containment
    // -------------------------------------------------------------------------

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: Parent, child: ElementId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.remove(child)?;
        let index = self.children(parent).len();
        self.attach(parent, index, child)
    }

    /// Insert `child` at `index` among the children of `parent`.
    ///
    /// The index is interpreted after `child` has been detached from its
    /// current position and is clamped to the child count.
    pub fn insert_at(
        &mut self,
        parent: Parent,
        index: usize,
        child: ElementId,
    ) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.remove(child)?;
        self.attach(parent, index, child)
    }

    /// Insert `child` immediately before `reference`, under the same parent.
    pub fn append_before(
        &mut self,
        child: ElementId,
        reference: ElementId,
    ) -> Result<(), DomError> {
        let parent = self.sibling_parent(child, reference)?;
        self.check_insert(parent, child)?;
        self.remove(child)?;
        let index = self
            .index_in_parent(reference)
            .ok_or(DomError::Detached(reference))?;
        self.attach(parent, index, child)
    }

    /// Insert `child` immediately after `reference`, under the same parent.
    pub fn append_after(&mut self, child: ElementId, reference: ElementId) -> Result<(), DomError> {
        let parent = self.sibling_parent(child, reference)?;
        self.check_insert(parent, child)?;
        self.remove(child)?;
        let index = self
            .index_in_parent(reference)
            .ok_or(DomError::Detached(reference))?;
        self.attach(parent, index + 1, child)
    }

    /// Detach `child` from its container. Returns the container it left,
    /// `None` if it was already detached.
    pub fn remove(&mut self, child: ElementId) -> Result<Option<Parent>, DomError> {
        let parent = self.try_node(child)?.parent;
        if let Some(parent) = parent {
            self.child_list_mut(parent)?.retain(|&c| c != child);
            self.try_node_mut(child)?.parent = None;
        }
        Ok(parent)
    }

    fn sibling_parent(&self, child: ElementId, reference: ElementId) -> Result<Parent, DomError> {
        if child == reference {
            return Err(DomError::SelfReference(child));
        }
        self.try_node(reference)?
            .parent
            .ok_or(DomError::Detached(reference))
    }

    fn check_insert(&self, parent: Parent, child: ElementId) -> Result<(), DomError> {
        self.try_node(child)?;
        if let Parent::Element(target) = parent {
            self.try_node(target)?;
            if target == child {
                return Err(DomError::SelfReference(child));
            }
            if self.is_ancestor(child, target) {
                return Err(DomError::Cycle {
                    child,
                    parent: target,
                });
            }
        }
        Ok(())
    }

    fn attach(&mut self, parent: Parent, index: usize, child: ElementId) -> Result<(), DomError> {
        let list = self.child_list_mut(parent)?;
        let index = index.min(list.len());
        list.insert(index, child);
        self.try_node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn child_list_mut(&mut self, parent: Parent) -> Result<&mut Vec<ElementId>, DomError> {
        match parent {
            Parent::Root => Ok(&mut self.roots),
            Parent::Element(id) => Ok(&mut self.try_node_mut(id)?.children),
        }
    }

    // -------------------------------------------------------------------------
    // Visual state flags
    // -------------------------------------------------------------------------

    /// Add a state flag. Returns true if the flag was not set before.
    pub fn add_state(&mut self, id: ElementId, state: &'static str) -> bool {
        self.node_mut(id)
            .map(|n| n.states.insert(state))
            .unwrap_or(false)
    }

    /// Remove a state flag. Returns true if the flag was set.
    pub fn remove_state(&mut self, id: ElementId, state: &'static str) -> bool {
        self.node_mut(id)
            .map(|n| n.states.remove(state))
            .unwrap_or(false)
    }

    /// Set or clear a state flag from a bool.
    pub fn set_state(&mut self, id: ElementId, state: &'static str, on: bool) -> bool {
        if on {
            self.add_state(id, state)
        } else {
            self.remove_state(id, state)
        }
    }

    pub fn has_state(&self, id: ElementId, state: &str) -> bool {
        self.node(id).is_some_and(|n| n.states.contains(state))
    }

    /// All state flags of an element, sorted.
    pub fn states(&self, id: ElementId) -> Vec<&'static str> {
        self.node(id)
            .map(|n| n.states.iter().copied().collect())
            .unwrap_or_default()
    }
}
