//! Arena-based view storage.
//!
//! Views are stored in slots addressed by generational [`ViewId`]s, so a
//! stale id held by a finished animation can never reach a view that later
//! reused the same slot.

use super::View;

/// Unique identifier for a view in the tree.
///
/// - `index`: Position in the slot array (reusable after removal)
/// - `generation`: Version counter that increments when a slot is reused
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ViewId {
    index: u32,
    generation: u32,
}

struct Node {
    view: View,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Owner of every view on the screen and of their parent/child links.
#[derive(Default)]
pub struct ViewTree {
    slots: Vec<Slot>,
    free_indices: Vec<u32>,
    len: usize,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a view, optionally as the last child of `parent`.
    ///
    /// A stale or unknown parent leaves the view detached.
    pub fn insert(&mut self, view: View, parent: Option<ViewId>) -> ViewId {
        let parent = parent.filter(|p| self.contains(*p));

        let id = if let Some(index) = self.free_indices.pop() {
            // Reuse a freed slot - increment generation
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            ViewId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: None,
            });
            ViewId {
                index,
                generation: 0,
            }
        };

        self.slots[id.index as usize].node = Some(Node {
            view,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.push(id);
        }
        self.len += 1;
        id
    }

    /// Remove a view and its whole subtree, detaching it from its parent.
    ///
    /// Returns the removed view, or `None` if the id is stale.
    pub fn remove(&mut self, id: ViewId) -> Option<View> {
        let node = self.slots.get_mut(id.index as usize).and_then(|slot| {
            if slot.generation == id.generation {
                slot.node.take()
            } else {
                None
            }
        })?;
        self.free_indices.push(id.index);
        self.len -= 1;

        if let Some(parent) = node.parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|&c| c != id);
        }
        for child in node.children {
            // Parent slot is already empty, so drop the link before recursing.
            if let Some(child_node) = self.node_mut(child) {
                child_node.parent = None;
            }
            self.remove(child);
        }
        Some(node.view)
    }

    fn node(&self, id: ViewId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ViewId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.node(id).is_some()
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.node(id).map(|n| &n.view)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.node_mut(id).map(|n| &mut n.view)
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a view in insertion order; empty for stale ids.
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Size;

    fn view(name: &str) -> View {
        View::new(name, Size::new(10.0, 10.0))
    }

    #[test]
    fn test_insert_and_children() {
        let mut tree = ViewTree::new();
        let root = tree.insert(view("root"), None);
        let a = tree.insert(view("a"), Some(root));
        let b = tree.insert(view("b"), Some(root));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.get(b).map(View::name), Some("b"));
    }

    #[test]
    fn test_remove_detaches_from_parent() {
        let mut tree = ViewTree::new();
        let root = tree.insert(view("root"), None);
        let a = tree.insert(view("a"), Some(root));

        let removed = tree.remove(a);
        assert_eq!(removed.map(|v| v.name().to_string()), Some("a".to_string()));
        assert!(tree.children(root).is_empty());
        assert!(!tree.contains(a));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut tree = ViewTree::new();
        let a = tree.insert(view("a"), None);
        assert!(tree.remove(a).is_some());
        assert!(tree.remove(a).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_stale_id_does_not_alias_reused_slot() {
        let mut tree = ViewTree::new();
        let old = tree.insert(view("old"), None);
        tree.remove(old);
        let new = tree.insert(view("new"), None);

        assert_ne!(old, new);
        assert!(tree.get(old).is_none());
        assert_eq!(tree.get(new).map(View::name), Some("new"));
    }

    #[test]
    fn test_remove_drops_subtree() {
        let mut tree = ViewTree::new();
        let root = tree.insert(view("root"), None);
        let mid = tree.insert(view("mid"), Some(root));
        let leaf = tree.insert(view("leaf"), Some(mid));

        tree.remove(mid);
        assert!(!tree.contains(leaf));
        assert_eq!(tree.len(), 1);
    }
}
