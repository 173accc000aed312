//! Ordered tree container.
//!
//! [`Tree`] is an arena of nodes addressed by [`NodeId`]. Each node stores its
//! payload, its structural depth ("level"), its parent and an ordered list of
//! child ids. Attaching a node anywhere re-levels its whole subtree, so a
//! child's level is always its parent's level plus one.
//!
//! A node has at most one parent. [`Tree::add`] detaches a node from its
//! previous parent before attaching it, and refuses to attach a node under
//! one of its own descendants.
//!
//! ```rust
//! use nan0::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.insert("root");
//! let child = tree.insert("child");
//! let grand = tree.insert("grand");
//! tree.add(child, grand);
//! tree.add(root, child);
//!
//! let levels: Vec<_> = tree.flatten(root).iter().map(|&id| tree.level(id)).collect();
//! assert_eq!(levels, vec![0, 1, 2]);
//! ```

use std::ops::{Index, IndexMut};

/// Handle of a node inside a [`Tree`].
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A borrowed view of one node, handed to traversal callbacks.
#[derive(Debug)]
pub struct Entry<'a, T> {
    pub id: NodeId,
    pub level: usize,
    pub data: &'a T,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    data: T,
    level: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed ordered tree.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    #[must_use]
    pub fn new() -> Self {
        Tree { slots: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the arena, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Creates a detached node at level 0.
    pub fn insert(&mut self, data: T) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            data,
            level: 0,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates a node and attaches it as the last child of `parent`.
    pub fn push(&mut self, parent: NodeId, data: T) -> NodeId {
        let id = self.insert(data);
        self.add(parent, id);
        id
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.data)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.data)
    }

    #[inline]
    #[must_use]
    pub fn level(&self, id: NodeId) -> usize {
        self.slots[id.0].level
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.0].children
    }

    #[must_use]
    pub fn entry(&self, id: NodeId) -> Entry<'_, T> {
        let slot = &self.slots[id.0];
        Entry {
            id,
            level: slot.level,
            data: &slot.data,
        }
    }

    /// Appends `child` to `parent`, re-parenting it if it was attached elsewhere.
    ///
    /// Returns `false` and leaves the tree untouched when `child` is `parent`
    /// itself or one of its ancestors.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.is_ancestor_or_self(child, parent) {
            return false;
        }
        if let Some(old) = self.slots[child.0].parent {
            self.slots[old.0].children.retain(|&c| c != child);
        }
        self.slots[child.0].parent = Some(parent);
        self.slots[parent.0].children.push(child);
        let level = self.slots[parent.0].level + 1;
        self.relevel(child, level);
        true
    }

    /// Detaches `child` from `parent`. The removed subtree becomes a root at level 0.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.slots[parent.0].children;
        let before = children.len();
        children.retain(|&c| c != child);
        if children.len() == before {
            return false;
        }
        self.slots[child.0].parent = None;
        self.relevel(child, 0);
        true
    }

    /// Detaches every child of `id`.
    pub fn clear(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.slots[id.0].children);
        for child in children {
            self.slots[child.0].parent = None;
            self.relevel(child, 0);
        }
    }

    /// Pre-order depth-first listing of `id` and all of its descendants.
    #[must_use]
    pub fn flatten(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.slots[current.0].children.iter().rev());
        }
        out
    }

    /// First matching direct child, or first match in [`flatten`](Self::flatten)
    /// order when `recursive` is set (parents before children).
    pub fn find<F>(&self, id: NodeId, mut predicate: F, recursive: bool) -> Option<NodeId>
    where
        F: FnMut(&Entry<'_, T>) -> bool,
    {
        self.scope(id, recursive)
            .into_iter()
            .find(|&candidate| predicate(&self.entry(candidate)))
    }

    pub fn filter<F>(&self, id: NodeId, mut predicate: F, recursive: bool) -> Vec<NodeId>
    where
        F: FnMut(&Entry<'_, T>) -> bool,
    {
        self.scope(id, recursive)
            .into_iter()
            .filter(|&candidate| predicate(&self.entry(candidate)))
            .collect()
    }

    pub fn map<R, F>(&self, id: NodeId, mut f: F, recursive: bool) -> Vec<R>
    where
        F: FnMut(&Entry<'_, T>) -> R,
    {
        self.scope(id, recursive)
            .into_iter()
            .map(|candidate| f(&self.entry(candidate)))
            .collect()
    }

    /// The deepest node along the chain of last children, if `id` has any child.
    #[must_use]
    pub fn recent(&self, id: NodeId) -> Option<NodeId> {
        let mut current = *self.slots[id.0].children.last()?;
        while let Some(&last) = self.slots[current.0].children.last() {
            current = last;
        }
        Some(current)
    }

    fn scope(&self, id: NodeId, recursive: bool) -> Vec<NodeId> {
        if recursive {
            self.flatten(id)
        } else {
            self.slots[id.0].children.clone()
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.slots[id.0].parent;
        }
        false
    }

    fn relevel(&mut self, id: NodeId, level: usize) {
        let mut stack = vec![(id, level)];
        while let Some((current, level)) = stack.pop() {
            let slot = &mut self.slots[current.0];
            slot.level = level;
            stack.extend(slot.children.iter().map(|&c| (c, level + 1)));
        }
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.slots[id.0].data
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.0].data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Tree<&'static str>, NodeId, [NodeId; 4]) {
        let mut tree = Tree::new();
        let root = tree.insert("container");
        let child1 = tree.push(root, "child1");
        let child2 = tree.push(root, "child2");
        let grand1 = tree.push(child1, "grand1");
        let grand2 = tree.push(child2, "grand2");
        (tree, root, [child1, child2, grand1, grand2])
    }

    #[test]
    fn test_levels_follow_structure() {
        let (tree, root, [child1, _, grand1, _]) = sample();
        assert_eq!(tree.level(root), 0);
        assert_eq!(tree.level(child1), 1);
        assert_eq!(tree.level(grand1), 2);
    }

    #[test]
    fn test_adding_subtree_relevels_transitively() {
        let mut tree = Tree::new();
        let grand = tree.insert("grand");
        let child = tree.insert("child");
        tree.add(child, grand);
        assert_eq!(tree.level(grand), 1);

        let root = tree.insert("root");
        let top = tree.push(root, "top");
        tree.add(top, child);
        assert_eq!(tree.level(child), 2);
        assert_eq!(tree.level(grand), 3);
    }

    #[test]
    fn test_flatten_is_preorder() {
        let (tree, root, _) = sample();
        let names: Vec<_> = tree.flatten(root).iter().map(|&id| tree[id]).collect();
        assert_eq!(names, vec!["container", "child1", "grand1", "child2", "grand2"]);
    }

    #[test]
    fn test_find_direct_and_recursive() {
        let (tree, root, [_, child2, grand1, _]) = sample();
        assert_eq!(tree.find(root, |e| *e.data == "child2", false), Some(child2));
        assert_eq!(tree.find(root, |e| *e.data == "grand1", false), None);
        assert_eq!(tree.find(root, |e| e.level == 2, true), Some(grand1));
    }

    #[test]
    fn test_filter_and_map() {
        let (tree, root, _) = sample();
        assert_eq!(tree.filter(root, |e| e.level == 2, true).len(), 2);
        assert_eq!(tree.map(root, |e| e.level, true), vec![0, 1, 2, 1, 2]);
        assert_eq!(tree.map(root, |e| e.level, false), vec![1, 1]);
    }

    #[test]
    fn test_reparenting_keeps_single_owner() {
        let (mut tree, _, [child1, child2, grand1, _]) = sample();
        assert!(tree.add(child2, grand1));
        assert!(tree.children(child1).is_empty());
        assert_eq!(tree.children(child2).len(), 2);
        assert_eq!(tree.parent(grand1), Some(child2));
    }

    #[test]
    fn test_refuses_cycles() {
        let (mut tree, root, [child1, _, grand1, _]) = sample();
        assert!(!tree.add(grand1, child1));
        assert!(!tree.add(root, root));
        assert_eq!(tree.parent(child1), Some(root));
    }

    #[test]
    fn test_remove_and_clear() {
        let (mut tree, root, [child1, child2, grand1, _]) = sample();
        assert!(tree.remove(root, child1));
        assert!(!tree.remove(root, child1));
        assert_eq!(tree.children(root), &[child2]);
        assert_eq!(tree.level(child1), 0);
        assert_eq!(tree.level(grand1), 1);

        tree.clear(root);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(child2), None);
    }

    #[test]
    fn test_recent_is_deepest_last() {
        let (tree, root, [_, _, grand1, grand2]) = sample();
        assert_eq!(tree.recent(root), Some(grand2));
        assert_eq!(tree.recent(grand1), None);
    }
}
