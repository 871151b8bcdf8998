// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed binary tree: ownership, structure, and lookups.

use alloc::{vec, vec::Vec};

use crate::measure::{Font, TextMeasure};
use crate::node::LabeledNode;
use crate::types::{NodeId, Position};

/// Read-only access to nodes by handle.
///
/// Renderers and views borrow nodes through this trait instead of holding
/// them, so the arena stays the only owner.
pub trait NodeSource {
    /// Look up a live node; `None` for stale handles.
    fn node(&self, id: NodeId) -> Option<&LabeledNode>;
}

/// Errors returned when attaching children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The handle does not refer to a live node.
    #[error("node handle {0:?} is stale")]
    StaleNode(NodeId),
    /// The node already has a parent, or is the root of the tree.
    #[error("node {0:?} already has a parent or is the tree root")]
    AlreadyAttached(NodeId),
    /// The child is the parent itself or one of its ancestors.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCycle {
        /// Node that would receive the child.
        parent: NodeId,
        /// Node that would be attached.
        child: NodeId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: LabeledNode,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Slot {
    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Binary tree whose nodes live in an arena.
///
/// Every [`LabeledNode`] is owned here; everything else refers to nodes by
/// [`NodeId`]. A node may also sit in the arena detached, without a parent
/// and without being the root; such nodes are ignored by tree traversal but
/// can still be drawn as part of a hand-built graph.
///
/// Structure is checked on attach: [`BinaryTree::set_left`] and
/// [`BinaryTree::set_right`] refuse children that already have a parent, the
/// root, and any ancestor of the receiving node. Removing a node removes its
/// whole subtree.
///
/// ## Example
///
/// ```rust
/// use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font};
///
/// let labels = ["1", "2", "3", "4"];
/// let tree = BinaryTree::from_level_order(labels, &FixedAdvanceMeasure::default(), &Font::default());
///
/// let root = tree.root().unwrap();
/// let two = tree.left_of(root).unwrap();
/// assert_eq!(tree.get(two).unwrap().text, "2");
/// assert_eq!(tree.get(tree.left_of(two).unwrap()).unwrap().text, "4");
/// assert_eq!(tree.right_of(two), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BinaryTree {
    slots: Vec<Option<Slot>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
}

impl BinaryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete binary tree from labels in level order.
    ///
    /// The node at index `i` gets children at `2i + 1` and `2i + 2` when those
    /// indices exist, so a partially filled last level hangs off the leftmost
    /// parents.
    pub fn from_level_order<I, S, M>(labels: I, measure: &M, font: &Font) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<alloc::string::String>,
        M: TextMeasure + ?Sized,
    {
        let mut tree = Self::new();
        let ids: Vec<NodeId> = labels
            .into_iter()
            .map(|label| tree.insert(LabeledNode::new(label, measure, font)))
            .collect();
        for (i, &id) in ids.iter().enumerate() {
            if let Some(&left) = ids.get(2 * i + 1) {
                tree.link(id, left, Side::Left);
            }
            if let Some(&right) = ids.get(2 * i + 2) {
                tree.link(id, right, Side::Right);
            }
        }
        tree.root = ids.first().copied();
        tree
    }

    /// Move `node` into the arena as a detached node and return its handle.
    pub fn insert(&mut self, node: LabeledNode) -> NodeId {
        let slot = |generation| Slot {
            generation,
            node,
            parent: None,
            left: None,
            right: None,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(slot(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(slot(generation)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        NodeId::new(idx as u32, generation)
    }

    /// Remove a node and its whole subtree.
    ///
    /// The node is unlinked from its parent first; if it was the root, the
    /// tree becomes empty. Stale handles are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink(parent, id);
        }
        if self.root == Some(id) {
            self.root = None;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(slot) = self.slots[current.idx()].take() {
                stack.extend(slot.left);
                stack.extend(slot.right);
                self.free_list.push(current.idx());
            }
        }
    }

    /// The root of the tree, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Make `root` the tree root, or clear the root with `None`.
    ///
    /// The new root must be live and must not have a parent. The previous
    /// root, if any, stays in the arena as a detached node with its subtree.
    pub fn set_root(&mut self, root: Option<NodeId>) -> Result<(), TreeError> {
        if let Some(id) = root {
            if !self.is_alive(id) {
                return Err(TreeError::StaleNode(id));
            }
            if self.parent_of(id).is_some() {
                return Err(TreeError::AlreadyAttached(id));
            }
        }
        self.root = root;
        Ok(())
    }

    /// Set (or clear) the left child of `parent`, returning the child it
    /// replaced. The replaced child stays in the arena, detached.
    pub fn set_left(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<Option<NodeId>, TreeError> {
        self.attach(parent, child, Side::Left)
    }

    /// Set (or clear) the right child of `parent`, returning the child it
    /// replaced. The replaced child stays in the arena, detached.
    pub fn set_right(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<Option<NodeId>, TreeError> {
        self.attach(parent, child, Side::Right)
    }

    /// Left child of a live node.
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.left)
    }

    /// Right child of a live node.
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.right)
    }

    /// Parent of a live node, or `None` for roots, detached nodes, and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.parent)
    }

    /// Borrow a live node.
    pub fn get(&self, id: NodeId) -> Option<&LabeledNode> {
        self.slot(id).map(|s| &s.node)
    }

    /// Borrow a live node mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LabeledNode> {
        self.slot_mut(id).map(|s| &mut s.node)
    }

    /// Move a live node; stale handles are ignored.
    pub fn set_position(&mut self, id: NodeId, position: Position) {
        if let Some(node) = self.get_mut(id) {
            node.position = position;
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of live nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Returns true if the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LabeledNode)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let slot = slot.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            Some((NodeId::new(i as u32, slot.generation), &slot.node))
        })
    }

    /// Iterate the nodes reachable from the root in pre-order
    /// (node, left subtree, right subtree).
    pub fn pre_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        core::iter::from_fn(move || {
            let id = stack.pop()?;
            let slot = self.slot(id)?;
            stack.extend(slot.right);
            stack.extend(slot.left);
            Some(id)
        })
    }

    // --- internals ---

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .filter(|s| s.generation == id.generation())
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.idx())
            .and_then(|s| s.as_mut())
            .filter(|s| s.generation == id.generation())
    }

    fn attach(
        &mut self,
        parent: NodeId,
        child: Option<NodeId>,
        side: Side,
    ) -> Result<Option<NodeId>, TreeError> {
        let Some(parent_slot) = self.slot(parent) else {
            return Err(TreeError::StaleNode(parent));
        };
        if parent_slot.child(side) == child {
            return Ok(None);
        }
        if let Some(child) = child {
            if !self.is_alive(child) {
                return Err(TreeError::StaleNode(child));
            }
            if self.is_ancestor_or_self(child, parent) {
                return Err(TreeError::WouldCycle { parent, child });
            }
            if self.parent_of(child).is_some() || self.root == Some(child) {
                return Err(TreeError::AlreadyAttached(child));
            }
        }

        let previous = self
            .slot_mut(parent)
            .and_then(|s| s.child_mut(side).take());
        if let Some(old) = previous
            && let Some(old_slot) = self.slot_mut(old)
        {
            old_slot.parent = None;
        }
        if let Some(child) = child {
            self.link(parent, child, side);
        }
        Ok(previous)
    }

    /// Returns true if `ancestor` is `id` or lies on the path from `id` to its root.
    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent_of(c);
        }
        false
    }

    fn link(&mut self, parent: NodeId, child: NodeId, side: Side) {
        if let Some(p) = self.slot_mut(parent) {
            *p.child_mut(side) = Some(child);
        }
        if let Some(c) = self.slot_mut(child) {
            c.parent = Some(parent);
        }
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(p) = self.slot_mut(parent) {
            if p.left == Some(child) {
                p.left = None;
            }
            if p.right == Some(child) {
                p.right = None;
            }
        }
        if let Some(c) = self.slot_mut(child) {
            c.parent = None;
        }
    }
}

impl NodeSource for BinaryTree {
    fn node(&self, id: NodeId) -> Option<&LabeledNode> {
        self.get(id)
    }
}
