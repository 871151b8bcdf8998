// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass.

use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use understory_graph::{BinaryTree, NodeId, Position};
use understory_graph_view::Canvas;

/// Binary tree layout parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeLayout {
    /// Factor applied to a node's larger dimension to get the horizontal
    /// room reserved for it.
    pub clearance: f64,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self { clearance: 1.5 }
    }
}

/// Summary of a finished layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of nodes positioned.
    pub nodes: usize,
    /// Horizontal band reserved by the whole tree.
    pub width: i32,
    /// Bottom edge of the lowest node.
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Enter,
    LeftDone,
    RightDone,
}

/// One pending node of the walk.
#[derive(Clone, Copy, Debug)]
struct Frame {
    id: NodeId,
    parent: Option<NodeId>,
    depth: i32,
    offset_x: i32,
    spacing: i32,
    stage: Stage,
    diameter: i32,
    child_spacing: i32,
    left_width: i32,
}

impl Frame {
    fn enter(id: NodeId, parent: Option<NodeId>, depth: i32, offset_x: i32, spacing: i32) -> Self {
        Self {
            id,
            parent,
            depth,
            offset_x,
            spacing,
            stage: Stage::Enter,
            diameter: 0,
            child_spacing: 0,
            left_width: 0,
        }
    }
}

impl TreeLayout {
    /// Position every node reachable from the tree's root, rebuild the
    /// canvas's node and edge lists from the tree, and centre the view on the
    /// root.
    ///
    /// Nodes are registered in pre-order: the root as a standalone node,
    /// every other node through the edge from its parent. The canvas raises a
    /// single redraw request for the whole pass.
    ///
    /// Returns `None` without touching the canvas if the tree has no root.
    pub fn layout(&self, tree: &mut BinaryTree, canvas: &mut Canvas) -> Option<LayoutStats> {
        let Some((root, root_height)) = tree
            .root()
            .and_then(|id| tree.get(id).map(|n| (id, n.graphical_size().height)))
        else {
            log::warn!("layout skipped: tree has no root");
            return None;
        };

        let auto_invalidate = canvas.auto_invalidate();
        canvas.set_auto_invalidate(false);
        canvas.clear();

        let mut stats = LayoutStats::default();
        let mut stack: Vec<Frame> = Vec::new();
        stack.push(Frame::enter(root, None, 0, 0, root_height));
        // Width of the subtree whose frame was popped last; 0 for an absent child.
        let mut returned = 0_i32;

        while let Some(mut frame) = stack.pop() {
            match frame.stage {
                Stage::Enter => {
                    let Some(node) = tree.get(frame.id) else {
                        returned = 0;
                        continue;
                    };
                    let size = node.graphical_size();
                    match frame.parent {
                        Some(parent) => canvas.add_edge(parent, frame.id),
                        None => canvas.add_node(frame.id),
                    }
                    frame.diameter = self.diameter(size.width, size.height);
                    frame.child_spacing = frame.spacing.saturating_add(size.height / 2);
                    frame.stage = Stage::LeftDone;
                    stack.push(frame);

                    returned = 0;
                    if let Some(left) = tree.left_of(frame.id) {
                        stack.push(Frame::enter(
                            left,
                            Some(frame.id),
                            frame.depth.saturating_add(1),
                            frame.offset_x,
                            frame.child_spacing,
                        ));
                    }
                }
                Stage::LeftDone => {
                    frame.left_width = returned;
                    frame.stage = Stage::RightDone;
                    stack.push(frame);

                    returned = 0;
                    if let Some(right) = tree.right_of(frame.id) {
                        let offset_x = frame
                            .offset_x
                            .saturating_add(frame.left_width)
                            .saturating_add(frame.diameter);
                        stack.push(Frame::enter(
                            right,
                            Some(frame.id),
                            frame.depth.saturating_add(1),
                            offset_x,
                            frame.child_spacing,
                        ));
                    }
                }
                Stage::RightDone => {
                    let right_width = returned;
                    let position = Position::new(
                        frame.offset_x.saturating_add(frame.left_width),
                        frame.depth.saturating_mul(frame.spacing),
                    );
                    tree.set_position(frame.id, position);
                    if let Some(node) = tree.get(frame.id) {
                        let bottom = position.y.saturating_add(node.graphical_size().height);
                        stats.height = stats.height.max(bottom);
                    }
                    stats.nodes += 1;
                    returned = frame
                        .left_width
                        .saturating_add(right_width)
                        .saturating_add(frame.diameter);
                }
            }
        }
        stats.width = returned;

        canvas.set_auto_invalidate(auto_invalidate);
        if let Some(node) = tree.get(root) {
            canvas.go_to(node.position);
        }
        log::debug!(
            "laid out {} nodes in a {}x{} band",
            stats.nodes,
            stats.width,
            stats.height
        );
        Some(stats)
    }

    /// Horizontal room reserved for a node of the given size.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float-to-int casts saturate, which clamps absurd clearances."
    )]
    fn diameter(&self, width: i32, height: i32) -> i32 {
        let w = f64::from(width) * self.clearance;
        let h = f64::from(height) * self.clearance;
        w.max(h).ceil() as i32
    }
}

/// Centre the canvas on the tree's root at its current position.
///
/// Returns false, leaving the canvas alone, if the tree has no root.
pub fn go_home(tree: &BinaryTree, canvas: &mut Canvas) -> bool {
    match tree.root().and_then(|id| tree.get(id)) {
        Some(root) => {
            canvas.go_to(root.position);
            true
        }
        None => false,
    }
}
