// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_layout --heading-base-level=0

//! Understory Tree Layout: place a binary tree on a graph canvas.
//!
//! [`TreeLayout::layout`] walks a [`BinaryTree`](understory_graph::BinaryTree)
//! from its root, gives every node a position such that no two subtrees
//! share a column, registers the nodes and parent→child edges with a
//! [`Canvas`](understory_graph_view::Canvas), and centres the view on the
//! root.
//!
//! Each subtree reserves a horizontal band. A node sits right of its left
//! subtree's band, and its right subtree starts one node diameter further
//! along, so the bands of siblings never overlap. Rows get further apart as
//! the tree deepens, which keeps the arrows of wide levels readable.
//!
//! The walk uses an explicit stack, so list-shaped trees of any depth lay
//! out without exhausting the call stack.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font, Position};
//! use understory_graph_view::Canvas;
//! use understory_tree_layout::TreeLayout;
//!
//! let mut tree = BinaryTree::from_level_order(
//!     ["1", "2", "3"],
//!     &FixedAdvanceMeasure::default(),
//!     &Font::default(),
//! );
//! let mut canvas = Canvas::new(800, 600);
//!
//! let stats = TreeLayout::default().layout(&mut tree, &mut canvas).unwrap();
//! assert_eq!(stats.nodes, 3);
//! assert_eq!(canvas.edges().len(), 2);
//!
//! let root = tree.root().and_then(|id| tree.get(id)).unwrap();
//! assert_eq!(root.position, Position::new(74, 0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;

pub use layout::{LayoutStats, TreeLayout, go_home};
