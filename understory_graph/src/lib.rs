// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_graph --heading-base-level=0

//! Understory Graph: labeled nodes and an arena-backed binary tree.
//!
//! This crate holds the data side of a tree viewer. It knows how big a node
//! is and who its children are, but nothing about where the view is looking
//! or how anything gets drawn.
//!
//! - [`LabeledNode`]: a text label with an integer position, a minimum box,
//!   and a graphical size measured once at construction.
//! - [`BinaryTree`]: an arena that owns every node and links them through
//!   `left`/`right` handles. Detached nodes are allowed, so the same arena can
//!   back a general graph drawn by hand.
//! - [`NodeId`]: generational handle of a node. Views keep these instead of
//!   references, so there is exactly one owner of each node.
//! - [`NodeSource`]: read-only lookup used by renderers.
//! - [`TextMeasure`] / [`Font`]: the injected text measurement capability.
//!   [`FixedAdvanceMeasure`] is a deterministic implementation for tests and
//!   hosts without a font stack.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font, LabeledNode};
//!
//! let measure = FixedAdvanceMeasure::default();
//! let font = Font::default();
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.insert(LabeledNode::new("root", &measure, &font));
//! let left = tree.insert(LabeledNode::new("left", &measure, &font));
//! tree.set_root(Some(root)).unwrap();
//! tree.set_left(root, Some(left)).unwrap();
//!
//! assert_eq!(tree.left_of(root), Some(left));
//! assert_eq!(tree.parent_of(left), Some(root));
//! ```
//!
//! Structure is validated when children are attached: a node can have at most
//! one parent and attaching an ancestor below its own descendant is refused
//! with [`TreeError::WouldCycle`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod measure;
mod node;
mod tree;
mod types;

pub use measure::{FixedAdvanceMeasure, Font, TextMeasure};
pub use node::{DEFAULT_MIN_SIZE, LabeledNode};
pub use tree::{BinaryTree, NodeSource, TreeError};
pub use types::{NodeId, NodeSize, Position};
