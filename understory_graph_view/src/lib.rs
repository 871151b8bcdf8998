// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_graph_view --heading-base-level=0

//! Understory Graph View: a headless, pannable and zoomable graph canvas.
//!
//! A [`Canvas`] keeps the ordered list of nodes and edges to draw, a content
//! offset (pan) and a zoom factor. It turns pointer and wheel input into pan
//! and zoom changes and, on request, records a frame into a [`DisplayList`]
//! that a host replays onto its own drawing [`Surface`].
//!
//! The canvas never owns nodes. It stores [`understory_graph::NodeId`]
//! handles and borrows the nodes through a [`understory_graph::NodeSource`]
//! at render time, so moving a node in its arena is visible on the next
//! frame without telling the canvas.
//!
//! ## Frames and redraw requests
//!
//! Mutations raise a redraw request instead of drawing right away. Hosts poll
//! [`Canvas::take_redraw_request`] from their paint cycle, so any number of
//! changes between two paints collapse into one render. Bulk updates can turn
//! off per-call requests with [`Canvas::set_auto_invalidate`].
//!
//! Each render resets the display list: background colour, antialiasing,
//! and a uniform scale by the zoom factor, followed by one filled and stroked
//! ellipse plus a label per visible node and one arrow per edge whose source
//! node is visible. Edges start and end on the node ellipses, not on their
//! bounding boxes.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font, LabeledNode, Position};
//! use understory_graph_view::{Canvas, DrawCommand};
//!
//! let measure = FixedAdvanceMeasure::default();
//! let font = Font::default();
//! let mut nodes = BinaryTree::new();
//! let a = nodes.insert(LabeledNode::new("a", &measure, &font));
//! let b = nodes.insert(LabeledNode::new("b", &measure, &font));
//! nodes.set_position(b, Position::new(120, 80));
//!
//! let mut canvas = Canvas::new(800, 600);
//! canvas.add_edge(a, b);
//! assert_eq!(canvas.nodes(), &[a, b]);
//!
//! canvas.go_to(Position::new(60, 40));
//! let frame = canvas.render(&nodes);
//! let arrows = frame
//!     .commands()
//!     .iter()
//!     .filter(|c| matches!(c, DrawCommand::Arrow { .. }))
//!     .count();
//! assert_eq!(arrows, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod config;
mod display_list;
mod geometry;
mod input;
mod surface;
mod types;

pub use canvas::Canvas;
pub use config::{ConfigError, ViewConfig};
pub use display_list::{DisplayList, DrawCommand};
pub use input::{InputEvent, PointerButtons};
pub use surface::{Color, Surface};
pub use types::{Offset, ViewportSize};
