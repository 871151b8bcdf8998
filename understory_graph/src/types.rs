// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for graph nodes: identifiers and integer geometry.

use kurbo::{Point, Rect, Size};

/// Identifier for a node in a [`BinaryTree`](crate::BinaryTree) (generational).
///
/// A handle stays valid until its node is removed. After that the slot may be
/// reused, but the old handle is stale and every lookup through it returns
/// `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Integer position in unscaled content coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a Kurbo point.
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Integer width and height in pixels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct NodeSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl NodeSize {
    /// Create a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert to a Kurbo size.
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The rectangle of this size whose top-left corner is `origin`.
    pub fn rect_at(self, origin: Position) -> Rect {
        Rect::from_origin_size(origin.to_point(), self.to_size())
    }
}

impl From<(i32, i32)> for NodeSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}
