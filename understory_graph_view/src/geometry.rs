// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer node rectangles, culling, and edge clipping against ellipses.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Rect};
use understory_graph::LabeledNode;

use crate::types::{Offset, ViewportSize};

/// Axis-aligned integer rectangle in unscaled content coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct PixelRect {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl PixelRect {
    /// The node's bounding box shifted by the pan offset.
    pub(crate) fn of_node(node: &LabeledNode, offset: Offset) -> Self {
        let size = node.graphical_size();
        Self {
            x: node.position.x.saturating_add(offset.x),
            y: node.position.y.saturating_add(offset.y),
            width: size.width,
            height: size.height,
        }
    }

    /// The region of content visible through a viewport at `zoom`.
    pub(crate) fn visible(viewport: ViewportSize, zoom: f64) -> Self {
        Self {
            x: 0,
            y: 0,
            width: scaled(viewport.width(), zoom),
            height: scaled(viewport.height(), zoom),
        }
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub(crate) fn intersects(self, other: Self) -> bool {
        let (ax0, ay0) = (i64::from(self.x), i64::from(self.y));
        let (ax1, ay1) = (ax0 + i64::from(self.width), ay0 + i64::from(self.height));
        let (bx0, by0) = (i64::from(other.x), i64::from(other.y));
        let (bx1, by1) = (bx0 + i64::from(other.width), by0 + i64::from(other.height));
        bx0 < ax1 && ax0 < bx1 && by0 < ay1 && ay0 < by1
    }

    /// Centre, rounded toward the top-left like the integer halving it uses.
    pub(crate) fn center(self) -> (i32, i32) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    pub(crate) fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }
}

/// `len / zoom`, truncated toward zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate, which is what an oversized view wants."
)]
fn scaled(len: i32, zoom: f64) -> i32 {
    (f64::from(len) / zoom) as i32
}

/// Point where a ray from `center` at `angle` crosses the ellipse with the
/// given radii, using the parametric form `(rx cos a, ry sin a)`.
///
/// Coordinates snap to the nearest whole pixel.
pub(crate) fn ellipse_boundary_point(center: (i32, i32), rx: f64, ry: f64, angle: f64) -> Point {
    let x = f64::from(center.0) + rx * angle.cos();
    let y = f64::from(center.1) + ry * angle.sin();
    Point::new(x.round(), y.round())
}

/// Segment for an edge from `from` to `to`.
///
/// It starts on the source ellipse and ends on the target ellipse grown by
/// `arrow_size` on every side, leaving room for an arrowhead whose tip
/// touches the target outline.
pub(crate) fn edge_segment(from: PixelRect, to: PixelRect, arrow_size: i32) -> Line {
    let from_center = from.center();
    let to_center = to.center();
    let dx = f64::from(to_center.0) - f64::from(from_center.0);
    let dy = f64::from(to_center.1) - f64::from(from_center.1);
    let angle = dy.atan2(dx);

    let start = ellipse_boundary_point(
        from_center,
        f64::from(from.width / 2),
        f64::from(from.height / 2),
        angle,
    );
    let grow = arrow_size.saturating_mul(2);
    let end = ellipse_boundary_point(
        to_center,
        f64::from(to.width.saturating_add(grow) / 2),
        f64::from(to.height.saturating_add(grow) / 2),
        angle + PI,
    );
    Line::new(start, end)
}
