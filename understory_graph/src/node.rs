// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled nodes and their sizing rule.

use alloc::string::String;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use crate::measure::{Font, TextMeasure};
use crate::types::{NodeSize, Position};

/// Minimum box used by [`LabeledNode::new`].
pub const DEFAULT_MIN_SIZE: NodeSize = NodeSize::new(34, 34);

/// A text label drawn as an ellipse.
///
/// The graphical size is the minimum box grown by the measured label and is
/// fixed once the node exists, so layout and rendering always agree on how
/// much room a node takes.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledNode {
    /// Label drawn inside the node.
    pub text: String,
    /// Top-left corner of the node's bounding box in content coordinates.
    pub position: Position,
    min_size: NodeSize,
    graphical_size: NodeSize,
}

impl LabeledNode {
    /// Create a node at the origin with the [`DEFAULT_MIN_SIZE`] box.
    pub fn new<M: TextMeasure + ?Sized>(
        text: impl Into<String>,
        measure: &M,
        font: &Font,
    ) -> Self {
        Self::with_min_size(text, DEFAULT_MIN_SIZE, measure, font)
    }

    /// Create a node at the origin with a custom minimum box.
    pub fn with_min_size<M: TextMeasure + ?Sized>(
        text: impl Into<String>,
        min_size: NodeSize,
        measure: &M,
        font: &Font,
    ) -> Self {
        Self::with_position(text, Position::ZERO, min_size, measure, font)
    }

    /// Create a node at `position` with a custom minimum box.
    ///
    /// The label is measured exactly once, here.
    pub fn with_position<M: TextMeasure + ?Sized>(
        text: impl Into<String>,
        position: Position,
        min_size: NodeSize,
        measure: &M,
        font: &Font,
    ) -> Self {
        let text = text.into();
        let measured = measure.measure_text(&text, font);
        let graphical_size = NodeSize::new(
            min_size.width.saturating_add(whole_pixels(measured.width)),
            min_size.height.saturating_add(whole_pixels(measured.height)),
        );
        Self {
            text,
            position,
            min_size,
            graphical_size,
        }
    }

    /// The minimum box the label is padded into.
    pub fn min_size(&self) -> NodeSize {
        self.min_size
    }

    /// Rendered size: minimum box plus measured label.
    pub fn graphical_size(&self) -> NodeSize {
        self.graphical_size
    }

    /// Bounding box of the node's ellipse in content coordinates.
    pub fn bounds(&self) -> Rect {
        self.graphical_size.rect_at(self.position)
    }
}

/// Round a measured extent up to whole pixels; NaN and negatives become 0.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; the extent is non-negative here."
)]
fn whole_pixels(v: f64) -> i32 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    v.ceil() as i32
}
