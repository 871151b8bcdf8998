// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas configuration: zoom limits, arrow geometry, and colours.

use understory_graph::Font;

use crate::surface::Color;

/// Tunables for a [`Canvas`](crate::Canvas).
///
/// The defaults reproduce the classic look: white ellipses with black
/// outlines on a white background, 6 px arrowheads, and zoom between 0.1 and
/// 2.0 in steps of 0.1.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Smallest zoom factor.
    pub zoom_min: f64,
    /// Largest zoom factor.
    pub zoom_max: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,
    /// Zoom factor of a fresh canvas.
    pub initial_zoom: f64,
    /// Arrowhead size; edge ends are pushed out by this much so the tip meets
    /// the target ellipse.
    pub arrow_size: i32,
    /// Stroke width for node outlines and edges.
    pub stroke_width: f64,
    /// Extra horizontal inset of labels inside the minimum box.
    pub label_inset: i32,
    /// Frame background.
    pub background: Color,
    /// Node interior.
    pub node_fill: Color,
    /// Node outline.
    pub node_stroke: Color,
    /// Edge lines and arrowheads.
    pub edge_color: Color,
    /// Labels.
    pub text_color: Color,
    /// Font used to draw labels.
    pub label_font: Font,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.1,
            zoom_max: 2.0,
            zoom_step: 0.1,
            initial_zoom: 1.0,
            arrow_size: 6,
            stroke_width: 1.0,
            label_inset: 2,
            background: Color::WHITE,
            node_fill: Color::WHITE,
            node_stroke: Color::BLACK,
            edge_color: Color::BLACK,
            text_color: Color::BLACK,
            label_font: Font::default(),
        }
    }
}

/// Reasons a [`ViewConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The zoom range is empty, not positive, or not finite.
    #[error("zoom range [{min}, {max}] must be positive, finite and non-empty")]
    InvalidZoomRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The zoom step is zero, negative, or not finite.
    #[error("zoom step {0} must be positive and finite")]
    InvalidZoomStep(f64),
    /// The initial zoom lies outside the zoom range.
    #[error("initial zoom {0} lies outside the zoom range")]
    InitialZoomOutOfRange(f64),
    /// The arrowhead size is negative.
    #[error("arrow size {0} must not be negative")]
    InvalidArrowSize(i32),
    /// The stroke width is negative or not finite.
    #[error("stroke width {0} must be non-negative and finite")]
    InvalidStrokeWidth(f64),
}

impl ViewConfig {
    /// Check the configuration for values the canvas cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.zoom_min, self.zoom_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !(min..=max).contains(&self.initial_zoom) {
            return Err(ConfigError::InitialZoomOutOfRange(self.initial_zoom));
        }
        if self.arrow_size < 0 {
            return Err(ConfigError::InvalidArrowSize(self.arrow_size));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }
}
