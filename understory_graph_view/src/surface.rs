// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability a host provides.

use kurbo::{Affine, Ellipse, Line, Point};
use understory_graph::Font;

/// An 8-bit RGBA colour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Immediate-mode 2D drawing surface supplied by the host.
///
/// Coordinates passed to the drawing calls are in unscaled content space;
/// the surface applies the most recent [`Surface::set_transform`] to them.
pub trait Surface {
    /// Fill the whole surface with `color`, ignoring the transform.
    fn clear(&mut self, color: Color);
    /// Enable or disable antialiasing for subsequent calls.
    fn set_antialias(&mut self, antialias: bool);
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);
    /// Fill an ellipse.
    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color);
    /// Stroke an ellipse outline.
    fn stroke_ellipse(&mut self, ellipse: Ellipse, color: Color, width: f64);
    /// Stroke a line ending in an arrowhead at `line.p1`.
    ///
    /// `head_size` is the arrowhead's half-width and length.
    fn draw_arrow(&mut self, line: Line, head_size: f64, color: Color, width: f64);
    /// Draw `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
}
