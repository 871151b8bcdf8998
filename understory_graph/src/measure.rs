// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement capability.
//!
//! Node sizes depend on their labels, but shaping and font loading belong to
//! the host. Implement [`TextMeasure`] on top of whatever text stack the host
//! uses; this crate only asks for the bounding box of a string.

use alloc::borrow::Cow;
use kurbo::Size;

/// Font selection passed through to text measurement and drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name, interpreted by the host.
    pub family: Cow<'static, str>,
    /// Font size in pixels.
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: Cow::Borrowed("sans-serif"),
            size: 12.0,
        }
    }
}

/// Measures the bounding box of a label.
pub trait TextMeasure {
    /// Return the width and height, in pixels, that `text` occupies when drawn
    /// with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

/// Deterministic measurement assuming every character has the same advance.
///
/// Width is `advance` times the longest line's character count; height is
/// `line_height` times the number of lines. An empty label is one empty line.
/// The font is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasure {
    /// Horizontal advance of a single character.
    pub advance: f64,
    /// Height of a single line.
    pub line_height: f64,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self {
            advance: 7.0,
            line_height: 15.0,
        }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure_text(&self, text: &str, _font: &Font) -> Size {
        let mut lines = 0_usize;
        let mut longest = 0_usize;
        for line in text.split('\n') {
            lines += 1;
            longest = longest.max(line.chars().count());
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Label lengths are far below 2^52 characters."
        )]
        Size::new(
            self.advance * longest as f64,
            self.line_height * lines as f64,
        )
    }
}
