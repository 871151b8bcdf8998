// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer view-space types.

/// Pan translation applied to content before scaling, in unscaled content
/// coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Offset {
    /// Horizontal translation.
    pub x: i32,
    /// Vertical translation.
    pub y: i32,
}

impl Offset {
    /// Create an offset.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Size of the visible viewport in device pixels. Never smaller than 1×1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewportSize {
    width: i32,
    height: i32,
}

impl ViewportSize {
    /// Create a size, clamping each dimension to at least 1.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 1 { 1 } else { width },
            height: if height < 1 { 1 } else { height },
        }
    }

    /// Width in pixels.
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(self) -> i32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_size_clamps_to_one_pixel() {
        let s = ViewportSize::new(0, -40);
        assert_eq!((s.width(), s.height()), (1, 1));
        let s = ViewportSize::new(640, 480);
        assert_eq!((s.width(), s.height()), (640, 480));
    }
}
