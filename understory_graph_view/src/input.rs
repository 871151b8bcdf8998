// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel input, and the drag-to-pan gesture.
//!
//! Hosts translate their window events into [`InputEvent`] values and feed
//! them to [`Canvas::handle_event`](crate::Canvas::handle_event). Positions
//! are device pixels relative to the viewport's top-left corner.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Set of pointer buttons.
    ///
    /// A single button for down/up events, or every held button for moves.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button (usually left).
        const PRIMARY   = 0b0000_0001;
        /// Secondary button (usually right).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (usually middle / wheel click).
        const AUXILIARY = 0b0000_0100;
    }
}

/// Input delivered to a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A button went down.
    PointerDown {
        /// Pointer position in device pixels.
        position: Point,
        /// The button pressed.
        button: PointerButtons,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in device pixels.
        position: Point,
        /// Buttons held during the move.
        buttons: PointerButtons,
    },
    /// A button went up.
    PointerUp {
        /// Pointer position in device pixels.
        position: Point,
        /// The button released.
        button: PointerButtons,
    },
    /// Mouse wheel turned. Positive is away from the user (zoom in).
    Wheel {
        /// Wheel delta; only its sign matters.
        delta: f64,
    },
    /// The viewport changed size.
    Resize {
        /// New width in device pixels.
        width: i32,
        /// New height in device pixels.
        height: i32,
    },
}

/// Tracks the last pointer position of a drag.
///
/// The position is recorded on any button press and forgotten on release.
/// A move with the primary button held yields the delta since the previous
/// position and then remembers the new one. A primary-button move with no
/// recorded position (the press happened outside the view) only starts
/// tracking, so the first move never jumps.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PanGesture {
    last: Option<Point>,
}

impl PanGesture {
    pub(crate) fn on_down(&mut self, position: Point) {
        self.last = Some(position);
    }

    pub(crate) fn on_move(&mut self, position: Point, buttons: PointerButtons) -> Option<Vec2> {
        if !buttons.contains(PointerButtons::PRIMARY) {
            return None;
        }
        let last = self.last.replace(position)?;
        Some(position - last)
    }

    pub(crate) fn on_up(&mut self) {
        self.last = None;
    }

    pub(crate) fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}
