// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen frame recording and replay.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Affine, Ellipse, Line, Point, Rect};
use understory_graph::Font;

use crate::surface::{Color, Surface};
use crate::types::ViewportSize;

/// One recorded drawing operation, in unscaled content coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the ellipse inscribed in `rect`.
    FillEllipse {
        /// Bounding box of the ellipse.
        rect: Rect,
        /// Fill colour.
        color: Color,
    },
    /// Stroke the ellipse inscribed in `rect`.
    StrokeEllipse {
        /// Bounding box of the ellipse.
        rect: Rect,
        /// Outline colour.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// Draw a label.
    Text {
        /// Label text.
        text: String,
        /// Top-left corner of the text.
        origin: Point,
        /// Text colour.
        color: Color,
    },
    /// Draw a line with an arrowhead at its end.
    Arrow {
        /// Segment from the source ellipse to just outside the target ellipse.
        line: Line,
        /// Arrowhead size.
        head_size: f64,
        /// Line and head colour.
        color: Color,
        /// Stroke width.
        width: f64,
    },
}

/// A recorded frame: the off-screen buffer of a [`Canvas`](crate::Canvas).
///
/// The canvas allocates it on first render, clears and refills it on every
/// render, and resizes it with the viewport. Hosts replay it onto their
/// surface with [`DisplayList::replay`], or inspect [`DisplayList::commands`]
/// directly.
#[derive(Clone, Debug)]
pub struct DisplayList {
    size: ViewportSize,
    background: Color,
    antialias: bool,
    transform: Affine,
    font: Font,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub(crate) fn new(size: ViewportSize, font: Font) -> Self {
        Self {
            size,
            background: Color::WHITE,
            antialias: true,
            transform: Affine::IDENTITY,
            font,
            commands: Vec::new(),
        }
    }

    pub(crate) fn resize(&mut self, size: ViewportSize) {
        self.size = size;
    }

    /// Start a new frame, keeping the command buffer's allocation.
    pub(crate) fn reset(&mut self, background: Color, transform: Affine, font: &Font) {
        self.background = background;
        self.antialias = true;
        self.transform = transform;
        if self.font != *font {
            self.font = font.clone();
        }
        self.commands.clear();
    }

    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Size of the buffer, matching the viewport.
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Colour the frame is cleared to.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether the frame is drawn with antialiasing.
    pub fn antialias(&self) -> bool {
        self.antialias
    }

    /// Content-to-device transform of the frame (the zoom scale).
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Font used for every [`DrawCommand::Text`].
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Recorded commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay the frame onto `surface`: clear, set state, then every command
    /// in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.background);
        surface.set_antialias(self.antialias);
        surface.set_transform(self.transform);
        for command in &self.commands {
            match command {
                DrawCommand::FillEllipse { rect, color } => {
                    surface.fill_ellipse(Ellipse::from_rect(*rect), *color);
                }
                DrawCommand::StrokeEllipse { rect, color, width } => {
                    surface.stroke_ellipse(Ellipse::from_rect(*rect), *color, *width);
                }
                DrawCommand::Text {
                    text,
                    origin,
                    color,
                } => {
                    surface.draw_text(text, *origin, &self.font, *color);
                }
                DrawCommand::Arrow {
                    line,
                    head_size,
                    color,
                    width,
                } => {
                    surface.draw_arrow(*line, *head_size, *color, *width);
                }
            }
        }
    }
}
