// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tree viewer: lay out a sixteen-node tree, then pan, zoom, and
//! go home the way a windowed host would, printing each frame.
//!
//! The surface here prints draw calls instead of touching pixels, so the
//! example runs anywhere. A real host implements `Surface` on top of its
//! 2D renderer and forwards window events as `InputEvent`s.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example tree_viewer`

use kurbo::{Affine, Ellipse, Line, Point, Shape};
use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font};
use understory_graph_view::{Canvas, Color, InputEvent, PointerButtons, Surface};
use understory_tree_layout::{TreeLayout, go_home};

/// Prints one line per draw call.
#[derive(Default)]
struct PrintSurface {
    calls: usize,
}

impl Surface for PrintSurface {
    fn clear(&mut self, color: Color) {
        self.calls = 0;
        println!("  clear rgb({}, {}, {})", color.r, color.g, color.b);
    }

    fn set_antialias(&mut self, antialias: bool) {
        println!("  antialias {antialias}");
    }

    fn set_transform(&mut self, transform: Affine) {
        println!("  scale {:.1}", transform.as_coeffs()[0]);
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, _color: Color) {
        self.calls += 1;
        let b = ellipse.bounding_box();
        println!("  ellipse ({}, {}) {}x{}", b.x0, b.y0, b.width(), b.height());
    }

    fn stroke_ellipse(&mut self, _ellipse: Ellipse, _color: Color, _width: f64) {
        self.calls += 1;
    }

    fn draw_arrow(&mut self, line: Line, head_size: f64, _color: Color, _width: f64) {
        self.calls += 1;
        println!(
            "  arrow ({}, {}) -> ({}, {}) head {head_size}",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, _color: Color) {
        self.calls += 1;
        println!("  text {text:?} at ({}, {}) {}pt", origin.x, origin.y, font.size);
    }
}

fn frame(title: &str, canvas: &mut Canvas, tree: &BinaryTree, surface: &mut PrintSurface) {
    if !canvas.take_redraw_request() {
        println!("{title}: nothing to redraw");
        return;
    }
    println!(
        "{title}: offset {:?}, zoom {:.1}",
        canvas.content_offset(),
        canvas.zoom()
    );
    canvas.paint(tree, surface);
    println!("  ({} draw calls)", surface.calls);
}

fn main() {
    env_logger::init();

    let labels = (1..=16).map(|i| i.to_string());
    let mut tree = BinaryTree::from_level_order(
        labels,
        &FixedAdvanceMeasure::default(),
        &Font::default(),
    );
    let mut canvas = Canvas::new(640, 480);
    let mut surface = PrintSurface::default();

    let Some(stats) = TreeLayout::default().layout(&mut tree, &mut canvas) else {
        log::error!("tree has no root");
        return;
    };
    log::info!(
        "{} nodes over {}x{} content pixels",
        stats.nodes,
        stats.width,
        stats.height
    );
    frame("initial", &mut canvas, &tree, &mut surface);

    // Drag the view 200 px left to bring the right half into view.
    canvas.handle_event(&InputEvent::PointerDown {
        position: Point::new(400.0, 200.0),
        button: PointerButtons::PRIMARY,
    });
    for x in [350.0, 300.0, 250.0, 200.0] {
        canvas.handle_event(&InputEvent::PointerMove {
            position: Point::new(x, 200.0),
            buttons: PointerButtons::PRIMARY,
        });
    }
    canvas.handle_event(&InputEvent::PointerUp {
        position: Point::new(200.0, 200.0),
        button: PointerButtons::PRIMARY,
    });
    frame("after drag", &mut canvas, &tree, &mut surface);

    // Three wheel notches toward the user zoom out to 0.7.
    for _ in 0..3 {
        canvas.handle_event(&InputEvent::Wheel { delta: -120.0 });
    }
    frame("zoomed out", &mut canvas, &tree, &mut surface);
    frame("idle", &mut canvas, &tree, &mut surface);

    go_home(&tree, &mut canvas);
    frame("home", &mut canvas, &tree, &mut surface);
}
