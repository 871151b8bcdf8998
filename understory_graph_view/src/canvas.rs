// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas: node/edge bookkeeping, viewport state, input, and rendering.

use alloc::vec::Vec;
use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};
use understory_graph::{LabeledNode, NodeId, NodeSource, Position};

use crate::config::{ConfigError, ViewConfig};
use crate::display_list::{DisplayList, DrawCommand};
use crate::geometry::{PixelRect, edge_segment};
use crate::input::{InputEvent, PanGesture};
use crate::surface::Surface;
use crate::types::{Offset, ViewportSize};

/// A pannable, zoomable view over a set of nodes and directed edges.
///
/// The canvas stores [`NodeId`] handles only; node data is borrowed from a
/// [`NodeSource`] when a frame is rendered. Nodes are drawn in insertion
/// order, so later nodes paint over earlier ones.
///
/// Every mutation raises a redraw request (see [`Canvas::take_redraw_request`])
/// unless [`Canvas::set_auto_invalidate`] has switched per-call requests off.
/// [`Canvas::go_to`] and input always request a redraw.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_graph::Position;
/// use understory_graph_view::{Canvas, InputEvent, Offset, PointerButtons};
///
/// let mut canvas = Canvas::new(400, 300);
/// canvas.go_to(Position::new(50, 20));
/// assert_eq!(canvas.content_offset(), Offset::new(150, 130));
///
/// // Drag 10 px to the right.
/// canvas.handle_event(&InputEvent::PointerDown {
///     position: Point::new(0.0, 0.0),
///     button: PointerButtons::PRIMARY,
/// });
/// canvas.handle_event(&InputEvent::PointerMove {
///     position: Point::new(10.0, 0.0),
///     buttons: PointerButtons::PRIMARY,
/// });
/// assert_eq!(canvas.content_offset(), Offset::new(160, 130));
///
/// // One wheel notch towards the screen zooms in.
/// canvas.handle_event(&InputEvent::Wheel { delta: 120.0 });
/// assert!((canvas.zoom() - 1.1).abs() < 1e-9);
/// assert!(canvas.take_redraw_request());
/// ```
#[derive(Clone, Debug)]
pub struct Canvas {
    /// Draw everything, skipping visibility culling.
    pub render_off_screen: bool,
    config: ViewConfig,
    auto_invalidate: bool,
    redraw_requested: bool,
    nodes: Vec<NodeId>,
    /// occurrences of each handle in `nodes`
    listed: HashMap<NodeId, u32>,
    edges: Vec<(NodeId, NodeId)>,
    content_offset: Offset,
    zoom: f64,
    viewport: ViewportSize,
    pan: PanGesture,
    buffer: Option<DisplayList>,
}

impl Canvas {
    /// Create an empty canvas of the given viewport size with the default
    /// [`ViewConfig`]. Sizes below 1×1 are clamped.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_valid_config(width, height, ViewConfig::default())
    }

    /// Create an empty canvas with a custom configuration.
    pub fn with_config(width: i32, height: i32, config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(width, height, config))
    }

    fn from_valid_config(width: i32, height: i32, config: ViewConfig) -> Self {
        Self {
            render_off_screen: false,
            zoom: config.initial_zoom,
            config,
            auto_invalidate: true,
            redraw_requested: false,
            nodes: Vec::new(),
            listed: HashMap::new(),
            edges: Vec::new(),
            content_offset: Offset::default(),
            viewport: ViewportSize::new(width, height),
            pan: PanGesture::default(),
            buffer: None,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // --- nodes and edges ---

    /// Append a node to the draw list.
    pub fn add_node(&mut self, node: NodeId) {
        self.push_node(node);
        self.changed();
    }

    /// Remove the first occurrence of `node` from the draw list.
    ///
    /// Edges touching the node are kept and are still drawn while their
    /// source node is in view.
    pub fn remove_node(&mut self, node: NodeId) {
        self.unlist_node(node);
        self.changed();
    }

    /// Append an edge. Endpoints not yet in the node list are appended to it,
    /// `from` first.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if !self.contains_node(from) {
            self.push_node(from);
        }
        if !self.contains_node(to) {
            self.push_node(to);
        }
        self.edges.push((from, to));
        self.changed();
    }

    /// Remove the first matching edge, and the first occurrence of each of
    /// its endpoints from the node list. This mirrors [`Canvas::add_edge`],
    /// which registers the endpoints.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        self.unlist_node(from);
        self.unlist_node(to);
        if let Some(pos) = self.edges.iter().position(|e| *e == (from, to)) {
            self.edges.remove(pos);
        }
        self.changed();
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        self.listed.clear();
        self.changed();
    }

    /// Whether `node` is in the node list.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.listed.contains_key(&node)
    }

    /// Nodes in draw order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in draw order.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    // --- redraw requests ---

    /// Whether mutations raise redraw requests on their own.
    pub fn auto_invalidate(&self) -> bool {
        self.auto_invalidate
    }

    /// Switch per-call redraw requests on or off.
    ///
    /// Turn them off around bulk updates; turning them back on requests one
    /// redraw covering everything changed in between.
    pub fn set_auto_invalidate(&mut self, enabled: bool) {
        let resumed = enabled && !self.auto_invalidate;
        self.auto_invalidate = enabled;
        if resumed {
            self.invalidate();
        }
    }

    /// Request a redraw unconditionally.
    pub fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    /// Whether a redraw is pending.
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Return and clear the pending redraw request.
    ///
    /// Hosts call this from their paint cycle; all requests made since the
    /// previous call collapse into one.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    fn push_node(&mut self, node: NodeId) {
        self.nodes.push(node);
        *self.listed.entry(node).or_insert(0) += 1;
    }

    /// Drop the first occurrence of `node` from the node list.
    fn unlist_node(&mut self, node: NodeId) {
        let Some(count) = self.listed.get_mut(&node) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.listed.remove(&node);
        }
        if let Some(pos) = self.nodes.iter().position(|n| *n == node) {
            self.nodes.remove(pos);
        }
    }

    fn changed(&mut self) {
        if self.auto_invalidate {
            self.invalidate();
        }
    }

    // --- viewport ---

    /// Current pan translation.
    pub fn content_offset(&self) -> Offset {
        self.content_offset
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current viewport size.
    pub fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    /// Pan so that content position `pos` lands in the centre of the viewport.
    pub fn go_to(&mut self, pos: Position) {
        self.content_offset = Offset::new(
            (self.viewport.width() / 2).saturating_sub(pos.x),
            (self.viewport.height() / 2).saturating_sub(pos.y),
        );
        log::trace!("go_to {pos:?} -> offset {:?}", self.content_offset);
        self.invalidate();
    }

    /// Shift the pan translation by whole content pixels.
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.content_offset.x = self.content_offset.x.saturating_add(dx);
        self.content_offset.y = self.content_offset.y.saturating_add(dy);
        self.invalidate();
    }

    /// Set the zoom factor, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = if zoom.is_nan() { self.zoom } else { zoom };
        self.zoom = zoom.clamp(self.config.zoom_min, self.config.zoom_max);
        self.invalidate();
    }

    /// Zoom in by one step, up to the configured maximum.
    pub fn zoom_in(&mut self) {
        self.step_zoom(self.config.zoom_step);
    }

    /// Zoom out by one step, down to the configured minimum.
    pub fn zoom_out(&mut self) {
        self.step_zoom(-self.config.zoom_step);
    }

    fn step_zoom(&mut self, delta: f64) {
        // Snap to 1e-9 so repeated steps land on exact multiples of the step.
        let target = ((self.zoom + delta) * 1e9).round() / 1e9;
        self.set_zoom(target);
        log::trace!("zoom -> {}", self.zoom);
    }

    /// Resize the viewport; sizes below 1×1 are clamped. The off-screen
    /// buffer, once allocated, follows the new size.
    pub fn set_viewport_size(&mut self, width: i32, height: i32) {
        let size = ViewportSize::new(width, height);
        if size == self.viewport {
            return;
        }
        log::debug!(
            "viewport resized to {}x{}",
            size.width(),
            size.height()
        );
        self.viewport = size;
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.resize(size);
        }
        self.invalidate();
    }

    // --- input ---

    /// Whether a drag is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.pan.is_tracking()
    }

    /// Apply an input event. Returns true if the view changed and a redraw
    /// was requested.
    ///
    /// Dragging with the primary button pans by the pointer delta scaled by
    /// `max(1 / zoom, 1)`, so content keeps up with the pointer when zoomed
    /// out. The wheel zooms by one step per event.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { position, .. } => {
                self.pan.on_down(position);
                false
            }
            InputEvent::PointerMove { position, buttons } => {
                let Some(delta) = self.pan.on_move(position, buttons) else {
                    return false;
                };
                self.drag_by(delta);
                true
            }
            InputEvent::PointerUp { .. } => {
                self.pan.on_up();
                false
            }
            InputEvent::Wheel { delta } => {
                if delta > 0.0 {
                    self.zoom_in();
                } else {
                    self.zoom_out();
                }
                true
            }
            InputEvent::Resize { width, height } => {
                let before = self.viewport;
                self.set_viewport_size(width, height);
                before != self.viewport
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Pan steps are truncated to whole content pixels."
    )]
    fn drag_by(&mut self, delta: Vec2) {
        let sensitivity = (1.0 / self.zoom).max(1.0);
        let dx = (delta.x * sensitivity) as i32;
        let dy = (delta.y * sensitivity) as i32;
        log::trace!("pan by ({dx}, {dy})");
        self.pan_by(dx, dy);
    }

    // --- rendering ---

    /// Record a frame into the off-screen buffer and return it.
    ///
    /// The buffer is allocated on first use and reused afterwards. Nodes whose
    /// handles `source` no longer resolves are skipped, as are edges with such
    /// an endpoint.
    pub fn render<S: NodeSource + ?Sized>(&mut self, source: &S) -> &DisplayList {
        let mut buffer = self
            .buffer
            .take()
            .unwrap_or_else(|| DisplayList::new(self.viewport, self.config.label_font.clone()));
        buffer.reset(
            self.config.background,
            Affine::scale(self.zoom),
            &self.config.label_font,
        );

        let visible = PixelRect::visible(self.viewport, self.zoom);
        for &id in &self.nodes {
            let Some(node) = lookup(source, id) else {
                continue;
            };
            let rect = PixelRect::of_node(node, self.content_offset);
            if self.render_off_screen || rect.intersects(visible) {
                self.record_node(&mut buffer, node, rect);
            }
        }

        for &(from, to) in &self.edges {
            let (Some(from_node), Some(to_node)) = (lookup(source, from), lookup(source, to))
            else {
                continue;
            };
            let from_rect = PixelRect::of_node(from_node, self.content_offset);
            if !self.render_off_screen && !from_rect.intersects(visible) {
                continue;
            }
            let to_rect = PixelRect::of_node(to_node, self.content_offset);
            buffer.push(DrawCommand::Arrow {
                line: edge_segment(from_rect, to_rect, self.config.arrow_size),
                head_size: f64::from(self.config.arrow_size),
                color: self.config.edge_color,
                width: self.config.stroke_width,
            });
        }

        self.buffer.insert(buffer)
    }

    fn record_node(&self, buffer: &mut DisplayList, node: &LabeledNode, rect: PixelRect) {
        let bounds = rect.to_rect();
        buffer.push(DrawCommand::FillEllipse {
            rect: bounds,
            color: self.config.node_fill,
        });
        buffer.push(DrawCommand::StrokeEllipse {
            rect: bounds,
            color: self.config.node_stroke,
            width: self.config.stroke_width,
        });
        let min = node.min_size();
        let origin = Point::new(
            f64::from(rect.x) + f64::from(min.width / 2 + self.config.label_inset),
            f64::from(rect.y) + f64::from(min.height / 2),
        );
        buffer.push(DrawCommand::Text {
            text: node.text.clone(),
            origin,
            color: self.config.text_color,
        });
    }

    /// Render a frame, replay it onto `surface`, and clear the redraw request.
    pub fn paint<S, T>(&mut self, source: &S, surface: &mut T)
    where
        S: NodeSource + ?Sized,
        T: Surface + ?Sized,
    {
        self.render(source).replay(surface);
        self.redraw_requested = false;
    }

    /// The most recently rendered frame, if any.
    pub fn display_list(&self) -> Option<&DisplayList> {
        self.buffer.as_ref()
    }
}

fn lookup<S: NodeSource + ?Sized>(source: &S, id: NodeId) -> Option<&LabeledNode> {
    let node = source.node(id);
    if node.is_none() {
        log::trace!("skipping stale node handle {id:?}");
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButtons;
    use crate::surface::Color;
    use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font, NodeSize};

    fn arena(n: usize) -> (BinaryTree, Vec<NodeId>) {
        let measure = FixedAdvanceMeasure::default();
        let font = Font::default();
        let mut tree = BinaryTree::new();
        let ids = (0..n)
            .map(|i| {
                tree.insert(LabeledNode::with_min_size(
                    alloc::format!("{i}"),
                    NodeSize::new(34, 34),
                    &measure,
                    &font,
                ))
            })
            .collect();
        (tree, ids)
    }

    fn count(list: &DisplayList, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        list.commands().iter().filter(|c| pred(c)).count()
    }

    fn fills(list: &DisplayList) -> usize {
        count(list, |c| matches!(c, DrawCommand::FillEllipse { .. }))
    }

    fn arrows(list: &DisplayList) -> usize {
        count(list, |c| matches!(c, DrawCommand::Arrow { .. }))
    }

    #[test]
    fn add_edge_registers_missing_endpoints_once() {
        let (_, ids) = arena(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        let mut canvas = Canvas::new(100, 100);
        canvas.add_edge(a, b);
        assert_eq!(canvas.nodes(), &[a, b]);
        assert_eq!(canvas.edges(), &[(a, b)]);

        canvas.add_edge(a, c);
        canvas.add_edge(a, b);
        assert_eq!(canvas.nodes(), &[a, b, c]);
        assert_eq!(canvas.edges(), &[(a, b), (a, c), (a, b)], "duplicates kept");
    }

    #[test]
    fn remove_edge_also_removes_its_endpoints() {
        let (_, ids) = arena(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        let mut canvas = Canvas::new(100, 100);
        canvas.add_edge(a, b);
        canvas.add_edge(b, c);
        canvas.remove_edge(a, b);
        assert_eq!(canvas.nodes(), &[c]);
        assert_eq!(canvas.edges(), &[(b, c)]);
        assert!(!canvas.contains_node(b));

        canvas.add_node(a);
        canvas.add_node(a);
        canvas.remove_node(a);
        assert_eq!(canvas.nodes(), &[c, a], "only the first occurrence goes");
        assert!(canvas.contains_node(a));
        canvas.remove_node(a);
        assert!(!canvas.contains_node(a));
    }

    #[test]
    fn clear_empties_everything() {
        let (_, ids) = arena(4);
        let mut canvas = Canvas::new(100, 100);
        canvas.add_edge(ids[0], ids[1]);
        canvas.add_node(ids[2]);
        canvas.add_edge(ids[3], ids[0]);
        canvas.clear();
        assert!(canvas.nodes().is_empty());
        assert!(canvas.edges().is_empty());
    }

    #[test]
    fn mutations_request_redraw_unless_batched() {
        let (_, ids) = arena(2);
        let mut canvas = Canvas::new(100, 100);
        assert!(!canvas.redraw_requested());

        canvas.add_node(ids[0]);
        assert!(canvas.take_redraw_request());
        assert!(!canvas.take_redraw_request(), "requests coalesce");

        canvas.set_auto_invalidate(false);
        canvas.add_edge(ids[0], ids[1]);
        canvas.remove_node(ids[1]);
        canvas.clear();
        assert!(!canvas.redraw_requested());

        canvas.set_auto_invalidate(true);
        assert!(canvas.take_redraw_request(), "resuming flushes the batch");

        // Navigation always requests a redraw.
        canvas.set_auto_invalidate(false);
        canvas.go_to(Position::new(0, 0));
        assert!(canvas.redraw_requested());
    }

    #[test]
    fn go_to_centres_the_position() {
        let mut canvas = Canvas::new(801, 600);
        canvas.go_to(Position::new(130, 45));
        assert_eq!(canvas.content_offset(), Offset::new(400 - 130, 300 - 45));
        canvas.go_to(Position::new(-10, 0));
        assert_eq!(canvas.content_offset(), Offset::new(410, 300));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut canvas = Canvas::new(100, 100);
        for _ in 0..50 {
            canvas.handle_event(&InputEvent::Wheel { delta: 1.0 });
        }
        assert_eq!(canvas.zoom(), 2.0);
        for _ in 0..50 {
            canvas.handle_event(&InputEvent::Wheel { delta: -1.0 });
        }
        assert_eq!(canvas.zoom(), 0.1);
        canvas.handle_event(&InputEvent::Wheel { delta: 0.0 });
        assert_eq!(canvas.zoom(), 0.1, "zero delta zooms out");

        canvas.set_zoom(f64::NAN);
        assert_eq!(canvas.zoom(), 0.1);
        canvas.set_zoom(9.0);
        assert_eq!(canvas.zoom(), 2.0);
    }

    #[test]
    fn zoom_steps_land_on_tenths() {
        let mut canvas = Canvas::new(100, 100);
        for _ in 0..3 {
            canvas.zoom_in();
        }
        assert_eq!(canvas.zoom(), 1.3);
        for _ in 0..5 {
            canvas.zoom_out();
        }
        assert_eq!(canvas.zoom(), 0.8);
    }

    #[test]
    fn drag_pans_with_zoom_sensitivity() {
        let mut canvas = Canvas::new(100, 100);
        let down = InputEvent::PointerDown {
            position: Point::new(50.0, 50.0),
            button: PointerButtons::PRIMARY,
        };
        let drag_to = |x, y| InputEvent::PointerMove {
            position: Point::new(x, y),
            buttons: PointerButtons::PRIMARY,
        };

        canvas.handle_event(&down);
        assert!(canvas.handle_event(&drag_to(60.0, 45.0)));
        assert_eq!(canvas.content_offset(), Offset::new(10, -5));

        // Zoomed in, panning stays 1:1 in content pixels.
        canvas.set_zoom(2.0);
        canvas.handle_event(&drag_to(70.0, 45.0));
        assert_eq!(canvas.content_offset(), Offset::new(20, -5));

        // Zoomed out to 0.5, each device pixel moves two content pixels.
        canvas.set_zoom(0.5);
        canvas.handle_event(&drag_to(73.0, 44.0));
        assert_eq!(canvas.content_offset(), Offset::new(26, -7));

        canvas.handle_event(&InputEvent::PointerUp {
            position: Point::new(73.0, 44.0),
            button: PointerButtons::PRIMARY,
        });
        assert!(!canvas.is_dragging());
        assert!(!canvas.handle_event(&InputEvent::PointerMove {
            position: Point::new(0.0, 0.0),
            buttons: PointerButtons::empty(),
        }));
        assert_eq!(canvas.content_offset(), Offset::new(26, -7));
    }

    #[test]
    fn resize_clamps_and_follows_buffer() {
        let (tree, _) = arena(0);
        let mut canvas = Canvas::new(0, -5);
        assert_eq!(canvas.viewport_size(), ViewportSize::new(1, 1));
        assert!(canvas.display_list().is_none(), "buffer is lazy");

        assert_eq!(canvas.render(&tree).size(), ViewportSize::new(1, 1));
        assert!(canvas.handle_event(&InputEvent::Resize {
            width: 320,
            height: 240
        }));
        assert_eq!(
            canvas.display_list().map(DisplayList::size),
            Some(ViewportSize::new(320, 240))
        );
        assert!(!canvas.handle_event(&InputEvent::Resize {
            width: 320,
            height: 240
        }));
    }

    #[test]
    fn empty_canvas_renders_background_only() {
        let (tree, _) = arena(0);
        let mut canvas = Canvas::new(200, 100);
        canvas.go_to(Position::new(10, 10));
        let frame = canvas.render(&tree);
        assert!(frame.commands().is_empty());
        assert_eq!(frame.background(), Color::WHITE);
        assert!(frame.antialias());
    }

    #[test]
    fn render_draws_node_and_label_at_inset() {
        let (mut tree, ids) = arena(1);
        tree.set_position(ids[0], Position::new(5, 7));
        let mut canvas = Canvas::new(200, 200);
        canvas.add_node(ids[0]);
        canvas.pan_by(10, 20);
        canvas.set_zoom(0.5);

        let frame = canvas.render(&tree);
        assert_eq!(frame.transform(), Affine::scale(0.5));
        // "0" measures 7x15, so the node is 41x49 at (15, 27).
        let rect = kurbo::Rect::new(15.0, 27.0, 56.0, 76.0);
        assert_eq!(
            frame.commands(),
            &[
                DrawCommand::FillEllipse {
                    rect,
                    color: Color::WHITE
                },
                DrawCommand::StrokeEllipse {
                    rect,
                    color: Color::BLACK,
                    width: 1.0
                },
                DrawCommand::Text {
                    text: "0".into(),
                    origin: Point::new(15.0 + 17.0 + 2.0, 27.0 + 17.0),
                    color: Color::BLACK
                },
            ]
        );
    }

    #[test]
    fn culling_skips_off_screen_nodes_and_their_edges() {
        let (mut tree, ids) = arena(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        tree.set_position(a, Position::new(10, 10));
        tree.set_position(b, Position::new(3_000, 10));
        tree.set_position(c, Position::new(60, 200));

        let mut canvas = Canvas::new(400, 400);
        canvas.add_edge(a, b);
        canvas.add_edge(b, c);

        let frame = canvas.render(&tree);
        assert_eq!(fills(frame), 2, "b is off screen");
        assert_eq!(arrows(frame), 1, "edge b->c is culled with its source");

        canvas.render_off_screen = true;
        let frame = canvas.render(&tree);
        assert_eq!(fills(frame), 3);
        assert_eq!(arrows(frame), 2);

        // Zooming out brings b into view.
        canvas.render_off_screen = false;
        canvas.set_zoom(0.1);
        let frame = canvas.render(&tree);
        assert_eq!(fills(frame), 3);
    }

    #[test]
    fn edges_render_after_nodes_and_skip_stale_handles() {
        let (mut tree, ids) = arena(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        tree.set_position(b, Position::new(0, 120));
        let mut canvas = Canvas::new(400, 400);
        canvas.add_edge(a, b);
        canvas.add_edge(a, c);
        tree.remove(c);

        let frame = canvas.render(&tree);
        assert_eq!(fills(frame), 2);
        assert_eq!(arrows(frame), 1);
        assert!(matches!(
            frame.commands().last(),
            Some(DrawCommand::Arrow { .. })
        ));
    }

    #[test]
    fn paint_replays_and_clears_request() {
        #[derive(Default)]
        struct Counter {
            clears: usize,
            ellipses: usize,
        }
        impl Surface for Counter {
            fn clear(&mut self, _: Color) {
                self.clears += 1;
            }
            fn set_antialias(&mut self, _: bool) {}
            fn set_transform(&mut self, _: Affine) {}
            fn fill_ellipse(&mut self, _: kurbo::Ellipse, _: Color) {
                self.ellipses += 1;
            }
            fn stroke_ellipse(&mut self, _: kurbo::Ellipse, _: Color, _: f64) {}
            fn draw_arrow(&mut self, _: kurbo::Line, _: f64, _: Color, _: f64) {}
            fn draw_text(&mut self, _: &str, _: Point, _: &Font, _: Color) {}
        }

        let (tree, ids) = arena(2);
        let mut canvas = Canvas::new(300, 300);
        canvas.add_node(ids[0]);
        canvas.add_node(ids[1]);
        let mut surface = Counter::default();
        canvas.paint(&tree, &mut surface);
        assert_eq!((surface.clears, surface.ellipses), (1, 2));
        assert!(!canvas.redraw_requested());
    }

    #[test]
    fn with_config_validates() {
        let bad = ViewConfig {
            zoom_step: -0.1,
            ..ViewConfig::default()
        };
        assert!(Canvas::with_config(10, 10, bad).is_err());

        let custom = ViewConfig {
            initial_zoom: 0.5,
            ..ViewConfig::default()
        };
        let canvas = Canvas::with_config(10, 10, custom).unwrap();
        assert_eq!(canvas.zoom(), 0.5);
        assert_eq!(canvas.config().arrow_size, 6);
    }
}
