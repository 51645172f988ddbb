//! The shape painter object.
//!
//! Scripted logic issues `draw_*` calls during a frame; each call snapshots the
//! current [`StyleState`], resolves coordinates against the object's position
//! and appends one command. Once per frame the host calls
//! [`ShapePainter::draw`], which replays the queue in order and empties it.

use crate::coords::Vec2;
use crate::paint::Rgb;
use crate::render::RenderTarget;
use crate::scene::{DrawCmd, DrawList, RectShape};
use crate::style::{CoordinateMode, StyleState};
use crate::template::ShapePainterTemplate;

/// Runtime instance of a shape painter.
///
/// Owns its style, its pending command queue, and the slice of host object
/// state the painter reads (name, position, visibility).
#[derive(Debug, Clone, Default)]
pub struct ShapePainter {
    name: String,
    position: Vec2,
    hidden: bool,
    style: StyleState,
    pending: DrawList,
}

impl ShapePainter {
    /// Creates a painter with default style at the scene origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Builds a runtime instance from its design-time template.
    pub fn from_template(name: impl Into<String>, template: &ShapePainterTemplate) -> Self {
        Self { name: name.into(), style: template.style(), ..Self::default() }
    }

    /// Snapshots the current style as a template.
    pub fn to_template(&self) -> ShapePainterTemplate {
        ShapePainterTemplate::from(&self.style)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    // ── host object state ─────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides (`true`) or shows (`false`) the object. Hidden painters keep
    /// accepting commands but discard them at flush time.
    pub fn hide(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    pub fn set_fill_color(&mut self, r: i32, g: i32, b: i32) {
        self.style.set_fill_color(r, g, b);
    }

    pub fn set_fill_color_str(&mut self, spec: &str) {
        self.style.set_fill_color_str(spec);
    }

    pub fn set_fill_opacity(&mut self, opacity: f32) {
        self.style.set_fill_opacity(opacity);
    }

    pub fn set_outline_color(&mut self, r: i32, g: i32, b: i32) {
        self.style.set_outline_color(r, g, b);
    }

    pub fn set_outline_color_str(&mut self, spec: &str) {
        self.style.set_outline_color_str(spec);
    }

    pub fn set_outline_opacity(&mut self, opacity: f32) {
        self.style.set_outline_opacity(opacity);
    }

    pub fn set_outline_size(&mut self, size: i32) {
        self.style.set_outline_size(size);
    }

    pub fn set_coordinates_absolute(&mut self, absolute: bool) {
        self.style.set_coordinates_absolute(absolute);
    }

    #[inline]
    pub fn fill_color(&self) -> Rgb {
        self.style.fill_color()
    }

    #[inline]
    pub fn outline_color(&self) -> Rgb {
        self.style.outline_color()
    }

    #[inline]
    pub fn are_coordinates_absolute(&self) -> bool {
        self.style.are_coordinates_absolute()
    }

    // ── issuing ───────────────────────────────────────────────────────────

    /// Commands waiting for the next [`draw`](Self::draw), in issue order.
    #[inline]
    pub fn pending(&self) -> &[DrawCmd] {
        self.pending.items()
    }

    /// Queues a rectangle spanning `(x, y)`–`(x2, y2)`.
    ///
    /// The rectangle is anchored at `(x, y)`; if `x2 < x` or `y2 < y` the size
    /// is negative and the rectangle is flipped across that corner.
    pub fn draw_rectangle(&mut self, x: f32, y: f32, x2: f32, y2: f32) {
        let shape = RectShape::new(
            self.resolve(x, y),
            Vec2::new(x2 - x, y2 - y),
            self.style.fill(),
            self.style.outline(),
        );
        log::trace!("{}: queue rect {:?}", self.name, shape);
        self.pending.push_rect(shape);
    }

    /// Queues a `thickness`-wide line from `(x, y)` to `(x2, y2)`.
    pub fn draw_line(&mut self, x: f32, y: f32, x2: f32, y2: f32, thickness: f32) {
        let (start, end) = (self.resolve(x, y), self.resolve(x2, y2));
        log::trace!("{}: queue line {:?} -> {:?} ({thickness})", self.name, start, end);
        self.pending.push_line(start, end, thickness, self.style.fill(), self.style.outline());
    }

    /// Queues a circle centered on `(x, y)`.
    pub fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        let center = self.resolve(x, y);
        log::trace!("{}: queue circle at {:?} r={radius}", self.name, center);
        self.pending.push_circle(center, radius, self.style.fill(), self.style.outline());
    }

    // Offsets by the object position unless coordinates are absolute.
    #[inline]
    fn resolve(&self, x: f32, y: f32) -> Vec2 {
        let point = Vec2::new(x, y);
        match self.style.coordinate_mode() {
            CoordinateMode::Absolute => point,
            CoordinateMode::Relative => point + self.position,
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Renders and clears the pending queue.
    ///
    /// A hidden painter clears its queue without touching `target`. Always
    /// returns `true`.
    pub fn draw(&mut self, mut target: impl RenderTarget) -> bool {
        if self.hidden {
            if !self.pending.is_empty() {
                log::debug!("{}: hidden, discarding {} commands", self.name, self.pending.len());
            }
            self.pending.clear();
            return true;
        }

        log::trace!("{}: flushing {} commands", self.name, self.pending.len());
        for cmd in self.pending.drain() {
            target.draw_cmd(&cmd);
        }

        true
    }
}
