use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, Outline};

/// Rectangle draw payload.
///
/// Geometry: the local point `origin` (measured from the rectangle's
/// unrotated top-left corner) is placed at `position`, and `rotation`
/// (degrees) pivots around it. `size` may be negative, which flips the
/// rectangle across its anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectShape {
    pub position: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub fill: Color,
    pub outline: Outline,
}

impl RectShape {
    /// Axis-aligned rectangle anchored at its top-left corner.
    #[inline]
    pub fn new(position: Vec2, size: Vec2, fill: Color, outline: Outline) -> Self {
        Self { position, size, origin: Vec2::zero(), rotation: 0.0, fill, outline }
    }

    /// Thin rectangle covering the segment `start`–`end`.
    ///
    /// The rectangle is `distance × thickness`, centered on the segment
    /// midpoint and rotated to the segment's direction. A zero-length segment
    /// yields a `0 × thickness` rectangle with rotation `0`.
    pub fn line(start: Vec2, end: Vec2, thickness: f32, fill: Color, outline: Outline) -> Self {
        let length = start.distance(end);
        let delta = end - start;
        Self {
            position: start.midpoint(end),
            size: Vec2::new(length, thickness),
            origin: Vec2::new(length / 2.0, thickness / 2.0),
            rotation: delta.y.atan2(delta.x).to_degrees(),
            fill,
            outline,
        }
    }

    /// Maps a point in the rectangle's local space to scene space.
    #[inline]
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        (local - self.origin).rotated(self.rotation) + self.position
    }

    /// Scene-space corners in local order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let Vec2 { x: w, y: h } = self.size;
        [
            Vec2::zero(),
            Vec2::new(w, 0.0),
            Vec2::new(w, h),
            Vec2::new(0.0, h),
        ]
        .map(|p| self.transform_point(p))
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, shape: RectShape) {
        self.push(shape);
    }

    /// Records a line segment as a rotated rectangle.
    #[inline]
    pub fn push_line(&mut self, start: Vec2, end: Vec2, thickness: f32, fill: Color, outline: Outline) {
        self.push(RectShape::line(start, end, thickness, fill, outline));
    }
}
