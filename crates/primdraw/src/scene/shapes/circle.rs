use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, Outline};

/// Circle draw payload.
///
/// Geometry: the local point `origin` (measured from the top-left of the
/// circle's bounding box) is placed at `position`. Circles built with
/// [`CircleShape::centered`] use `origin = (radius, radius)`, so `position`
/// is the center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleShape {
    pub position: Vec2,
    pub radius: f32,
    pub origin: Vec2,
    pub fill: Color,
    pub outline: Outline,
}

impl CircleShape {
    #[inline]
    pub fn centered(center: Vec2, radius: f32, fill: Color, outline: Outline) -> Self {
        Self {
            position: center,
            radius,
            origin: Vec2::new(radius, radius),
            fill,
            outline,
        }
    }

    /// Scene-space center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position - self.origin + Vec2::new(self.radius, self.radius)
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Outline) {
        self.push(CircleShape::centered(center, radius, fill, outline));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_origin_is_radius() {
        let c = CircleShape::centered(Vec2::new(4.0, 5.0), 3.0, Color::WHITE, Outline::none());
        assert_eq!(c.origin, Vec2::new(3.0, 3.0));
        assert_eq!(c.center(), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn center_honors_custom_origin() {
        let mut c = CircleShape::centered(Vec2::new(10.0, 10.0), 2.0, Color::WHITE, Outline::none());
        c.origin = Vec2::zero();
        assert_eq!(c.center(), Vec2::new(12.0, 12.0));
    }

    #[test]
    fn negative_radius_is_kept() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::zero(), -1.0, Color::WHITE, Outline::none());
        assert_eq!(list.items()[0].as_circle().map(|c| c.radius), Some(-1.0));
    }
}
