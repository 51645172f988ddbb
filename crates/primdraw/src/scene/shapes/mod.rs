pub(crate) mod circle;
pub(crate) mod rect;

use crate::paint::Color;

/// Stroke drawn along the edge of a shape.
///
/// `thickness` is passed through unvalidated; targets decide how zero or
/// negative thickness renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub thickness: f32,
    pub color: Color,
}

impl Outline {
    #[inline]
    pub const fn new(thickness: f32, color: Color) -> Self {
        Self { thickness, color }
    }

    /// Zero-thickness outline.
    #[inline]
    pub const fn none() -> Self {
        Self::new(0.0, Color::BLACK)
    }
}
