use crate::scene::shapes::circle::CircleShape;
use crate::scene::shapes::rect::RectShape;

/// Renderer-agnostic draw command.
///
/// Commands own a by-value snapshot of the style they were issued with, so
/// later style changes never reach already-queued commands.
///
/// Lines are not a separate kind; they are emitted as rotated [`RectShape`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectShape),
    Circle(CircleShape),
}

impl DrawCmd {
    #[inline]
    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            DrawCmd::Rect(r) => Some(r),
            DrawCmd::Circle(_) => None,
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&CircleShape> {
        match self {
            DrawCmd::Circle(c) => Some(c),
            DrawCmd::Rect(_) => None,
        }
    }
}

impl From<RectShape> for DrawCmd {
    fn from(shape: RectShape) -> Self {
        DrawCmd::Rect(shape)
    }
}

impl From<CircleShape> for DrawCmd {
    fn from(shape: CircleShape) -> Self {
        DrawCmd::Circle(shape)
    }
}
