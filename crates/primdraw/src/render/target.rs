use crate::scene::{CircleShape, DrawCmd, RectShape};

/// Destination for a painter's per-frame flush.
///
/// Implementors draw each shape as they receive it; callers guarantee
/// shapes arrive in the order they were issued.
pub trait RenderTarget {
    fn draw_rect(&mut self, shape: &RectShape);

    fn draw_circle(&mut self, shape: &CircleShape);

    /// Dispatches a command to the matching shape method.
    fn draw_cmd(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Rect(r) => self.draw_rect(r),
            DrawCmd::Circle(c) => self.draw_circle(c),
        }
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    #[inline]
    fn draw_rect(&mut self, shape: &RectShape) {
        (**self).draw_rect(shape);
    }

    #[inline]
    fn draw_circle(&mut self, shape: &CircleShape) {
        (**self).draw_circle(shape);
    }

    #[inline]
    fn draw_cmd(&mut self, cmd: &DrawCmd) {
        (**self).draw_cmd(cmd);
    }
}

/// Target that keeps every command it receives.
///
/// Useful for headless hosts and for asserting on rendered output.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    drawn: Vec<DrawCmd>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in render order.
    #[inline]
    pub fn drawn(&self) -> &[DrawCmd] {
        &self.drawn
    }

    /// Takes the recorded commands, leaving the target empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.drawn)
    }
}

impl RenderTarget for RecordingTarget {
    fn draw_rect(&mut self, shape: &RectShape) {
        self.drawn.push(DrawCmd::Rect(*shape));
    }

    fn draw_circle(&mut self, shape: &CircleShape) {
        self.drawn.push(DrawCmd::Circle(*shape));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Outline;

    #[test]
    fn draw_cmd_dispatches_and_records_in_order() {
        let rect = RectShape::new(Vec2::zero(), Vec2::new(1.0, 1.0), Color::WHITE, Outline::none());
        let circle = CircleShape::centered(Vec2::zero(), 2.0, Color::BLACK, Outline::none());

        let mut target = RecordingTarget::new();
        target.draw_cmd(&DrawCmd::Circle(circle));
        target.draw_cmd(&DrawCmd::Rect(rect));

        assert_eq!(target.drawn(), &[DrawCmd::Circle(circle), DrawCmd::Rect(rect)]);
        assert_eq!(target.take().len(), 2);
        assert!(target.drawn().is_empty());
    }

    #[test]
    fn mutable_reference_is_a_target() {
        fn flush(mut t: impl RenderTarget) {
            t.draw_circle(&CircleShape::centered(Vec2::zero(), 1.0, Color::WHITE, Outline::none()));
        }

        let mut target = RecordingTarget::new();
        flush(&mut target);
        assert_eq!(target.drawn().len(), 1);
    }

    /// Counts whole commands instead of dispatching per shape.
    #[derive(Default)]
    struct Batching {
        batched: usize,
        per_shape: usize,
    }

    impl RenderTarget for Batching {
        fn draw_rect(&mut self, _: &RectShape) {
            self.per_shape += 1;
        }

        fn draw_circle(&mut self, _: &CircleShape) {
            self.per_shape += 1;
        }

        fn draw_cmd(&mut self, _: &DrawCmd) {
            self.batched += 1;
        }
    }

    #[test]
    fn mutable_reference_keeps_draw_cmd_override() {
        let mut painter = crate::ShapePainter::new("p");
        painter.draw_circle(0.0, 0.0, 1.0);
        painter.draw_line(0.0, 0.0, 4.0, 0.0, 1.0);

        let mut target = Batching::default();
        painter.draw(&mut target);
        assert_eq!(target.batched, 2);
        assert_eq!(target.per_shape, 0);
    }
}
