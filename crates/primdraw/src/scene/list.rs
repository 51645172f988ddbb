use super::DrawCmd;

/// Pending draw commands for one frame.
///
/// Insertion order is render order: there is no z-sorting and no
/// deduplication. The list is drained once per frame and keeps its allocated
/// capacity for the next frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to the end of the queue.
    #[inline]
    pub fn push(&mut self, cmd: impl Into<DrawCmd>) {
        self.items.push(cmd.into());
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Discards all recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes and yields every item in insertion order.
    ///
    /// The list is empty once the iterator is dropped, even if it was not
    /// fully consumed.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = DrawCmd> + '_ {
        self.items.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{CircleShape, Outline};

    fn circle(r: f32) -> CircleShape {
        CircleShape::centered(Vec2::zero(), r, Color::WHITE, Outline::none())
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = DrawList::new();
        list.push(circle(1.0));
        list.push(circle(2.0));
        list.push(circle(3.0));

        let radii: Vec<f32> = list
            .items()
            .iter()
            .filter_map(DrawCmd::as_circle)
            .map(|c| c.radius)
            .collect();
        assert_eq!(radii, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn drain_empties_even_when_partially_consumed() {
        let mut list = DrawList::new();
        list.push(circle(1.0));
        list.push(circle(2.0));

        let first = list.drain().next();
        assert!(first.is_some());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut list = DrawList::new();
        list.push(circle(1.0));
        list.clear();
        assert_eq!(list.len(), 0);
    }
}
