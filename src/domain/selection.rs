//! Drag-state holder for an in-progress rectangle selection

use super::geometry::{Point, Rect};

/// Tracks the press/drag points of the current selection gesture.
///
/// The start point is recorded on press, the current point on every drag
/// sample, and `finish` normalizes the pair into a [`Rect`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Selection {
    start: Option<Point>,
    current: Option<Point>,
}

impl Selection {
    /// Record the press point and reset any previous gesture.
    pub fn press(&mut self, point: Point) {
        self.start = Some(point);
        self.current = Some(point);
    }

    /// Record a drag sample. Ignored when no press has been recorded.
    pub fn drag(&mut self, point: Point) {
        if self.start.is_some() {
            self.current = Some(point);
        }
    }

    /// The rectangle the gesture currently spans, for outline redraws.
    pub fn outline(&self) -> Option<Rect> {
        Some(Rect::from_points(self.start?, self.current?))
    }

    /// Complete the gesture at the release point and return the
    /// normalized rectangle. Clears the tracked points.
    pub fn finish(&mut self, point: Point) -> Option<Rect> {
        let start = self.start.take()?;
        self.current = None;
        Some(Rect::from_points(start, point))
    }

    /// Abandon the gesture without producing a rectangle.
    pub fn clear(&mut self) {
        self.start = None;
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_yields_normalized_rect() {
        let mut sel = Selection::default();
        sel.press(Point::new(50, 50));
        sel.drag(Point::new(30, 80));
        assert_eq!(sel.outline(), Some(Rect::new(30, 50, 20, 30)));

        let rect = sel.finish(Point::new(10, 90));
        assert_eq!(rect, Some(Rect::new(10, 50, 40, 40)));
        assert!(!sel.is_active());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut sel = Selection::default();
        assert_eq!(sel.finish(Point::new(5, 5)), None);
    }

    #[test]
    fn clear_abandons_the_gesture() {
        let mut sel = Selection::default();
        sel.press(Point::new(1, 1));
        sel.clear();
        assert!(!sel.is_active());
        assert_eq!(sel.outline(), None);
    }
}
