//! Geometric types for selection regions and coordinates

/// A screen coordinate sample recorded from a press/drag/release event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalized selection rectangle: origin plus non-negative dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize two arbitrary corner points into a rectangle.
    ///
    /// The origin is the component-wise minimum and the dimensions are the
    /// absolute differences, so all four drag quadrants produce the same
    /// rectangle. A zero-area rectangle (equal points) is valid.
    pub fn from_points(start: Point, current: Point) -> Self {
        Self {
            x: start.x.min(current.x),
            y: start.y.min(current.y),
            width: current.x.abs_diff(start.x),
            height: current.y.abs_diff(start.y),
        }
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp the rectangle to a frame of the given size.
    ///
    /// Returns `None` when the rectangle lies entirely outside the frame.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Option<Rect> {
        let left = self.x.clamp(0, frame_width as i32);
        let top = self.y.clamp(0, frame_height as i32);
        let right = self
            .x
            .saturating_add(self.width as i32)
            .clamp(0, frame_width as i32);
        let bottom = self
            .y
            .saturating_add(self.height as i32)
            .clamp(0, frame_height as i32);
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_all_four_drag_quadrants() {
        let expected = Rect::new(10, 20, 30, 40);
        // Down-right, down-left, up-right, up-left.
        let corners = [
            (Point::new(10, 20), Point::new(40, 60)),
            (Point::new(40, 20), Point::new(10, 60)),
            (Point::new(10, 60), Point::new(40, 20)),
            (Point::new(40, 60), Point::new(10, 20)),
        ];
        for (start, current) in corners {
            assert_eq!(Rect::from_points(start, current), expected);
        }
    }

    #[test]
    fn equal_points_produce_a_valid_zero_area_rect() {
        let p = Point::new(7, -3);
        let rect = Rect::from_points(p, p);
        assert_eq!(rect, Rect::new(7, -3, 0, 0));
        assert!(rect.is_empty());
    }

    #[test]
    fn clamp_trims_to_frame_bounds() {
        let rect = Rect::new(-10, -10, 50, 50);
        assert_eq!(rect.clamp_to(100, 100), Some(Rect::new(0, 0, 40, 40)));

        let rect = Rect::new(90, 90, 50, 50);
        assert_eq!(rect.clamp_to(100, 100), Some(Rect::new(90, 90, 10, 10)));
    }

    #[test]
    fn clamp_rejects_rects_outside_the_frame() {
        assert_eq!(Rect::new(200, 200, 10, 10).clamp_to(100, 100), None);
        assert_eq!(Rect::new(-50, 0, 10, 10).clamp_to(100, 100), None);
        assert_eq!(Rect::new(5, 5, 0, 0).clamp_to(100, 100), None);
    }
}
