use std::ops;

use serde::{Deserialize, Serialize};

/// A simple struct to represent a point in a carthesian plane.
///
/// Screen space grows right (x) and down (y). Geometry works in `i32` so the
/// shake offset can push a position past the screen edges without wrapping.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> ops::Add<Self> for Point<T>
where
    T: ops::Add<Output = T>,
{
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> ops::Sub<Self> for Point<T>
where
    T: ops::Sub<Output = T>,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Axis-aligned box, half-open on both axes: `[x, x + width) × [y, y + height)`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rect {
    pub origin: Point<i32>,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, p: Point<i32>) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.height
    }

    /// Offset of `p` from the top-left corner, `None` outside the box.
    #[must_use]
    pub fn relative(&self, p: Point<i32>) -> Option<Point<i32>> {
        self.contains(p).then(|| p - self.origin)
    }

    /// Row-major index of `p` inside the box: `rel_y * width + rel_x`.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn row_major_address(&self, p: Point<i32>) -> Option<u32> {
        // Both offsets are non-negative once `relative` matched.
        self.relative(p)
            .map(|rel| (rel.y * self.width + rel.x) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point() {
        let p = Point { x: 10_i32, y: 10 };

        assert_eq!(p + Point { x: 1, y: -1 }, Point { x: 11, y: 9 });
        assert_eq!(p - Point { x: 1, y: 1 }, Point { x: 9, y: 9 });
    }

    #[test]
    fn rect_is_half_open() {
        let r = Rect::new(50, 770, 80, 50);

        assert!(r.contains(Point::new(50, 770)));
        assert!(r.contains(Point::new(129, 819)));
        assert!(!r.contains(Point::new(130, 800)));
        assert!(!r.contains(Point::new(60, 820)));
        assert!(!r.contains(Point::new(49, 800)));
    }

    #[test]
    fn row_major_address() {
        let r = Rect::new(50, 770, 80, 50);

        assert_eq!(r.row_major_address(Point::new(50, 770)), Some(0));
        assert_eq!(r.row_major_address(Point::new(51, 770)), Some(1));
        assert_eq!(r.row_major_address(Point::new(50, 771)), Some(80));
        assert_eq!(r.row_major_address(Point::new(129, 819)), Some(80 * 50 - 1));
        assert_eq!(r.row_major_address(Point::new(10, 10)), None);
    }
}
