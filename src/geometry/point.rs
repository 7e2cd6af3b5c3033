use std::ops::{Add, Div, Mul, Sub};

use super::TOLERANCE;
use crate::units::Pt;

/// A position on the page.
#[derive(Debug, Copy, Clone)]
pub struct Point {
    pub x: Pt,
    pub y: Pt,
}

impl Point {
    pub fn new(x: Pt, y: Pt) -> Point {
        Point { x, y }
    }

    /// Euclidean distance from this point to the given point.
    pub fn distance_from(self, other: Point) -> Pt {
        let dx = self.x.0 - other.x.0;
        let dy = self.y.0 - other.y.0;
        Pt((dx * dx + dy * dy).sqrt())
    }
}

impl PartialEq for Point {
    /// Points compare equal within the geometric tolerance.
    fn eq(&self, other: &Point) -> bool {
        (self.x.0 - other.x.0).abs() < TOLERANCE && (self.y.0 - other.y.0).abs() < TOLERANCE
    }
}

/// A coordinate offset, used to shift [Point]s around.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Offset {
    pub x: Pt,
    pub y: Pt,
}

impl Offset {
    /// The zero offset.
    pub const NONE: Offset = Offset {
        x: Pt(0.0),
        y: Pt(0.0),
    };

    pub fn new(x: Pt, y: Pt) -> Offset {
        Offset { x, y }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, offset: Offset) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, offset: Offset) -> Point {
        Point::new(self.x - offset.x, self.y - offset.y)
    }
}

/// The offset between two points: `end - start`.
impl Sub<Point> for Point {
    type Output = Offset;

    fn sub(self, start: Point) -> Offset {
        Offset::new(self.x - start.x, self.y - start.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, multiplier: f64) -> Offset {
        Offset::new(self.x * multiplier, self.y * multiplier)
    }
}

impl Div<f64> for Offset {
    type Output = Offset;

    fn div(self, divider: f64) -> Offset {
        Offset::new(self.x / divider, self.y / divider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point::new(Pt(x), Pt(y))
    }

    #[test]
    fn shifting_by_offsets() {
        let p = point(1.0, 2.0) + Offset::new(Pt(3.0), Pt(-1.0));
        assert_eq!(p, point(4.0, 1.0));
        assert_eq!(p - Offset::new(Pt(3.0), Pt(-1.0)), point(1.0, 2.0));
    }

    #[test]
    fn difference_of_points_is_an_offset() {
        let offset = point(5.0, 7.0) - point(2.0, 3.0);
        assert_eq!(offset, Offset::new(Pt(3.0), Pt(4.0)));
    }

    #[test]
    fn distance() {
        assert_eq!(point(0.0, 0.0).distance_from(point(3.0, 4.0)), Pt(5.0));
    }

    #[test]
    fn equality_uses_tolerance() {
        assert_eq!(point(1.0, 1.0), point(1.0 + TOLERANCE / 2.0, 1.0));
        assert_ne!(point(1.0, 1.0), point(1.0 + TOLERANCE * 2.0, 1.0));
    }

    #[test]
    fn offset_scaling() {
        let offset = Offset::new(Pt(2.0), Pt(-4.0));
        assert_eq!(offset * 2.0, Offset::new(Pt(4.0), Pt(-8.0)));
        assert_eq!(offset / 2.0, Offset::new(Pt(1.0), Pt(-2.0)));
    }
}
