use super::{Angle, Point, TOLERANCE};
use crate::units::Pt;

/// An infinite line, defined by a point it passes through and an angle.
///
/// The gradient is `tan(angle)`. Verticals are detected from the angle
/// itself (90°/270°) rather than by looking for an infinite gradient,
/// because `tan` of the closest representable value to π/2 merely returns
/// a very large finite number.
#[derive(Debug, Copy, Clone)]
pub struct Line {
    point: Point,
    angle: Angle,
    gradient: f64,
    constant: f64,
}

impl Line {
    pub fn new(point: Point, angle: Angle) -> Line {
        let gradient = angle.to_radians().value().tan();
        let constant = point.y.0 - gradient * point.x.0;
        Line {
            point,
            angle,
            gradient,
            constant,
        }
    }

    /// The point this line was defined through.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The angle this line runs at.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// True if this line is vertical.
    pub fn is_vertical(&self) -> bool {
        self.angle.is_vertical()
    }

    /// A parallel line through a different point.
    pub fn with_point(&self, point: Point) -> Line {
        Line::new(point, self.angle)
    }

    fn y_at(&self, x: f64) -> f64 {
        self.gradient * x + self.constant
    }

    /// Where this line crosses the given line, or `None` for parallel (or
    /// coincident) lines.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        match (self.is_vertical(), other.is_vertical()) {
            // Parallel verticals never cross; coincident ones cross
            // everywhere, which is just as useless.
            (true, true) => None,
            (true, false) => {
                let x = self.point.x.0;
                Some(Point::new(Pt(x), Pt(other.y_at(x))))
            }
            (false, true) => {
                let x = other.point.x.0;
                Some(Point::new(Pt(x), Pt(self.y_at(x))))
            }
            (false, false) => {
                let gradient_diff = self.gradient - other.gradient;
                if gradient_diff.abs() < TOLERANCE {
                    return None;
                }
                // The lines cross where:
                //   thisGradient*x + thisConstant = otherGradient*x + otherConstant
                let x = (other.constant - self.constant) / gradient_diff;
                Some(Point::new(Pt(x), Pt(self.y_at(x))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point::new(Pt(x), Pt(y))
    }

    #[test]
    fn crossing_diagonals() {
        let a = Line::new(point(0.0, 0.0), Angle::degrees(45.0).unwrap());
        let b = Line::new(point(0.0, 10.0), Angle::degrees(315.0).unwrap());
        assert_eq!(a.intersection(&b), Some(point(5.0, 5.0)));
    }

    #[test]
    fn vertical_crossing_horizontal() {
        let vertical = Line::new(point(3.0, 0.0), Angle::DEGREES_90);
        let horizontal = Line::new(point(0.0, 7.0), Angle::DEGREES_0);
        assert_eq!(vertical.intersection(&horizontal), Some(point(3.0, 7.0)));
        assert_eq!(horizontal.intersection(&vertical), Some(point(3.0, 7.0)));
    }

    #[test]
    fn vertical_crossing_diagonal() {
        let vertical = Line::new(point(2.0, 0.0), Angle::DEGREES_270);
        let diagonal = Line::new(point(0.0, 0.0), Angle::degrees(45.0).unwrap());
        assert_eq!(vertical.intersection(&diagonal), Some(point(2.0, 2.0)));
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        let a = Line::new(point(0.0, 0.0), Angle::degrees(30.0).unwrap());
        let b = Line::new(point(0.0, 5.0), Angle::degrees(30.0).unwrap());
        assert_eq!(a.intersection(&b), None);

        let va = Line::new(point(1.0, 0.0), Angle::DEGREES_90);
        let vb = Line::new(point(2.0, 0.0), Angle::DEGREES_90);
        assert_eq!(va.intersection(&vb), None);
    }

    #[test]
    fn reversed_angle_gives_the_same_line() {
        let a = Line::new(point(1.0, 1.0), Angle::degrees(45.0).unwrap());
        let b = Line::new(point(0.0, 4.0), Angle::degrees(225.0).unwrap());
        // Same gradient either way round, so the crossing is identical.
        let forward = Line::new(point(0.0, 4.0), Angle::degrees(45.0).unwrap());
        assert_eq!(a.intersection(&b), a.intersection(&forward));
    }
}
