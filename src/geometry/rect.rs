use super::{validate_argument, Angle, Line, Point, TOLERANCE};
use crate::error::WatermarkError;
use crate::units::Pt;

/// An axis-aligned rectangle. Always normalized: `left <= right` and
/// `bottom <= top`, whichever order the corners are given in.
#[derive(Debug, Copy, Clone)]
pub struct Rect {
    left: Pt,
    bottom: Pt,
    right: Pt,
    top: Pt,
}

impl Rect {
    /// Creates a rectangle from two opposite corners. Fails if any
    /// coordinate is infinite or NaN.
    pub fn new(left: Pt, bottom: Pt, right: Pt, top: Pt) -> Result<Rect, WatermarkError> {
        validate_argument(left.0, "left")?;
        validate_argument(bottom.0, "bottom")?;
        validate_argument(right.0, "right")?;
        validate_argument(top.0, "top")?;
        Ok(Rect {
            left: left.min(right),
            bottom: bottom.min(top),
            right: left.max(right),
            top: bottom.max(top),
        })
    }

    pub fn left(&self) -> Pt {
        self.left
    }

    pub fn bottom(&self) -> Pt {
        self.bottom
    }

    pub fn right(&self) -> Pt {
        self.right
    }

    pub fn top(&self) -> Pt {
        self.top
    }

    pub fn width(&self) -> Pt {
        self.right - self.left
    }

    pub fn height(&self) -> Pt {
        self.top - self.bottom
    }

    /// Center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// The distance between opposite corners of this rectangle.
    pub fn diagonal_length(&self) -> Pt {
        let w = self.width().0;
        let h = self.height().0;
        Pt((w * w + h * h).sqrt())
    }

    /// The average of the two side lengths.
    pub fn average_side_length(&self) -> Pt {
        (self.width() + self.height()) / 2.0
    }

    /// The shorter side length.
    pub fn shorter_side_length(&self) -> Pt {
        self.width().min(self.height())
    }

    /// The longer side length.
    pub fn longer_side_length(&self) -> Pt {
        self.width().max(self.height())
    }

    /// The four infinite lines that the edges of this rectangle lie on:
    /// bottom, left, top, right.
    pub fn lines(&self) -> [Line; 4] {
        let bottom_left = Point::new(self.left, self.bottom);
        let top_right = Point::new(self.right, self.top);
        [
            Line::new(bottom_left, Angle::DEGREES_0),
            Line::new(bottom_left, Angle::DEGREES_90),
            Line::new(top_right, Angle::DEGREES_0),
            Line::new(top_right, Angle::DEGREES_90),
        ]
    }

    /// True if the point is within, or on the edge of, this rectangle
    /// (within tolerance).
    pub fn contains(&self, point: Point) -> bool {
        point.x.0 > self.left.0 - TOLERANCE
            && point.x.0 < self.right.0 + TOLERANCE
            && point.y.0 > self.bottom.0 - TOLERANCE
            && point.y.0 < self.top.0 + TOLERANCE
    }

    /// Shrinks this rectangle by the given amount on every side. Fails if
    /// the amount is more than half of the width or height.
    pub fn deflate(&self, amount: Pt) -> Result<Rect, WatermarkError> {
        let twice = amount * 2.0;
        if twice > self.width() {
            return Err(WatermarkError::MarginTooLarge {
                margin: amount,
                dimension: "width",
            });
        }
        if twice > self.height() {
            return Err(WatermarkError::MarginTooLarge {
                margin: amount,
                dimension: "height",
            });
        }
        Rect::new(
            self.left + amount,
            self.bottom + amount,
            self.right - amount,
            self.top - amount,
        )
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Rect) -> bool {
        (self.left.0 - other.left.0).abs() < TOLERANCE
            && (self.bottom.0 - other.bottom.0).abs() < TOLERANCE
            && (self.right.0 - other.right.0).abs() < TOLERANCE
            && (self.top.0 - other.top.0).abs() < TOLERANCE
    }
}
