//! Page dimensions and the angles of their corner-to-corner diagonals.

use derive_more::Deref;

use crate::error::WatermarkError;
use crate::geometry::{Angle, Rect};
use crate::units::Pt;

/// The size of a page: a rectangle anchored with its lower-left corner at
/// the origin.
///
/// Dereferences to [Rect], so all the rectangle measurements (width,
/// height, center, diagonal, containment) are available directly.
#[derive(Debug, Copy, Clone, PartialEq, Deref)]
pub struct PageSize {
    rect: Rect,
}

impl PageSize {
    /// Creates a page of the given dimensions. Fails for non-finite or
    /// non-positive dimensions.
    pub fn new(width: Pt, height: Pt) -> Result<PageSize, WatermarkError> {
        if !width.is_finite() || width <= Pt::ZERO {
            return Err(WatermarkError::InvalidArgument("page width"));
        }
        if !height.is_finite() || height <= Pt::ZERO {
            return Err(WatermarkError::InvalidArgument("page height"));
        }
        Ok(PageSize {
            rect: Rect::new(Pt::ZERO, Pt::ZERO, width, height)?,
        })
    }

    /// An ISO A4 page in portrait orientation.
    pub fn a4() -> PageSize {
        PageSize::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4))
            .expect("a4 dimensions are valid")
    }

    /// A North American letter page in portrait orientation.
    pub fn letter() -> PageSize {
        PageSize::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0)).expect("letter dimensions are valid")
    }

    /// This page rotated a quarter turn (width and height swapped).
    pub fn rotated(&self) -> PageSize {
        PageSize {
            rect: Rect::new(Pt::ZERO, Pt::ZERO, self.height(), self.width())
                .expect("rotated page dimensions are valid"),
        }
    }

    /// Shrinks the page by the given margin on all four sides, keeping the
    /// result anchored at the origin. Fails with
    /// [MarginTooLarge](WatermarkError::MarginTooLarge) if the margin
    /// consumes an entire page dimension.
    pub fn apply_margin(&self, amount: Pt) -> Result<PageSize, WatermarkError> {
        let new_width = self.width() - amount * 2.0;
        let new_height = self.height() - amount * 2.0;
        if new_width <= Pt::ZERO {
            return Err(WatermarkError::MarginTooLarge {
                margin: amount,
                dimension: "width",
            });
        }
        if new_height <= Pt::ZERO {
            return Err(WatermarkError::MarginTooLarge {
                margin: amount,
                dimension: "height",
            });
        }
        PageSize::new(new_width, new_height)
    }

    /// Angle of the diagonal running from the bottom-left corner to the
    /// top-right corner.
    pub fn bottom_left_to_top_right_angle(&self) -> Angle {
        Angle::radians_unchecked(self.height().0.atan2(self.width().0))
    }

    /// Angle of the diagonal running from the top-left corner to the
    /// bottom-right corner.
    pub fn top_left_to_bottom_right_angle(&self) -> Angle {
        self.bottom_left_to_top_right_angle().reverse_x()
    }

    /// Angle of the diagonal running from the top-right corner to the
    /// bottom-left corner.
    pub fn top_right_to_bottom_left_angle(&self) -> Angle {
        self.bottom_left_to_top_right_angle().reverse()
    }

    /// Angle of the diagonal running from the bottom-right corner to the
    /// top-left corner.
    pub fn bottom_right_to_top_left_angle(&self) -> Angle {
        self.bottom_left_to_top_right_angle().reverse_y()
    }
}
