use crate::error::WatermarkError;
use crate::geometry::validate_argument;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// How a [Size] value should be interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sizing {
    /// The value is an absolute measurement in points.
    Absolute,
    /// The value is a fraction of the page width.
    RelativeToWidth,
    /// The value is a fraction of the page height.
    RelativeToHeight,
    /// The value is a fraction of the average of the page side lengths.
    RelativeToAverageSideLength,
    /// The value is a fraction of the corner-to-corner diagonal length.
    RelativeToDiagonalSize,
    /// The value is a fraction of the shorter page side.
    RelativeToShorterSide,
    /// The value is a fraction of the longer page side.
    RelativeToLongerSide,
}

impl Sizing {
    /// The page measurement a relative size value is multiplied by.
    fn factor(self, page_size: &PageSize) -> Pt {
        match self {
            Sizing::Absolute => Pt(1.0),
            Sizing::RelativeToWidth => page_size.width(),
            Sizing::RelativeToHeight => page_size.height(),
            Sizing::RelativeToAverageSideLength => page_size.average_side_length(),
            Sizing::RelativeToDiagonalSize => page_size.diagonal_length(),
            Sizing::RelativeToShorterSide => page_size.shorter_side_length(),
            Sizing::RelativeToLongerSide => page_size.longer_side_length(),
        }
    }
}

/// A size that may be absolute, or relative to the page it ends up on.
/// Used for font sizes and margins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Size {
    value: f64,
    sizing: Sizing,
}

impl Size {
    /// An absolute size in points. Fails if the value is infinite or NaN.
    pub fn absolute(value: Pt) -> Result<Size, WatermarkError> {
        validate_argument(value.0, "size value")?;
        Ok(Size {
            value: value.0,
            sizing: Sizing::Absolute,
        })
    }

    /// A size relative to a page measurement, e.g.
    /// `Size::relative(0.05, Sizing::RelativeToDiagonalSize)` for 5% of
    /// the page diagonal. Fails if the value is infinite or NaN.
    pub fn relative(value: f64, sizing: Sizing) -> Result<Size, WatermarkError> {
        validate_argument(value, "size value")?;
        Ok(Size { value, sizing })
    }

    /// Resolves this size against a concrete page.
    pub fn effective_size(&self, page_size: &PageSize) -> Pt {
        self.sizing.factor(page_size) * self.value
    }
}
