//! The watermark types callers actually construct, and the layout payload
//! they produce for a document-rendering layer.

use tracing::debug;

use crate::banner::BannerTextSlotCalculator;
use crate::colour::Colour;
use crate::engine::TextPositionCalculator;
use crate::error::WatermarkError;
use crate::fitting::{Fitting, Justification, OverflowSelection};
use crate::font::Font;
use crate::geometry::{Angle, Offset};
use crate::page_edge::{PageEdgePosition, PageEdgeTextSlotCalculator};
use crate::pagesize::PageSize;
use crate::position::PositionedTextCollection;
use crate::sizing::Size;

/// Stylistic attributes of watermark text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Appearance {
    colour: Colour,
    opacity: f32,
    background: bool,
}

impl Appearance {
    /// Fails if the opacity falls outside `[0, 1]`.
    pub fn new(colour: Colour, opacity: f32, background: bool) -> Result<Appearance, WatermarkError> {
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(WatermarkError::InvalidOpacity(opacity));
        }
        Ok(Appearance {
            colour,
            opacity,
            background,
        })
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// True if the watermark should render behind the page content rather
    /// than on top of it.
    pub fn is_background(&self) -> bool {
        self.background
    }
}

/// How a banner watermark is orientated on the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BannerAngle {
    /// Along the diagonal from the bottom-left corner to the top-right.
    BottomLeftToTopRight,
    /// Along the diagonal from the top-left corner to the bottom-right.
    TopLeftToBottomRight,
    /// Along the diagonal from the top-right corner to the bottom-left.
    TopRightToBottomLeft,
    /// Along the diagonal from the bottom-right corner to the top-left.
    BottomRightToTopLeft,
    /// An explicit angle: 0° runs left to right, 90° bottom to top. Angles
    /// between 90° and 270° render the text upside down.
    Custom(Angle),
}

impl BannerAngle {
    /// The effective banner angle on the given page.
    pub fn angle(&self, page_size: &PageSize) -> Angle {
        match self {
            BannerAngle::BottomLeftToTopRight => page_size.bottom_left_to_top_right_angle(),
            BannerAngle::TopLeftToBottomRight => page_size.top_left_to_bottom_right_angle(),
            BannerAngle::TopRightToBottomLeft => page_size.top_right_to_bottom_left_angle(),
            BannerAngle::BottomRightToTopLeft => page_size.bottom_right_to_top_left_angle(),
            BannerAngle::Custom(angle) => *angle,
        }
    }
}

/// Everything a rendering layer needs to draw one watermark on one page:
/// the positioned lines with their font size, plus the overall angle and
/// appearance.
#[derive(Debug, Clone)]
pub struct WatermarkLayout {
    elements: PositionedTextCollection,
    angle: Angle,
    font_name: String,
    colour: Colour,
    opacity: f32,
    background: bool,
}

impl WatermarkLayout {
    pub fn elements(&self) -> &PositionedTextCollection {
        &self.elements
    }

    /// The rotation to draw every line at.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_background(&self) -> bool {
        self.background
    }
}

/// Text placed across the middle of the page at a chosen angle.
pub struct BannerTextWatermark {
    text: String,
    font: Font,
    appearance: Appearance,
    justification: Justification,
    fitting: Fitting,
    margin: Size,
    angle: BannerAngle,
}

impl BannerTextWatermark {
    /// Creates a banner watermark. The text may contain line breaks for
    /// multi-line watermarks; it must not be empty.
    pub fn new(
        text: impl Into<String>,
        font: Font,
        appearance: Appearance,
        justification: Justification,
        fitting: Fitting,
        margin: Size,
        angle: BannerAngle,
    ) -> Result<BannerTextWatermark, WatermarkError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(WatermarkError::EmptyText);
        }
        Ok(BannerTextWatermark {
            text,
            font,
            appearance,
            justification,
            fitting,
            margin,
            angle,
        })
    }

    /// Lays the watermark out for one page.
    pub fn layout(&self, page_size: &PageSize) -> Result<WatermarkLayout, WatermarkError> {
        let font_size = self.font.size(page_size);
        let margin = self.margin.effective_size(page_size);
        // An oversized margin fails here, before any slot calculation.
        let inner_page = page_size.apply_margin(margin)?;
        debug!(page = ?(page_size.width(), page_size.height()), margin = %margin, "laying out banner watermark");

        let calculator =
            BannerTextSlotCalculator::new(inner_page, self.angle.angle(&inner_page));
        let engine = TextPositionCalculator::new(
            &calculator,
            &self.font,
            self.justification,
            self.fitting,
            OverflowSelection::KeepMiddle,
        );
        // Positions come back relative to the margin-reduced page; shift
        // them back into full-page coordinates.
        let elements = engine
            .positioned_text(&self.text, font_size)?
            .offset_by(Offset::new(margin, margin));

        Ok(WatermarkLayout {
            elements,
            angle: self.angle.angle(page_size),
            font_name: self.font.name().to_string(),
            colour: self.appearance.colour(),
            opacity: self.appearance.opacity(),
            background: self.appearance.is_background(),
        })
    }
}

/// Text running along one page edge, optionally stacked inward over
/// multiple lines.
pub struct PageEdgeTextWatermark {
    text: String,
    font: Font,
    appearance: Appearance,
    justification: Justification,
    fitting: Fitting,
    margin: Size,
    position: PageEdgePosition,
    reverse_direction: bool,
}

impl PageEdgeTextWatermark {
    /// Creates a page-edge watermark. `reverse_direction` runs the text the
    /// opposite way along the edge, which renders it upside down for the
    /// top and bottom edges.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: impl Into<String>,
        font: Font,
        appearance: Appearance,
        justification: Justification,
        fitting: Fitting,
        margin: Size,
        position: PageEdgePosition,
        reverse_direction: bool,
    ) -> Result<PageEdgeTextWatermark, WatermarkError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(WatermarkError::EmptyText);
        }
        Ok(PageEdgeTextWatermark {
            text,
            font,
            appearance,
            justification,
            fitting,
            margin,
            position,
            reverse_direction,
        })
    }

    /// The text angle: orthogonal, determined by the edge and direction.
    pub fn angle(&self) -> Angle {
        if self.reverse_direction {
            self.position.angle().reverse()
        } else {
            self.position.angle()
        }
    }

    /// Lays the watermark out for one page.
    pub fn layout(&self, page_size: &PageSize) -> Result<WatermarkLayout, WatermarkError> {
        let font_size = self.font.size(page_size);
        let margin = self.margin.effective_size(page_size);
        let inner_page = page_size.apply_margin(margin)?;
        debug!(page = ?(page_size.width(), page_size.height()), position = ?self.position, "laying out page edge watermark");

        let calculator = PageEdgeTextSlotCalculator::new(
            inner_page,
            self.position,
            self.angle(),
            self.fitting,
            self.reverse_direction,
        );
        let engine = TextPositionCalculator::new(
            &calculator,
            &self.font,
            self.justification,
            self.fitting,
            OverflowSelection::KeepFirst,
        );
        let elements = engine
            .positioned_text(&self.text, font_size)?
            .offset_by(Offset::new(margin, margin));

        Ok(WatermarkLayout {
            elements,
            angle: self.angle(),
            font_name: self.font.name().to_string(),
            colour: self.appearance.colour(),
            opacity: self.appearance.opacity(),
            background: self.appearance.is_background(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn opacity_is_validated_eagerly() {
        assert!(Appearance::new(colours::LIGHT_GREY, 0.5, false).is_ok());
        assert!(Appearance::new(colours::LIGHT_GREY, 0.0, false).is_ok());
        assert!(Appearance::new(colours::LIGHT_GREY, 1.0, true).is_ok());
        assert!(matches!(
            Appearance::new(colours::LIGHT_GREY, 1.5, false),
            Err(WatermarkError::InvalidOpacity(_))
        ));
        assert!(Appearance::new(colours::LIGHT_GREY, f32::NAN, false).is_err());
    }

    #[test]
    fn banner_angles_follow_the_page_diagonals() {
        let page = PageSize::new(crate::units::Pt(100.0), crate::units::Pt(100.0)).unwrap();
        assert_eq!(
            BannerAngle::BottomLeftToTopRight.angle(&page),
            Angle::degrees(45.0).unwrap()
        );
        assert_eq!(
            BannerAngle::TopRightToBottomLeft.angle(&page),
            Angle::degrees(225.0).unwrap()
        );
        assert_eq!(
            BannerAngle::Custom(Angle::DEGREES_90).angle(&page),
            Angle::DEGREES_90
        );
    }
}
