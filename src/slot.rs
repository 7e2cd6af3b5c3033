use crate::fitting::Justification;
use crate::geometry::{Angle, Offset, Point};
use crate::measure::MeasuredString;
use crate::units::Pt;

/// A text slot: a positioned, sized, angled rectangle able to hold one line
/// of watermark text. All watermark text is positioned "in" a text slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextSlot {
    text_origin: Point,
    width: Pt,
    height: Pt,
    angle: Angle,
}

impl TextSlot {
    /// Creates a slot. `text_origin` is where the lower-left corner of the
    /// first character would sit if the slot were completely filled with
    /// text; `height` is one font size.
    pub fn new(text_origin: Point, width: Pt, height: Pt, angle: Angle) -> TextSlot {
        TextSlot {
            text_origin,
            width,
            height,
            angle,
        }
    }

    pub fn text_origin(&self) -> Point {
        self.text_origin
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn height(&self) -> Pt {
        self.height
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The anchor point a renderer needs for rotated text.
    ///
    /// Rotated text is not anchored at the lower-left corner of its first
    /// character: the anchor is the lower-left corner of the axis-aligned
    /// bounding box around the rotated text. Which corner of the slot that
    /// is depends on the quadrant the angle falls into.
    pub fn effective_text_origin(&self) -> Point {
        let width = self.width;
        let height = self.height;
        let sin = self.angle.sin();
        let cos = self.angle.cos();
        let mut x_offset = Pt::ZERO;
        let mut y_offset = Pt::ZERO;
        if self.angle <= Angle::DEGREES_90 {
            x_offset = height * sin;
        } else if self.angle <= Angle::DEGREES_180 {
            x_offset = width * -cos + height * sin;
            y_offset = height * -cos;
        } else if self.angle <= Angle::DEGREES_270 {
            x_offset = width * -cos;
            y_offset = width * -sin + height * -cos;
        } else {
            y_offset = width * -sin;
        }
        self.text_origin - Offset::new(x_offset, y_offset)
    }
}

/// A text slot with a measured string assigned to it.
#[derive(Debug, Clone)]
pub(crate) struct AssignedTextSlot {
    text: MeasuredString,
    slot: TextSlot,
    justification: Justification,
    fits: bool,
}

impl AssignedTextSlot {
    pub(crate) fn new(
        text: MeasuredString,
        slot: TextSlot,
        justification: Justification,
    ) -> AssignedTextSlot {
        let fits = text.length() <= slot.width();
        AssignedTextSlot {
            text,
            slot,
            justification,
            fits,
        }
    }

    pub(crate) fn text(&self) -> &MeasuredString {
        &self.text
    }

    pub(crate) fn slot(&self) -> &TextSlot {
        &self.slot
    }

    pub(crate) fn fits(&self) -> bool {
        self.fits
    }

    /// The offset that "pushes" the text along the slot to realize the
    /// requested justification.
    ///
    /// Renderers draw text rotated between 0° and 180° left-justified (the
    /// first character lands on the anchor point) and text between 180° and
    /// 360° right-justified (the last character does), so only the other
    /// justifications need an offset.
    pub(crate) fn justification_offset(&self) -> Offset {
        let angle = self.slot.angle();
        let left_justified_already = angle < Angle::RADIANS_PI;
        let right_justified_already = angle >= Angle::RADIANS_PI;
        let spare = self.slot.width() - self.text.length();
        match self.justification {
            Justification::Left if left_justified_already => Offset::NONE,
            Justification::Right if right_justified_already => Offset::NONE,
            Justification::Centre => Offset::new(
                Pt(((spare / 2.0) * angle.cos()).0.abs()),
                Pt(((spare / 2.0) * angle.sin()).0.abs()),
            ),
            // Appearing left or right justified by default, but wanted the
            // opposite way.
            _ => Offset::new(
                Pt((spare * angle.cos()).0.abs()),
                Pt((spare * angle.sin()).0.abs()),
            ),
        }
    }
}
