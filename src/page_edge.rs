//! Slot calculation for page-edge watermarks: text running along one page
//! boundary, stacked inward line by line.

use tracing::debug;

use crate::calculator::{TextSlotCalculator, TextSlotProvider};
use crate::error::WatermarkError;
use crate::fitting::Fitting;
use crate::geometry::{Angle, Offset, Point, TOLERANCE};
use crate::pagesize::PageSize;
use crate::slot::TextSlot;
use crate::units::Pt;

/// Which page edge a watermark runs along.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageEdgePosition {
    /// Along the top edge; the top of the text touches the page edge.
    Top,
    /// Along the bottom edge; the bottom of the text touches the page edge.
    Bottom,
    /// Along the left edge, reading bottom to top.
    Left,
    /// Along the right edge, reading top to bottom.
    Right,
}

impl PageEdgePosition {
    /// The text angle for this edge, before any direction reversal.
    pub fn angle(self) -> Angle {
        match self {
            PageEdgePosition::Top | PageEdgePosition::Bottom => Angle::DEGREES_0,
            PageEdgePosition::Left => Angle::DEGREES_90,
            PageEdgePosition::Right => Angle::DEGREES_270,
        }
    }

    /// Length of the page side the text runs along, or (`opposite`) of the
    /// side it stacks into.
    fn side_length(self, page_size: &PageSize, opposite: bool) -> Pt {
        let along_width = matches!(self, PageEdgePosition::Top | PageEdgePosition::Bottom);
        if along_width != opposite {
            page_size.width()
        } else {
            page_size.height()
        }
    }

    /// Unit direction each stacked line steps in: perpendicular to the
    /// edge, pointing into the page.
    fn logical_offset(self) -> Offset {
        match self {
            PageEdgePosition::Right => Offset::new(Pt(-1.0), Pt(0.0)),
            PageEdgePosition::Left => Offset::new(Pt(1.0), Pt(0.0)),
            PageEdgePosition::Top => Offset::new(Pt(0.0), Pt(-1.0)),
            PageEdgePosition::Bottom => Offset::new(Pt(0.0), Pt(1.0)),
        }
    }
}

/// Calculates the ladder of slots stacked inward from one page edge.
pub struct PageEdgeTextSlotCalculator {
    page_size: PageSize,
    position: PageEdgePosition,
    angle: Angle,
    fitting: Fitting,
    reverse_direction: bool,
}

impl PageEdgeTextSlotCalculator {
    /// `angle` is the actual text angle, i.e. [PageEdgePosition::angle],
    /// already reversed when the text runs in the opposite direction.
    pub fn new(
        page_size: PageSize,
        position: PageEdgePosition,
        angle: Angle,
        fitting: Fitting,
        reverse_direction: bool,
    ) -> PageEdgeTextSlotCalculator {
        PageEdgeTextSlotCalculator {
            page_size,
            position,
            angle,
            fitting,
            reverse_direction,
        }
    }
}

impl TextSlotCalculator for PageEdgeTextSlotCalculator {
    fn calculate_slots(&self, font_size: Pt) -> Box<dyn TextSlotProvider> {
        let offset = self.position.logical_offset() * font_size.0;
        let width = self.position.side_length(&self.page_size, false);
        let stack_space = self.position.side_length(&self.page_size, true);

        let top_left = Point::new(self.page_size.left(), self.page_size.top());
        let top_right = Point::new(self.page_size.right(), self.page_size.top());
        let bottom_left = Point::new(self.page_size.left(), self.page_size.bottom());
        let bottom_right = Point::new(self.page_size.right(), self.page_size.bottom());

        // The text origin of the first line: the lower-left corner of its
        // first character, which corner that is depending on the edge and
        // the reading direction.
        let start = match self.position {
            PageEdgePosition::Top => {
                if self.reverse_direction {
                    top_right
                } else {
                    top_left + offset
                }
            }
            PageEdgePosition::Bottom => {
                if self.reverse_direction {
                    bottom_right + offset
                } else {
                    bottom_left
                }
            }
            PageEdgePosition::Left => {
                if self.reverse_direction {
                    top_left
                } else {
                    bottom_left + offset
                }
            }
            PageEdgePosition::Right => {
                if self.reverse_direction {
                    bottom_right
                } else {
                    top_right + offset
                }
            }
        };

        // As many whole lines as fit across the page, plus one partial line
        // if overflowing text is tolerated.
        let full_slots = (stack_space.0 / font_size.0).floor() as usize;
        let remainder = stack_space.0 - full_slots as f64 * font_size.0;
        let partial_slot = self.fitting.has_overflow() && remainder > TOLERANCE;
        let count = full_slots + usize::from(partial_slot);
        debug!(
            count,
            partial = partial_slot,
            font_size = %font_size,
            "calculated page edge slot ladder"
        );

        let mut slots = Vec::with_capacity(count);
        let mut origin = start;
        for _ in 0..count {
            slots.push(TextSlot::new(origin, width, font_size, self.angle));
            origin = origin + offset;
        }

        Box::new(PageEdgeTextSlotProvider {
            slots,
            position: self.position,
            reverse_direction: self.reverse_direction,
        })
    }
}

/// Serves page-edge slots: the `n` closest to the edge, in reading order.
struct PageEdgeTextSlotProvider {
    slots: Vec<TextSlot>,
    position: PageEdgePosition,
    reverse_direction: bool,
}

impl TextSlotProvider for PageEdgeTextSlotProvider {
    fn text_slots(&self, count: usize) -> Result<Vec<TextSlot>, WatermarkError> {
        if count > self.slots.len() {
            return Err(WatermarkError::InsufficientSlots {
                requested: count,
                available: self.slots.len(),
            });
        }
        let taken = &self.slots[..count];
        // The bottom edge is the odd one out: its slots stack upward, so
        // reading order (top line first) is the reverse of stacking order.
        let reversed = match self.position {
            PageEdgePosition::Bottom => !self.reverse_direction,
            _ => self.reverse_direction,
        };
        Ok(if reversed {
            taken.iter().rev().copied().collect()
        } else {
            taken.to_vec()
        })
    }
}
