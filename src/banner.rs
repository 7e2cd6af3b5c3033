//! Slot calculation for banner watermarks: text running across the middle
//! of the page at an arbitrary angle.

use tracing::debug;

use crate::calculator::{TextSlotCalculator, TextSlotProvider};
use crate::error::WatermarkError;
use crate::geometry::{Angle, Line, Offset, Point};
use crate::pagesize::PageSize;
use crate::slot::TextSlot;
use crate::units::Pt;

/// Calculates the positions of banner text slots: lines parallel to the
/// banner angle, radiating out from the page center, clipped to the page.
pub struct BannerTextSlotCalculator {
    page_size: PageSize,
    angle: Angle,
    reversed_angle: Angle,
}

impl BannerTextSlotCalculator {
    pub fn new(page_size: PageSize, angle: Angle) -> BannerTextSlotCalculator {
        BannerTextSlotCalculator {
            page_size,
            angle,
            reversed_angle: angle.reverse(),
        }
    }

    /// Walks the ladder of candidate lines outward from `start`, collecting
    /// a slot per viable line. The ladder ends in each direction as soon as
    /// a line yields no slot, so the result is ordered top-to-bottom with
    /// the start line's slot in the middle.
    fn ladder(
        &self,
        start: &Line,
        offset: Offset,
        page_lines: &[Line; 4],
        slot_height: Pt,
    ) -> Vec<TextSlot> {
        let mut slots = Vec::new();
        let Some(initial) = self.slot_on_line(start, offset, page_lines, slot_height) else {
            return slots;
        };
        slots.push(initial);
        self.walk(start, offset, 1.0, page_lines, slot_height, &mut slots);
        // The walk "up" appended outward from the center, which is reading
        // order reversed; flip before walking "down".
        slots.reverse();
        self.walk(start, offset, -1.0, page_lines, slot_height, &mut slots);
        slots
    }

    fn walk(
        &self,
        start: &Line,
        offset: Offset,
        direction: f64,
        page_lines: &[Line; 4],
        slot_height: Pt,
        slots: &mut Vec<TextSlot>,
    ) {
        let mut step = direction;
        loop {
            let line = start.with_point(start.point() + offset * step);
            match self.slot_on_line(&line, offset, page_lines, slot_height) {
                Some(slot) => slots.push(slot),
                None => break,
            }
            step += direction;
        }
    }

    /// The slot lying on the given line, or `None` if no slot fits there.
    fn slot_on_line(
        &self,
        text_line: &Line,
        offset: Offset,
        page_lines: &[Line; 4],
        slot_height: Pt,
    ) -> Option<TextSlot> {
        // Find where the text line crosses the page edges. A line from
        // corner to corner can graze the same corner from two edges, so
        // coincident points are collapsed.
        let mut endpoints: Vec<Point> = Vec::new();
        for crossing in page_lines
            .iter()
            .filter_map(|edge| edge.intersection(text_line))
            .filter(|point| self.page_size.contains(*point))
        {
            if let Some(endpoint) = self.adjust_endpoint(crossing, offset, page_lines) {
                if !endpoints.contains(&endpoint) {
                    endpoints.push(endpoint);
                }
            }
        }
        if endpoints.len() != 2 {
            return None;
        }

        // Two valid points, but which one starts the slot? Order them so
        // that reading from the first to the second runs closest to the
        // banner angle.
        let (mut first, mut second) = (endpoints[0], endpoints[1]);
        let forward = second - first;
        let backward = first - second;
        let forward_angle = Angle::radians_unchecked(forward.y.0.atan2(forward.x.0));
        let backward_angle = Angle::radians_unchecked(backward.y.0.atan2(backward.x.0));
        let target = self.angle.to_radians().value();
        if (target - backward_angle.value()).abs() < (target - forward_angle.value()).abs() {
            std::mem::swap(&mut first, &mut second);
        }
        Some(TextSlot::new(
            first,
            first.distance_from(second),
            slot_height,
            self.angle,
        ))
    }

    /// A slot endpoint must leave room for the slot's own height: if
    /// translating the boundary crossing by one stacking offset leaves the
    /// page, the endpoint is pulled inward along the banner angle until the
    /// translated point lands on the boundary again.
    fn adjust_endpoint(
        &self,
        crossing: Point,
        offset: Offset,
        page_lines: &[Line; 4],
    ) -> Option<Point> {
        let shifted = crossing + offset;
        if self.page_size.contains(shifted) {
            return Some(crossing);
        }
        // Intersect the offset line with the page boundary; no crossings
        // means there is no room left for this slot at all.
        let offset_line = Line::new(shifted, self.angle);
        let mut pull_distance: Option<Pt> = None;
        for boundary_crossing in page_lines
            .iter()
            .filter_map(|edge| edge.intersection(&offset_line))
            .filter(|point| self.page_size.contains(*point))
        {
            let distance = boundary_crossing.distance_from(shifted);
            if pull_distance.map_or(true, |current| distance < current) {
                pull_distance = Some(distance);
            }
        }
        let distance = pull_distance?;
        // The crossing needs pulled inward by that distance, but in which
        // direction along the banner is not obvious; try both and keep the
        // one still on the page.
        let along = Offset::new(distance * self.angle.cos(), distance * self.angle.sin());
        let back = Offset::new(
            distance * self.reversed_angle.cos(),
            distance * self.reversed_angle.sin(),
        );
        let pulled_forward = crossing + along;
        if self.page_size.contains(pulled_forward) {
            Some(pulled_forward)
        } else {
            Some(crossing + back)
        }
    }
}

impl TextSlotCalculator for BannerTextSlotCalculator {
    fn calculate_slots(&self, font_size: Pt) -> Box<dyn TextSlotProvider> {
        // Two ladders are calculated: one holding an odd number of slots
        // centered on the page's angled center line, one holding an even
        // number straddling it. The provider picks whichever matches the
        // parity of the requested line count, so that an odd count puts its
        // middle line through the page center and an even count puts the
        // center between its two middle lines.
        let center_line = Line::new(self.page_size.center(), self.angle);

        // Each candidate line is the previous one translated perpendicular
        // to the banner by one line's worth of stacking space.
        let perpendicular = self.angle.rotate90(false);
        let offset = Offset::new(
            font_size * perpendicular.cos(),
            font_size * perpendicular.sin(),
        );
        let half_offset = offset / 2.0;

        let page_lines = self.page_size.lines();
        let even = self.ladder(&center_line, offset, &page_lines, font_size);
        let odd_start = center_line.with_point(center_line.point() - half_offset);
        let odd = self.ladder(&odd_start, offset, &page_lines, font_size);
        debug!(
            odd = odd.len(),
            even = even.len(),
            font_size = %font_size,
            "calculated banner slot ladders"
        );
        Box::new(BannerTextSlotProvider { odd, even })
    }
}

/// Serves banner slots: the central `n` slots of the parity-matching
/// ladder.
struct BannerTextSlotProvider {
    odd: Vec<TextSlot>,
    even: Vec<TextSlot>,
}

impl TextSlotProvider for BannerTextSlotProvider {
    fn text_slots(&self, count: usize) -> Result<Vec<TextSlot>, WatermarkError> {
        let slots = if count % 2 == 1 { &self.odd } else { &self.even };
        if slots.len() < count {
            return Err(WatermarkError::InsufficientSlots {
                requested: count,
                available: slots.len(),
            });
        }
        let skip = (slots.len() - count) / 2;
        Ok(slots[skip..skip + count].to_vec())
    }
}
