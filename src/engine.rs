//! The fitting engine: assigns measured lines of text to slots and
//! iteratively wraps, shrinks, grows, or overflows until the text fits (or
//! provably cannot).

use std::collections::HashSet;

use tracing::debug;

use crate::calculator::TextSlotCalculator;
use crate::error::WatermarkError;
use crate::fitting::{Fitting, Justification, OverflowSelection};
use crate::font::Font;
use crate::measure::{FontSizeMeasurements, FontSizeMeasurementsCache, MeasuredString};
use crate::position::{PositionedText, PositionedTextCollection};
use crate::slot::AssignedTextSlot;
use crate::token::StringTokenCollection;
use crate::units::Pt;

/// Font size adjustments always happen in multiples of this, so that the
/// search cannot spend an eternity on insanely small refinements.
pub(crate) const MINIMUM_FONT_SIZE_DELTA: f64 = 0.5;

/// No text is ever laid out smaller than this.
pub(crate) const MINIMUM_FONT_SIZE: f64 = 1.0;

/// The outcome of one fitting attempt at a fixed font size and line set.
enum FitStep {
    /// Everything fits (or overflow was tolerated); final positions.
    Fitted(PositionedTextCollection),
    /// The text was re-wrapped into these lines; retry at the same size.
    Rewrapped(Vec<String>),
    /// The font size must come down a step.
    Shrink,
    /// Overflow permitted dropping down to these lines; retry at the same
    /// size.
    Overflowed(Vec<String>),
}

/// Computes final positions for a watermark's text.
///
/// Drives the slot calculator and the font measurements through a
/// fit/adjust loop governed by the [Fitting] permissions. Only the terminal
/// [InsufficientSpace](WatermarkError::InsufficientSpace) failure (or an
/// eager validation error) ever escapes; the intermediate fit-related
/// errors are interpreted and recovered internally.
pub struct TextPositionCalculator<'a> {
    slot_calculator: &'a dyn TextSlotCalculator,
    font: &'a Font,
    justification: Justification,
    fitting: Fitting,
    overflow_selection: OverflowSelection,
}

impl<'a> TextPositionCalculator<'a> {
    pub fn new(
        slot_calculator: &'a dyn TextSlotCalculator,
        font: &'a Font,
        justification: Justification,
        fitting: Fitting,
        overflow_selection: OverflowSelection,
    ) -> TextPositionCalculator<'a> {
        TextPositionCalculator {
            slot_calculator,
            font,
            justification,
            fitting,
            overflow_selection,
        }
    }

    /// Lays the text out, starting from the requested font size.
    pub fn positioned_text(
        &self,
        text: &str,
        font_size: Pt,
    ) -> Result<PositionedTextCollection, WatermarkError> {
        let tokens = StringTokenCollection::new(text);
        if tokens.is_empty() {
            return Err(WatermarkError::EmptyText);
        }

        let mut cache = FontSizeMeasurementsCache::new(self.font, self.slot_calculator);
        let mut font_size = font_size;
        let mut current_lines = tokens.strings();
        // Line sets already tried at the current font size. Wrapping after
        // an overflow (or after wrapping against a differently-shaped slot
        // selection) can reproduce an earlier line set; re-entering one
        // would cycle forever, so such a wrap counts as no progress.
        let mut attempted: HashSet<Vec<String>> = HashSet::new();
        attempted.insert(current_lines.clone());

        let fitted = loop {
            let measurements = cache.measurements(font_size);
            match self.step(measurements, &tokens, &current_lines, &attempted, font_size)? {
                FitStep::Fitted(collection) => break collection,
                FitStep::Rewrapped(lines) => {
                    debug!(lines = lines.len(), "re-wrapped text to fit the slots");
                    attempted.insert(lines.clone());
                    current_lines = lines;
                }
                FitStep::Overflowed(lines) => {
                    attempted.insert(lines.clone());
                    current_lines = lines;
                }
                FitStep::Shrink => {
                    font_size =
                        shrink_font_size(font_size).map_err(WatermarkError::insufficient_space)?;
                    debug!(font_size = %font_size, "shrinking font");
                    // Any earlier wrapping decisions are stale at the new
                    // size.
                    current_lines = tokens.strings();
                    attempted.clear();
                    attempted.insert(current_lines.clone());
                }
            }
        };

        if self.fitting.has_grow() {
            Ok(self.grow(&mut cache, &current_lines, font_size, fitted))
        } else {
            Ok(fitted)
        }
    }

    /// One iteration: measure the lines, fetch slots, and either finish or
    /// decide which remedy to apply.
    fn step(
        &self,
        measurements: &FontSizeMeasurements<'_>,
        tokens: &StringTokenCollection,
        current_lines: &[String],
        attempted: &HashSet<Vec<String>>,
        font_size: Pt,
    ) -> Result<FitStep, WatermarkError> {
        let measured: Vec<MeasuredString> = current_lines
            .iter()
            .map(|line| measurements.measure_string(line))
            .collect();

        let slots = match measurements.provider().text_slots(measured.len()) {
            Ok(slots) => slots,
            Err(WatermarkError::InsufficientSlots {
                requested,
                available,
            }) => {
                // Too many lines for the page. Wrapping only makes more
                // lines; shrinking makes more, smaller slots.
                return if self.fitting.has_shrink() {
                    Ok(FitStep::Shrink)
                } else if self.fitting.has_overflow() && available > 0 {
                    let kept = self.overflow_selection.select(current_lines, available);
                    debug!(
                        kept = kept.len(),
                        dropped = current_lines.len() - kept.len(),
                        "dropping lines that overflow the page"
                    );
                    Ok(FitStep::Overflowed(kept))
                } else {
                    Err(WatermarkError::insufficient_space(
                        WatermarkError::InsufficientSlots {
                            requested,
                            available,
                        },
                    ))
                };
            }
            Err(error) => return Err(error),
        };

        let assigned: Vec<AssignedTextSlot> = measured
            .into_iter()
            .zip(slots.iter().copied())
            .map(|(string, slot)| AssignedTextSlot::new(string, slot, self.justification))
            .collect();

        if assigned.iter().all(AssignedTextSlot::fits) {
            return Ok(FitStep::Fitted(positioned(&assigned, font_size)));
        }

        // Some line is wider than its slot.
        if self.fitting.has_wrap() {
            match measurements.split_text_for_slots(tokens, &slots) {
                Ok(lines) if !attempted.contains(&lines) => {
                    return Ok(FitStep::Rewrapped(lines));
                }
                Ok(_) => {} // wrapping made no progress; fall through
                Err(error @ WatermarkError::CannotSplitText(_)) => {
                    return if self.fitting.has_shrink() {
                        Ok(FitStep::Shrink)
                    } else if self.fitting.has_overflow() {
                        Ok(FitStep::Fitted(positioned(&assigned, font_size)))
                    } else {
                        Err(WatermarkError::insufficient_space(error))
                    };
                }
                Err(error) => return Err(error),
            }
        }
        if self.fitting.has_shrink() {
            return Ok(FitStep::Shrink);
        }
        if self.fitting.has_overflow() {
            debug!("text overflows its slots; overflow is permitted");
            return Ok(FitStep::Fitted(positioned(&assigned, font_size)));
        }
        Err(WatermarkError::InsufficientSpace(None))
    }

    /// Speculatively retries at larger sizes, doubling the step after each
    /// success and halving back to the minimum step after a failure, until
    /// the largest fitting size is pinned down. Wrapping and shrinking are
    /// suppressed here: each size either fits as-is or is rejected.
    fn grow(
        &self,
        cache: &mut FontSizeMeasurementsCache<'_>,
        lines: &[String],
        font_size: Pt,
        fitted: PositionedTextCollection,
    ) -> PositionedTextCollection {
        let mut best_size = font_size;
        let mut best = fitted;
        let mut delta = MINIMUM_FONT_SIZE_DELTA;
        loop {
            let candidate = Pt(best_size.0 + delta);
            match self.fixed_size_layout(cache, lines, candidate) {
                Some(collection) => {
                    best_size = candidate;
                    best = collection;
                    delta *= 2.0;
                }
                None if delta <= MINIMUM_FONT_SIZE_DELTA => break,
                None => {
                    delta = (delta / 2.0).max(MINIMUM_FONT_SIZE_DELTA);
                }
            }
        }
        debug!(font_size = %best_size, "grew text to the largest fitting size");
        best
    }

    /// A pure fit-or-fail attempt at one font size with the current lines.
    fn fixed_size_layout(
        &self,
        cache: &mut FontSizeMeasurementsCache<'_>,
        lines: &[String],
        font_size: Pt,
    ) -> Option<PositionedTextCollection> {
        let measurements = cache.measurements(font_size);
        let slots = measurements.provider().text_slots(lines.len()).ok()?;
        let assigned: Vec<AssignedTextSlot> = lines
            .iter()
            .zip(slots.iter().copied())
            .map(|(line, slot)| {
                AssignedTextSlot::new(measurements.measure_string(line), slot, self.justification)
            })
            .collect();
        assigned
            .iter()
            .all(AssignedTextSlot::fits)
            .then(|| positioned(&assigned, font_size))
    }
}

/// Final positions: each line is anchored at its slot's effective origin,
/// nudged by the justification offset.
fn positioned(assigned: &[AssignedTextSlot], font_size: Pt) -> PositionedTextCollection {
    let elements = assigned
        .iter()
        .map(|assigned_slot| {
            PositionedText::new(
                assigned_slot.text().text().to_string(),
                assigned_slot.slot().effective_text_origin()
                    + assigned_slot.justification_offset(),
            )
        })
        .collect();
    PositionedTextCollection::new(elements, font_size)
}

/// Brings the font size down one step, failing once the floor is reached.
fn shrink_font_size(font_size: Pt) -> Result<Pt, WatermarkError> {
    if (font_size.0 - MINIMUM_FONT_SIZE).abs() < f64::EPSILON {
        return Err(WatermarkError::CannotReduceFontSize(Pt(MINIMUM_FONT_SIZE)));
    }
    Ok(Pt(
        (font_size.0 - MINIMUM_FONT_SIZE_DELTA).max(MINIMUM_FONT_SIZE)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_steps_down_to_the_floor() {
        assert_eq!(shrink_font_size(Pt(10.0)).unwrap(), Pt(9.5));
        assert_eq!(shrink_font_size(Pt(1.2)).unwrap(), Pt(1.0));
        assert!(matches!(
            shrink_font_size(Pt(1.0)),
            Err(WatermarkError::CannotReduceFontSize(_))
        ));
    }
}
