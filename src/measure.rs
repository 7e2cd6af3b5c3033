//! Per-font-size measurement state: memoized string widths and the slot
//! provider computed for that size.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use crate::calculator::{TextSlotCalculator, TextSlotProvider};
use crate::engine::MINIMUM_FONT_SIZE_DELTA;
use crate::error::WatermarkError;
use crate::font::Font;
use crate::slot::TextSlot;
use crate::token::{StringTokenCollection, TokenKind};
use crate::units::Pt;

/// A string with its measured width at one specific font size.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredString {
    text: String,
    length: Pt,
    splittable: bool,
}

impl MeasuredString {
    pub(crate) fn new(text: String, length: Pt, splittable: bool) -> MeasuredString {
        MeasuredString {
            text,
            length,
            splittable,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn length(&self) -> Pt {
        self.length
    }

    /// False when the string is a single word, which word-wrap cannot
    /// divide any further.
    pub fn is_splittable(&self) -> bool {
        self.splittable
    }
}

/// Everything measured for one font size: the slot provider for that size,
/// and a memo of string widths.
pub struct FontSizeMeasurements<'a> {
    font: &'a Font,
    font_size: Pt,
    provider: Box<dyn TextSlotProvider>,
    widths: RefCell<HashMap<String, Pt>>,
}

impl<'a> FontSizeMeasurements<'a> {
    fn new(font: &'a Font, font_size: Pt, provider: Box<dyn TextSlotProvider>) -> Self {
        FontSizeMeasurements {
            font,
            font_size,
            provider,
            widths: RefCell::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &dyn TextSlotProvider {
        self.provider.as_ref()
    }

    /// Measured width of the text at this font size, memoized per string.
    pub fn text_length(&self, text: &str) -> Pt {
        if let Some(length) = self.widths.borrow().get(text) {
            return *length;
        }
        let length = self.font.measure_string(text, self.font_size);
        self.widths.borrow_mut().insert(text.to_string(), length);
        length
    }

    pub fn measure_string(&self, text: &str) -> MeasuredString {
        let splittable = StringTokenCollection::new(text).content_token_count() > 1;
        MeasuredString::new(text.to_string(), self.text_length(text), splittable)
    }

    /// Word-wraps the tokenized text across the given slots: words are
    /// packed greedily into each slot until the next one would overflow its
    /// width, and hard line breaks always start a new slot.
    ///
    /// If there is more text than slots, the surplus is returned as extra
    /// lines; the caller will come round again asking for more slots. A
    /// single word wider than its slot fails with
    /// [CannotSplitText](WatermarkError::CannotSplitText).
    pub fn split_text_for_slots(
        &self,
        tokens: &StringTokenCollection,
        slots: &[TextSlot],
    ) -> Result<Vec<String>, WatermarkError> {
        let mut lines = Vec::new();
        let mut remaining = tokens.strip_leading_whitespace();
        for slot in slots {
            if remaining.is_empty() {
                break;
            }
            lines.push(self.pack_line(&mut remaining, slot.width())?);
        }
        if !remaining.is_empty() {
            let overflow = remaining.strip_leading_whitespace().strings();
            trace!(lines = overflow.len(), "wrapped text overflows the slots");
            lines.extend(overflow);
        }
        Ok(lines)
    }

    /// Packs one line of text from the front of `remaining`, never
    /// exceeding `width`.
    fn pack_line(
        &self,
        remaining: &mut StringTokenCollection,
        width: Pt,
    ) -> Result<String, WatermarkError> {
        let mut line = String::new();
        loop {
            let Some((content, rest)) = remaining.next_content() else {
                *remaining = StringTokenCollection::default();
                break;
            };
            // A hard line break always ends the line.
            if content.tokens().last().map(|token| token.kind()) == Some(TokenKind::LineBreak) {
                *remaining = rest;
                break;
            }
            let candidate = if line.is_empty() {
                content.strip_leading_whitespace().to_string()
            } else {
                format!("{line}{content}")
            };
            if self.text_length(&candidate) <= width {
                line = candidate;
                *remaining = rest;
            } else {
                if line.is_empty() {
                    return Err(WatermarkError::CannotSplitText(candidate));
                }
                break;
            }
        }
        Ok(line)
    }
}

/// Cache of [FontSizeMeasurements] across the font sizes the fitting loop
/// visits.
///
/// Font sizes only ever move on the shrink-delta grid, so the key is the
/// size quantized to that grid; this avoids comparing raw floats.
pub struct FontSizeMeasurementsCache<'a> {
    font: &'a Font,
    calculator: &'a dyn TextSlotCalculator,
    cache: HashMap<i64, FontSizeMeasurements<'a>>,
}

impl<'a> FontSizeMeasurementsCache<'a> {
    pub fn new(font: &'a Font, calculator: &'a dyn TextSlotCalculator) -> Self {
        FontSizeMeasurementsCache {
            font,
            calculator,
            cache: HashMap::new(),
        }
    }

    /// The measurements for the given font size, computing and caching
    /// them (one `calculate_slots` call) on first request.
    pub fn measurements(&mut self, font_size: Pt) -> &FontSizeMeasurements<'a> {
        let key = quantize(font_size);
        self.cache.entry(key).or_insert_with(|| {
            trace!(font_size = %font_size, "calculating slots and measurements");
            FontSizeMeasurements::new(self.font, font_size, self.calculator.calculate_slots(font_size))
        })
    }
}

fn quantize(font_size: Pt) -> i64 {
    (font_size.0 / MINIMUM_FONT_SIZE_DELTA).round() as i64
}
