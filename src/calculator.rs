use crate::error::WatermarkError;
use crate::slot::TextSlot;
use crate::units::Pt;

/// Serves the pre-computed text slots for one font size.
pub trait TextSlotProvider {
    /// The `count` slots to use for that many lines of text, in reading
    /// order (first slot holds the first line). Fails with
    /// [InsufficientSlots](WatermarkError::InsufficientSlots) when fewer
    /// slots than requested exist at this font size.
    fn text_slots(&self, count: usize) -> Result<Vec<TextSlot>, WatermarkError>;
}

/// A strategy for computing where text slots lie on a page.
///
/// One call produces the slots for exactly one font size; the fitting
/// engine re-invokes it (via its cache) whenever it tries a different size.
pub trait TextSlotCalculator {
    /// Calculates all possible text slots for the given font size.
    fn calculate_slots(&self, font_size: Pt) -> Box<dyn TextSlotProvider>;
}
