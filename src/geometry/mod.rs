//! Geometric primitives for watermark placement: angles, points, offsets,
//! infinite lines, and axis-aligned rectangles.
//!
//! All comparisons in this module are tolerance-based; see [TOLERANCE].

use crate::error::WatermarkError;

mod angle;
pub use angle::*;

mod point;
pub use point::*;

mod line;
pub use line::*;

mod rect;
pub use rect::*;

/// Acceptable amount to be "off by" for geometric floating point operations.
pub const TOLERANCE: f64 = 1e-7;

/// Rejects infinite or NaN argument values before they can poison a
/// calculation.
pub(crate) fn validate_argument(value: f64, name: &'static str) -> Result<(), WatermarkError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WatermarkError::InvalidArgument(name))
    }
}
