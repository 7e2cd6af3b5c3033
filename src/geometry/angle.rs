use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI};

use super::{validate_argument, TOLERANCE};
use crate::error::WatermarkError;

const TWO_PI: f64 = PI * 2.0;
const ONE_AND_A_HALF_PI: f64 = PI + FRAC_PI_2;

/// Angle units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AngleUnits {
    /// Degrees (360 in a full circle).
    Degrees,
    /// Radians (2π in a full circle).
    Radians,
}

impl AngleUnits {
    fn full_circle(self) -> f64 {
        match self {
            AngleUnits::Degrees => 360.0,
            AngleUnits::Radians => TWO_PI,
        }
    }

    fn half_circle(self) -> f64 {
        match self {
            AngleUnits::Degrees => 180.0,
            AngleUnits::Radians => PI,
        }
    }

    fn quarter_circle(self) -> f64 {
        match self {
            AngleUnits::Degrees => 90.0,
            AngleUnits::Radians => FRAC_PI_2,
        }
    }
}

/// A normalized angle: the value is always within `[0, fullCircle)` for its
/// units.
///
/// Watermark placement works with orthogonal angles a lot, so the four
/// quarter-turn values in each unit are treated as canonical: operations on
/// them ([reverse](Angle::reverse), [rotate90](Angle::rotate90),
/// [sin](Angle::sin)/[cos](Angle::cos), unit conversion) produce bit-exact
/// results rather than going through floating-point trigonometry and
/// accumulating drift.
#[derive(Debug, Copy, Clone)]
pub struct Angle {
    value: f64,
    units: AngleUnits,
}

impl Angle {
    pub const DEGREES_0: Angle = Angle {
        value: 0.0,
        units: AngleUnits::Degrees,
    };
    pub const DEGREES_90: Angle = Angle {
        value: 90.0,
        units: AngleUnits::Degrees,
    };
    pub const DEGREES_180: Angle = Angle {
        value: 180.0,
        units: AngleUnits::Degrees,
    };
    pub const DEGREES_270: Angle = Angle {
        value: 270.0,
        units: AngleUnits::Degrees,
    };
    pub const RADIANS_0: Angle = Angle {
        value: 0.0,
        units: AngleUnits::Radians,
    };
    pub const RADIANS_HALF_PI: Angle = Angle {
        value: FRAC_PI_2,
        units: AngleUnits::Radians,
    };
    pub const RADIANS_PI: Angle = Angle {
        value: PI,
        units: AngleUnits::Radians,
    };
    pub const RADIANS_ONE_AND_A_HALF_PI: Angle = Angle {
        value: ONE_AND_A_HALF_PI,
        units: AngleUnits::Radians,
    };

    /// Creates an angle, folding the value into `[0, fullCircle)`. Fails if
    /// the value is infinite or NaN.
    pub fn new(value: f64, units: AngleUnits) -> Result<Angle, WatermarkError> {
        validate_argument(value, "angle value")?;
        Ok(Angle {
            value: normalize(value, units.full_circle()),
            units,
        })
    }

    /// Creates an angle in degrees.
    pub fn degrees(value: f64) -> Result<Angle, WatermarkError> {
        Angle::new(value, AngleUnits::Degrees)
    }

    /// Creates an angle in radians.
    pub fn radians(value: f64) -> Result<Angle, WatermarkError> {
        Angle::new(value, AngleUnits::Radians)
    }

    /// Creates an angle in radians from a value already known to be finite
    /// (e.g. the result of `atan2` on finite inputs).
    pub(crate) fn radians_unchecked(value: f64) -> Angle {
        debug_assert!(value.is_finite());
        Angle {
            value: normalize(value, TWO_PI),
            units: AngleUnits::Radians,
        }
    }

    /// The value of the angle, in [units](Angle::units).
    pub fn value(self) -> f64 {
        self.value
    }

    /// Units of the angle.
    pub fn units(self) -> AngleUnits {
        self.units
    }

    /// Which quarter-turn this angle is, if it is exactly canonical.
    fn quarter_turns(self) -> Option<u8> {
        let quarter = self.units.quarter_circle();
        if self.value == 0.0 {
            Some(0)
        } else if self.value == quarter {
            Some(1)
        } else if self.value == self.units.half_circle() {
            Some(2)
        } else if self.value == self.units.half_circle() + quarter {
            Some(3)
        } else {
            None
        }
    }

    fn from_quarter_turns(turns: u8, units: AngleUnits) -> Angle {
        match (turns % 4, units) {
            (0, AngleUnits::Degrees) => Angle::DEGREES_0,
            (1, AngleUnits::Degrees) => Angle::DEGREES_90,
            (2, AngleUnits::Degrees) => Angle::DEGREES_180,
            (3, AngleUnits::Degrees) => Angle::DEGREES_270,
            (0, AngleUnits::Radians) => Angle::RADIANS_0,
            (1, AngleUnits::Radians) => Angle::RADIANS_HALF_PI,
            (2, AngleUnits::Radians) => Angle::RADIANS_PI,
            _ => Angle::RADIANS_ONE_AND_A_HALF_PI,
        }
    }

    /// Sine of this angle. Exactly 0 or ±1 for canonical angles.
    pub fn sin(self) -> f64 {
        match self.quarter_turns() {
            Some(0) | Some(2) => 0.0,
            Some(1) => 1.0,
            Some(3) => -1.0,
            _ => self.to_radians().value.sin(),
        }
    }

    /// Cosine of this angle. Exactly 0 or ±1 for canonical angles.
    pub fn cos(self) -> f64 {
        match self.quarter_turns() {
            Some(0) => 1.0,
            Some(2) => -1.0,
            Some(1) | Some(3) => 0.0,
            _ => self.to_radians().value.cos(),
        }
    }

    /// True if a line at this angle would be vertical.
    pub fn is_vertical(self) -> bool {
        match self.quarter_turns() {
            Some(1) | Some(3) => true,
            Some(_) => false,
            None => {
                let quarter = self.units.quarter_circle();
                let three_quarters = self.units.half_circle() + quarter;
                (self.value - quarter).abs() < TOLERANCE
                    || (self.value - three_quarters).abs() < TOLERANCE
            }
        }
    }

    /// Flips the angle along the X axis.
    pub fn reverse_x(self) -> Angle {
        match self.quarter_turns() {
            Some(turns) => Angle::from_quarter_turns((4 - turns) % 4, self.units),
            None => Angle {
                value: normalize(-self.value, self.units.full_circle()),
                units: self.units,
            },
        }
    }

    /// Flips the angle along the Y axis.
    pub fn reverse_y(self) -> Angle {
        match self.quarter_turns() {
            Some(turns) => Angle::from_quarter_turns((6 - turns) % 4, self.units),
            None => Angle {
                value: normalize(
                    self.units.half_circle() - self.value,
                    self.units.full_circle(),
                ),
                units: self.units,
            },
        }
    }

    /// Flips the angle along both the X and Y axes (a 180° turn).
    pub fn reverse(self) -> Angle {
        match self.quarter_turns() {
            Some(turns) => Angle::from_quarter_turns(turns + 2, self.units),
            None => Angle {
                value: normalize(
                    self.value + self.units.half_circle(),
                    self.units.full_circle(),
                ),
                units: self.units,
            },
        }
    }

    /// Rotates this angle by 90 degrees, clockwise or anticlockwise.
    pub fn rotate90(self, clockwise: bool) -> Angle {
        match self.quarter_turns() {
            Some(turns) => {
                Angle::from_quarter_turns(if clockwise { turns + 3 } else { turns + 1 }, self.units)
            }
            None => {
                let quarter = self.units.quarter_circle();
                let delta = if clockwise { -quarter } else { quarter };
                Angle {
                    value: normalize(self.value + delta, self.units.full_circle()),
                    units: self.units,
                }
            }
        }
    }

    /// Converts this angle to the same angle, in degrees.
    pub fn to_degrees(self) -> Angle {
        if self.units == AngleUnits::Degrees {
            return self;
        }
        match self.quarter_turns() {
            Some(turns) => Angle::from_quarter_turns(turns, AngleUnits::Degrees),
            None => Angle {
                value: self.value / PI * 180.0,
                units: AngleUnits::Degrees,
            },
        }
    }

    /// Converts this angle to the same angle, in radians.
    pub fn to_radians(self) -> Angle {
        if self.units == AngleUnits::Radians {
            return self;
        }
        match self.quarter_turns() {
            Some(turns) => Angle::from_quarter_turns(turns, AngleUnits::Radians),
            None => Angle {
                value: self.value / 180.0 * PI,
                units: AngleUnits::Radians,
            },
        }
    }
}

/// Folds the value into `[0, full_circle)` by repeated add/subtract, which
/// keeps exact zero inputs exact.
fn normalize(mut value: f64, full_circle: f64) -> f64 {
    while value < 0.0 {
        value += full_circle;
    }
    while value >= full_circle {
        value -= full_circle;
    }
    value
}

impl PartialEq for Angle {
    /// Two angles are equal if they denote the same rotation, regardless of
    /// units, within [TOLERANCE] (degrees-equivalent). Canonical values in
    /// different units compare equal exactly.
    fn eq(&self, other: &Angle) -> bool {
        match (self.quarter_turns(), other.quarter_turns()) {
            (Some(a), Some(b)) => a == b,
            _ => (self.to_degrees().value - other.to_degrees().value).abs() <= TOLERANCE,
        }
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Angle) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.to_degrees()
                .value
                .partial_cmp(&other.to_degrees().value)
        }
    }
}
