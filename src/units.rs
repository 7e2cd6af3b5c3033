use derive_more::{
    Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Neg, Sub, SubAssign, Sum,
};

/// A measurement in PDF points (1/72 of an inch).
///
/// Everything in this crate — page dimensions, font sizes, slot widths,
/// measured string lengths — is expressed in points so that values can be
/// compared and mixed without unit conversions.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Neg,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f64);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// Absolute value.
    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    /// The smaller of two measurements.
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// The larger of two measurements.
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// True if the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Pt(3.0);
        let b = Pt(2.0);
        assert_eq!(a + b, Pt(5.0));
        assert_eq!(a - b, Pt(1.0));
        assert_eq!(a * 2.0, Pt(6.0));
        assert_eq!(a / 2.0, Pt(1.5));
        assert_eq!(-a, Pt(-3.0));
    }

    #[test]
    fn min_max_abs() {
        assert_eq!(Pt(-3.0).abs(), Pt(3.0));
        assert_eq!(Pt(1.0).min(Pt(2.0)), Pt(1.0));
        assert_eq!(Pt(1.0).max(Pt(2.0)), Pt(2.0));
    }
}
