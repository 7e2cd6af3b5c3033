//! The knobs that control how text is coerced into the available space.

/// Justification of text within the span of its slot, relative to the
/// slot's reading direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Justification {
    Left,
    Right,
    Centre,
}

/// The set of remedies the fitting engine may apply when text does not fit
/// its slots.
///
/// ```
/// use pdf_watermark::Fitting;
///
/// let fitting = Fitting::NONE.wrap().shrink();
/// assert!(fitting.has_wrap());
/// assert!(!fitting.has_grow());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Fitting {
    wrap: bool,
    shrink: bool,
    grow: bool,
    overflow: bool,
}

impl Fitting {
    /// No fitting: text that does not fit fails immediately.
    pub const NONE: Fitting = Fitting {
        wrap: false,
        shrink: false,
        grow: false,
        overflow: false,
    };

    /// Permit breaking text onto more lines, on whitespace only. Applied
    /// before shrinking; shrinking then only happens when a single word is
    /// wider than its slot.
    pub fn wrap(self) -> Fitting {
        Fitting { wrap: true, ..self }
    }

    /// Permit making the text smaller when it does not fit.
    pub fn shrink(self) -> Fitting {
        Fitting {
            shrink: true,
            ..self
        }
    }

    /// Permit making the text larger, to fill the available space as
    /// closely as possible.
    pub fn grow(self) -> Fitting {
        Fitting { grow: true, ..self }
    }

    /// Permit text to spill out of the space it was given: excess lines are
    /// dropped, and over-long lines are rendered anyway.
    pub fn overflow(self) -> Fitting {
        Fitting {
            overflow: true,
            ..self
        }
    }

    pub fn has_wrap(&self) -> bool {
        self.wrap
    }

    pub fn has_shrink(&self) -> bool {
        self.shrink
    }

    pub fn has_grow(&self) -> bool {
        self.grow
    }

    pub fn has_overflow(&self) -> bool {
        self.overflow
    }
}

/// Which lines to keep when overflow permits dropping some.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverflowSelection {
    /// Keep the first lines. Page-edge watermarks read from the edge
    /// inward, so the first lines are the ones against the edge.
    KeepFirst,
    /// Keep the middle lines. Banner watermarks radiate from the page
    /// center, so the middle lines are the most central.
    KeepMiddle,
}

impl OverflowSelection {
    pub(crate) fn select(self, lines: &[String], keep: usize) -> Vec<String> {
        match self {
            OverflowSelection::KeepFirst => lines[..keep].to_vec(),
            OverflowSelection::KeepMiddle => {
                let skip = (lines.len() - keep) / 2;
                lines[skip..skip + keep].to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_composes_permissions() {
        let fitting = Fitting::NONE.wrap().shrink().grow().overflow();
        assert!(fitting.has_wrap());
        assert!(fitting.has_shrink());
        assert!(fitting.has_grow());
        assert!(fitting.has_overflow());
        assert!(!Fitting::NONE.has_wrap());
    }

    #[test]
    fn overflow_selection() {
        let lines: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            OverflowSelection::KeepFirst.select(&lines, 2),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            OverflowSelection::KeepMiddle.select(&lines, 3),
            vec!["b".to_string(), "c".to_string(), "d".to_string()]
        );
    }
}
