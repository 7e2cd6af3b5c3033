use crate::geometry::{Offset, Point};
use crate::units::Pt;

/// One line of watermark text with its final anchor position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    text: String,
    position: Point,
}

impl PositionedText {
    pub(crate) fn new(text: String, position: Point) -> PositionedText {
        PositionedText { text, position }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The anchor point to draw this line at.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// All the positioned lines of one watermark, with the font size they
/// should be drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedTextCollection {
    elements: Vec<PositionedText>,
    font_size: Pt,
}

impl PositionedTextCollection {
    pub(crate) fn new(elements: Vec<PositionedText>, font_size: Pt) -> PositionedTextCollection {
        PositionedTextCollection {
            elements,
            font_size,
        }
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionedText> {
        self.elements.iter()
    }

    /// Translates every position, e.g. to re-apply a page margin that was
    /// removed before slot calculation.
    pub(crate) fn offset_by(self, offset: Offset) -> PositionedTextCollection {
        PositionedTextCollection {
            elements: self
                .elements
                .into_iter()
                .map(|element| PositionedText {
                    position: element.position + offset,
                    text: element.text,
                })
                .collect(),
            font_size: self.font_size,
        }
    }
}

impl IntoIterator for PositionedTextCollection {
    type Item = PositionedText;
    type IntoIter = std::vec::IntoIter<PositionedText>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a PositionedTextCollection {
    type Item = &'a PositionedText;
    type IntoIter = std::slice::Iter<'a, PositionedText>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
