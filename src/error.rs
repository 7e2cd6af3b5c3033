use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WatermarkError {
    /// A numeric argument was infinite or NaN
    #[error("{0} must be a normal, finite number")]
    InvalidArgument(&'static str),

    /// Shrinking a rectangle by this margin would leave no room at all
    #[error("a margin of {margin}pt leaves no {dimension} on the page")]
    MarginTooLarge { margin: Pt, dimension: &'static str },

    /// An opacity value fell outside `[0, 1]`
    #[error("opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),

    /// The watermark was constructed with no text to lay out
    #[error("watermark text is empty")]
    EmptyText,

    /// A slot provider was asked for more slots than were calculated
    #[error("{requested} text slots were requested, but only {available} are available")]
    InsufficientSlots { requested: usize, available: usize },

    /// A single word is wider than its slot and cannot be wrapped further
    #[error("text cannot be split to fit the available width: {0:?}")]
    CannotSplitText(String),

    /// The font size floor was reached while shrinking
    #[error("font size cannot be reduced below {0}pt")]
    CannotReduceFontSize(Pt),

    /// Terminal fitting failure: the text cannot be placed within the
    /// permitted fitting adjustments
    #[error("there is not enough space on the page for the watermark text")]
    InsufficientSpace(#[source] Option<Box<WatermarkError>>),

    /// [owned_ttf_parser] failed to parse the font
    #[error(transparent)]
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}

impl WatermarkError {
    /// Wraps a fit-related error as the cause of the terminal
    /// `InsufficientSpace` failure.
    pub(crate) fn insufficient_space(cause: WatermarkError) -> WatermarkError {
        WatermarkError::InsufficientSpace(Some(Box::new(cause)))
    }
}
