use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

use crate::error::WatermarkError;
use crate::pagesize::PageSize;
use crate::sizing::Size;
use crate::units::Pt;

/// The string-width measurement capability the fitting engine needs from a
/// font.
///
/// Implementations must be deterministic, and monotonic in the sense that
/// extending a string never makes it narrower than a prefix of it — the
/// wrap algorithm relies on that to pack words greedily.
pub trait FontMetrics {
    /// The width of `text` when rendered at `font_size`.
    fn measure_width(&self, text: &str, font_size: Pt) -> Pt;
}

/// Font metrics backed by a parsed TTF or OTF font face.
pub struct TtfFont {
    face: OwnedFace,
}

impl TtfFont {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TtfFont, WatermarkError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TtfFont { face })
    }

    /// Obtain the full name of the font, if the face carries one.
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The glyph for the character, substituting the replacement glyph and
    /// then '?' for characters the face does not cover.
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }
}

impl FontMetrics for TtfFont {
    fn measure_width(&self, text: &str, font_size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = font_size / face.units_per_em() as f64;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f64)
            .sum()
    }
}

/// A font for watermark text: a name for the rendering layer, a measuring
/// capability, and a (possibly page-relative) size.
pub struct Font {
    name: String,
    size: Size,
    metrics: Box<dyn FontMetrics>,
}

impl Font {
    /// A font using any [FontMetrics] implementation.
    pub fn new(name: impl Into<String>, size: Size, metrics: Box<dyn FontMetrics>) -> Font {
        Font {
            name: name.into(),
            size,
            metrics,
        }
    }

    /// A font measured from parsed TTF/OTF bytes, named from the face's
    /// own full name.
    pub fn from_ttf(bytes: Vec<u8>, size: Size) -> Result<Font, WatermarkError> {
        let ttf = TtfFont::load(bytes)?;
        let name = ttf.name().unwrap_or_else(|| "unknown".into());
        Ok(Font::new(name, size, Box::new(ttf)))
    }

    /// Name of font.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the font size, possibly relative to the page size.
    pub fn size(&self, page_size: &PageSize) -> Pt {
        self.size.effective_size(page_size)
    }

    /// Returns the width of the given string at the given font size.
    pub fn measure_string(&self, text: &str, font_size: Pt) -> Pt {
        self.metrics.measure_width(text, font_size)
    }
}
