use crate::font::Font;
use crate::glyph::Glyph;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Which glyph measurement horizontal positions are taken from
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvanceSource {
    /// The advance width from the font's horizontal metrics, falling back to the
    /// bounding box width for glyphs without one
    #[default]
    Advance,
    /// Always the width of the glyph's bounding box. Glyphs then sit edge to edge,
    /// separated only by the letter spacing.
    BoundingBox,
}

/// Measures glyphs and words of one font at one size, in device units
#[derive(Debug, Copy, Clone)]
pub struct Metrics<'f> {
    font: &'f Font,
    size: Px,
    scale: f32,
    source: AdvanceSource,
}

impl<'f> Metrics<'f> {
    pub fn new(font: &'f Font, size: Px, source: AdvanceSource) -> Metrics<'f> {
        Metrics {
            font,
            size,
            scale: *size / font.units_per_em() as f32,
            source,
        }
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    /// The font size, in device units
    pub fn size(&self) -> Px {
        self.size
    }

    /// Device units per font design unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Convert a design unit measurement to device units
    pub fn to_device(&self, units: i32) -> Px {
        Px(units as f32 * self.scale)
    }

    /// How far the pen moves past this glyph, not counting letter spacing
    pub fn char_width(&self, glyph: &Glyph) -> Px {
        let units = match (self.source, glyph.advance_width) {
            (AdvanceSource::Advance, Some(advance)) => advance as i32,
            _ => glyph.bbox.width(),
        };
        self.to_device(units)
    }

    /// The width of a word with `letter_spacing` between its characters. Characters
    /// the font has no glyph for count for nothing, not even spacing. One spacing is
    /// always taken off the total, so a word with no resolvable characters measures
    /// `-letter_spacing`.
    pub fn word_width(&self, word: &str, letter_spacing: Px) -> Px {
        let mut width = Px(0.0);
        for glyph in word.chars().filter_map(|ch| self.font.lookup(ch)) {
            width += self.char_width(glyph) + letter_spacing;
        }
        width - letter_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_font;

    fn assert_close(actual: Px, expected: f32) {
        assert!(
            (actual.0 - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn scale_is_size_per_em() {
        let font = Font::load(sample_font().build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::Advance);
        assert_close(Px(metrics.scale()), 0.012);
    }

    #[test]
    fn word_width_includes_inner_spacing_only() {
        let font = Font::load(sample_font().build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::Advance);

        // A: 600 units, B: 500 units
        assert_close(metrics.word_width("A", Px(2.0)), 7.2);
        assert_close(metrics.word_width("AB", Px(2.0)), 7.2 + 2.0 + 6.0);
        assert_close(metrics.word_width("AB", Px(0.0)), 13.2);
    }

    #[test]
    fn unresolved_characters_add_nothing() {
        let font = Font::load(sample_font().build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::Advance);

        assert_eq!(metrics.word_width("AzB", Px(2.0)), metrics.word_width("AB", Px(2.0)));
        assert_close(metrics.word_width("zz", Px(2.0)), -2.0);
    }

    #[test]
    fn composite_glyphs_are_measured() {
        let font = Font::load(sample_font().build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(10.0), AdvanceSource::Advance);
        assert_close(metrics.word_width("X", Px(1.0)), 7.0);
    }

    #[test]
    fn bounding_box_source() {
        let font = Font::load(sample_font().build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::BoundingBox);
        // B is 450 units wide but advances 500
        let b = font.lookup('B').expect("B is mapped");
        assert_close(metrics.char_width(b), 5.4);
    }

    #[test]
    fn bounding_box_is_the_fallback_without_advances() {
        let font = Font::load(sample_font().without_table(b"hmtx").build()).expect("font loads");
        let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::Advance);
        let b = font.lookup('B').expect("B is mapped");
        assert_close(metrics.char_width(b), 5.4);
    }
}
