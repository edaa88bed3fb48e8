use super::glyphs::{emit_glyph, Placement};
use super::metrics::Metrics;
use crate::page::{Page, PathStyle};
use crate::units::Px;
use log::{debug, info, warn};

/// The pen position during layout, in device coordinates. `y` is the baseline of the
/// current line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub x: Px,
    pub y: Px,
}

impl Cursor {
    fn wrap(&mut self, left: Px, line_advance: Px) {
        self.x = left;
        self.y += line_advance;
    }
}

/// Horizontal and vertical spacing applied while laying out text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spacing {
    /// Extra space after every glyph
    pub letter: Px,
    /// Distance between baselines, as a multiple of the font size
    pub line: f32,
}

/// Where a word was put on the page
#[derive(Debug, Clone, PartialEq)]
pub struct WordPlacement {
    pub word: String,
    /// The cursor when the word's first glyph was drawn
    pub at: Cursor,
    /// The measured width the fit test used
    pub width: Px,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The font has no glyph for the character
    Unresolved,
    /// The glyph is a composite glyph
    Composite,
}

/// A record of what a layout did, for callers that want to inspect positions rather
/// than paths
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTrace {
    pub words: Vec<WordPlacement>,
    pub skipped: Vec<(char, SkipReason)>,
    /// How many times a line was wrapped, not counting paragraph breaks
    pub wraps: usize,
    pub paragraphs: usize,
    /// The cursor after the last paragraph
    pub end: Cursor,
}

/// Lays out text word by word, wrapping lines so that no word is ever split. Paragraphs
/// are separated by `'\n'` and words by any whitespace. Each glyph contour becomes a
/// path on the page.
///
/// A word is moved to the next line when it would end past the page's wrap edge (the
/// inner edge of the right margin). A word wider than the whole band is still drawn in
/// full, overflowing the margin. Words are followed by a space of half the font size,
/// and if that space alone crosses the wrap edge the line is wrapped then too.
///
/// Every paragraph, even an empty one, ends by moving down two lines.
///
/// NOTE: characters the font has no glyph for, and composite glyphs, are skipped and
/// logged. Missing characters take up no room, while composite glyphs count towards
/// the word's measured width but do not move the cursor when drawn.
pub fn layout_text(
    text: &str,
    metrics: &Metrics<'_>,
    page: &mut Page,
    start: (Px, Px),
    spacing: Spacing,
    style: PathStyle,
) -> LayoutTrace {
    let left = page.config.margins.left;
    let wrap_edge = page.config.wrap_edge();
    let line_advance = metrics.size() * spacing.line;
    let space_width = metrics.size() / 2.0;

    let mut cursor = Cursor {
        x: start.0,
        y: start.1,
    };
    let mut trace = LayoutTrace {
        words: Vec::new(),
        skipped: Vec::new(),
        wraps: 0,
        paragraphs: 0,
        end: cursor,
    };

    for paragraph in text.split('\n') {
        for word in paragraph.split_whitespace() {
            let width = metrics.word_width(word, spacing.letter);

            if cursor.x + width > wrap_edge {
                debug!("wrapping before {word:?} ({width} wide at x = {})", cursor.x);
                cursor.wrap(left, line_advance);
                trace.wraps += 1;
            }

            trace.words.push(WordPlacement {
                word: word.to_string(),
                at: cursor,
                width,
            });

            for ch in word.chars() {
                let Some(glyph) = metrics.font().lookup(ch) else {
                    info!("font has no glyph for {ch:?}, skipping it");
                    trace.skipped.push((ch, SkipReason::Unresolved));
                    continue;
                };

                if emit_glyph(glyph, metrics, &mut cursor, spacing.letter, style, page)
                    == Placement::Composite
                {
                    warn!("composite glyphs are not supported, skipping {ch:?}");
                    trace.skipped.push((ch, SkipReason::Composite));
                }
            }

            cursor.x += space_width;
            if cursor.x > wrap_edge {
                debug!("wrapping after {word:?}, the trailing space crosses the margin");
                cursor.wrap(left, line_advance);
                trace.wraps += 1;
            }
        }

        cursor.x = left;
        cursor.y += line_advance * 2.0;
        trace.paragraphs += 1;
    }

    trace.end = cursor;
    trace
}
