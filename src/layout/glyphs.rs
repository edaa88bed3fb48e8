use super::metrics::Metrics;
use super::text::Cursor;
use crate::glyph::{Glyph, Outline};
use crate::page::{Page, Path, PathStyle};
use crate::units::Px;

/// What [emit_glyph] did with a glyph
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Contours were drawn and the cursor advanced
    Drawn { contours: usize },
    /// The glyph has no contours; nothing drawn, cursor untouched
    Blank,
    /// Composite glyphs are not rendered; nothing drawn, cursor untouched
    Composite,
}

/// Draw one glyph with its origin at the cursor, adding one closed path per contour
/// to the page, then advance the cursor by the glyph's width plus `letter_spacing`.
///
/// Font space is y-up and the page is y-down, so outline y coordinates are subtracted
/// from the cursor's baseline. Contour points are joined by straight lines whether or
/// not they are on the curve.
pub fn emit_glyph(
    glyph: &Glyph,
    metrics: &Metrics<'_>,
    cursor: &mut Cursor,
    letter_spacing: Px,
    style: PathStyle,
    page: &mut Page,
) -> Placement {
    match glyph.outline {
        Outline::Composite { .. } => return Placement::Composite,
        Outline::Empty => return Placement::Blank,
        Outline::Simple { .. } => {}
    }

    let mut contours = 0;
    for contour in glyph.contours() {
        let points: Vec<(Px, Px)> = contour
            .iter()
            .map(|p| (cursor.x + metrics.to_device(p.x), cursor.y - metrics.to_device(p.y)))
            .collect();
        page.add_path(Path { points, style });
        contours += 1;
    }

    cursor.x += metrics.char_width(glyph) + letter_spacing;
    Placement::Drawn { contours }
}
