//! Glyph outlines decoded from the `glyf` table.
//!
//! Outline points are kept exactly as stored in the font: on-curve and off-curve
//! points alike, in design units. Layout treats each contour as a polygon through
//! those points.

use crate::error::ConversionError;
use read_fonts::tables::glyf::{Glyph as RawGlyph, SimpleGlyph};

/// A point of a glyph outline, in font design units (y up)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutlinePoint {
    pub x: i32,
    pub y: i32,
}

/// The glyph's bounding box as recorded in its `glyf` header, in design units
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GlyphBox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl GlyphBox {
    pub fn width(&self) -> i32 {
        self.x_max as i32 - self.x_min as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Glyph without any contours, such as the space
    Empty,
    /// One or more closed contours. `end_points[i]` is the index into `points` of the
    /// last point of contour `i`
    Simple {
        points: Vec<OutlinePoint>,
        end_points: Vec<u16>,
    },
    /// Built from other glyphs; not rendered
    Composite { components: usize },
}

/// A glyph of a loaded [Font](crate::Font)
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Horizontal advance from `hmtx`, if the font has horizontal metrics for the glyph
    pub advance_width: Option<u16>,
    pub bbox: GlyphBox,
    pub outline: Outline,
}

impl Glyph {
    pub fn is_composite(&self) -> bool {
        matches!(self.outline, Outline::Composite { .. })
    }

    pub fn contour_count(&self) -> usize {
        match &self.outline {
            Outline::Simple { end_points, .. } => end_points.len(),
            _ => 0,
        }
    }

    /// Iterate over the contours of a simple glyph, each as a slice of its points.
    /// Empty and composite glyphs have no contours.
    pub fn contours(&self) -> impl Iterator<Item = &[OutlinePoint]> {
        let (points, end_points): (&[OutlinePoint], &[u16]) = match &self.outline {
            Outline::Simple { points, end_points } => (points.as_slice(), end_points.as_slice()),
            _ => (&[][..], &[][..]),
        };

        let mut start = 0usize;
        end_points.iter().map(move |&end| {
            let end = end as usize;
            let contour = &points[start..=end];
            start = end + 1;
            contour
        })
    }

    /// Convert a `glyf` record into a [Glyph]. A glyph without a record (an empty range
    /// in `loca`) has no contours.
    pub(crate) fn decode(
        raw: Option<RawGlyph<'_>>,
        advance_width: Option<u16>,
    ) -> Result<Glyph, ConversionError> {
        let (bbox, outline) = match raw {
            None => (GlyphBox::default(), Outline::Empty),
            Some(RawGlyph::Simple(simple)) => {
                let bbox = GlyphBox {
                    x_min: simple.x_min(),
                    y_min: simple.y_min(),
                    x_max: simple.x_max(),
                    y_max: simple.y_max(),
                };
                (bbox, simple_outline(&simple)?)
            }
            Some(RawGlyph::Composite(composite)) => {
                let bbox = GlyphBox {
                    x_min: composite.x_min(),
                    y_min: composite.y_min(),
                    x_max: composite.x_max(),
                    y_max: composite.y_max(),
                };
                let components = composite.components().count();
                (bbox, Outline::Composite { components })
            }
        };

        Ok(Glyph {
            advance_width,
            bbox,
            outline,
        })
    }
}

fn simple_outline(glyph: &SimpleGlyph<'_>) -> Result<Outline, ConversionError> {
    let end_points: Vec<u16> = glyph
        .end_pts_of_contours()
        .iter()
        .map(|end| end.get())
        .collect();
    if let Some(pair) = end_points.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(ConversionError::malformed(
            "glyf",
            format!("contour end points not increasing ({} then {})", pair[0], pair[1]),
        ));
    }
    let Some(&last) = end_points.last() else {
        return Ok(Outline::Empty);
    };

    let point_count = last as usize + 1;
    let points: Vec<OutlinePoint> = glyph
        .points()
        .take(point_count)
        .map(|point| OutlinePoint {
            x: point.x as i32,
            y: point.y as i32,
        })
        .collect();
    // the point iterator stops early when the flags or coordinates run out
    if points.len() < point_count {
        return Err(ConversionError::malformed(
            "glyf",
            format!("expected {point_count} points, glyph data holds {}", points.len()),
        ));
    }

    Ok(Outline::Simple { points, end_points })
}
