use crate::units::*;

/// A rectangle in device coordinates, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (top-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (top-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (bottom-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (bottom-right) corner.
    pub y2: Px,
}

impl Rect {
    /// Smallest rectangle containing every point, or [None] if there are no points
    pub fn bounding<I: IntoIterator<Item = (Px, Px)>>(points: I) -> Option<Rect> {
        let mut points = points.into_iter();
        let (x, y) = points.next()?;
        let mut bounds = Rect {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        };
        for (x, y) in points {
            if x < bounds.x1 {
                bounds.x1 = x;
            }
            if x > bounds.x2 {
                bounds.x2 = x;
            }
            if y < bounds.y1 {
                bounds.y1 = y;
            }
            if y > bounds.y2 {
                bounds.y2 = y;
            }
        }
        Some(bounds)
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
