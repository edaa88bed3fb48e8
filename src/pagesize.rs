//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! measured in points. Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait
//! to convert between portrait and landscape, and [`device_size`] to obtain the size in
//! device units.
//!
//! # Example
//!
//! ```
//! use stickfont::pagesize::{self, PageOrientation, A4};
//!
//! let landscape = A4.landscape();
//! let named = pagesize::by_name("A4 Landscape").expect("known paper size");
//! assert_eq!(landscape, named);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// iso a-series, rounded to a tenth of a point
pub const A1: PageSize = (Pt(1684.2), Pt(2384.3));
pub const A2: PageSize = (Pt(1190.6), Pt(1684.2));
pub const A3: PageSize = (Pt(841.9), Pt(1190.6));
pub const A4: PageSize = (Pt(595.3), Pt(841.9));
pub const A5: PageSize = (Pt(420.9), Pt(595.3));
pub const A6: PageSize = (Pt(297.6), Pt(420.9));

/// 100 x 150 mm shipping label
pub const LABEL_100X150: PageSize = (Pt(283.5), Pt(425.2));

const NAMED: [(&str, PageSize); 7] = [
    ("A1", A1),
    ("A2", A2),
    ("A3", A3),
    ("A4", A4),
    ("A5", A5),
    ("A6", A6),
    ("100x150", LABEL_100X150),
];

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// The page size in device units
pub fn device_size(size: PageSize) -> (Px, Px) {
    (size.0.into(), size.1.into())
}

/// Look up a paper size by its display name, e.g. `"A4 Portrait"` or `"100x150 Landscape"`.
/// A name without an orientation is taken to be portrait.
pub fn by_name(name: &str) -> Option<PageSize> {
    let mut parts = name.split_whitespace();
    let base = parts.next()?;
    let orientation = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let size = NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(base))
        .map(|&(_, size)| size)?;

    match orientation.map(str::to_ascii_lowercase).as_deref() {
        None | Some("portrait") => Some(size.portrait()),
        Some("landscape") => Some(size.landscape()),
        Some(_) => None,
    }
}

/// Every display name accepted by [by_name], portrait before landscape
pub fn names() -> Vec<String> {
    NAMED
        .iter()
        .flat_map(|(n, _)| [format!("{n} Portrait"), format!("{n} Landscape")])
        .collect()
}
