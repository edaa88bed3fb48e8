use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Margins bound the band of the page that text is wrapped within. Text is allowed to
/// overflow them: a single word wider than the band is still placed whole, and the top
/// margin is the baseline of the first line, so ascenders rise above it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Default for Margins {
    fn default() -> Margins {
        Margins::all(Px(20.0))
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Px(0.0))
    }

    pub(crate) fn sides(&self) -> [(&'static str, Px); 4] {
        [
            ("margin.top", self.top),
            ("margin.right", self.right),
            ("margin.bottom", self.bottom),
            ("margin.left", self.left),
        ]
    }
}
