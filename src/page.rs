use crate::colour::Colour;
use crate::error::ConversionError;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::rect::Rect;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// The fixed geometry of the page text is laid out on: its size and the margins that
/// bound the text band. Set once per conversion.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width: Px,
    pub height: Px,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for PageConfig {
    /// A4 portrait with 20px margins all round
    fn default() -> Self {
        PageConfig::from_size(pagesize::A4, Margins::default())
    }
}

impl PageConfig {
    pub fn new(width: Px, height: Px, margins: Margins) -> PageConfig {
        PageConfig {
            width,
            height,
            margins,
        }
    }

    /// Create a page from a paper size given in points
    pub fn from_size(size: PageSize, margins: Margins) -> PageConfig {
        let (width, height) = pagesize::device_size(size);
        PageConfig::new(width, height, margins)
    }

    /// Width of the band between the left and right margins
    pub fn usable_width(&self) -> Px {
        self.width - self.margins.left - self.margins.right
    }

    /// The x coordinate lines wrap at: the inner edge of the right margin
    pub fn wrap_edge(&self) -> Px {
        self.usable_width() + self.margins.left
    }

    /// The size of the page
    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Px(0.0),
            y1: Px(0.0),
            x2: self.width,
            y2: self.height,
        }
    }

    /// Where content is meant to live, i.e. within the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margins.left,
            y1: self.margins.top,
            x2: self.width - self.margins.right,
            y2: self.height - self.margins.bottom,
        }
    }

    /// Check the page has a positive size and the margins leave room for text
    pub fn validate(&self) -> Result<(), ConversionError> {
        for (name, value) in [("page width", self.width), ("page height", self.height)] {
            if !value.is_finite() || value <= Px(0.0) {
                return Err(ConversionError::invalid(
                    name,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        for (name, value) in self.margins.sides() {
            if !value.is_finite() || value < Px(0.0) {
                return Err(ConversionError::invalid(
                    name,
                    format!("must be zero or positive, got {value}"),
                ));
            }
        }

        if self.margins.left + self.margins.right >= self.width {
            return Err(ConversionError::invalid(
                "margins",
                format!(
                    "left and right margins ({} + {}) leave no room on a page {} wide",
                    self.margins.left, self.margins.right, self.width
                ),
            ));
        }
        if self.margins.top + self.margins.bottom >= self.height {
            return Err(ConversionError::invalid(
                "margins",
                format!(
                    "top and bottom margins ({} + {}) leave no room on a page {} high",
                    self.margins.top, self.margins.bottom, self.height
                ),
            ));
        }

        Ok(())
    }
}

/// How paths are drawn: never filled, stroked with a colour and width
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    #[serde(default)]
    pub stroke: Colour,
    #[serde(default = "PathStyle::default_stroke_width")]
    pub stroke_width: Px,
}

impl PathStyle {
    fn default_stroke_width() -> Px {
        Px(1.0)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle {
            stroke: Colour::default(),
            stroke_width: PathStyle::default_stroke_width(),
        }
    }
}

/// A closed polygon in device coordinates. The last point connects back to the first.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    pub points: Vec<(Px, Px)>,
    pub style: PathStyle,
}

impl Path {
    /// The smallest rectangle containing every vertex
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points.iter().copied())
    }
}

/// A page being drawn on: its fixed geometry and the paths placed so far
#[derive(Clone, Debug)]
pub struct Page {
    pub config: PageConfig,
    pub contents: Vec<Path>,
}

impl Page {
    pub fn new(config: PageConfig) -> Page {
        Page {
            config,
            contents: Vec::default(),
        }
    }

    pub fn add_path(&mut self, path: Path) {
        self.contents.push(path);
    }
}
