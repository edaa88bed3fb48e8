//! Renders text as single-stroke glyph outlines: every contour of every glyph becomes an
//! unfilled, stroked path, with words wrapped to fit between the page margins. Intended
//! for pen plotters, engravers and cutters that follow paths rather than fill shapes.
//!
//! # Example
//!
//! ```no_run
//! use stickfont::{convert_to_file, ConversionParams, Font, OutputFormat};
//!
//! let font = Font::open("StickFonts/Stick.ttf").expect("can load font");
//! let params = ConversionParams {
//!     format: OutputFormat::Svg,
//!     ..Default::default()
//! };
//! let message = convert_to_file("Hello, world!", &font, &params, "hello.svg").expect("converts");
//! println!("{message}");
//! ```

mod colour;
pub use colour::*;

pub mod config;

mod content;

mod convert;
pub use convert::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod glyph;
pub use glyph::*;

/// Measuring glyphs and laying text out as paths
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

#[cfg(test)]
mod testing;
