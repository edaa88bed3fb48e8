//! Turning text into glyph outline paths on a page.
//!
//! [`Metrics`] measures glyphs and words of one font at one size, [`emit_glyph`] draws a
//! single glyph at a [`Cursor`], and [`layout_text`] drives both over whole paragraphs,
//! wrapping lines between words.
//!
//! # Example
//!
//! ```no_run
//! use stickfont::{Font, Page, PageConfig, PathStyle, Px};
//! use stickfont::layout::{layout_text, AdvanceSource, Metrics, Spacing};
//!
//! let font = Font::open("StickFonts/Stick.ttf").expect("can load font");
//! let metrics = Metrics::new(&font, Px(12.0), AdvanceSource::Advance);
//!
//! let mut page = Page::new(PageConfig::default());
//! let spacing = Spacing { letter: Px(2.0), line: 1.2 };
//! let start = (page.config.margins.left, page.config.margins.top);
//! let trace = layout_text("Hello, world!", &metrics, &mut page, start, spacing, PathStyle::default());
//! println!("{} paths, {} wraps", page.contents.len(), trace.wraps);
//! ```

mod glyphs;
mod margins;
mod metrics;
mod text;

pub use glyphs::*;
pub use margins::*;
pub use metrics::*;
pub use text::*;
