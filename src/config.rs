//! Conversion settings read from a TOML file.
//!
//! Every key is optional; missing keys take the same defaults as
//! [ConversionParams::default]. A complete file looks like this:
//!
//! ```toml
//! font = "Stick"
//! font_dir = "StickFonts"
//! paper = "A5 Landscape"
//! font_size = 12
//! letter_spacing = 2
//! line_spacing = 1.2
//! advance = "bounding-box"
//! format = "pdf"
//!
//! [margins]
//! top = 20
//! right = 20
//! bottom = 20
//! left = 30
//!
//! [style]
//! stroke = "#ff0000"
//! stroke_width = 0.5
//! ```

use crate::convert::ConversionParams;
use crate::document::OutputFormat;
use crate::error::ConversionError;
use crate::font::font_path;
use crate::layout::{AdvanceSource, Margins};
use crate::page::{PageConfig, PathStyle};
use crate::pagesize;
use crate::units::Px;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The font to use, by name within `font_dir`
    pub font: Option<String>,
    /// The directory fonts are looked up in
    pub font_dir: PathBuf,
    /// A paper size name such as `"A4 Portrait"`
    pub paper: String,
    pub margins: Margins,
    pub font_size: Px,
    pub letter_spacing: Px,
    pub line_spacing: f32,
    pub advance: AdvanceSource,
    pub style: PathStyle,
    /// The output format; when absent it is taken from the output file name
    pub format: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        let params = ConversionParams::default();
        Config {
            font: None,
            font_dir: PathBuf::from("StickFonts"),
            paper: "A4 Portrait".to_string(),
            margins: params.page.margins,
            font_size: params.font_size,
            letter_spacing: params.letter_spacing,
            line_spacing: params.line_spacing,
            advance: params.advance_source,
            style: params.style,
            format: None,
        }
    }
}

impl FromStr for Config {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(Into::into)
    }
}

impl Config {
    /// Read a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConversionError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// The page described by the paper size and margins
    pub fn page(&self) -> Result<PageConfig, ConversionError> {
        let size = pagesize::by_name(&self.paper).ok_or_else(|| {
            ConversionError::invalid(
                "paper",
                format!(
                    "unknown paper size \"{}\", expected one of: {}",
                    self.paper,
                    pagesize::names().join(", ")
                ),
            )
        })?;
        Ok(PageConfig::from_size(size, self.margins))
    }

    /// The conversion parameters this configuration describes, starting at the top left
    /// margin corner. The parameters are not validated here; the conversion does that.
    pub fn params(&self) -> Result<ConversionParams, ConversionError> {
        Ok(ConversionParams {
            font_size: self.font_size,
            letter_spacing: self.letter_spacing,
            line_spacing: self.line_spacing,
            style: self.style,
            advance_source: self.advance,
            format: self.format.unwrap_or_default(),
            ..ConversionParams::for_page(self.page()?)
        })
    }

    /// The file of the configured font, if one is configured
    pub fn font_file(&self) -> Option<PathBuf> {
        self.font
            .as_deref()
            .map(|name| font_path(&self.font_dir, name))
    }
}
