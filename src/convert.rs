use crate::document::{Document, OutputFormat};
use crate::error::ConversionError;
use crate::font::Font;
use crate::layout::{layout_text, AdvanceSource, LayoutTrace, Metrics, Spacing};
use crate::page::{PageConfig, PathStyle};
use crate::units::Px;
use log::info;
use std::path::Path;

/// Everything that controls how text is converted, apart from the font
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConversionParams {
    pub page: PageConfig,
    /// Font size in device units; one em of the font is scaled to this
    pub font_size: Px,
    /// Where the first baseline starts
    pub origin: (Px, Px),
    /// Extra space after every glyph
    pub letter_spacing: Px,
    /// Distance between baselines as a multiple of the font size
    pub line_spacing: f32,
    pub style: PathStyle,
    pub advance_source: AdvanceSource,
    pub format: OutputFormat,
}

impl Default for ConversionParams {
    fn default() -> Self {
        ConversionParams::for_page(PageConfig::default())
    }
}

impl ConversionParams {
    /// Default settings on the given page, starting at its top left margin corner
    pub fn for_page(page: PageConfig) -> ConversionParams {
        ConversionParams {
            page,
            font_size: Px(12.0),
            origin: (page.margins.left, page.margins.top),
            letter_spacing: Px(2.0),
            line_spacing: 1.2,
            style: PathStyle::default(),
            advance_source: AdvanceSource::default(),
            format: OutputFormat::default(),
        }
    }

    /// Check every value is usable before anything is laid out
    pub fn validate(&self) -> Result<(), ConversionError> {
        self.page.validate()?;

        if !self.font_size.is_finite() || self.font_size <= Px(0.0) {
            return Err(ConversionError::invalid(
                "font size",
                format!("must be a positive number, got {}", self.font_size),
            ));
        }
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(ConversionError::invalid(
                "line spacing",
                format!("must be a positive number, got {}", self.line_spacing),
            ));
        }
        if !self.letter_spacing.is_finite() {
            return Err(ConversionError::invalid(
                "letter spacing",
                format!("must be a finite number, got {}", self.letter_spacing),
            ));
        }
        if !self.style.stroke_width.is_finite() || self.style.stroke_width <= Px(0.0) {
            return Err(ConversionError::invalid(
                "stroke width",
                format!("must be a positive number, got {}", self.style.stroke_width),
            ));
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(ConversionError::invalid(
                "origin",
                format!("must be finite, got ({}, {})", self.origin.0, self.origin.1),
            ));
        }

        Ok(())
    }

    fn spacing(&self) -> Spacing {
        Spacing {
            letter: self.letter_spacing,
            line: self.line_spacing,
        }
    }
}

/// The result of [convert]
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The serialized document
    pub bytes: Vec<u8>,
    /// How many paths the document holds, one per drawn contour
    pub paths: usize,
    pub trace: LayoutTrace,
}

/// Lay text out on a new document without serializing it
pub fn render(
    text: &str,
    font: &Font,
    params: &ConversionParams,
) -> Result<(Document, LayoutTrace), ConversionError> {
    params.validate()?;

    let metrics = Metrics::new(font, params.font_size, params.advance_source);
    let mut document = Document::new(params.page);
    let trace = layout_text(
        text,
        &metrics,
        &mut document.page,
        params.origin,
        params.spacing(),
        params.style,
    );

    info!(
        "laid out {} words as {} paths ({} wraps, {} characters skipped)",
        trace.words.len(),
        document.paths().len(),
        trace.wraps,
        trace.skipped.len()
    );
    Ok((document, trace))
}

/// Convert text to a document of glyph outlines in the format `params` asks for
pub fn convert(
    text: &str,
    font: &Font,
    params: &ConversionParams,
) -> Result<Conversion, ConversionError> {
    let (document, trace) = render(text, font, params)?;
    let bytes = document.render(params.format)?;
    Ok(Conversion {
        bytes,
        paths: document.paths().len(),
        trace,
    })
}

/// Convert text and save the document to `path`, returning a message saying where it
/// went. Nothing is written if the parameters are invalid, and a failed save leaves no
/// partial file behind.
pub fn convert_to_file<P: AsRef<Path>>(
    text: &str,
    font: &Font,
    params: &ConversionParams,
    path: P,
) -> Result<String, ConversionError> {
    let path = path.as_ref();
    let (document, _) = render(text, font, params)?;
    document.save(path, params.format)?;
    Ok(format!(
        "{} saved successfully: {}",
        params.format.name(),
        path.display()
    ))
}
