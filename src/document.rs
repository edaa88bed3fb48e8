use crate::content::{render_pdf, render_svg};
use crate::error::ConversionError;
use crate::page::{Page, PageConfig, Path};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path as FsPath;
use std::str::FromStr;

/// The vector formats a [Document] can be written as
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Pdf,
}

impl OutputFormat {
    /// Infer the format from a file name's extension, ignoring case
    pub fn from_path<P: AsRef<FsPath>>(path: P) -> Option<OutputFormat> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// The upper case name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "SVG",
            OutputFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(format!("unknown output format \"{s}\", expected svg or pdf")),
        }
    }
}

/// A document is a single page of paths, which can then be rendered out with a call to
/// [Document::write] or [Document::save]
#[derive(Clone, Debug)]
pub struct Document {
    pub page: Page,
}

impl Document {
    pub fn new(config: PageConfig) -> Document {
        Document {
            page: Page::new(config),
        }
    }

    pub fn add_path(&mut self, path: Path) {
        self.page.add_path(path);
    }

    /// Every path added so far, in drawing order
    pub fn paths(&self) -> &[Path] {
        &self.page.contents
    }

    /// Render the whole document in memory
    pub fn render(&self, format: OutputFormat) -> Result<Vec<u8>, ConversionError> {
        let rendered = match format {
            OutputFormat::Svg => render_svg(&self.page),
            OutputFormat::Pdf => render_pdf(&self.page),
        };
        rendered.map_err(|e| ConversionError::Serialization(e.to_string()))
    }

    /// Write the entire document to the writer. The document is rendered in memory first
    /// and then written in one call, so nothing reaches the writer if rendering fails.
    pub fn write<W: Write>(&self, format: OutputFormat, mut w: W) -> Result<(), ConversionError> {
        let rendered = self.render(format)?;
        w.write_all(rendered.as_slice()).map_err(Into::into)
    }

    /// Write the document to a file. The file is written next to its destination under a
    /// temporary name and renamed into place once complete; if anything fails the
    /// temporary file is removed and the destination is left as it was.
    pub fn save<P: AsRef<FsPath>>(&self, path: P, format: OutputFormat) -> Result<(), ConversionError> {
        let path = path.as_ref();
        let rendered = self.render(format)?;

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => FsPath::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(rendered.as_slice())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        debug!("wrote {} bytes of {format} to {}", rendered.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Px;
    use test_case::test_case;

    fn document() -> Document {
        let mut document = Document::new(PageConfig::default());
        document.add_path(Path {
            points: vec![(Px(30.0), Px(40.0)), (Px(35.0), Px(30.0)), (Px(40.0), Px(40.0))],
            style: Default::default(),
        });
        document
    }

    #[test_case("out.svg", Some(OutputFormat::Svg))]
    #[test_case("dir/OUT.PDF", Some(OutputFormat::Pdf))]
    #[test_case("out.png", None)]
    #[test_case("out", None)]
    fn format_from_path(path: &str, expected: Option<OutputFormat>) {
        assert_eq!(OutputFormat::from_path(path), expected);
    }

    #[test_case(OutputFormat::Svg)]
    #[test_case(OutputFormat::Pdf)]
    fn rendering_is_repeatable(format: OutputFormat) {
        let document = document();
        let first = document.render(format).expect("renders");
        let second = document.render(format).expect("renders");
        assert_eq!(first, second);
    }

    #[test]
    fn write_matches_render() {
        let document = document();
        let mut out = Vec::new();
        document.write(OutputFormat::Svg, &mut out).expect("writes");
        assert_eq!(out, document.render(OutputFormat::Svg).expect("renders"));
    }

    #[test]
    fn save_replaces_the_destination() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("page.svg");
        std::fs::write(&path, b"old").expect("can write");

        document().save(&path, OutputFormat::Svg).expect("saves");

        let saved = std::fs::read(&path).expect("can read");
        assert_eq!(saved, document().render(OutputFormat::Svg).expect("renders"));
        // only the destination remains, no temporary files
        assert_eq!(std::fs::read_dir(dir.path()).expect("can list").count(), 1);
    }

    #[test]
    fn failed_save_leaves_nothing_behind() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("missing").join("page.svg");

        let err = document().save(&path, OutputFormat::Pdf).expect_err("directory does not exist");
        assert!(matches!(err, ConversionError::Io(_)), "{err}");
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).expect("can list").count(), 0);
    }
}
