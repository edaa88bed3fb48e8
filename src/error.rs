use std::path::PathBuf;
use thiserror::Error;

/// All errors that a conversion can end with. Characters missing from the font and
/// composite glyphs are not errors; they are skipped and logged.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("font file not found: {}", .0.display())]
    /// The font file does not exist
    FontNotFound(PathBuf),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("could not read font tables: {0}")]
    /// The table directory could not be read for outline extraction
    FontTables(#[from] read_fonts::ReadError),

    #[error("font is missing the required `{0}` table")]
    /// The font parsed, but lacks a table that outlines are read from
    MissingTable(&'static str),

    #[error("malformed `{table}` table: {reason}")]
    /// A font table is truncated or internally inconsistent
    MalformedTable { table: &'static str, reason: String },

    #[error("invalid {name}: {reason}")]
    /// A caller-supplied parameter is out of range; raised before any layout happens
    InvalidParameter { name: &'static str, reason: String },

    #[error(transparent)]
    /// An I/O error occurred while reading the font or writing the output
    Io(#[from] std::io::Error),

    #[error("could not serialize document: {0}")]
    /// The output document could not be produced
    Serialization(String),

    #[error(transparent)]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),
}

impl ConversionError {
    pub(crate) fn malformed<S: ToString>(table: &'static str, reason: S) -> ConversionError {
        ConversionError::MalformedTable {
            table,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid<S: ToString>(name: &'static str, reason: S) -> ConversionError {
        ConversionError::InvalidParameter {
            name,
            reason: reason.to_string(),
        }
    }

    /// Whether the error came from loading the font, as opposed to the parameters or
    /// the output
    pub fn is_font_error(&self) -> bool {
        matches!(
            self,
            ConversionError::FontNotFound(_)
                | ConversionError::FaceParsing(_)
                | ConversionError::FontTables(_)
                | ConversionError::MissingTable(_)
                | ConversionError::MalformedTable { .. }
        )
    }
}
