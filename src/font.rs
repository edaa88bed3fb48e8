use crate::error::ConversionError;
use crate::glyph::Glyph;
use log::debug;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace, Tag};
use read_fonts::{FontRef, TableProvider};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A parsed TrueType font. Every glyph outline is decoded when the font is loaded, so
/// a [Font] is plain immutable data afterwards: it can be shared between threads and
/// used for any number of conversions without touching the font file again.
///
/// Only fonts with TrueType outlines (`glyf` and `loca` tables) are supported.
#[derive(Debug, Clone)]
pub struct Font {
    units_per_em: u16,
    name: Option<String>,
    family: Option<String>,
    chars: HashMap<char, u16>,
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed or lacks the tables outlines are read from
    pub fn load(bytes: Vec<u8>) -> Result<Font, ConversionError> {
        let owned = OwnedFace::from_vec(bytes, 0)?;
        let face = owned.as_face_ref();

        if face.tables().cmap.is_none() {
            return Err(ConversionError::MissingTable("cmap"));
        }
        for (tag, table) in [(b"glyf", "glyf"), (b"loca", "loca")] {
            if face.raw_face().table(Tag::from_bytes(tag)).is_none() {
                return Err(ConversionError::MissingTable(table));
            }
        }

        let tables = FontRef::new(owned.as_slice())?;
        let loca = tables
            .loca(None)
            .map_err(|e| ConversionError::malformed("loca", e))?;
        let glyf = tables
            .glyf()
            .map_err(|e| ConversionError::malformed("glyf", e))?;

        let mut glyphs: Vec<Glyph> = Vec::with_capacity(face.number_of_glyphs() as usize);
        for id in 0..face.number_of_glyphs() {
            let raw = loca
                .get_glyf(read_fonts::types::GlyphId::from(id as u32), &glyf)
                .map_err(|e| ConversionError::malformed("glyf", format!("glyph {id}: {e}")))?;
            let advance = face.glyph_hor_advance(GlyphId(id));
            glyphs.push(Glyph::decode(raw, advance)?);
        }

        let font = Font {
            units_per_em: face.units_per_em(),
            name: name_entry(face, owned_ttf_parser::name_id::FULL_NAME),
            family: name_entry(face, owned_ttf_parser::name_id::FAMILY),
            chars: char_map(face),
            glyphs,
        };

        debug!(
            "loaded font {}: {} glyphs, {} mapped characters, {} units per em",
            font.name.as_deref().unwrap_or("<unnamed>"),
            font.glyphs.len(),
            font.chars.len(),
            font.units_per_em
        );

        Ok(font)
    }

    /// Read and load a font file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, ConversionError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConversionError::FontNotFound(path.to_path_buf()),
            _ => ConversionError::Io(e),
        })?;
        Font::load(bytes)
    }

    /// The glyph the character map assigns to `ch`, or [None] if the font has no glyph
    /// for it
    pub fn lookup(&self, ch: char) -> Option<&Glyph> {
        self.chars
            .get(&ch)
            .and_then(|&id| self.glyphs.get(id as usize))
    }

    /// Design units per em; glyph coordinates are scaled by `size / units_per_em`
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The full name of the font, if the font names itself
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The family name of the font, if present
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

/// The names of the fonts in a directory: every `.ttf` file, without its extension,
/// sorted
pub fn font_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, ConversionError> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"))
        })
        .filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()).map(String::from))
        .collect();
    names.sort();
    Ok(names)
}

/// Where the font called `name` lives in `dir`
pub fn font_path<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{name}.ttf"))
}

fn char_map(face: &Face<'_>) -> HashMap<char, u16> {
    let mut map: HashMap<char, u16> = HashMap::new();

    let Some(cmap) = face.tables().cmap else {
        return map;
    };

    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint: u32| {
            if let Ok(ch) = char::try_from(codepoint) {
                // glyph 0 is .notdef, which means the character is missing
                if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0) {
                    map.entry(ch).or_insert(index.0);
                }
            }
        });
    }

    map
}

fn name_entry(face: &Face<'_>, name_id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .find(|name| name.name_id == name_id && name.is_unicode())
        .and_then(|name| name.to_string())
}
