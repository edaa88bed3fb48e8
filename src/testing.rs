//! Assembles small TrueType fonts in memory for tests.
//!
//! Only the tables outline extraction needs are written: `cmap` (format 12), `glyf`,
//! `head`, `hhea`, `hmtx`, `loca` (long offsets) and `maxp` (version 0.5). Simple glyphs
//! are stored with every point on-curve and full 16-bit coordinate deltas.

#![allow(dead_code)]

/// Encode a simple glyph record from its contours, given in design units
pub fn simple_glyph(contours: &[&[(i16, i16)]]) -> Vec<u8> {
    let points: Vec<(i16, i16)> = contours.iter().flat_map(|c| c.iter().copied()).collect();
    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    let mut data = Vec::new();
    push_i16(&mut data, contours.len() as i16);
    for v in [x_min, y_min, x_max, y_max] {
        push_i16(&mut data, v);
    }

    let mut end = 0u16;
    for contour in contours {
        end += contour.len() as u16;
        push_u16(&mut data, end - 1);
    }

    // no instructions
    push_u16(&mut data, 0);
    data.extend(std::iter::repeat(0x01u8).take(points.len()));

    let mut previous = 0i16;
    for &(x, _) in points.iter() {
        push_i16(&mut data, x - previous);
        previous = x;
    }
    previous = 0;
    for &(_, y) in points.iter() {
        push_i16(&mut data, y - previous);
        previous = y;
    }

    data
}

/// Encode a composite glyph record referencing the given glyph ids, each placed at
/// the origin
pub fn composite_glyph(components: &[u16]) -> Vec<u8> {
    const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
    const ARGS_ARE_XY_VALUES: u16 = 0x0002;
    const MORE_COMPONENTS: u16 = 0x0020;

    let mut data = Vec::new();
    push_i16(&mut data, -1);
    for _ in 0..4 {
        push_i16(&mut data, 0);
    }
    for (i, &id) in components.iter().enumerate() {
        let mut flags = ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES;
        if i + 1 < components.len() {
            flags |= MORE_COMPONENTS;
        }
        push_u16(&mut data, flags);
        push_u16(&mut data, id);
        push_i16(&mut data, 0);
        push_i16(&mut data, 0);
    }
    data
}

struct TestGlyph {
    ch: Option<char>,
    advance: u16,
    data: Vec<u8>,
}

pub struct FontBuilder {
    units_per_em: u16,
    glyphs: Vec<TestGlyph>,
    skipped: Vec<[u8; 4]>,
}

impl FontBuilder {
    /// A font with only the `.notdef` glyph
    pub fn new(units_per_em: u16) -> FontBuilder {
        FontBuilder {
            units_per_em,
            glyphs: vec![TestGlyph {
                ch: None,
                advance: units_per_em / 2,
                data: Vec::new(),
            }],
            skipped: Vec::new(),
        }
    }

    pub fn glyph(mut self, ch: char, advance: u16, contours: &[&[(i16, i16)]]) -> FontBuilder {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            data: simple_glyph(contours),
        });
        self
    }

    pub fn empty_glyph(mut self, ch: char, advance: u16) -> FontBuilder {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            data: Vec::new(),
        });
        self
    }

    /// Add a glyph with a hand-made `glyf` record
    pub fn glyph_data(mut self, ch: char, advance: u16, data: Vec<u8>) -> FontBuilder {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            data,
        });
        self
    }

    /// Add a composite glyph made of the glyphs mapped from `parts`, which must have
    /// been added already
    pub fn composite(mut self, ch: char, advance: u16, parts: &[char]) -> FontBuilder {
        let ids: Vec<u16> = parts
            .iter()
            .map(|p| {
                self.glyphs
                    .iter()
                    .position(|g| g.ch == Some(*p))
                    .expect("component glyph was added first") as u16
            })
            .collect();
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            data: composite_glyph(&ids),
        });
        self
    }

    /// Leave a table out of the built font
    pub fn without_table(mut self, tag: &[u8; 4]) -> FontBuilder {
        self.skipped.push(*tag);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let num_glyphs = self.glyphs.len() as u16;

        let mut glyf = Vec::new();
        let mut loca = Vec::new();
        for glyph in self.glyphs.iter() {
            push_u32(&mut loca, glyf.len() as u32);
            glyf.extend_from_slice(&glyph.data);
        }
        push_u32(&mut loca, glyf.len() as u32);

        let mut hmtx = Vec::new();
        for glyph in self.glyphs.iter() {
            push_u16(&mut hmtx, glyph.advance);
            push_i16(&mut hmtx, 0);
        }

        let mut head = Vec::new();
        push_u32(&mut head, 0x0001_0000); // version
        push_u32(&mut head, 0x0001_0000); // font revision
        push_u32(&mut head, 0); // checksum adjustment
        push_u32(&mut head, 0x5F0F_3CF5); // magic
        push_u16(&mut head, 0); // flags
        push_u16(&mut head, self.units_per_em);
        head.extend_from_slice(&[0; 16]); // created, modified
        for v in [0i16, -200, self.units_per_em as i16, 800] {
            push_i16(&mut head, v);
        }
        push_u16(&mut head, 0); // mac style
        push_u16(&mut head, 8); // lowest rec ppem
        push_i16(&mut head, 2); // direction hint
        push_i16(&mut head, 1); // long loca offsets
        push_i16(&mut head, 0); // glyph data format

        let mut hhea = Vec::new();
        push_u32(&mut hhea, 0x0001_0000);
        push_i16(&mut hhea, 800); // ascender
        push_i16(&mut hhea, -200); // descender
        push_i16(&mut hhea, 0); // line gap
        push_u16(&mut hhea, self.glyphs.iter().map(|g| g.advance).max().unwrap_or(0));
        push_i16(&mut hhea, 0); // min lsb
        push_i16(&mut hhea, 0); // min rsb
        push_i16(&mut hhea, 0); // x max extent
        push_i16(&mut hhea, 1); // caret slope rise
        push_i16(&mut hhea, 0); // caret slope run
        push_i16(&mut hhea, 0); // caret offset
        hhea.extend_from_slice(&[0; 8]); // reserved
        push_i16(&mut hhea, 0); // metric data format
        push_u16(&mut hhea, num_glyphs);

        let mut maxp = Vec::new();
        push_u32(&mut maxp, 0x0000_5000);
        push_u16(&mut maxp, num_glyphs);

        let mut mapped: Vec<(u32, u32)> = self
            .glyphs
            .iter()
            .enumerate()
            .filter_map(|(id, g)| g.ch.map(|ch| (ch as u32, id as u32)))
            .collect();
        mapped.sort();

        let mut cmap = Vec::new();
        push_u16(&mut cmap, 0); // version
        push_u16(&mut cmap, 1); // subtable count
        push_u16(&mut cmap, 3); // windows
        push_u16(&mut cmap, 10); // unicode full repertoire
        push_u32(&mut cmap, 12);
        push_u16(&mut cmap, 12); // format
        push_u16(&mut cmap, 0);
        push_u32(&mut cmap, 16 + 12 * mapped.len() as u32);
        push_u32(&mut cmap, 0); // language
        push_u32(&mut cmap, mapped.len() as u32);
        for (code, id) in mapped {
            push_u32(&mut cmap, code);
            push_u32(&mut cmap, code);
            push_u32(&mut cmap, id);
        }

        // sorted by tag
        let tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", cmap),
            (*b"glyf", glyf),
            (*b"head", head),
            (*b"hhea", hhea),
            (*b"hmtx", hmtx),
            (*b"loca", loca),
            (*b"maxp", maxp),
        ]
        .into_iter()
        .filter(|(tag, _)| !self.skipped.contains(tag))
        .collect();

        let mut font = Vec::new();
        push_u32(&mut font, 0x0001_0000);
        push_u16(&mut font, tables.len() as u16);
        let mut search_range = 1u16;
        let mut entry_selector = 0u16;
        while search_range * 2 <= tables.len() as u16 {
            search_range *= 2;
            entry_selector += 1;
        }
        push_u16(&mut font, search_range * 16);
        push_u16(&mut font, entry_selector);
        push_u16(&mut font, tables.len() as u16 * 16 - search_range * 16);

        let mut offset = 12 + 16 * tables.len() as u32;
        let mut body = Vec::new();
        for (tag, data) in tables.iter() {
            font.extend_from_slice(tag);
            push_u32(&mut font, checksum(data));
            push_u32(&mut font, offset);
            push_u32(&mut font, data.len() as u32);

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
            offset = 12 + 16 * tables.len() as u32 + body.len() as u32;
        }
        font.extend_from_slice(&body);
        font
    }
}

/// The font most tests lay text out with: 1000 units per em, capital letters `A` to `D`
/// as simple glyphs, a wide `W`, an empty space glyph and a composite `X`.
pub fn sample_font() -> FontBuilder {
    FontBuilder::new(1000)
        .glyph('A', 600, &[&[(0, 0), (300, 700), (600, 0)]])
        .glyph(
            'B',
            500,
            &[
                &[(0, 0), (0, 700), (400, 700), (400, 350)],
                &[(0, 350), (450, 350), (450, 0)],
            ],
        )
        .glyph('C', 550, &[&[(500, 0), (0, 0), (0, 700), (500, 700)]])
        .glyph('D', 500, &[&[(0, 0), (0, 700), (450, 350)]])
        .glyph('W', 1000, &[&[(0, 700), (250, 0), (500, 700), (750, 0), (1000, 700)]])
        .empty_glyph(' ', 250)
        .composite('X', 700, &['A', 'B'])
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn push_u16(data: &mut Vec<u8>, v: u16) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(data: &mut Vec<u8>, v: i16) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(data: &mut Vec<u8>, v: u32) {
    data.extend_from_slice(&v.to_be_bytes());
}
