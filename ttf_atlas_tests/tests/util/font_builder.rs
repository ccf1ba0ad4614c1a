// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembles minimal TrueType fonts whose glyphs are axis-aligned rectangles.
//!
//! The fonts carry exactly the tables the baker reads: `cmap` (a single
//! format 12 subtable), `glyf`, `head`, `hhea`, `hmtx`, `loca` (long
//! offsets) and `maxp`. Glyph 0 is an empty `.notdef`.

/// Units per em of every built font. At [`SIZE`] points one pixel is
/// [`UNITS_PER_PX`] font units, so pixel math in tests is exact.
pub(crate) const UPEM: u16 = 1792;

/// The point size the fonts are designed for.
pub(crate) const SIZE: u32 = 14;

/// Font units per pixel at [`SIZE`].
pub(crate) const UNITS_PER_PX: f32 = 128.0;

/// Converts pixels at [`SIZE`] to font units.
pub(crate) fn units(px: f32) -> i16 {
    (px * UNITS_PER_PX) as i16
}

/// One glyph of a test font, in font units with `y` up.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TestGlyph {
    pub(crate) ch: char,
    pub(crate) advance: u16,
    /// `[x_min, y_min, x_max, y_max]`, or `None` for a blank glyph.
    pub(crate) rect: Option<[i16; 4]>,
}

impl TestGlyph {
    /// The advance in pixels at [`SIZE`].
    pub(crate) fn advance_px(&self) -> f32 {
        f32::from(self.advance) / UNITS_PER_PX
    }

    /// The ink box in pixels at [`SIZE`], `y` up.
    pub(crate) fn rect_px(&self) -> Option<[f32; 4]> {
        self.rect.map(|r| r.map(|v| f32::from(v) / UNITS_PER_PX))
    }
}

/// Builds a font from [`TestGlyph`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct FontBuilder {
    ascender: i16,
    descender: i16,
    glyphs: Vec<TestGlyph>,
}

impl FontBuilder {
    /// Starts a font with the given `hhea` ascent and descent in pixels.
    /// `descent` is positive below the baseline.
    pub(crate) fn new(ascent: f32, descent: f32) -> Self {
        Self {
            ascender: units(ascent),
            descender: -units(descent),
            glyphs: Vec::new(),
        }
    }

    /// Adds a glyph with no outline.
    pub(crate) fn blank(mut self, ch: char, advance: u16) -> Self {
        self.glyphs.push(TestGlyph {
            ch,
            advance,
            rect: None,
        });
        self
    }

    /// Adds a filled rectangle `[x_min, y_min, x_max, y_max]` in font units.
    pub(crate) fn rect(mut self, ch: char, advance: u16, rect: [i16; 4]) -> Self {
        self.glyphs.push(TestGlyph {
            ch,
            advance,
            rect: Some(rect),
        });
        self
    }

    /// The glyphs added so far, in insertion order.
    pub(crate) fn glyphs(&self) -> &[TestGlyph] {
        &self.glyphs
    }

    /// Serializes the font.
    pub(crate) fn build(&self) -> Vec<u8> {
        let mut glyphs = self.glyphs.clone();
        glyphs.sort_by_key(|g| g.ch);
        glyphs.dedup_by_key(|g| g.ch);
        let num_glyphs = u16::try_from(glyphs.len() + 1).unwrap();

        let bbox = glyphs
            .iter()
            .filter_map(|g| g.rect)
            .reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
            .unwrap_or_default();

        let mut glyf = Vec::new();
        let mut loca = vec![0_u32];
        let mut hmtx = Vec::new();
        // .notdef
        loca.push(0);
        push_u16(&mut hmtx, 0);
        push_i16(&mut hmtx, 0);
        for glyph in &glyphs {
            if let Some(rect) = glyph.rect {
                write_rect_glyph(&mut glyf, rect);
            }
            loca.push(u32::try_from(glyf.len()).unwrap());
            push_u16(&mut hmtx, glyph.advance);
            // The side bearing matches x_min so the outline is never shifted.
            push_i16(&mut hmtx, glyph.rect.map_or(0, |r| r[0]));
        }

        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", cmap(&glyphs)),
            (*b"glyf", glyf),
            (*b"head", head(bbox)),
            (*b"hhea", self.hhea(&glyphs, num_glyphs)),
            (*b"hmtx", hmtx),
            (*b"loca", loca.iter().flat_map(|o| o.to_be_bytes()).collect()),
            (*b"maxp", maxp(num_glyphs)),
        ];
        tables.sort_by_key(|(tag, _)| *tag);
        assemble(&tables)
    }

    fn hhea(&self, glyphs: &[TestGlyph], num_glyphs: u16) -> Vec<u8> {
        let advance_max = glyphs.iter().map(|g| g.advance).max().unwrap_or_default();
        let mut t = Vec::with_capacity(36);
        push_u16(&mut t, 1);
        push_u16(&mut t, 0);
        push_i16(&mut t, self.ascender);
        push_i16(&mut t, self.descender);
        push_i16(&mut t, 0); // line gap
        push_u16(&mut t, advance_max);
        push_i16(&mut t, 0); // min lsb
        push_i16(&mut t, 0); // min rsb
        push_i16(&mut t, 0); // x max extent
        push_i16(&mut t, 1); // caret slope rise
        push_i16(&mut t, 0);
        push_i16(&mut t, 0);
        t.extend_from_slice(&[0; 8]);
        push_i16(&mut t, 0); // metric data format
        push_u16(&mut t, num_glyphs);
        t
    }
}

/// One contour of four on-curve points, with 16-bit coordinate deltas.
fn write_rect_glyph(glyf: &mut Vec<u8>, [x0, y0, x1, y1]: [i16; 4]) {
    push_i16(glyf, 1);
    for v in [x0, y0, x1, y1] {
        push_i16(glyf, v);
    }
    push_u16(glyf, 3); // last point of the contour
    push_u16(glyf, 0); // no instructions
    glyf.extend_from_slice(&[0x01; 4]);
    let points = [(x0, y0), (x0, y1), (x1, y1), (x1, y0)];
    let mut prev = 0;
    for (x, _) in points {
        push_i16(glyf, x - prev);
        prev = x;
    }
    prev = 0;
    for (_, y) in points {
        push_i16(glyf, y - prev);
        prev = y;
    }
    while glyf.len() % 4 != 0 {
        glyf.push(0);
    }
}

fn cmap(glyphs: &[TestGlyph]) -> Vec<u8> {
    let groups = u32::try_from(glyphs.len()).unwrap();
    let mut t = Vec::new();
    push_u16(&mut t, 0);
    push_u16(&mut t, 1);
    // Windows, full Unicode repertoire.
    push_u16(&mut t, 3);
    push_u16(&mut t, 10);
    push_u32(&mut t, 12);

    push_u16(&mut t, 12);
    push_u16(&mut t, 0);
    push_u32(&mut t, 16 + 12 * groups);
    push_u32(&mut t, 0);
    push_u32(&mut t, groups);
    for (gid, glyph) in (1_u32..).zip(glyphs) {
        push_u32(&mut t, glyph.ch as u32);
        push_u32(&mut t, glyph.ch as u32);
        push_u32(&mut t, gid);
    }
    t
}

fn head([x_min, y_min, x_max, y_max]: [i16; 4]) -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    push_u16(&mut t, 1);
    push_u16(&mut t, 0);
    push_u32(&mut t, 0x0001_0000); // font revision
    push_u32(&mut t, 0); // checksum adjustment
    push_u32(&mut t, 0x5F0F_3CF5);
    push_u16(&mut t, 0x000B);
    push_u16(&mut t, UPEM);
    t.extend_from_slice(&[0; 16]); // created, modified
    for v in [x_min, y_min, x_max, y_max] {
        push_i16(&mut t, v);
    }
    push_u16(&mut t, 0); // mac style
    push_u16(&mut t, 8); // lowest rec ppem
    push_i16(&mut t, 2); // font direction hint
    push_i16(&mut t, 1); // long loca offsets
    push_i16(&mut t, 0);
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::with_capacity(32);
    push_u32(&mut t, 0x0001_0000);
    push_u16(&mut t, num_glyphs);
    push_u16(&mut t, 4); // max points
    push_u16(&mut t, 1); // max contours
    push_u16(&mut t, 0);
    push_u16(&mut t, 0);
    push_u16(&mut t, 2); // max zones
    t.extend_from_slice(&[0; 16]);
    t
}

/// Writes the table directory followed by the 4-byte aligned tables.
fn assemble(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = u16::try_from(tables.len()).unwrap();
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1_u16 << entry_selector) * 16;

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000);
    push_u16(&mut font, num_tables);
    push_u16(&mut font, search_range);
    push_u16(&mut font, entry_selector);
    push_u16(&mut font, num_tables * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in tables {
        font.extend_from_slice(tag);
        push_u32(&mut font, checksum(data));
        push_u32(&mut font, u32::try_from(offset).unwrap());
        push_u32(&mut font, u32::try_from(data.len()).unwrap());
        offset += data.len().next_multiple_of(4);
    }
    for (_, data) in tables {
        font.extend_from_slice(data);
        font.resize(font.len().next_multiple_of(4), 0);
    }
    font
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0_u32, |sum, chunk| {
        let mut word = [0; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}
