// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ttf_atlas::{CpuTexture, FontAtlas, Glyph};

/// Asserts that no two glyph rectangles share a pixel.
///
/// Rectangles are half open, so neighbours may touch.
pub(crate) fn assert_disjoint<'a>(glyphs: impl IntoIterator<Item = &'a Glyph>) {
    let glyphs: Vec<_> = glyphs.into_iter().collect();
    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            let apart = a.x + a.width <= b.x
                || b.x + b.width <= a.x
                || a.y + a.height <= b.y
                || b.y + b.height <= a.y;
            assert!(apart, "{a:?} overlaps {b:?}");
        }
    }
}

/// Asserts that the pixel at the centre of `ch`'s ink box is opaque white and
/// that the bleed corner is transparent.
pub(crate) fn assert_ink_painted(atlas: &FontAtlas<CpuTexture>, ch: char) {
    let glyph = atlas.glyph(ch).unwrap();
    let texture = atlas.texture();
    let cx = (glyph.x + glyph.width / 2.0) as u32;
    let cy = (glyph.y + glyph.height / 2.0) as u32;
    assert_eq!(texture.pixel(cx, cy), Some([255; 4]), "centre of {ch:?}");
    let (bx, by) = (glyph.x.floor() as u32, glyph.y.floor() as u32);
    assert_eq!(texture.pixel(bx, by), Some([0; 4]), "bleed corner of {ch:?}");
}
