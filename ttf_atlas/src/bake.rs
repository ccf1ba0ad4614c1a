// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-glyph bake loop.

use hashbrown::HashMap;

use crate::atlas::Glyph;
use crate::canvas::{Canvas, FOREGROUND};
use crate::config::AtlasConfig;
use crate::error::Error;
use crate::face::{FaceMetrics, GlyphSource};
use crate::packer::ShelfPacker;
use crate::raster::rasterize;

/// The glyph table produced by [`bake`].
#[derive(Debug)]
pub(crate) struct Baked {
    pub(crate) glyphs: HashMap<char, Glyph>,
    pub(crate) metrics: FaceMetrics,
    /// Shelves the packer opened.
    pub(crate) shelves: u32,
}

/// Rasterizes every configured code point `source` provides into `canvas`.
///
/// Code points the source does not know, or cannot draw, are skipped.
pub(crate) fn bake<S: GlyphSource + ?Sized>(
    source: &S,
    config: &AtlasConfig,
    canvas: &mut Canvas,
) -> Result<Baked, Error> {
    let metrics = source.metrics();
    let mut packer = ShelfPacker::new(canvas.width(), canvas.height(), metrics.line_height());
    let padding = packer.padding();
    let bleed = padding / 2;
    let mut glyphs = HashMap::with_capacity(config.runes.len());

    for &ch in &config.runes {
        if glyphs.contains_key(&ch) {
            continue;
        }
        let Some(glyph) = source.glyph(ch) else {
            log::debug!("font has no glyph for {ch:?}, skipping");
            continue;
        };
        let bb = glyph.bounds;
        let (gw, gh) = (bb.width(), bb.height());

        let dot = packer
            .place(gw, config.overflow)
            .map_err(|_| Error::atlas_full(ch))?;

        // Shift the pen so the glyph's top-left corner lands on `dot`.
        let Some(coverage) = rasterize(&glyph, dot - bb.min) else {
            log::debug!("glyph for {ch:?} could not be rasterized, skipping");
            continue;
        };
        if let Some(mask) = &coverage.mask {
            canvas.composite(coverage.dst, FOREGROUND, mask, coverage.mask_origin);
        }
        log::trace!("placed {ch:?} at {dot:?}, {gw:?} x {gh:?}");

        glyphs.insert(
            ch,
            Glyph {
                codepoint: ch,
                advance: glyph.advance.floor().max(0),
                x: (dot.x - bleed).to_f32(),
                y: (dot.y - bleed).to_f32(),
                width: (gw + padding).to_f32(),
                height: (gh + padding).to_f32(),
                x_offset: bb.min.x.to_f32(),
                y_offset: (metrics.ascent + bb.min.y - bleed).to_f32(),
            },
        );

        packer.advance(gw);
    }

    Ok(Baked {
        glyphs,
        metrics,
        shelves: packer.shelves(),
    })
}
