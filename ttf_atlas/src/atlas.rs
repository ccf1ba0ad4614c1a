// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The baked atlas and its glyph records.

use std::io::Read;

use hashbrown::HashMap;

use crate::bake::bake;
use crate::canvas::Canvas;
use crate::config::AtlasConfig;
use crate::error::Error;
use crate::face::{Face, GlyphSource};
use crate::texture::TextureLoader;
use crate::ATLAS_SIZE;

/// Where one glyph lives in the atlas and how to draw it.
///
/// Rectangles include a one pixel bleed on every side of the glyph's tight
/// box, so `width` and `height` are two pixels larger than the ink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// The code point this record was baked for.
    pub codepoint: char,
    /// Horizontal advance in whole pixels.
    pub advance: i32,
    /// Left edge of the rectangle in the texture.
    pub x: f32,
    /// Top edge of the rectangle in the texture.
    pub y: f32,
    /// Rectangle width.
    pub width: f32,
    /// Rectangle height.
    pub height: f32,
    /// Horizontal offset from the pen to the rectangle, the left-side bearing.
    pub x_offset: f32,
    /// Vertical offset from the top of the line to the rectangle.
    ///
    /// This is the ascent plus the glyph's (negative) top bearing, less the
    /// bleed, so a cursor at the top of a line draws the rectangle at
    /// `cursor.y + y_offset`.
    pub y_offset: f32,
}

/// A set of glyphs baked into one texture at one size.
///
/// `T` is whatever the [`TextureLoader`] handed back. The atlas is immutable
/// once built and can be shared across threads when `T` allows it.
#[derive(Debug)]
pub struct FontAtlas<T> {
    glyphs: HashMap<char, Glyph>,
    width: f32,
    height: f32,
    ascent: f32,
    descent: f32,
    texture: T,
}

impl<T> FontAtlas<T> {
    /// Reads a TrueType font from `reader` and bakes it.
    ///
    /// The whole stream is read into memory first. See
    /// [`from_source`](Self::from_source) for the rest of the build.
    pub fn build<R, L>(mut reader: R, config: &AtlasConfig, loader: &mut L) -> Result<Self, Error>
    where
        R: Read,
        L: TextureLoader<Texture = T>,
    {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(Error::io)?;
        log::debug!("read {} bytes of font data", data.len());
        let face = Face::new(&data, config.font_size)?;
        Self::from_source(&face, config, loader)
    }

    /// Bakes the configured code points from `source` and uploads the result
    /// through `loader`.
    ///
    /// Code points the source has no glyph for are left out of the atlas.
    /// The texture is uploaded even if no glyph was baked.
    pub fn from_source<S, L>(source: &S, config: &AtlasConfig, loader: &mut L) -> Result<Self, Error>
    where
        S: GlyphSource + ?Sized,
        L: TextureLoader<Texture = T>,
    {
        let mut canvas = Canvas::new(ATLAS_SIZE, ATLAS_SIZE)
            .expect("the atlas size is a non-zero constant");
        let baked = bake(source, config, &mut canvas)?;
        log::debug!(
            "baked {} of {} requested glyphs onto {} shelves",
            baked.glyphs.len(),
            config.runes.len(),
            baked.shelves,
        );

        if let Some(path) = &config.debug_dump {
            #[cfg(feature = "png")]
            canvas.save_png(path);
            #[cfg(not(feature = "png"))]
            log::warn!(
                "not writing atlas canvas to {}: the `png` feature is disabled",
                path.display()
            );
        }

        let texture = loader
            .load(canvas.image())
            .map_err(Error::texture_upload)?;

        let metrics = baked.metrics;
        Ok(Self {
            glyphs: baked.glyphs,
            width: metrics.bounds.width().to_f32(),
            height: metrics.bounds.height().to_f32(),
            ascent: metrics.ascent.to_f32(),
            descent: metrics.descent.to_f32(),
            texture,
        })
    }

    /// The record for `ch`, if it was baked.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// The font-wide bounding box size in pixels.
    ///
    /// This is the worst-case cell for any glyph in the font at this size,
    /// not the extent of the glyphs that were actually baked.
    pub fn line_metrics(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Distance from the baseline to the top of the line, in pixels.
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Distance from the baseline to the bottom of the line, in pixels,
    /// positive downward.
    pub fn descent(&self) -> f32 {
        self.descent
    }

    /// The uploaded texture.
    pub fn texture(&self) -> &T {
        &self.texture
    }

    /// Consumes the atlas, returning the uploaded texture.
    pub fn into_texture(self) -> T {
        self.texture
    }

    /// Number of baked glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no glyph was baked.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates over the baked glyphs in arbitrary order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.glyphs.values()
    }
}
