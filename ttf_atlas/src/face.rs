// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font decoding.
//!
//! [`Face`] reads a TrueType font with Skrifa and reports metrics and outlines
//! at a fixed point size. Everything leaves this module in 26.6 pixels with
//! `y` growing downward, so the packer and rasterizer never see font units.

use core::fmt::{Debug, Formatter};

use skrifa::charmap::Charmap;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider, OutlineGlyphCollection};
use tiny_skia::{Path, PathBuilder};

use crate::error::Error;
use crate::fixed::{Fixed, FixedPoint, FixedRect};

/// Anything that can hand glyph outlines to the baker.
///
/// [`Face`] is the TrueType implementation; tests and procedural fonts can
/// provide their own.
pub trait GlyphSource {
    /// Face-wide metrics at the source's size.
    fn metrics(&self) -> FaceMetrics;

    /// The outline for `ch`, or `None` if the source has no such glyph.
    fn glyph(&self, ch: char) -> Option<GlyphOutline>;
}

impl<S: GlyphSource + ?Sized> GlyphSource for &S {
    fn metrics(&self) -> FaceMetrics {
        (**self).metrics()
    }

    fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        (**self).glyph(ch)
    }
}

/// Face-wide metrics in 26.6 pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the design extent.
    pub ascent: Fixed,
    /// Distance from the baseline to the bottom of the design extent,
    /// positive downward.
    pub descent: Fixed,
    /// Union of all glyph boxes, relative to the pen, `y` down.
    pub bounds: FixedRect,
}

impl FaceMetrics {
    /// `ascent + descent`, the height of one shelf in the atlas.
    pub fn line_height(&self) -> Fixed {
        self.ascent + self.descent
    }
}

/// One glyph, ready to rasterize.
#[derive(Clone, Debug)]
pub struct GlyphOutline {
    /// Tight bounds of the outline relative to the pen, `y` down.
    ///
    /// `bounds.min.x` is the left-side bearing and `bounds.min.y` the
    /// (negative) distance from the baseline to the top of the glyph.
    pub bounds: FixedRect,
    /// Horizontal advance.
    pub advance: Fixed,
    /// The outline in pixels relative to the pen, `y` down. `None` for blank
    /// glyphs such as the space.
    pub path: Option<Path>,
}

impl GlyphOutline {
    /// Creates an outline, deriving the bounds from the path's control box.
    pub fn new(path: Option<Path>, advance: Fixed) -> Self {
        let bounds = path.as_ref().map_or_else(FixedRect::default, |path| {
            let rect = path.bounds();
            FixedRect::new(
                FixedPoint::new(Fixed::from_f32(rect.left()), Fixed::from_f32(rect.top())),
                FixedPoint::new(Fixed::from_f32(rect.right()), Fixed::from_f32(rect.bottom())),
            )
        });
        Self {
            bounds,
            advance,
            path,
        }
    }
}

/// A TrueType font scaled to a point size at 72 DPI.
pub struct Face<'a> {
    charmap: Charmap<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
    size: Size,
    font_size: u32,
    metrics: FaceMetrics,
}

impl<'a> Face<'a> {
    /// Parses `data` and scales it to `font_size` points.
    ///
    /// Fails with [`ErrorKind::BadFont`](crate::ErrorKind::BadFont) if the data
    /// is not a font or lacks the tables needed for metrics.
    pub fn new(data: &'a [u8], font_size: u32) -> Result<Self, Error> {
        let font = FontRef::new(data).map_err(Error::bad_font)?;
        let head = font.head().map_err(Error::bad_font)?;
        if head.units_per_em() == 0 {
            return Err(Error::bad_font("head table reports zero units per em"));
        }
        font.hhea().map_err(Error::bad_font)?;
        font.maxp().map_err(Error::bad_font)?;

        // At 72 DPI one point is one pixel.
        let size = Size::new(font_size as f32);
        let location = LocationRef::default();
        let raw = font.metrics(size, location);
        let bounds = raw.bounds.map_or_else(FixedRect::default, |bb| {
            // Font units are y up; flip into atlas space.
            FixedRect::new(
                FixedPoint::new(Fixed::from_f32(bb.x_min), Fixed::from_f32(-bb.y_max)),
                FixedPoint::new(Fixed::from_f32(bb.x_max), Fixed::from_f32(-bb.y_min)),
            )
        });
        let metrics = FaceMetrics {
            ascent: Fixed::from_f32(raw.ascent),
            descent: Fixed::from_f32(-raw.descent),
            bounds,
        };
        log::debug!(
            "decoded face: {} glyphs, {} units/em, {}pt, ascent {:?}, descent {:?}",
            raw.glyph_count,
            raw.units_per_em,
            font_size,
            metrics.ascent,
            metrics.descent,
        );

        Ok(Self {
            charmap: font.charmap(),
            glyph_metrics: font.glyph_metrics(size, location),
            outlines: font.outline_glyphs(),
            size,
            font_size,
            metrics,
        })
    }

    /// The point size this face was scaled to.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Whether the font maps `ch` to a real glyph.
    pub fn contains(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.charmap.map(ch).filter(|gid| *gid != GlyphId::NOTDEF)
    }
}

impl GlyphSource for Face<'_> {
    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        let gid = self.glyph_id(ch)?;
        let outline = self.outlines.get(gid)?;
        let mut pen = PathPen::default();
        if let Err(err) = outline.draw(
            DrawSettings::unhinted(self.size, LocationRef::default()),
            &mut pen,
        ) {
            log::debug!("failed to draw outline of {ch:?} ({gid:?}): {err}");
            return None;
        }
        let advance = self.glyph_metrics.advance_width(gid).unwrap_or_default();
        Some(GlyphOutline::new(pen.finish(), Fixed::from_f32(advance)))
    }
}

impl Debug for Face<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Face")
            .field("font_size", &self.font_size)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Collects a Skrifa outline into a Tiny-Skia path, flipping `y`.
struct PathPen {
    builder: PathBuilder,
}

impl Default for PathPen {
    fn default() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }
}

impl PathPen {
    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, -y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(cx0, -cy0, x, -y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, -cy0, cx1, -cy1, x, -y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
