// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph coverage masks.

use core::fmt::{Debug, Formatter};

use tiny_skia::{FillRule, Mask, Transform};

use crate::face::GlyphOutline;
use crate::fixed::FixedPoint;

/// An integer pixel rectangle, `x0`/`y0` inclusive and `x1`/`y1` exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge, exclusive.
    pub x1: i32,
    /// Bottom edge, exclusive.
    pub y1: i32,
}

impl PixelRect {
    /// Creates a rectangle from its edges.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels, zero if the rectangle is inverted.
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0).unsigned_abs()
    }

    /// Height in pixels, zero if the rectangle is inverted.
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0).unsigned_abs()
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// The overlap of two rectangles, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let r = Self::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        (!r.is_empty()).then_some(r)
    }
}

/// A rasterized glyph, ready to be composited onto a [`Canvas`](crate::Canvas).
pub struct Coverage {
    /// Where the mask lands on the canvas.
    pub dst: PixelRect,
    /// 8-bit coverage, `None` for blank glyphs.
    pub mask: Option<Mask>,
    /// The mask pixel that lines up with `dst`'s upper-left corner.
    pub mask_origin: (i32, i32),
}

impl Debug for Coverage {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coverage")
            .field("dst", &self.dst)
            .field("has_mask", &self.mask.is_some())
            .field("mask_origin", &self.mask_origin)
            .finish()
    }
}

/// Rasterizes `glyph` with its pen at `origin` (26.6, y down).
///
/// The destination is the glyph's bounds at `origin`, rounded outward to whole
/// pixels, and the mask is rendered with the fractional part of `origin`
/// preserved. Returns `None` if the glyph cannot be drawn.
pub fn rasterize(glyph: &GlyphOutline, origin: FixedPoint) -> Option<Coverage> {
    let bounds = glyph.bounds;
    let dst = PixelRect::new(
        (origin.x + bounds.min.x).floor(),
        (origin.y + bounds.min.y).floor(),
        (origin.x + bounds.max.x).ceil(),
        (origin.y + bounds.max.y).ceil(),
    );
    let Some(path) = &glyph.path else {
        return Some(Coverage {
            dst,
            mask: None,
            mask_origin: (0, 0),
        });
    };
    if dst.is_empty() {
        // A path with no area, e.g. a lone hairline contour.
        return None;
    }

    let mut mask = Mask::new(dst.width(), dst.height())?;
    let transform = Transform::from_translate(
        origin.x.to_f32() - dst.x0 as f32,
        origin.y.to_f32() - dst.y0 as f32,
    );
    mask.fill_path(path, FillRule::Winding, true, transform);
    Some(Coverage {
        dst,
        mask: Some(mask),
        mask_origin: (0, 0),
    })
}
