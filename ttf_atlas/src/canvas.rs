// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared RGBA image glyphs are baked into.

use core::fmt::{Debug, Formatter};

use tiny_skia::{ColorU8, Mask, Pixmap, PremultipliedColorU8};

use crate::raster::PixelRect;
use crate::texture::TextureImage;

/// Opaque white, the colour glyph coverage is painted with.
pub const FOREGROUND: ColorU8 = ColorU8::from_rgba(255, 255, 255, 255);

/// A premultiplied RGBA image, initially transparent black.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a transparent canvas. Returns `None` if either dimension is zero
    /// or the image would be too large to address.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The canvas bounds as a pixel rectangle.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// The premultiplied RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Paints `fg` through `mask` onto `dst` with source-over blending.
    ///
    /// Canvas pixel `p` in `dst` reads mask pixel `p - dst.min + mask_origin`.
    /// The parts of `dst` outside the canvas, or outside the mask, are skipped.
    pub fn composite(&mut self, dst: PixelRect, fg: ColorU8, mask: &Mask, mask_origin: (i32, i32)) {
        let Some(clipped) = dst.intersect(&self.bounds()) else {
            return;
        };
        let fg = fg.premultiply();
        let width = self.width() as usize;
        let mask_width = mask.width() as i32;
        let mask_height = mask.height() as i32;
        let coverage = mask.data();
        let pixels = self.pixmap.pixels_mut();

        for y in clipped.y0..clipped.y1 {
            let my = mask_origin.1 + (y - dst.y0);
            if !(0..mask_height).contains(&my) {
                continue;
            }
            for x in clipped.x0..clipped.x1 {
                let mx = mask_origin.0 + (x - dst.x0);
                if !(0..mask_width).contains(&mx) {
                    continue;
                }
                let a = coverage[(my * mask_width + mx) as usize];
                if a == 0 {
                    continue;
                }
                let px = &mut pixels[y as usize * width + x as usize];
                *px = source_over(*px, fg, a);
            }
        }
    }

    /// Borrows the pixels for upload.
    pub fn image(&self) -> TextureImage<'_> {
        TextureImage {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data(),
        }
    }

    /// Writes the canvas to `path` as a PNG.
    ///
    /// This is a debugging aid: failures are logged and otherwise ignored.
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: &std::path::Path) {
        match self.pixmap.save_png(path) {
            Ok(()) => log::debug!("wrote atlas canvas to {}", path.display()),
            Err(err) => log::warn!("failed to write atlas canvas to {}: {err}", path.display()),
        }
    }
}

impl Debug for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// `dst = fg * coverage + dst * (1 - fg.alpha * coverage)`, all premultiplied.
fn source_over(
    dst: PremultipliedColorU8,
    fg: PremultipliedColorU8,
    coverage: u8,
) -> PremultipliedColorU8 {
    let src = [
        mul_div_255(fg.red(), coverage),
        mul_div_255(fg.green(), coverage),
        mul_div_255(fg.blue(), coverage),
        mul_div_255(fg.alpha(), coverage),
    ];
    let inv = 255 - src[3];
    let blend = |s: u8, d: u8| s + mul_div_255(d, inv);
    PremultipliedColorU8::from_rgba(
        blend(src[0], dst.red()),
        blend(src[1], dst.green()),
        blend(src[2], dst.blue()),
        blend(src[3], dst.alpha()),
    )
    // Every channel of both operands is bounded by its alpha, so the result is too.
    .unwrap_or(dst)
}

/// `a * b / 255`, rounded to nearest.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the product of two bytes divided by 255 fits in a byte"
)]
fn mul_div_255(a: u8, b: u8) -> u8 {
    let v = u32::from(a) * u32::from(b) + 128;
    ((v + (v >> 8)) >> 8) as u8
}
