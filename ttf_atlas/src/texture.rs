// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The texture upload seam.

use core::convert::Infallible;
use core::fmt::{Debug, Formatter};

/// A baked atlas image, borrowed for the duration of an upload.
///
/// Pixels are premultiplied RGBA8, row-major, with the origin at the top-left.
#[derive(Clone, Copy)]
pub struct TextureImage<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of pixel data.
    pub data: &'a [u8],
}

impl Debug for TextureImage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextureImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// Uploads a baked atlas image and hands back an opaque handle.
///
/// The handle is stored in the [`FontAtlas`](crate::FontAtlas) and never
/// interpreted by it. A GPU backend would create and fill a texture here.
pub trait TextureLoader {
    /// The handle stored in the atlas.
    type Texture;

    /// The error reported when the image is rejected.
    type Error: Into<Box<dyn core::error::Error + Send + Sync + 'static>>;

    /// Uploads `image`.
    fn load(&mut self, image: TextureImage<'_>) -> Result<Self::Texture, Self::Error>;
}

impl<L: TextureLoader + ?Sized> TextureLoader for &mut L {
    type Texture = L::Texture;
    type Error = L::Error;

    fn load(&mut self, image: TextureImage<'_>) -> Result<Self::Texture, Self::Error> {
        (**self).load(image)
    }
}

/// A [`TextureLoader`] that keeps the pixels in memory.
///
/// Useful for software renderers and for inspecting the baked atlas.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuTextureLoader;

impl TextureLoader for CpuTextureLoader {
    type Texture = CpuTexture;
    type Error = Infallible;

    fn load(&mut self, image: TextureImage<'_>) -> Result<CpuTexture, Infallible> {
        Ok(CpuTexture {
            width: image.width,
            height: image.height,
            pixels: image.data.to_vec(),
        })
    }
}

/// An atlas image owned on the CPU.
#[derive(Clone, PartialEq, Eq)]
pub struct CpuTexture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CpuTexture {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// The premultiplied RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl Debug for CpuTexture {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CpuTexture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
