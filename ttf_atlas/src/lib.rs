// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TTF Atlas bakes a set of code points from a TrueType font into a single
//! RGBA texture and a glyph lookup table.
//!
//! The baker is built from a few small pieces:
//!
//! - [`Face`] decodes the font with Skrifa and implements [`GlyphSource`].
//! - [`ShelfPacker`] places glyph boxes left to right on fixed height shelves.
//! - [`rasterize`] turns a glyph outline into a coverage mask with Tiny-Skia.
//! - [`Canvas`] composites those masks into the shared atlas image.
//! - [`FontAtlas`] is the immutable result: glyph records, line metrics and the
//!   texture handle returned by a [`TextureLoader`].
//!
//! All internal placement math is done in 26.6 fixed point (see [`Fixed`]).
//!
//! ```no_run
//! use ttf_atlas::{AtlasConfig, CpuTextureLoader, FontAtlas};
//!
//! let file = std::fs::File::open("DejaVuSans.ttf")?;
//! let config = AtlasConfig::ascii(14);
//! let atlas = FontAtlas::build(file, &config, &mut CpuTextureLoader)?;
//! if let Some(glyph) = atlas.glyph('A') {
//!     println!("'A' advances by {}px", glyph.advance);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `png`: Enables [`AtlasConfig::debug_dump`], which writes the baked canvas
//!   to a PNG file.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod atlas;
mod bake;
mod canvas;
mod config;
mod error;
mod face;
mod fixed;
mod packer;
mod raster;
mod registry;
mod texture;

pub use atlas::{FontAtlas, Glyph};
pub use canvas::{Canvas, FOREGROUND};
pub use config::{AtlasConfig, OverflowPolicy, DEBUG_DUMP_FILE};
pub use error::{Error, ErrorKind};
pub use face::{Face, FaceMetrics, GlyphOutline, GlyphSource};
pub use fixed::{Fixed, FixedPoint, FixedRect};
pub use packer::{AtlasFull, ShelfPacker};
pub use raster::{rasterize, Coverage, PixelRect};
pub use registry::{FontId, FontKey, FontRegistry};
pub use texture::{CpuTexture, CpuTextureLoader, TextureImage, TextureLoader};

/// Width and height of the atlas canvas in pixels.
pub const ATLAS_SIZE: u32 = 1024;

/// Gutter between neighbouring glyphs, in whole pixels.
///
/// Half of it is recorded on each side of a glyph as bleed.
pub const PADDING: i32 = 2;
