// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// File name used by [`AtlasConfig::with_debug_dump`].
pub const DEBUG_DUMP_FILE: &str = "ttf.png";

/// What the packer does when a new shelf would start below the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep baking. Glyphs that land outside the canvas are clipped by the
    /// compositor and their records point outside the texture.
    #[default]
    Clip,
    /// Abort the build with [`ErrorKind::AtlasFull`](crate::ErrorKind::AtlasFull).
    Fail,
}

/// Options for baking a [`FontAtlas`](crate::FontAtlas).
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasConfig {
    /// Font size in points. The atlas is rendered at 72 DPI, so this is also
    /// the size in pixels.
    pub font_size: u32,
    /// Code points to bake, in bake order. Duplicates are baked once.
    pub runes: Vec<char>,
    /// Behaviour when the glyphs do not fit.
    pub overflow: OverflowPolicy,
    /// Where to write the baked canvas as PNG, if anywhere.
    ///
    /// Only honoured with the `png` feature; otherwise a warning is logged.
    pub debug_dump: Option<PathBuf>,
}

impl AtlasConfig {
    /// Creates a config for `font_size` with no code points.
    pub fn new(font_size: u32) -> Self {
        Self {
            font_size,
            runes: Vec::new(),
            overflow: OverflowPolicy::Clip,
            debug_dump: None,
        }
    }

    /// Creates a config baking printable ASCII, `' '` through `'~'`.
    pub fn ascii(font_size: u32) -> Self {
        Self::new(font_size).with_runes(' '..='~')
    }

    /// Replaces the code points to bake.
    pub fn with_runes(mut self, runes: impl IntoIterator<Item = char>) -> Self {
        self.runes = runes.into_iter().collect();
        self
    }

    /// Sets the overflow behaviour.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Dumps the baked canvas to [`DEBUG_DUMP_FILE`] in the working directory.
    pub fn with_debug_dump(mut self) -> Self {
        self.debug_dump = Some(PathBuf::from(DEBUG_DUMP_FILE));
        self
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self::ascii(14)
    }
}
