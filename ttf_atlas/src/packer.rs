// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-row shelf packing.

use crate::config::OverflowPolicy;
use crate::fixed::{Fixed, FixedPoint};
use crate::PADDING;

/// Places glyph boxes left to right on shelves of equal height.
///
/// The pen starts at `(padding, padding)`. A glyph that would cross the right
/// edge opens a new shelf `line_height + padding` further down. There is no
/// rotation and no search for a better fitting shelf, so the bake order alone
/// decides the layout.
#[derive(Clone, Debug)]
pub struct ShelfPacker {
    dot: FixedPoint,
    line_height: Fixed,
    padding: Fixed,
    width: Fixed,
    height: Fixed,
    shelves: u32,
}

/// A glyph does not fit on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasFull;

impl ShelfPacker {
    /// Creates a packer for a `width` by `height` pixel canvas whose shelves are
    /// `line_height` tall.
    pub fn new(width: u32, height: u32, line_height: Fixed) -> Self {
        let padding = Fixed::from_pixels(PADDING);
        Self {
            dot: FixedPoint::new(padding, padding),
            line_height,
            padding,
            width: Fixed::from_pixels(width as i32),
            height: Fixed::from_pixels(height as i32),
            shelves: 0,
        }
    }

    /// The current pen.
    pub fn dot(&self) -> FixedPoint {
        self.dot
    }

    /// The gutter between neighbouring glyphs.
    pub fn padding(&self) -> Fixed {
        self.padding
    }

    /// How many shelves have been opened.
    pub fn shelves(&self) -> u32 {
        self.shelves
    }

    /// Returns the upper-left corner for a glyph `width` wide, moving to a new
    /// shelf first if it does not fit on the current one.
    ///
    /// A glyph wider than the canvas is placed at the start of a shelf. An
    /// empty shelf is never abandoned for it.
    ///
    /// Under [`OverflowPolicy::Fail`] a glyph is refused when its shelf would
    /// end below the canvas, or when it is too wide to fit even on an empty
    /// shelf. The packer is left untouched in that case. Under
    /// [`OverflowPolicy::Clip`] the position is handed out anyway.
    pub fn place(&mut self, width: Fixed, overflow: OverflowPolicy) -> Result<FixedPoint, AtlasFull> {
        let mut dot = self.dot;
        let new_shelf = dot.x + width > self.width && dot.x > self.padding;
        if new_shelf {
            dot = FixedPoint::new(self.padding, dot.y + self.line_height + self.padding);
        }
        if overflow == OverflowPolicy::Fail
            && (dot.y + self.line_height > self.height || self.padding + width > self.width)
        {
            return Err(AtlasFull);
        }
        self.dot = dot;
        self.shelves = self.shelves.max(1) + u32::from(new_shelf);
        Ok(dot)
    }

    /// Moves the pen past a glyph `width` wide that was drawn at [`dot`](Self::dot).
    pub fn advance(&mut self, width: Fixed) {
        self.dot.x += width + self.padding;
    }
}
