// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 26.6 fixed point scalars, points and rectangles.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Sub};

/// Number of fractional bits in a [`Fixed`].
const FRAC_BITS: u32 = 6;

/// One pixel in 26.6 units.
const ONE: i32 = 1 << FRAC_BITS;

/// A signed 26.6 fixed point number: 1 pixel is 64 units.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates a value from whole pixels.
    pub const fn from_pixels(px: i32) -> Self {
        Self(px << FRAC_BITS)
    }

    /// Creates a value from fractional pixels, rounding to the nearest 1/64.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "font metrics at sane sizes are far below 2^25 pixels"
    )]
    pub fn from_f32(px: f32) -> Self {
        Self((px * ONE as f32).round() as i32)
    }

    /// Converts to fractional pixels.
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE as f32
    }

    /// The largest whole pixel not greater than this value.
    pub const fn floor(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// The smallest whole pixel not less than this value.
    pub const fn ceil(self) -> i32 {
        (self.0 + ONE - 1) >> FRAC_BITS
    }

    /// The raw 26.6 bits.
    pub const fn to_bits(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 >> FRAC_BITS, self.0 & (ONE - 1))
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Div<i32> for Fixed {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

/// A point in 26.6 pixel space. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    /// Horizontal coordinate.
    pub x: Fixed,
    /// Vertical coordinate.
    pub y: Fixed,
}

impl FixedPoint {
    /// Creates a new point.
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in 26.6 pixel space, `min` inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedRect {
    /// Upper-left corner.
    pub min: FixedPoint,
    /// Lower-right corner.
    pub max: FixedPoint,
}

impl FixedRect {
    /// Creates a rectangle from its corners.
    pub const fn new(min: FixedPoint, max: FixedPoint) -> Self {
        Self { min, max }
    }

    /// Horizontal extent.
    pub fn width(&self) -> Fixed {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> Fixed {
        self.max.y - self.min.y
    }
}
