// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

type BoxedSource = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error returned when building a [`FontAtlas`](crate::FontAtlas).
///
/// Carries a non-exhaustive [`ErrorKind`] plus the underlying error, when
/// there is one.
#[derive(Debug)]
pub struct Error {
    /// The category describing this error.
    kind: ErrorKind,

    /// The error reported by the reader, the font parser or the texture loader.
    source: Option<BoxedSource>,

    /// The code point that could not be placed, for [`ErrorKind::AtlasFull`].
    codepoint: Option<char>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The code point being placed when the atlas ran out of room.
    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }

    pub(crate) fn io(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(Box::new(err)),
            codepoint: None,
        }
    }

    pub(crate) fn bad_font(err: impl Into<BoxedSource>) -> Self {
        Self {
            kind: ErrorKind::BadFont,
            source: Some(err.into()),
            codepoint: None,
        }
    }

    pub(crate) fn texture_upload(err: impl Into<BoxedSource>) -> Self {
        Self {
            kind: ErrorKind::TextureUploadFailed,
            source: Some(err.into()),
            codepoint: None,
        }
    }

    pub(crate) fn atlas_full(codepoint: char) -> Self {
        Self {
            kind: ErrorKind::AtlasFull,
            source: None,
            codepoint: Some(codepoint),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Io => f.write_str("failed to read font data")?,
            ErrorKind::BadFont => f.write_str("font data is not a valid TrueType font")?,
            ErrorKind::TextureUploadFailed => f.write_str("texture loader rejected the atlas")?,
            ErrorKind::AtlasFull => match self.codepoint {
                Some(ch) => write!(f, "atlas is full, no room for {:?} (U+{:04X})", ch, ch as u32)?,
                None => f.write_str("atlas is full")?,
            },
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font byte stream could not be read.
    Io,

    /// The font bytes do not parse as a TrueType font.
    BadFont,

    /// The texture loader rejected the baked image.
    TextureUploadFailed,

    /// A shelf advance would leave the canvas.
    ///
    /// Only reported under [`OverflowPolicy::Fail`](crate::OverflowPolicy::Fail).
    AtlasFull,
}
