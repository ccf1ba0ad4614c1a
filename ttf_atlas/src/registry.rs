// Copyright 2025 the TTF Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A keyed store of baked atlases.

use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::atlas::FontAtlas;

/// Identifies a font within a [`FontRegistry`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct FontId(u64);

impl FontId {
    /// Creates a new unique identifier.
    #[expect(clippy::new_without_default, reason = "every call mints a fresh id")]
    pub fn new() -> Self {
        static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps an identifier chosen by the caller.
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value.
    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// A font at a point size.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FontKey {
    /// The font.
    pub font: FontId,
    /// The point size it was baked at.
    pub size: u32,
}

impl FontKey {
    /// Creates a key for `font` at `size` points.
    pub fn new(font: FontId, size: u32) -> Self {
        Self { font, size }
    }
}

/// Atlases keyed by font and size.
///
/// Atlases are handed out as [`Arc`]s, so a renderer can hold on to one while
/// the registry is modified.
#[derive(Debug)]
pub struct FontRegistry<T> {
    atlases: HashMap<FontKey, Arc<FontAtlas<T>>>,
}

impl<T> Default for FontRegistry<T> {
    fn default() -> Self {
        Self {
            atlases: HashMap::default(),
        }
    }
}

impl<T> FontRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `atlas` under `key`, returning the atlas it replaced.
    pub fn insert(&mut self, key: FontKey, atlas: FontAtlas<T>) -> Option<Arc<FontAtlas<T>>> {
        self.atlases.insert(key, Arc::new(atlas))
    }

    /// The atlas stored under `key`.
    pub fn get(&self, key: &FontKey) -> Option<Arc<FontAtlas<T>>> {
        self.atlases.get(key).cloned()
    }

    /// Returns the atlas stored under `key`, baking it with `build` first if
    /// there is none.
    ///
    /// A failed build leaves the registry unchanged.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: FontKey,
        build: impl FnOnce() -> Result<FontAtlas<T>, E>,
    ) -> Result<Arc<FontAtlas<T>>, E> {
        match self.atlases.entry(key) {
            Entry::Occupied(occupied) => Ok(occupied.get().clone()),
            Entry::Vacant(vacant) => {
                let atlas = Arc::new(build()?);
                log::debug!(
                    "registered atlas for font {} at {}pt, {} glyphs",
                    key.font.to_u64(),
                    key.size,
                    atlas.len()
                );
                Ok(vacant.insert(atlas).clone())
            }
        }
    }

    /// Removes and returns the atlas stored under `key`.
    pub fn remove(&mut self, key: &FontKey) -> Option<Arc<FontAtlas<T>>> {
        self.atlases.remove(key)
    }

    /// Number of stored atlases.
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }
}
