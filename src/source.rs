// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Access to the bundled font assets.

use core::fmt;
use std::io::{self, Cursor, Read};

use hashbrown::HashMap;

/// Resolves logical asset paths to readable byte streams.
///
/// This is the seam toward whatever mechanism ships the font files with the
/// application; the provider only ever asks for the catalog's eight
/// [`resource_path`] values.
///
/// Implementations must fail with [`io::ErrorKind::NotFound`] when a path
/// has nothing behind it. The provider uses that kind to tell a missing
/// bundle entry apart from other I/O trouble.
///
/// [`resource_path`]: crate::Variant::resource_path
pub trait AssetSource: Send + Sync {
    /// Opens a readable stream over the asset at `path`.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + Send + '_>>;
}

/// Asset source over byte slices resident in the binary.
///
/// The conventional way to feed it is `include_bytes!`, one entry per
/// catalog resource path:
///
/// ```
/// use fontbundle::StaticAssets;
///
/// let assets = StaticAssets::new([
///     ("/fonts/Default-R.otf", &b"<font bytes>"[..]),
///     ("/fonts/Mono-R.ttf", &b"<font bytes>"[..]),
/// ]);
/// ```
#[derive(Clone, Default)]
pub struct StaticAssets {
    entries: HashMap<&'static str, &'static [u8]>,
}

impl StaticAssets {
    /// Creates a source over the given `(path, bytes)` entries.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static [u8])>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Adds or replaces the asset at `path`.
    pub fn insert(&mut self, path: &'static str, bytes: &'static [u8]) {
        self.entries.insert(path, bytes);
    }
}

impl AssetSource for StaticAssets {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        match self.entries.get(path) {
            Some(bytes) => Ok(Box::new(Cursor::new(*bytes))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no embedded asset at {path}"),
            )),
        }
    }
}

impl fmt::Debug for StaticAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.entries.keys().collect();
        paths.sort_unstable();
        f.debug_struct("StaticAssets")
            .field("paths", &paths)
            .finish_non_exhaustive()
    }
}
