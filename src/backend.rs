// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam toward the host's font construction machinery.

use core::fmt;
use std::error::Error;
use std::path::Path;

use crate::style::StyleFlags;

/// Error type surfaced by [`FontBackend`] implementations.
pub type BackendError = Box<dyn Error + Send + Sync + 'static>;

/// Format tag passed to the construction backend.
///
/// The bundled catalog is entirely TrueType and OpenType, so loads always
/// pass [`FontFormat::TrueType`]. The tag exists because the construction
/// interface is shared with hosts that also build other formats.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FontFormat {
    /// TrueType and OpenType (including CFF-flavored) fonts.
    TrueType,
    /// PostScript Type 1 fonts.
    Type1,
}

/// Flags forwarded to the construction backend.
///
/// Bundled loads request plain construction: the font is not registered
/// with the host's global font tables and no anti-aliasing hint is
/// attached, which the `Default` value expresses.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ConstructOptions {
    /// Register the constructed font with the host's global tables.
    pub register: bool,
    /// Attach an anti-aliasing hint to the constructed font.
    pub antialias: bool,
}

/// An opaque, externally constructed font object usable by the rendering
/// pipeline.
///
/// The provider never looks inside the handle; it only echoes the identity
/// the font reports about itself when building enumeration descriptors.
pub trait PhysicalFont: fmt::Debug + Send + Sync {
    /// Family name the font reports for itself.
    fn family_name(&self) -> &str;

    /// Style bits the font reports for itself.
    fn style(&self) -> StyleFlags;
}

/// Constructs physical fonts from font files on disk.
pub trait FontBackend: Send + Sync {
    /// Constructs the fonts contained in the file at `path`.
    ///
    /// A well-formed bundled asset holds a single font, so the provider
    /// rejects any result whose length is not exactly one. Collection files
    /// may legitimately produce several fonts; the bundled catalog simply
    /// never contains one.
    fn create_fonts(
        &self,
        path: &Path,
        format: FontFormat,
        options: ConstructOptions,
    ) -> Result<Vec<Box<dyn PhysicalFont>>, BackendError>;
}
