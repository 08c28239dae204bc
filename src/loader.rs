// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time materialization of catalog variants.

use core::fmt;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use log::debug;
use tempfile::TempPath;

use crate::backend::{ConstructOptions, FontBackend, FontFormat, PhysicalFont};
use crate::catalog::Variant;
use crate::error::LoadError;
use crate::source::AssetSource;
use crate::style::StyleFlags;

/// A materialized catalog variant: the constructed physical font together
/// with the identity it was loaded from and the staged file backing it.
///
/// Handles are cheap to clone; all clones share one font object and one
/// staged file. The staged file stays on disk for as long as any handle is
/// alive, which in practice means the provider's cache slot and therefore
/// the rest of the process. Removal when the last handle drops is
/// best-effort, matching the throwaway nature of the staging location.
#[derive(Clone)]
pub struct LoadedFont {
    variant: &'static Variant,
    font: Arc<dyn PhysicalFont>,
    staged: Arc<TempPath>,
}

impl LoadedFont {
    /// The catalog variant this font was loaded from.
    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    /// The physical font handle constructed by the backend.
    pub fn font(&self) -> &Arc<dyn PhysicalFont> {
        &self.font
    }

    /// Family name the physical font reports.
    pub fn family_name(&self) -> &str {
        self.font.family_name()
    }

    /// Style bits the physical font reports.
    pub fn style(&self) -> StyleFlags {
        self.font.style()
    }

    /// Path of the staged font file backing the handle.
    pub fn path(&self) -> &Path {
        &self.staged
    }
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("variant", &self.variant.resource_name)
            .field("font", &self.font)
            .field("staged", &self.path())
            .finish()
    }
}

/// Materializes one catalog variant: opens the bundled asset, stages it to
/// a unique temp file, and hands the file to the construction backend.
pub(crate) fn load(
    assets: &dyn AssetSource,
    backend: &dyn FontBackend,
    staging_dir: Option<&Path>,
    variant: &'static Variant,
) -> Result<LoadedFont, LoadError> {
    let name = variant.resource_name;

    let mut stream = assets.open(variant.resource_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::MissingAsset {
                name,
                path: variant.resource_path,
            }
        } else {
            LoadError::Staging {
                name,
                source: Arc::new(err),
            }
        }
    })?;

    let staged = stage(&mut *stream, staging_dir, name).map_err(|err| LoadError::Staging {
        name,
        source: Arc::new(err),
    })?;

    let mut fonts = backend
        .create_fonts(&staged, FontFormat::TrueType, ConstructOptions::default())
        .map_err(|err| LoadError::Construction {
            name,
            source: Arc::from(err),
        })?;
    if fonts.len() != 1 {
        return Err(LoadError::FontCount {
            name,
            count: fonts.len(),
        });
    }
    let font: Arc<dyn PhysicalFont> = Arc::from(fonts.remove(0));

    debug!("loaded bundled font {name} from {}", staged.display());

    Ok(LoadedFont {
        variant,
        font,
        staged: Arc::new(staged),
    })
}

/// Copies the asset stream into a freshly created, uniquely named temp file
/// whose name starts with the resource name and ends in `.ttf`.
fn stage(stream: &mut dyn Read, staging_dir: Option<&Path>, name: &str) -> io::Result<TempPath> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(name).suffix(".ttf");
    let mut file = match staging_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    io::copy(stream, file.as_file_mut())?;
    Ok(file.into_temp_path())
}
