// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font resolution service.

use core::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::backend::FontBackend;
use crate::catalog::{
    CATALOG, DEFAULT_FAMILY_NAME, FamilyGroup, NOMINAL_POINT_SIZE, Slant, VARIANT_COUNT, Variant,
    Weight,
};
use crate::error::LoadError;
use crate::loader::{self, LoadedFont};
use crate::source::AssetSource;
use crate::style::StyleFlags;

/// Options for constructing a [`FontProvider`].
#[derive(Clone, Default, Debug)]
pub struct ProviderOptions {
    /// Directory where extracted assets are staged.
    ///
    /// `None` stages into the environment's temp directory.
    pub staging_dir: Option<PathBuf>,
}

/// Display-oriented summary of a loaded variant, as handed to the host for
/// font enumeration.
///
/// The family name and style are whatever the loaded font reports about
/// itself, not the catalog's nominal identity, so a mislabeled asset shows
/// up here as-is.
#[derive(Clone, PartialEq, Debug)]
pub struct FontDescriptor {
    /// Family name the loaded font reports.
    pub family_name: String,
    /// Style bits the loaded font reports.
    pub style: StyleFlags,
    /// Fixed nominal size, always [`NOMINAL_POINT_SIZE`]; not a rendering
    /// size.
    pub point_size: f32,
}

type Slot = OnceLock<Result<LoadedFont, LoadError>>;

/// Resolves logical font requests against the bundled catalog and owns the
/// loaded results for the life of the process.
///
/// Construct one provider at startup and share it by reference; every
/// operation takes `&self` and the type is `Send + Sync`. Each catalog
/// variant is materialized at most once, on first use: concurrent requests
/// for the same variant block until the single load finishes and then see
/// the identical handle, while requests for different variants proceed
/// independently. A failed load is just as permanent as a successful one;
/// the variant's slot keeps the error and no retry ever happens.
pub struct FontProvider {
    assets: Box<dyn AssetSource>,
    backend: Box<dyn FontBackend>,
    staging_dir: Option<PathBuf>,
    slots: [Slot; VARIANT_COUNT],
}

impl FontProvider {
    /// Creates a provider over the given collaborators with default
    /// options.
    pub fn new(assets: impl AssetSource + 'static, backend: impl FontBackend + 'static) -> Self {
        Self::with_options(assets, backend, ProviderOptions::default())
    }

    /// Creates a provider with explicit options.
    pub fn with_options(
        assets: impl AssetSource + 'static,
        backend: impl FontBackend + 'static,
        options: ProviderOptions,
    ) -> Self {
        Self {
            assets: Box::new(assets),
            backend: Box::new(backend),
            staging_dir: options.staging_dir,
            slots: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Resolves a font request to a loaded catalog variant.
    ///
    /// `name` is first matched exactly against the ten recognized aliases
    /// (two umbrella family names plus eight resource names); unrecognized
    /// names fall back to the monospace heuristic. The style mask then
    /// picks the variant within the family group, bold-italic taking
    /// precedence over the single-style bits. Raw style integers from the
    /// wire convert with [`StyleFlags::from_bits_truncate`].
    ///
    /// `_fallback` is accepted for signature compatibility with the host's
    /// font matching interface and is never consulted; the catalog always
    /// has an answer, so there is nothing to fall back from.
    ///
    /// # Errors
    ///
    /// Fails only when materializing the selected variant fails, and then
    /// permanently for that variant. See [`LoadError`].
    pub fn resolve(
        &self,
        name: &str,
        style: StyleFlags,
        _fallback: u32,
    ) -> Result<LoadedFont, LoadError> {
        self.loaded(FamilyGroup::classify(name).select(style))
    }

    /// Returns one descriptor per catalog variant, in catalog order.
    ///
    /// Descriptors carry the family name and style the loaded fonts report
    /// about themselves, so the first enumeration eagerly materializes all
    /// eight variants, unlike [`resolve`], which loads one at a time. The
    /// order is the catalog's and does not depend on which variants were
    /// touched earlier.
    ///
    /// # Errors
    ///
    /// Fails with the first load failure in catalog order.
    ///
    /// [`resolve`]: Self::resolve
    pub fn installed_fonts(&self) -> Result<Vec<FontDescriptor>, LoadError> {
        CATALOG
            .iter()
            .map(|variant| {
                let font = self.slot(variant).map_err(Clone::clone)?;
                Ok(FontDescriptor {
                    family_name: font.family_name().to_owned(),
                    style: font.style(),
                    point_size: NOMINAL_POINT_SIZE,
                })
            })
            .collect()
    }

    /// The loaded default-regular variant, which the host uses to seed its
    /// own default-font plumbing.
    ///
    /// # Errors
    ///
    /// Shares the load failure behavior of [`resolve`](Self::resolve).
    pub fn default_physical_font(&self) -> Result<LoadedFont, LoadError> {
        self.loaded(Variant::of(
            FamilyGroup::Default,
            Weight::Regular,
            Slant::Upright,
        ))
    }

    /// The static `(family name, resource path)` identity of the default
    /// platform font. Never triggers a load.
    pub fn default_platform_font(&self) -> (&'static str, &'static str) {
        let variant = Variant::of(FamilyGroup::Default, Weight::Regular, Slant::Upright);
        (DEFAULT_FAMILY_NAME, variant.resource_path)
    }

    fn slot(&self, variant: &'static Variant) -> Result<&LoadedFont, &LoadError> {
        self.slots[variant.index()]
            .get_or_init(|| {
                loader::load(
                    self.assets.as_ref(),
                    self.backend.as_ref(),
                    self.staging_dir.as_deref(),
                    variant,
                )
            })
            .as_ref()
    }

    fn loaded(&self, variant: &'static Variant) -> Result<LoadedFont, LoadError> {
        self.slot(variant).cloned().map_err(Clone::clone)
    }
}

impl fmt::Debug for FontProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded: Vec<&str> = self
            .slots
            .iter()
            .filter_map(|slot| slot.get())
            .filter_map(|result| result.as_ref().ok())
            .map(|font| font.variant().resource_name)
            .collect();
        f.debug_struct("FontProvider")
            .field("staging_dir", &self.staging_dir)
            .field("loaded", &loaded)
            .finish_non_exhaustive()
    }
}
