// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bundled font resolution and lazy provisioning.
//!
//! This crate owns a fixed catalog of eight font variants (a default and a
//! monospace family, each in regular, italic, bold and bold-italic) that
//! ship with the application instead of coming from the platform. The
//! central type is [`FontProvider`]: it answers name-and-style requests
//! with loaded fonts, enumerates the catalog for font listings, and
//! materializes each variant at most once per process, on first use.
//!
//! Fonts reach the rendering pipeline through two collaborator seams the
//! embedding application implements: an [`AssetSource`] that yields the
//! bundled bytes and a [`FontBackend`] that turns a staged font file into a
//! usable font object.
//!
//! The provider is deliberately incurious about font data. It never parses
//! tables or measures glyphs; matching is by name alias and style bits
//! against the closed catalog, which always has an answer.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod backend;
mod catalog;
mod error;
mod loader;
mod provider;
mod source;
mod style;

pub use backend::{BackendError, ConstructOptions, FontBackend, FontFormat, PhysicalFont};
pub use catalog::{
    CATALOG, DEFAULT_FAMILY_NAME, FamilyGroup, MONO_FAMILY_NAME, NOMINAL_POINT_SIZE, Slant,
    VARIANT_COUNT, Variant, Weight,
};
pub use error::LoadError;
pub use loader::LoadedFont;
pub use provider::{FontDescriptor, FontProvider, ProviderOptions};
pub use source::{AssetSource, StaticAssets};
pub use style::StyleFlags;
