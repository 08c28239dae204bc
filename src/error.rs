// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load failure taxonomy.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failure while materializing a bundled font variant.
///
/// Every case is fatal on first load: the bundled assets are a build-time
/// invariant, so a failure signals a packaging or environment defect rather
/// than a transient condition. The provider caches the failure in the
/// affected variant's slot and hands out the same value on every later
/// request; other variants are unaffected. Shared caching is also why the
/// type is `Clone`, with the underlying causes held behind `Arc`.
#[derive(Clone, Debug, Error)]
pub enum LoadError {
    /// The asset source had no byte stream for the variant's resource path.
    #[error("no bundled font asset for {name} at {path:?}")]
    MissingAsset {
        /// Resource name of the affected variant.
        name: &'static str,
        /// Logical path that could not be resolved.
        path: &'static str,
    },

    /// Creating or filling the staging temp file failed.
    #[error("failed to stage bundled font {name} to a temporary file")]
    Staging {
        /// Resource name of the affected variant.
        name: &'static str,
        /// Underlying I/O failure.
        #[source]
        source: Arc<io::Error>,
    },

    /// The font construction backend reported a failure.
    #[error("font construction failed for {name}")]
    Construction {
        /// Resource name of the affected variant.
        name: &'static str,
        /// Error reported by the backend.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The backend produced a number of fonts other than one.
    #[error("bundled font {name} yielded {count} fonts, expected exactly one")]
    FontCount {
        /// Resource name of the affected variant.
        name: &'static str,
        /// Number of fonts the backend produced.
        count: usize,
    },
}

impl LoadError {
    /// Resource name of the variant whose load failed.
    pub fn resource_name(&self) -> &'static str {
        match *self {
            Self::MissingAsset { name, .. }
            | Self::Staging { name, .. }
            | Self::Construction { name, .. }
            | Self::FontCount { name, .. } => name,
        }
    }
}
