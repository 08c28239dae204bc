// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style bitmask shared with the host rendering pipeline.

use bitflags::bitflags;

bitflags! {
    /// Style bits as the host renderer encodes them on the wire.
    ///
    /// The bit values match the host's style integers (bold = 1, italic = 2),
    /// so a raw mask coming off the wire converts losslessly with
    /// [`StyleFlags::from_bits_truncate`]. Bits outside the two known flags
    /// carry no meaning for the bundled catalog and are ignored during
    /// resolution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u32 {
        /// Bold weight requested.
        const BOLD = 1 << 0;
        /// Italic slant requested.
        const ITALIC = 1 << 1;
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::empty()
    }
}
