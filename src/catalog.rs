// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed catalog of bundled font variants.

use crate::style::StyleFlags;
use smallvec::SmallVec;

/// Umbrella family name of the default proportional family.
pub const DEFAULT_FAMILY_NAME: &str = "Inter";

/// Umbrella family name of the monospace family.
pub const MONO_FAMILY_NAME: &str = "Sarasa Mono J";

/// Nominal point size reported by enumeration descriptors.
///
/// Purely descriptive; the size a font is actually rendered at is chosen by
/// the host, not by the catalog.
pub const NOMINAL_POINT_SIZE: f32 = 12.0;

/// Number of variants in the catalog.
pub const VARIANT_COUNT: usize = 8;

/// One of the two font families bundled with the application.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum FamilyGroup {
    /// The default proportional family.
    Default = 0,
    /// The monospace family.
    Mono = 1,
}

impl FamilyGroup {
    /// Returns the umbrella family name of this group.
    pub const fn family_name(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_FAMILY_NAME,
            Self::Mono => MONO_FAMILY_NAME,
        }
    }

    /// Returns the four catalog variants belonging to this group, in
    /// catalog order.
    pub fn variants(self) -> &'static [Variant] {
        let start = self as usize * STYLES_PER_FAMILY;
        &CATALOG[start..start + STYLES_PER_FAMILY]
    }

    /// Resolves a family name against the recognized catalog aliases.
    ///
    /// Each group answers to its umbrella name and to the resource names of
    /// its four variants, compared exactly as the host sent them. Returns
    /// `None` for any name outside those ten aliases.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name {
            DEFAULT_FAMILY_NAME => Some(Self::Default),
            MONO_FAMILY_NAME => Some(Self::Mono),
            _ => CATALOG
                .iter()
                .find(|variant| variant.resource_name == name)
                .map(|variant| variant.family),
        }
    }

    /// Classifies an arbitrary requested family name into a group.
    ///
    /// Alias matches win. Any other name is probed for "looks monospace",
    /// and everything else lands on the default family, so classification
    /// always succeeds.
    pub fn classify(name: &str) -> Self {
        match Self::from_alias(name) {
            Some(group) => group,
            None if is_monospaced(name) => Self::Mono,
            None => Self::Default,
        }
    }

    /// Selects the variant of this group matching a style mask.
    ///
    /// Bold and italic together select the bold-italic variant; bits other
    /// than [`StyleFlags::BOLD`] and [`StyleFlags::ITALIC`] are ignored.
    pub fn select(self, style: StyleFlags) -> &'static Variant {
        let (weight, slant) = if style.contains(StyleFlags::BOLD | StyleFlags::ITALIC) {
            (Weight::Bold, Slant::Italic)
        } else if style.contains(StyleFlags::BOLD) {
            (Weight::Bold, Slant::Upright)
        } else if style.contains(StyleFlags::ITALIC) {
            (Weight::Regular, Slant::Italic)
        } else {
            (Weight::Regular, Slant::Upright)
        };
        Variant::of(self, weight, slant)
    }
}

/// Weight of a catalog variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Weight {
    /// Regular weight.
    Regular = 0,
    /// Bold weight.
    Bold = 1,
}

/// Slant of a catalog variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Slant {
    /// Upright glyphs.
    Upright = 0,
    /// Italic glyphs.
    Italic = 1,
}

/// One bundled font variant: a (family, weight, slant) identity together
/// with the location of its asset.
///
/// All variants live in [`CATALOG`]; none are added or removed at runtime,
/// so `&'static Variant` is the working currency throughout the crate and
/// variants can be compared by address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variant {
    /// Family group the variant belongs to.
    pub family: FamilyGroup,
    /// Weight within the family.
    pub weight: Weight,
    /// Slant within the family.
    pub slant: Slant,
    /// Stable identifier, also used to name the staged file.
    pub resource_name: &'static str,
    /// Logical path of the bundled asset, resolved by the asset source.
    pub resource_path: &'static str,
}

impl Variant {
    /// Returns the catalog variant with the given identity.
    pub fn of(family: FamilyGroup, weight: Weight, slant: Slant) -> &'static Self {
        &CATALOG[slot(family, weight, slant)]
    }

    /// Returns this variant's position in [`CATALOG`].
    pub fn index(&self) -> usize {
        slot(self.family, self.weight, self.slant)
    }

    /// Returns the nominal style mask of this variant.
    pub fn style(&self) -> StyleFlags {
        match (self.weight, self.slant) {
            (Weight::Regular, Slant::Upright) => StyleFlags::empty(),
            (Weight::Bold, Slant::Upright) => StyleFlags::BOLD,
            (Weight::Regular, Slant::Italic) => StyleFlags::ITALIC,
            (Weight::Bold, Slant::Italic) => StyleFlags::BOLD | StyleFlags::ITALIC,
        }
    }
}

const STYLES_PER_FAMILY: usize = 4;

const fn slot(family: FamilyGroup, weight: Weight, slant: Slant) -> usize {
    family as usize * STYLES_PER_FAMILY + weight as usize * 2 + slant as usize
}

/// The eight bundled variants, in enumeration order.
///
/// The layout is `family * 4 + weight * 2 + slant`, which reproduces the
/// order of the original bundle listing: regular, regular-italic, bold,
/// bold-italic within each family, default family first.
pub static CATALOG: [Variant; VARIANT_COUNT] = [
    Variant {
        family: FamilyGroup::Default,
        weight: Weight::Regular,
        slant: Slant::Upright,
        resource_name: "Default-R",
        resource_path: "/fonts/Default-R.otf",
    },
    Variant {
        family: FamilyGroup::Default,
        weight: Weight::Regular,
        slant: Slant::Italic,
        resource_name: "Default-RI",
        resource_path: "/fonts/Default-RI.otf",
    },
    Variant {
        family: FamilyGroup::Default,
        weight: Weight::Bold,
        slant: Slant::Upright,
        resource_name: "Default-B",
        resource_path: "/fonts/Default-B.otf",
    },
    Variant {
        family: FamilyGroup::Default,
        weight: Weight::Bold,
        slant: Slant::Italic,
        resource_name: "Default-BI",
        resource_path: "/fonts/Default-BI.otf",
    },
    Variant {
        family: FamilyGroup::Mono,
        weight: Weight::Regular,
        slant: Slant::Upright,
        resource_name: "Mono-R",
        resource_path: "/fonts/Mono-R.ttf",
    },
    Variant {
        family: FamilyGroup::Mono,
        weight: Weight::Regular,
        slant: Slant::Italic,
        resource_name: "Mono-RI",
        resource_path: "/fonts/Mono-RI.ttf",
    },
    Variant {
        family: FamilyGroup::Mono,
        weight: Weight::Bold,
        slant: Slant::Upright,
        resource_name: "Mono-B",
        resource_path: "/fonts/Mono-B.ttf",
    },
    Variant {
        family: FamilyGroup::Mono,
        weight: Weight::Bold,
        slant: Slant::Italic,
        resource_name: "Mono-BI",
        resource_path: "/fonts/Mono-BI.ttf",
    },
];

/// Case-insensitive probe for names that look monospace: a lowercased name
/// that contains "mono" or is exactly "menlo".
fn is_monospaced(name: &str) -> bool {
    let key = LowercaseKey::new(name);
    let bytes = key.as_bytes();
    bytes == b"menlo" || bytes.windows(4).any(|window| window == b"mono")
}

/// Buffer for case-insensitive examination of a family name.
#[derive(Default)]
struct LowercaseKey {
    data: SmallVec<[u8; 64]>,
}

impl LowercaseKey {
    fn new(name: &str) -> Self {
        let mut key = Self::default();
        let mut buf = [0_u8; 4];
        for ch in name.chars() {
            for lower in ch.to_lowercase() {
                key.data
                    .extend_from_slice(lower.encode_utf8(&mut buf).as_bytes());
            }
        }
        key
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
