// Copyright 2026 the Fontbundle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end resolution behavior through the public API.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

use fontbundle::{
    BackendError, CATALOG, ConstructOptions, FamilyGroup, FontBackend, FontFormat, FontProvider,
    LoadError, NOMINAL_POINT_SIZE, PhysicalFont, ProviderOptions, StaticAssets, StyleFlags,
    VARIANT_COUNT,
};

/// Font stub whose identity is decided by the backend below.
#[derive(Debug)]
struct TestFont {
    family_name: String,
    style: StyleFlags,
}

impl PhysicalFont for TestFont {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn style(&self) -> StyleFlags {
        self.style
    }
}

/// Backend that maps a staged payload (the variant's resource name) back to
/// the variant's nominal identity, counting constructions.
#[derive(Clone, Default)]
struct TestBackend {
    constructions: Arc<AtomicUsize>,
}

impl TestBackend {
    fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl FontBackend for TestBackend {
    fn create_fonts(
        &self,
        path: &Path,
        format: FontFormat,
        options: ConstructOptions,
    ) -> Result<Vec<Box<dyn PhysicalFont>>, BackendError> {
        self.constructions.fetch_add(1, Ordering::SeqCst);
        assert_eq!(format, FontFormat::TrueType, "bundled fonts are TrueType");
        assert_eq!(
            options,
            ConstructOptions::default(),
            "bundled loads request plain construction"
        );
        let payload = std::fs::read_to_string(path)?;
        let variant = CATALOG
            .iter()
            .find(|variant| variant.resource_name == payload)
            .ok_or_else(|| format!("unexpected staged payload {payload:?}"))?;
        Ok(vec![Box::new(TestFont {
            family_name: variant.family.family_name().to_owned(),
            style: variant.style(),
        })])
    }
}

fn bundled_assets() -> StaticAssets {
    StaticAssets::new(
        CATALOG
            .iter()
            .map(|variant| (variant.resource_path, variant.resource_name.as_bytes())),
    )
}

fn provider() -> (FontProvider, TestBackend) {
    let backend = TestBackend::default();
    (FontProvider::new(bundled_assets(), backend.clone()), backend)
}

#[test]
fn full_resolution_matrix_is_deterministic() {
    let (provider, backend) = provider();
    let names = [
        "Inter",
        "Sarasa Mono J",
        "Default-R",
        "Mono-BI",
        "Menlo",
        "Some Random Mono",
        "Arial",
        "",
    ];
    let styles = [
        StyleFlags::empty(),
        StyleFlags::BOLD,
        StyleFlags::ITALIC,
        StyleFlags::BOLD | StyleFlags::ITALIC,
    ];
    for name in names {
        for style in styles {
            let first = provider.resolve(name, style, 0).unwrap();
            let second = provider.resolve(name, style, 0).unwrap();
            assert!(
                Arc::ptr_eq(first.font(), second.font()),
                "same request must reuse the loaded font for {name:?}"
            );
            assert_eq!(
                first.variant().style(),
                style,
                "style must pick the matching variant for {name:?}"
            );
        }
    }
    // Every request resolved inside the eight-slot catalog.
    assert_eq!(backend.constructions(), VARIANT_COUNT);
}

#[test]
fn enumeration_reports_the_full_catalog() {
    let (provider, backend) = provider();
    let fonts = provider.installed_fonts().unwrap();
    assert_eq!(fonts.len(), VARIANT_COUNT);
    assert_eq!(backend.constructions(), VARIANT_COUNT);

    for (descriptor, variant) in fonts.iter().zip(CATALOG.iter()) {
        assert_eq!(descriptor.family_name, variant.family.family_name());
        assert_eq!(descriptor.style, variant.style());
        assert_eq!(descriptor.point_size, NOMINAL_POINT_SIZE);
    }
}

#[test]
fn staging_respects_the_configured_directory() {
    let staging = tempfile::tempdir().unwrap();
    let backend = TestBackend::default();
    let provider = FontProvider::with_options(
        bundled_assets(),
        backend,
        ProviderOptions {
            staging_dir: Some(staging.path().to_path_buf()),
        },
    );
    let font = provider.resolve("Inter", StyleFlags::empty(), 0).unwrap();
    assert_eq!(font.path().parent(), Some(staging.path()));
}

#[test]
fn missing_assets_fail_permanently_without_spreading() {
    let backend = TestBackend::default();
    let assets = StaticAssets::new(
        CATALOG
            .iter()
            .filter(|variant| variant.resource_name != "Default-BI")
            .map(|variant| (variant.resource_path, variant.resource_name.as_bytes())),
    );
    let provider = FontProvider::new(assets, backend.clone());

    let style = StyleFlags::BOLD | StyleFlags::ITALIC;
    let err = provider.resolve("Inter", style, 0).unwrap_err();
    assert!(
        matches!(err, LoadError::MissingAsset { name: "Default-BI", .. }),
        "got {err:?}"
    );

    // The enumeration hits the same cached failure without a retry.
    let err = provider.installed_fonts().unwrap_err();
    assert_eq!(err.resource_name(), "Default-BI");

    // The other seven variants are untouched by the failure.
    for variant in CATALOG.iter().filter(|v| v.resource_name != "Default-BI") {
        let font = provider
            .resolve(variant.resource_name, variant.style(), 0)
            .unwrap();
        assert!(std::ptr::eq(font.variant(), variant));
    }
    assert_eq!(backend.constructions(), VARIANT_COUNT - 1);
}

#[test]
fn concurrent_first_use_constructs_each_variant_once() {
    let (provider, backend) = provider();
    const WORKERS: usize = 16;
    let barrier = Barrier::new(WORKERS);

    std::thread::scope(|scope| {
        for worker in 0..WORKERS {
            let barrier = &barrier;
            let provider = &provider;
            scope.spawn(move || {
                barrier.wait();
                // Half the workers enumerate, the rest resolve.
                if worker % 2 == 0 {
                    let fonts = provider.installed_fonts().unwrap();
                    assert_eq!(fonts.len(), VARIANT_COUNT);
                } else {
                    provider
                        .resolve("Sarasa Mono J", StyleFlags::BOLD, 0)
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(backend.constructions(), VARIANT_COUNT);
}

#[test]
fn default_font_accessors_agree_with_the_catalog() {
    let (provider, _backend) = provider();
    let font = provider.default_physical_font().unwrap();
    assert_eq!(font.variant().resource_name, "Default-R");
    assert_eq!(font.family_name(), "Inter");
    assert_eq!(font.style(), StyleFlags::empty());

    let (family, path) = provider.default_platform_font();
    assert_eq!(family, "Inter");
    assert_eq!(path, "/fonts/Default-R.otf");

    let resolved = provider.resolve(family, StyleFlags::empty(), 0).unwrap();
    assert!(Arc::ptr_eq(resolved.font(), font.font()));
}

#[test]
fn classification_falls_back_to_the_default_family() {
    assert_eq!(FamilyGroup::classify("Times New Roman"), FamilyGroup::Default);
    assert_eq!(FamilyGroup::classify("Noto Sans Mono"), FamilyGroup::Mono);
    assert_eq!(FamilyGroup::classify("menlo"), FamilyGroup::Mono);
}
