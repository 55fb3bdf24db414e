use std::collections::HashSet;
use std::path::Path;

use super::*;
use crate::vendor::{DefaultSetup, FrameworkEntry, VendorEntry};

fn mono_catalog() -> VendorCatalog {
    VendorCatalog::new(
        vec![
            VendorEntry::new(VendorName::Mono, "1.1.18")
                .with_framework(FrameworkEntry::new("2.0.50727", "/opt/mono/2.0")),
        ],
        DefaultSetup {
            vendor: Some(VendorName::Mono),
            vendor_version: Some("1.1.18".to_string()),
            framework_version: None,
        },
    )
}

/// Vendor "A" with two releases, each offering two frameworks, no defaults
fn ordered_catalog() -> VendorCatalog {
    VendorCatalog::new(
        vec![
            VendorEntry::new(VendorName::Microsoft, "1.1.4322")
                .with_framework(FrameworkEntry::new("1.0", "/ms/1.1/1.0"))
                .with_framework(FrameworkEntry::new("2.0", "/ms/1.1/2.0")),
            VendorEntry::new(VendorName::Microsoft, "3.5")
                .with_framework(FrameworkEntry::new("1.0", "/ms/3.5/1.0"))
                .with_framework(FrameworkEntry::new("2.0", "/ms/3.5/2.0")),
        ],
        DefaultSetup::default(),
    )
}

fn query(vendor: Option<VendorName>, vv: Option<&str>, fv: Option<&str>) -> ResolutionQuery {
    ResolutionQuery {
        vendor,
        vendor_version: vv.map(str::to_string),
        framework_version: fv.map(str::to_string),
    }
}

#[test]
fn test_classify_all_sixteen_states() {
    let vendors = [
        Some(VendorName::Microsoft),
        Some(VendorName::Mono),
        Some(VendorName::DotGnu),
        None,
    ];
    let versions = [None, Some(""), Some("  "), Some("2.0.50727")];

    let mut seen = HashSet::new();
    for vendor in vendors {
        for vv in versions {
            for fv in versions {
                seen.insert(ResolutionState::classify(&query(vendor, vv, fv)));
            }
        }
    }

    let all: HashSet<ResolutionState> = ResolutionState::all().into_iter().collect();
    assert_eq!(seen.len(), 16);
    assert_eq!(seen, all);
}

#[test]
fn test_classify_empty_string_equals_absent() {
    for vendor in [Some(VendorName::DotGnu), None] {
        assert_eq!(
            ResolutionState::classify(&query(vendor, Some(""), Some("2.0.50727"))),
            ResolutionState::classify(&query(vendor, None, Some("2.0.50727")))
        );
        assert_eq!(
            ResolutionState::classify(&query(vendor, Some(""), Some(""))),
            ResolutionState::classify(&query(vendor, None, None))
        );
        assert_eq!(
            ResolutionState::classify(&query(vendor, Some("0.7.2"), Some(""))),
            ResolutionState::classify(&query(vendor, Some("0.7.2"), None))
        );
    }
}

#[test]
fn test_classify_named_states() {
    let state = ResolutionState::classify(&query(Some(VendorName::Mono), Some("1.1.18"), None));
    assert_eq!(state.to_string(), "MONO/TF");

    let state = ResolutionState::classify(&query(None, None, Some("2.0.50727")));
    assert_eq!(state.to_string(), "*/FT");
}

#[test]
fn test_defaulting_steps_cover_missing_fields() {
    for state in ResolutionState::all() {
        let steps = state.defaulting_steps();
        assert_eq!(steps.contains(&Step::Vendor), state.vendor.is_none());
        assert_eq!(steps.contains(&Step::VendorVersion), !state.has_vendor_version);
        assert_eq!(
            steps.contains(&Step::FrameworkVersion),
            !state.has_framework_version
        );
    }
}

#[test]
fn test_resolve_default_vendor_with_framework() {
    let toolchain =
        classify_and_resolve(&mono_catalog(), &query(None, None, Some("2.0.50727"))).unwrap();
    assert_eq!(toolchain.vendor, VendorName::Mono);
    assert_eq!(toolchain.vendor_version, "1.1.18");
    assert_eq!(toolchain.install_root, Path::new("/opt/mono/2.0"));
}

#[test]
fn test_resolve_vendor_only_uses_default_version_then_first_framework() {
    let toolchain =
        classify_and_resolve(&mono_catalog(), &query(Some(VendorName::Mono), None, None)).unwrap();
    assert_eq!(toolchain.vendor_version, "1.1.18");
    assert_eq!(toolchain.framework_version, "2.0.50727");
    assert_eq!(toolchain.install_root, Path::new("/opt/mono/2.0"));
}

#[test]
fn test_resolve_empty_strings_match_absent() {
    let catalog = mono_catalog();
    let absent = classify_and_resolve(&catalog, &query(Some(VendorName::Mono), None, None));
    let empty = classify_and_resolve(&catalog, &query(Some(VendorName::Mono), Some(""), Some(" ")));
    assert_eq!(absent.unwrap().install_root, empty.unwrap().install_root);
}

#[test]
fn test_resolve_first_configured_vendor_version_not_latest() {
    let toolchain = classify_and_resolve(
        &ordered_catalog(),
        &query(Some(VendorName::Microsoft), None, Some("2.0")),
    )
    .unwrap();
    assert_eq!(toolchain.vendor_version, "1.1.4322");
    assert_eq!(toolchain.install_root, Path::new("/ms/1.1/2.0"));
}

#[test]
fn test_resolve_first_configured_framework() {
    let toolchain = classify_and_resolve(
        &ordered_catalog(),
        &query(Some(VendorName::Microsoft), Some("3.5"), None),
    )
    .unwrap();
    assert_eq!(toolchain.framework_version, "1.0");
    assert_eq!(toolchain.install_root, Path::new("/ms/3.5/1.0"));
}

#[test]
fn test_resolve_first_declared_version_ignores_default_flag() {
    let catalog = VendorCatalog::new(
        vec![
            VendorEntry::new(VendorName::Mono, "1.1.13")
                .with_framework(FrameworkEntry::new("2.0.50727", "/opt/mono-1.1.13")),
            VendorEntry::new(VendorName::Mono, "1.1.18")
                .as_default()
                .with_framework(FrameworkEntry::new("2.0.50727", "/opt/mono-1.1.18")),
        ],
        DefaultSetup::default(),
    );
    let toolchain =
        classify_and_resolve(&catalog, &query(Some(VendorName::Mono), None, None)).unwrap();
    assert_eq!(toolchain.vendor_version, "1.1.13");

    let toolchain = classify_and_resolve(
        &catalog,
        &query(Some(VendorName::Mono), None, Some("2.0.50727")),
    )
    .unwrap();
    assert_eq!(toolchain.vendor_version, "1.1.13");
    assert_eq!(toolchain.install_root, Path::new("/opt/mono-1.1.13"));
}

#[test]
fn test_resolve_default_framework_only_for_matching_vendor() {
    let catalog = VendorCatalog::new(
        vec![
            VendorEntry::new(VendorName::Microsoft, "2.0.50727")
                .with_framework(FrameworkEntry::new("2.0.50727", "/ms/2.0")),
            VendorEntry::new(VendorName::Mono, "1.1.18")
                .with_framework(FrameworkEntry::new("1.1.4322", "/mono/1.1"))
                .with_framework(FrameworkEntry::new("2.0.50727", "/mono/2.0")),
        ],
        DefaultSetup {
            vendor: Some(VendorName::Microsoft),
            vendor_version: Some("2.0.50727".to_string()),
            framework_version: Some("2.0.50727".to_string()),
        },
    );

    let toolchain =
        classify_and_resolve(&catalog, &query(Some(VendorName::Mono), None, None)).unwrap();
    assert_eq!(toolchain.framework_version, "1.1.4322");

    let toolchain = classify_and_resolve(&catalog, &query(None, None, None)).unwrap();
    assert_eq!(toolchain.vendor, VendorName::Microsoft);
    assert_eq!(toolchain.install_root, Path::new("/ms/2.0"));
}

#[test]
fn test_resolve_no_default_vendor() {
    let result = classify_and_resolve(&ordered_catalog(), &query(None, Some("3.5"), Some("2.0")));
    assert!(matches!(result, Err(ClrError::NoDefaultConfigured)));
}

#[test]
fn test_resolve_unmatched_triple_is_unsupported() {
    let result = classify_and_resolve(
        &mono_catalog(),
        &query(Some(VendorName::Mono), Some("1.1.18"), Some("4.0")),
    );
    assert!(matches!(result, Err(ClrError::PlatformUnsupported { .. })));
}

#[test]
fn test_resolve_unconfigured_vendor_is_unsupported() {
    let result = classify_and_resolve(&mono_catalog(), &query(Some(VendorName::DotGnu), None, None));
    assert!(matches!(result, Err(ClrError::PlatformUnsupported { .. })));
}

#[test]
fn test_resolve_is_deterministic() {
    let catalog = ordered_catalog();
    let q = query(Some(VendorName::Microsoft), None, None);
    let first = classify_and_resolve(&catalog, &q).unwrap();
    let second = classify_and_resolve(&catalog, &q).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_executable_paths_include_sdk_root() {
    let catalog = VendorCatalog::new(
        vec![
            VendorEntry::new(VendorName::Microsoft, "2.0.50727").with_framework(
                FrameworkEntry::new("2.0.50727", "/ms/2.0").with_sdk_root("/ms/sdk"),
            ),
        ],
        DefaultSetup::default(),
    );
    let toolchain = classify_and_resolve(
        &catalog,
        &query(Some(VendorName::Microsoft), Some("2.0.50727"), Some("2.0.50727")),
    )
    .unwrap();
    assert_eq!(
        toolchain.executable_paths(),
        vec![Path::new("/ms/2.0"), Path::new("/ms/sdk")]
    );
}
