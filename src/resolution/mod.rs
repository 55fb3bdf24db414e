//! Toolchain resolution
//!
//! A query names any subset of vendor, vendor version and framework version.
//! It is classified into one of sixteen [`ResolutionState`]s (four vendor
//! categories crossed with two presence flags), the state selects which fields
//! get defaulted, and a single exact catalog lookup finishes the job.
//!
//! Defaulting rules, applied in order:
//! 1. A missing vendor becomes the default vendor, or fails with
//!    [`ClrError::NoDefaultConfigured`].
//! 2. A missing vendor version becomes the default vendor version when the
//!    default vendor is the resolved vendor. Otherwise the first declared
//!    entry of that vendor wins; the `default` flag on an entry is not consulted.
//! 3. A missing framework version becomes the default framework version when
//!    the default setup points at the resolved vendor (and vendor version, if it
//!    names one). Otherwise the first framework of the resolved entry is used.
//!
//! Blank strings count as missing everywhere.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{self, ClrError, Result};
use crate::vendor::{VendorCatalog, VendorName, non_blank};

#[cfg(test)]
mod tests;

/// Partial toolchain description supplied by a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionQuery {
    pub vendor: Option<VendorName>,
    pub vendor_version: Option<String>,
    pub framework_version: Option<String>,
}

impl ResolutionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vendor(mut self, vendor: VendorName) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn with_vendor_version(mut self, version: impl Into<String>) -> Self {
        self.vendor_version = Some(version.into());
        self
    }

    pub fn with_framework_version(mut self, version: impl Into<String>) -> Self {
        self.framework_version = Some(version.into());
        self
    }

    fn vendor_version(&self) -> Option<&str> {
        non_blank(self.vendor_version.as_deref())
    }

    fn framework_version(&self) -> Option<&str> {
        non_blank(self.framework_version.as_deref())
    }
}

/// Classification of a query: vendor category plus two presence flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionState {
    pub vendor: Option<VendorName>,
    pub has_vendor_version: bool,
    pub has_framework_version: bool,
}

impl ResolutionState {
    pub fn classify(query: &ResolutionQuery) -> Self {
        Self {
            vendor: query.vendor,
            has_vendor_version: query.vendor_version().is_some(),
            has_framework_version: query.framework_version().is_some(),
        }
    }

    /// Every state, vendor categories first, absent vendor last
    pub fn all() -> Vec<Self> {
        let vendors = VendorName::ALL.into_iter().map(Some).chain([None]);
        let mut states = Vec::with_capacity(16);
        for vendor in vendors {
            for has_vendor_version in [true, false] {
                for has_framework_version in [true, false] {
                    states.push(Self {
                        vendor,
                        has_vendor_version,
                        has_framework_version,
                    });
                }
            }
        }
        states
    }

    /// Fields this state leaves open, in the order they are filled
    pub fn defaulting_steps(self) -> &'static [Step] {
        use Step::{FrameworkVersion, Vendor, VendorVersion};

        match (
            self.vendor.is_some(),
            self.has_vendor_version,
            self.has_framework_version,
        ) {
            (true, true, true) => &[],
            (true, true, false) => &[FrameworkVersion],
            (true, false, true) => &[VendorVersion],
            (true, false, false) => &[VendorVersion, FrameworkVersion],
            (false, true, true) => &[Vendor],
            (false, true, false) => &[Vendor, FrameworkVersion],
            (false, false, true) => &[Vendor, VendorVersion],
            (false, false, false) => &[Vendor, VendorVersion, FrameworkVersion],
        }
    }
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |b: bool| if b { 'T' } else { 'F' };
        write!(
            f,
            "{}/{}{}",
            self.vendor.map_or("*", VendorName::as_str),
            flag(self.has_vendor_version),
            flag(self.has_framework_version)
        )
    }
}

/// A field filled from defaults or catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Vendor,
    VendorVersion,
    FrameworkVersion,
}

/// Concrete toolchain chosen for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolchain {
    pub state: ResolutionState,
    pub vendor: VendorName,
    pub vendor_version: String,
    pub framework_version: String,
    pub install_root: PathBuf,
    pub sdk_root: Option<PathBuf>,
}

impl ResolvedToolchain {
    /// Directories searched for executables: install root, then SDK root
    pub fn executable_paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.install_root.as_path()];
        if let Some(sdk_root) = &self.sdk_root {
            paths.push(sdk_root.as_path());
        }
        paths
    }
}

#[derive(Default)]
struct Selection {
    vendor: Option<VendorName>,
    vendor_version: Option<String>,
    framework_version: Option<String>,
}

impl Selection {
    fn unsupported(&self) -> ClrError {
        error::platform_unsupported(
            self.vendor.map_or("unspecified", VendorName::as_str),
            self.vendor_version.as_deref().unwrap_or("unspecified"),
            self.framework_version.as_deref().unwrap_or("unspecified"),
        )
    }
}

/// Classify a query and resolve it against the catalog
pub fn classify_and_resolve(
    catalog: &VendorCatalog,
    query: &ResolutionQuery,
) -> Result<ResolvedToolchain> {
    let state = ResolutionState::classify(query);
    let mut selection = Selection {
        vendor: query.vendor,
        vendor_version: query.vendor_version().map(str::to_string),
        framework_version: query.framework_version().map(str::to_string),
    };

    for step in state.defaulting_steps() {
        match step {
            Step::Vendor => {
                selection.vendor = Some(
                    catalog
                        .default_setup()
                        .vendor
                        .ok_or(ClrError::NoDefaultConfigured)?,
                );
            }
            Step::VendorVersion => {
                selection.vendor_version = Some(default_vendor_version(catalog, &selection)?);
            }
            Step::FrameworkVersion => {
                selection.framework_version = Some(default_framework_version(catalog, &selection)?);
            }
        }
    }

    let (Some(vendor), Some(vendor_version), Some(framework_version)) = (
        selection.vendor,
        selection.vendor_version.as_deref(),
        selection.framework_version.as_deref(),
    ) else {
        return Err(selection.unsupported());
    };

    let framework = catalog
        .framework_entry(vendor, vendor_version, framework_version)
        .ok_or_else(|| selection.unsupported())?;

    Ok(ResolvedToolchain {
        state,
        vendor,
        vendor_version: vendor_version.to_string(),
        framework_version: framework_version.to_string(),
        install_root: framework.install_root.clone(),
        sdk_root: framework.sdk_root.clone(),
    })
}

fn default_vendor_version(catalog: &VendorCatalog, selection: &Selection) -> Result<String> {
    let vendor = selection.vendor.ok_or(ClrError::NoDefaultConfigured)?;
    let setup = catalog.default_setup();

    if setup.vendor == Some(vendor) {
        if let Some(version) = &setup.vendor_version {
            return Ok(version.clone());
        }
    }

    catalog
        .entries_for(vendor)
        .next()
        .map(|v| v.version.clone())
        .ok_or_else(|| selection.unsupported())
}

fn default_framework_version(catalog: &VendorCatalog, selection: &Selection) -> Result<String> {
    let vendor = selection.vendor.ok_or(ClrError::NoDefaultConfigured)?;
    let vendor_version = selection
        .vendor_version
        .as_deref()
        .ok_or_else(|| selection.unsupported())?;
    let setup = catalog.default_setup();

    let setup_applies = setup.vendor == Some(vendor)
        && setup
            .vendor_version
            .as_deref()
            .is_none_or(|v| v == vendor_version);
    if let (true, Some(version)) = (setup_applies, &setup.framework_version) {
        return Ok(version.clone());
    }

    catalog
        .entry(vendor, vendor_version)
        .and_then(|v| v.frameworks.first())
        .map(|f| f.version.clone())
        .ok_or_else(|| selection.unsupported())
}
