//! Toolchain context
//!
//! Everything resolution needs, loaded once and passed explicitly.

use std::path::PathBuf;

use crate::capability::{CapabilityRegistry, Command};
use crate::error::Result;
use crate::resolution::{ResolutionQuery, ResolvedToolchain, classify_and_resolve};
use crate::vendor::{ConfigSource, VendorCatalog};

#[derive(Debug, Clone)]
pub struct ToolchainContext {
    catalog: VendorCatalog,
    capabilities: CapabilityRegistry,
}

impl ToolchainContext {
    pub fn new(catalog: VendorCatalog, capabilities: CapabilityRegistry) -> Self {
        Self {
            catalog,
            capabilities,
        }
    }

    /// Load the catalog from `source` and pair it with the builtin capabilities
    pub fn load(source: &dyn ConfigSource) -> Result<Self> {
        Ok(Self::new(
            VendorCatalog::load(source)?,
            CapabilityRegistry::builtin(),
        ))
    }

    pub fn catalog(&self) -> &VendorCatalog {
        &self.catalog
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn resolve(&self, query: &ResolutionQuery) -> Result<ResolvedToolchain> {
        classify_and_resolve(&self.catalog, query)
    }

    /// Resolve the toolchain and find `command` in it
    pub fn locate(&self, query: &ResolutionQuery, command: Command) -> Result<(ResolvedToolchain, PathBuf)> {
        let toolchain = self.resolve(query)?;
        let path = self.capabilities.locate(&toolchain, command)?;
        Ok((toolchain, path))
    }
}
