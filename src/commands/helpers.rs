//! Command helper utilities

use std::path::PathBuf;

use clrdeploy::ToolchainContext;
use clrdeploy::artifact::LocalRepositoryResolver;
use clrdeploy::config::ToolPaths;
use clrdeploy::deploy::DeploymentEngine;
use clrdeploy::error::Result;
use clrdeploy::vendor::SettingsFile;

use crate::cli::Cli;
use crate::ui;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub settings: Option<PathBuf>,
    pub local_repository: Option<PathBuf>,
    pub gac_root: Option<PathBuf>,
    pub verbose: bool,
}

impl Globals {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            settings: cli.settings.clone(),
            local_repository: cli.local_repository.clone(),
            gac_root: cli.gac_root.clone(),
            verbose: cli.verbose,
        }
    }

    pub fn tool_paths(&self) -> Result<ToolPaths> {
        ToolPaths::resolve(
            self.settings.clone(),
            self.local_repository.clone(),
            self.gac_root.clone(),
        )
    }
}

/// Load the vendor catalog, warning about vendors that were dropped
pub fn load_context(paths: &ToolPaths) -> Result<ToolchainContext> {
    let context = ToolchainContext::load(&SettingsFile::new(&paths.settings))?;
    for name in context.catalog().skipped_vendors() {
        ui::warn(format!("Ignoring unsupported vendor '{name}'"));
    }
    Ok(context)
}

pub fn engine(paths: &ToolPaths) -> DeploymentEngine<LocalRepositoryResolver> {
    DeploymentEngine::new(paths.mapper(), paths.resolver())
}
