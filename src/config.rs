//! Tool locations
//!
//! Each location comes from a command line flag, then an environment
//! variable, then a platform default:
//!
//! | location         | variable                     | default                                   |
//! |------------------|------------------------------|-------------------------------------------|
//! | settings file    | `CLRDEPLOY_SETTINGS`         | `<config_dir>/clrdeploy/settings.yaml`    |
//! | local repository | `CLRDEPLOY_LOCAL_REPOSITORY` | `<home>/.clrdeploy/repository`            |
//! | global cache     | `CLRDEPLOY_GAC_ROOT`         | `%WINDIR%\assembly` or `/usr/lib/mono/gac` |

use std::env;
use std::path::PathBuf;

use crate::artifact::{AssemblyPathMapper, LocalRepositoryResolver};
use crate::error::{self, Result};

pub const SETTINGS_ENV: &str = "CLRDEPLOY_SETTINGS";
pub const LOCAL_REPOSITORY_ENV: &str = "CLRDEPLOY_LOCAL_REPOSITORY";
pub const GAC_ROOT_ENV: &str = "CLRDEPLOY_GAC_ROOT";

const APP_DIR: &str = "clrdeploy";
const SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub settings: PathBuf,
    pub local_repository: PathBuf,
    pub gac_root: PathBuf,
}

impl ToolPaths {
    /// Fill every location not given explicitly
    pub fn resolve(
        settings: Option<PathBuf>,
        local_repository: Option<PathBuf>,
        gac_root: Option<PathBuf>,
    ) -> Result<Self> {
        let settings = match settings.or_else(|| from_env(SETTINGS_ENV)) {
            Some(path) => path,
            None => default_settings_path()?,
        };
        let local_repository = match local_repository.or_else(|| from_env(LOCAL_REPOSITORY_ENV)) {
            Some(path) => path,
            None => default_local_repository()?,
        };
        let gac_root = gac_root
            .or_else(|| from_env(GAC_ROOT_ENV))
            .unwrap_or_else(default_gac_root);

        Ok(Self {
            settings,
            local_repository,
            gac_root,
        })
    }

    pub fn mapper(&self) -> AssemblyPathMapper {
        AssemblyPathMapper::new(&self.gac_root, &self.local_repository)
    }

    pub fn resolver(&self) -> LocalRepositoryResolver {
        LocalRepositoryResolver::new(self.mapper())
    }
}

fn from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn default_settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| error::config_invalid("Could not determine configuration directory"))?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn default_local_repository() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| error::config_invalid("Could not determine home directory"))?;
    Ok(home.join(format!(".{APP_DIR}")).join("repository"))
}

pub fn default_gac_root() -> PathBuf {
    #[cfg(windows)]
    {
        env::var_os("WINDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
            .join("assembly")
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/usr/lib/mono/gac")
    }
}
