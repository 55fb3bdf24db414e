//! Listing of the private assembly cache

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::artifact::AssemblyPathMapper;
use crate::error::{Result, fs::read_error};

/// An assembly found under `uac/gac_msil/<artifactId>/<version>__<groupId>/`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstalledAssembly {
    pub artifact_id: String,
    pub version: String,
    pub group_id: String,
    pub file: PathBuf,
}

/// Every assembly in the private cache, sorted. An absent cache lists nothing.
pub fn list_installed(mapper: &AssemblyPathMapper) -> Result<Vec<InstalledAssembly>> {
    let root = mapper.private_cache_root();
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut assemblies = Vec::new();
    for entry in WalkDir::new(&root).min_depth(3).max_depth(3) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| root.clone(), PathBuf::from);
            read_error(&path, &std::io::Error::other(e.to_string()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(assembly) = parse_entry(entry.path()) else {
            continue;
        };
        assemblies.push(assembly);
    }

    assemblies.sort();
    Ok(assemblies)
}

fn parse_entry(file: &std::path::Path) -> Option<InstalledAssembly> {
    let version_dir = file.parent()?;
    let artifact_dir = version_dir.parent()?;

    let (version, group_id) = version_dir.file_name()?.to_str()?.split_once("__")?;
    let artifact_id = artifact_dir.file_name()?.to_str()?;

    Some(InstalledAssembly {
        artifact_id: artifact_id.to_string(),
        version: version.to_string(),
        group_id: group_id.to_string(),
        file: file.to_path_buf(),
    })
}
