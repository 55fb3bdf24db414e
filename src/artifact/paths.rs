//! Assembly cache layout
//!
//! Maps artifact coordinates to where they live in the global assembly cache
//! and in the application-private cache next to the local repository:
//!
//! ```text
//! <gac_root>/<type>/<artifactId>/<version>__<publicKeyToken>/<artifactId>.dll
//! <local_repository>/../uac/gac_msil/<artifactId>/<version>__<groupId>/<artifactId>.<ext>
//! ```
//!
//! Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use super::ArtifactCoordinates;
use crate::error::Result;

/// Private cache directory, relative to the local repository's parent
pub const PRIVATE_CACHE_DIR: &str = "uac";

/// Layout segment mirroring the global cache's MSIL bucket
pub const PRIVATE_CACHE_BUCKET: &str = "gac_msil";

/// File extension of every assembly registered in the global cache
const GAC_EXTENSION: &str = "dll";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyPathMapper {
    global_cache_root: PathBuf,
    local_repository: PathBuf,
}

impl AssemblyPathMapper {
    pub fn new(global_cache_root: impl Into<PathBuf>, local_repository: impl Into<PathBuf>) -> Self {
        Self {
            global_cache_root: global_cache_root.into(),
            local_repository: local_repository.into(),
        }
    }

    pub fn global_cache_root(&self) -> &Path {
        &self.global_cache_root
    }

    pub fn local_repository(&self) -> &Path {
        &self.local_repository
    }

    /// Root of the private layout: `<local_repository>/../uac/gac_msil`
    pub fn private_cache_root(&self) -> PathBuf {
        let base = self
            .local_repository
            .parent()
            .unwrap_or(&self.local_repository);
        base.join(PRIVATE_CACHE_DIR).join(PRIVATE_CACHE_BUCKET)
    }

    /// Location in the global cache. `None` for artifacts that are not GAC-resident.
    pub fn global_cache_path(&self, coordinates: &ArtifactCoordinates) -> Option<PathBuf> {
        if !coordinates.is_gac_resident() {
            return None;
        }

        let token = coordinates.public_key_token.as_deref().unwrap_or_default();
        Some(
            self.global_cache_root
                .join(coordinates.artifact_type.trim())
                .join(&coordinates.artifact_id)
                .join(format!("{}__{}", coordinates.version, token))
                .join(format!("{}.{GAC_EXTENSION}", coordinates.artifact_id)),
        )
    }

    /// `<artifactId>.<ext>`, the extension taken from the type table
    pub fn file_name(coordinates: &ArtifactCoordinates) -> Result<String> {
        let extension = coordinates.kind()?.extension();
        Ok(format!("{}.{extension}", coordinates.artifact_id))
    }

    /// Location in the private cache
    pub fn private_cache_path(&self, coordinates: &ArtifactCoordinates) -> Result<PathBuf> {
        coordinates.validate()?;
        let file_name = Self::file_name(coordinates)?;
        Ok(self
            .private_cache_root()
            .join(&coordinates.artifact_id)
            .join(format!("{}__{}", coordinates.version, coordinates.group_id))
            .join(file_name))
    }

    /// Directory the whole closure of an artifact is installed into
    pub fn install_directory(&self, coordinates: &ArtifactCoordinates) -> Result<PathBuf> {
        let path = self.private_cache_path(coordinates)?;
        Ok(path
            .parent()
            .map_or_else(|| self.private_cache_root(), Path::to_path_buf))
    }

    /// Where the file of an artifact is expected: global cache for GAC-resident
    /// types, private cache otherwise
    pub fn expected_file(&self, coordinates: &ArtifactCoordinates) -> Result<PathBuf> {
        match self.global_cache_path(coordinates) {
            Some(path) => Ok(path),
            None => self.private_cache_path(coordinates),
        }
    }
}
