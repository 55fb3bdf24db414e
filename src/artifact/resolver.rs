//! Artifact file resolution
//!
//! The deployment engine never fetches anything itself. It asks an
//! [`ArtifactResolver`] for the local file of a set of coordinates and only
//! distinguishes "not there" from "could not be resolved".

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{ArtifactCoordinates, AssemblyPathMapper};

/// Why a resolver produced no file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("artifact not found")]
    NotFound,

    #[error("{0}")]
    ResolutionFailed(String),
}

pub trait ArtifactResolver {
    /// Local file for `coordinates` in `scope`
    fn resolve(
        &self,
        coordinates: &ArtifactCoordinates,
        scope: &str,
    ) -> Result<PathBuf, FetchError>;
}

impl<F> ArtifactResolver for F
where
    F: Fn(&ArtifactCoordinates, &str) -> Result<PathBuf, FetchError>,
{
    fn resolve(
        &self,
        coordinates: &ArtifactCoordinates,
        scope: &str,
    ) -> Result<PathBuf, FetchError> {
        self(coordinates, scope)
    }
}

/// Resolves artifacts already present on the local machine.
///
/// GAC-resident artifacts are looked up in the global cache. Everything else
/// is looked up in the local repository
/// (`<repo>/<group as dirs>/<artifactId>/<version>/<artifactId>-<version>.<ext>`)
/// and then in the private cache. Scope does not change the lookup.
#[derive(Debug, Clone)]
pub struct LocalRepositoryResolver {
    mapper: AssemblyPathMapper,
}

impl LocalRepositoryResolver {
    pub fn new(mapper: AssemblyPathMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &AssemblyPathMapper {
        &self.mapper
    }

    /// Repository location of a non-global artifact
    pub fn repository_path(&self, coordinates: &ArtifactCoordinates) -> Result<PathBuf, FetchError> {
        let extension = coordinates
            .kind()
            .map_err(|e| FetchError::ResolutionFailed(e.to_string()))?
            .extension();

        let mut path = self.mapper.local_repository().to_path_buf();
        for segment in coordinates.group_id.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        Ok(path
            .join(&coordinates.artifact_id)
            .join(&coordinates.version)
            .join(format!(
                "{}-{}.{extension}",
                coordinates.artifact_id, coordinates.version
            )))
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(
        &self,
        coordinates: &ArtifactCoordinates,
        _scope: &str,
    ) -> Result<PathBuf, FetchError> {
        coordinates
            .validate()
            .map_err(|e| FetchError::ResolutionFailed(e.to_string()))?;
        if let Some(global) = self.mapper.global_cache_path(coordinates) {
            return existing(global);
        }

        let in_repository = self.repository_path(coordinates)?;
        if in_repository.is_file() {
            return Ok(in_repository);
        }

        let private = self
            .mapper
            .private_cache_path(coordinates)
            .map_err(|e| FetchError::ResolutionFailed(e.to_string()))?;
        existing(private)
    }
}

fn existing(path: PathBuf) -> Result<PathBuf, FetchError> {
    if Path::is_file(&path) {
        Ok(path)
    } else {
        Err(FetchError::NotFound)
    }
}
