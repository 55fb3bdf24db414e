//! Project records and the net-dependencies repository
//!
//! Both are plain YAML documents:
//!
//! ```yaml
//! # projects.yaml
//! projects:
//!   - group_id: NPanday.Plugin
//!     artifact_id: NPanday.Plugin.Settings
//!     version: "1.0"
//!     type: netplugin
//!     dependencies:
//!       - { group_id: NUnit, artifact_id: NUnit.Framework, version: "2.2.8.0", type: library }
//!
//! # net-dependencies.yaml
//! dependencies:
//!   - { group_id: NPanday.Plugin, artifact_id: NPanday.Plugin.Settings, version: "1.0", type: netplugin, profile: VisualStudio2005 }
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::policy::{self, MatchPolicy};
use super::{ArtifactCoordinates, DependencyDescriptor};
use crate::error::{self, Result};

/// A project and the dependencies it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub coordinates: ArtifactCoordinates,

    #[serde(default)]
    pub dependencies: Vec<DependencyDescriptor>,
}

impl Project {
    pub fn new(coordinates: ArtifactCoordinates) -> Self {
        Self {
            coordinates,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: DependencyDescriptor) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// Keyed lookup of project records, opened and closed around a batch
pub trait ProjectStore {
    fn open(&mut self) -> Result<()>;

    /// Fails with `ProjectNotFound` when no record matches
    fn project_for(&self, coordinates: &ArtifactCoordinates) -> Result<Project>;

    fn close(&mut self) -> Result<()>;
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsDocument {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Project store backed by a list held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    projects: Vec<Project>,
    open: bool,
}

impl MemoryProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            open: false,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let document: ProjectsDocument = read_yaml(path)?;
        Ok(Self::new(document.projects))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

impl ProjectStore for MemoryProjectStore {
    fn open(&mut self) -> Result<()> {
        self.open = true;
        Ok(())
    }

    fn project_for(&self, coordinates: &ArtifactCoordinates) -> Result<Project> {
        self.projects
            .iter()
            .find(|p| same_artifact(&p.coordinates, coordinates))
            .cloned()
            .ok_or_else(|| error::project_not_found(coordinates.to_string()))
    }

    fn close(&mut self) -> Result<()> {
        self.open = false;
        Ok(())
    }
}

/// Group, artifact, version and type must agree; the token only when both carry one
fn same_artifact(a: &ArtifactCoordinates, b: &ArtifactCoordinates) -> bool {
    a.group_id.trim() == b.group_id.trim()
        && a.artifact_id.trim() == b.artifact_id.trim()
        && a.version.trim() == b.version.trim()
        && a.artifact_type.trim() == b.artifact_type.trim()
        && match (&a.public_key_token, &b.public_key_token) {
            (Some(x), Some(y)) => x.trim() == y.trim(),
            _ => true,
        }
}

/// Dependencies the toolchain itself needs (plugins, add-ins, executables)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetDependencies {
    #[serde(default)]
    pub dependencies: Vec<DependencyDescriptor>,
}

impl NetDependencies {
    pub fn new(dependencies: Vec<DependencyDescriptor>) -> Self {
        Self { dependencies }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        read_yaml(path)
    }

    /// Dependencies matched by every policy, in declaration order
    pub fn dependencies_for(&self, policies: &[&dyn MatchPolicy]) -> Vec<&DependencyDescriptor> {
        policy::filter(policies, &self.dependencies)
    }
}

fn read_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(error::config_not_found(display));
    }

    let content = fs::read_to_string(path).map_err(|e| error::fs::read_error(path, &e))?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&content).map_err(|e| error::config_parse_failed(display, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{KindMatch, ProfileMatch};
    use crate::error::ClrError;
    use tempfile::TempDir;

    const PROJECTS: &str = r#"
projects:
  - group_id: NPanday.Plugin
    artifact_id: NPanday.Plugin.Settings
    version: "1.0"
    type: netplugin
    dependencies:
      - group_id: NUnit
        artifact_id: NUnit.Framework
        version: "2.2.8.0"
        type: library
      - group_id: System
        artifact_id: System.Xml
        version: "2.0.0.0"
        type: gac_msil
        public_key_token: b77a5c561934e089
"#;

    const NET_DEPENDENCIES: &str = r#"
dependencies:
  - group_id: NPanday.Plugin
    artifact_id: NPanday.Plugin.Settings
    version: "1.0"
    type: netplugin
    profile: VisualStudio2005
  - group_id: NPanday
    artifact_id: NPanday.Model
    version: "1.0"
    type: library
  - group_id: NPanday
    artifact_id: NPanday.Launcher
    version: "1.0"
    type: exe
    gac_install: true
"#;

    fn write(temp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_project_store_from_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "projects.yaml", PROJECTS);
        let mut store = MemoryProjectStore::from_file(&path).unwrap();

        store.open().unwrap();
        assert!(store.is_open());
        let project = store
            .project_for(&ArtifactCoordinates::new(
                "NPanday.Plugin",
                "NPanday.Plugin.Settings",
                "1.0",
                "netplugin",
            ))
            .unwrap();
        assert_eq!(project.dependencies.len(), 2);
        assert_eq!(
            project.dependencies[1].coordinates.public_key_token.as_deref(),
            Some("b77a5c561934e089")
        );
        store.close().unwrap();
        assert!(!store.is_open());
    }

    #[test]
    fn test_project_not_found() {
        let store = MemoryProjectStore::default();
        let result = store.project_for(&ArtifactCoordinates::new("g", "a", "1.0", "exe"));
        assert!(matches!(result, Err(ClrError::ProjectNotFound { .. })));
    }

    #[test]
    fn test_project_lookup_requires_same_version() {
        let store = MemoryProjectStore::new(vec![Project::new(ArtifactCoordinates::new(
            "g", "a", "1.0", "exe",
        ))]);
        assert!(store.project_for(&ArtifactCoordinates::new("g", "a", "1.0", "exe")).is_ok());
        assert!(store.project_for(&ArtifactCoordinates::new("g", "a", "2.0", "exe")).is_err());
    }

    #[test]
    fn test_net_dependencies_filtered_by_policies() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "net-dependencies.yaml", NET_DEPENDENCIES);
        let repository = NetDependencies::from_file(&path).unwrap();
        assert_eq!(repository.dependencies.len(), 3);

        let profile = ProfileMatch::new(Some("VisualStudio2005"));
        let selected = repository.dependencies_for(&[&profile, &KindMatch]);
        let ids: Vec<&str> = selected
            .iter()
            .map(|d| d.coordinates.artifact_id.as_str())
            .collect();
        assert_eq!(ids, vec!["NPanday.Plugin.Settings", "NPanday.Launcher"]);

        let none = ProfileMatch::new(None);
        let selected = repository.dependencies_for(&[&none, &KindMatch]);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = NetDependencies::from_file(&temp.path().join("absent.yaml"));
        assert!(matches!(result, Err(ClrError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_empty_file_is_empty_repository() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "net-dependencies.yaml", "  \n");
        assert!(NetDependencies::from_file(&path).unwrap().dependencies.is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "projects.yaml", "projects: [unclosed");
        assert!(matches!(
            MemoryProjectStore::from_file(&path),
            Err(ClrError::ConfigParseFailed { .. })
        ));
    }
}
