//! Assembly deployment
//!
//! This module handles:
//! - Installing an artifact closure into the private cache (install_closure)
//! - Installing the tool dependencies of a profile (install_for_profile)
//! - Planning global cache registration (via gac module)
//! - Listing what the private cache holds (via listing module)
//!
//! GAC-resident artifacts are never copied. One whose file cannot be found is
//! skipped rather than failing the install: registration in the global cache
//! is not verified.

use std::path::{Path, PathBuf};

use crate::artifact::{
    ArtifactCoordinates, ArtifactResolver, AssemblyPathMapper, DEFAULT_SCOPE,
    DependencyDescriptor, FetchError, KindMatch, NetDependencies, Project, ProfileMatch,
    ProjectStore, ResolvedArtifact,
};
use crate::error::{self, Result};

pub mod file_ops;
pub mod gac;
pub mod listing;


pub use file_ops::CopyOutcome;
pub use gac::GacInstallCommand;
pub use listing::{InstalledAssembly, list_installed};

/// What happened to one member of a closure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    SkippedGlobal,
    SkippedMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedAssembly {
    pub coordinates: ArtifactCoordinates,
    pub source: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub outcome: InstallOutcome,
    /// False when the target already held identical content
    pub changed: bool,
}

impl DeployedAssembly {
    fn skipped(coordinates: ArtifactCoordinates, source: Option<PathBuf>, outcome: InstallOutcome) -> Self {
        Self {
            coordinates,
            source,
            target_dir: None,
            outcome,
            changed: false,
        }
    }
}

/// Result of one install pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Shared directory of the closure; `None` when no primary artifact was given
    pub install_directory: Option<PathBuf>,
    pub assemblies: Vec<DeployedAssembly>,
}

impl InstallReport {
    pub fn installed(&self) -> impl Iterator<Item = &DeployedAssembly> {
        self.with_outcome(InstallOutcome::Installed)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &DeployedAssembly> {
        self.assemblies
            .iter()
            .filter(|a| a.outcome != InstallOutcome::Installed)
    }

    pub fn with_outcome(&self, outcome: InstallOutcome) -> impl Iterator<Item = &DeployedAssembly> {
        self.assemblies.iter().filter(move |a| a.outcome == outcome)
    }
}

/// Observer of an install pass; the CLI draws a progress bar with it
pub trait InstallProgress {
    fn start(&mut self, total: usize);
    fn assembly(&mut self, deployed: &DeployedAssembly);
    fn finish(&mut self);
    fn abandon(&mut self);
}

/// Progress observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl InstallProgress for NoProgress {
    fn start(&mut self, _total: usize) {}
    fn assembly(&mut self, _deployed: &DeployedAssembly) {}
    fn finish(&mut self) {}
    fn abandon(&mut self) {}
}

enum Pending {
    Copy {
        coordinates: ArtifactCoordinates,
        source: PathBuf,
    },
    Skip(DeployedAssembly),
}

pub struct DeploymentEngine<R> {
    mapper: AssemblyPathMapper,
    resolver: R,
}

impl<R: ArtifactResolver> DeploymentEngine<R> {
    pub fn new(mapper: AssemblyPathMapper, resolver: R) -> Self {
        Self { mapper, resolver }
    }

    pub fn mapper(&self) -> &AssemblyPathMapper {
        &self.mapper
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Install a primary artifact and its dependencies into the private cache.
    ///
    /// Every fatal condition (missing private dependency, missing primary file,
    /// unknown type) is detected before anything is copied. Copy failures abort
    /// the pass and leave already copied files in place.
    pub fn install_closure(
        &self,
        primary: Option<&ResolvedArtifact>,
        dependencies: &[DependencyDescriptor],
    ) -> Result<InstallReport> {
        self.install_closure_with(primary, dependencies, &mut NoProgress)
    }

    pub fn install_closure_with(
        &self,
        primary: Option<&ResolvedArtifact>,
        dependencies: &[DependencyDescriptor],
        progress: &mut dyn InstallProgress,
    ) -> Result<InstallReport> {
        let mut pending = dependencies
            .iter()
            .map(|d| self.plan_dependency(d))
            .collect::<Result<Vec<_>>>()?;

        let install_directory = match primary {
            Some(primary) => {
                pending.push(Self::plan_primary(primary)?);
                Some(self.mapper.install_directory(&primary.coordinates)?)
            }
            None => None,
        };

        progress.start(pending.len());
        let mut report = InstallReport {
            install_directory,
            assemblies: Vec::with_capacity(pending.len()),
        };

        for item in pending {
            match self.deploy(item, report.install_directory.as_deref()) {
                Ok(deployed) => {
                    progress.assembly(&deployed);
                    report.assemblies.push(deployed);
                }
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }

        progress.finish();
        Ok(report)
    }

    fn plan_dependency(&self, dependency: &DependencyDescriptor) -> Result<Pending> {
        let coordinates = &dependency.coordinates;
        coordinates.validate()?;
        let resolved = self.resolver.resolve(coordinates, dependency.scope());

        if coordinates.is_gac_resident() {
            let deployed = match resolved {
                Ok(file) if file.is_file() => {
                    DeployedAssembly::skipped(coordinates.clone(), Some(file), InstallOutcome::SkippedGlobal)
                }
                _ => {
                    DeployedAssembly::skipped(coordinates.clone(), None, InstallOutcome::SkippedMissing)
                }
            };
            return Ok(Pending::Skip(deployed));
        }

        coordinates.kind()?;
        match resolved {
            Ok(source) if source.is_file() => Ok(Pending::Copy {
                coordinates: coordinates.clone(),
                source,
            }),
            Ok(source) => Err(error::missing_artifact(
                coordinates.id(),
                Some(source.display().to_string()),
            )),
            Err(FetchError::NotFound) => Err(error::missing_artifact(coordinates.id(), None)),
            Err(FetchError::ResolutionFailed(reason)) => {
                Err(error::artifact_resolution_failed(coordinates.id(), reason))
            }
        }
    }

    fn plan_primary(primary: &ResolvedArtifact) -> Result<Pending> {
        primary.coordinates.validate()?;
        let source = primary.existing_file().ok_or_else(|| {
            error::primary_artifact_missing(
                primary.coordinates.id(),
                primary.file.as_ref().map(|f| f.display().to_string()),
            )
        })?;

        let coordinates = primary.coordinates.clone();
        if coordinates.is_gac_resident() {
            return Ok(Pending::Skip(DeployedAssembly::skipped(
                coordinates,
                Some(source.to_path_buf()),
                InstallOutcome::SkippedGlobal,
            )));
        }
        Ok(Pending::Copy {
            coordinates,
            source: source.to_path_buf(),
        })
    }

    fn deploy(&self, item: Pending, install_directory: Option<&Path>) -> Result<DeployedAssembly> {
        let (coordinates, source) = match item {
            Pending::Skip(deployed) => return Ok(deployed),
            Pending::Copy { coordinates, source } => (coordinates, source),
        };

        let target_dir = match install_directory {
            Some(dir) => dir.to_path_buf(),
            None => self.mapper.install_directory(&coordinates)?,
        };
        let target = target_dir.join(AssemblyPathMapper::file_name(&coordinates)?);
        let outcome = file_ops::copy_assembly(&source, &target)?;

        Ok(DeployedAssembly {
            coordinates,
            source: Some(source),
            target_dir: Some(target_dir),
            outcome: InstallOutcome::Installed,
            changed: outcome == CopyOutcome::Copied,
        })
    }

    /// Install every executable, plugin and add-in a profile needs.
    ///
    /// Net dependencies are narrowed to those matching the profile and an
    /// installable kind, each is expanded into its project record, and the
    /// project's closure is installed with the project itself as primary.
    pub fn install_for_profile(
        &self,
        net_dependencies: &NetDependencies,
        profile: Option<&str>,
        store: &mut dyn ProjectStore,
    ) -> Result<Vec<InstallReport>> {
        self.install_for_profile_with(net_dependencies, profile, store, &mut NoProgress)
    }

    pub fn install_for_profile_with(
        &self,
        net_dependencies: &NetDependencies,
        profile: Option<&str>,
        store: &mut dyn ProjectStore,
        progress: &mut dyn InstallProgress,
    ) -> Result<Vec<InstallReport>> {
        let profile_match = ProfileMatch::new(profile);
        let selected = net_dependencies.dependencies_for(&[&profile_match, &KindMatch]);

        let projects = Self::load_projects(store, &selected)?;

        projects
            .iter()
            .map(|project| {
                let primary = self.primary_for(&project.coordinates)?;
                self.install_closure_with(Some(&primary), &project.dependencies, &mut *progress)
            })
            .collect()
    }

    /// Look up every project in one open/close batch; the store is closed even on failure
    fn load_projects(
        store: &mut dyn ProjectStore,
        selected: &[&DependencyDescriptor],
    ) -> Result<Vec<Project>> {
        store.open()?;
        let projects = selected
            .iter()
            .map(|d| store.project_for(&d.coordinates))
            .collect::<Result<Vec<_>>>();
        let closed = store.close();

        let projects = projects?;
        closed?;
        Ok(projects)
    }

    fn primary_for(&self, coordinates: &ArtifactCoordinates) -> Result<ResolvedArtifact> {
        let file = match self.resolver.resolve(coordinates, DEFAULT_SCOPE) {
            Ok(file) => file,
            Err(_) => self.mapper.expected_file(coordinates)?,
        };
        Ok(ResolvedArtifact::new(coordinates.clone(), Some(file)))
    }

    /// Commands registering GAC-flagged net dependencies with `gacutil`.
    /// Nothing is executed.
    pub fn gac_install_plan(
        &self,
        net_dependencies: &NetDependencies,
        gacutil: &Path,
    ) -> Result<Vec<GacInstallCommand>> {
        gac::plan(&self.resolver, net_dependencies, gacutil)
    }
}
