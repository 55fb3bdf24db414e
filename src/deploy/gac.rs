//! Global assembly cache registration plan

use std::fmt;
use std::path::{Path, PathBuf};

use crate::artifact::{ArtifactCoordinates, ArtifactResolver, FetchError, GacFlagMatch, NetDependencies};
use crate::error::{self, Result};

/// One `gacutil /nologo /i <file>` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GacInstallCommand {
    pub coordinates: ArtifactCoordinates,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl GacInstallCommand {
    fn new(coordinates: ArtifactCoordinates, program: &Path, file: &Path) -> Self {
        Self {
            coordinates,
            program: program.to_path_buf(),
            args: vec![
                "/nologo".to_string(),
                "/i".to_string(),
                file.display().to_string(),
            ],
        }
    }
}

impl fmt::Display for GacInstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub(crate) fn plan<R: ArtifactResolver>(
    resolver: &R,
    net_dependencies: &NetDependencies,
    gacutil: &Path,
) -> Result<Vec<GacInstallCommand>> {
    net_dependencies
        .dependencies_for(&[&GacFlagMatch::new(true)])
        .into_iter()
        .map(|dependency| {
            let coordinates = &dependency.coordinates;
            coordinates.validate()?;
            let file = resolver
                .resolve(coordinates, dependency.scope())
                .map_err(|e| match e {
                    FetchError::NotFound => error::missing_artifact(coordinates.id(), None),
                    FetchError::ResolutionFailed(reason) => {
                        error::artifact_resolution_failed(coordinates.id(), reason)
                    }
                })?;
            Ok(GacInstallCommand::new(coordinates.clone(), gacutil, &file))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::DependencyDescriptor;
    use crate::error::ClrError;

    fn net_dependencies() -> NetDependencies {
        NetDependencies::new(vec![
            DependencyDescriptor::new(ArtifactCoordinates::new("NPanday", "NPanday.Model", "1.0", "library"))
                .with_gac_install(true),
            DependencyDescriptor::new(ArtifactCoordinates::new("NPanday", "NPanday.Plugin", "1.0", "netplugin")),
        ])
    }

    #[test]
    fn test_plan_only_flagged_dependencies() {
        let resolver = |c: &ArtifactCoordinates, _: &str| {
            Ok::<_, FetchError>(PathBuf::from(format!("/repo/{}.dll", c.artifact_id)))
        };
        let plan = plan(&resolver, &net_dependencies(), Path::new("gacutil")).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].coordinates.artifact_id, "NPanday.Model");
        assert_eq!(plan[0].to_string(), "gacutil /nologo /i /repo/NPanday.Model.dll");
    }

    #[test]
    fn test_plan_missing_file() {
        let resolver = |_: &ArtifactCoordinates, _: &str| Err::<PathBuf, _>(FetchError::NotFound);
        let result = plan(&resolver, &net_dependencies(), Path::new("gacutil"));
        assert!(matches!(result, Err(ClrError::MissingArtifact { .. })));
    }
}
