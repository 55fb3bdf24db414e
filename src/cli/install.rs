use clap::Parser;
use std::path::PathBuf;

use clrdeploy::artifact::ArtifactCoordinates;

use super::QueryArgs;

/// Arguments for the paths command
#[derive(Parser, Debug)]
pub struct PathsArgs {
    /// Artifact coordinates: group:artifact:version:type[:publicKeyToken]
    pub coordinates: ArtifactCoordinates,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a built executable with its dependencies:\n    clrdeploy install acme:Tool:1.0:exe --file target/Tool.exe --dependencies deps.yaml\n\n\
                  Install only dependencies, each into its own directory:\n    clrdeploy install acme:Tool:1.0:exe --dependencies deps.yaml --no-primary")]
pub struct InstallArgs {
    /// Coordinates of the primary artifact: group:artifact:version:type[:publicKeyToken]
    pub coordinates: ArtifactCoordinates,

    /// Built file of the primary artifact (defaults to its local repository file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// YAML file with a `dependencies:` list
    #[arg(long)]
    pub dependencies: Option<PathBuf>,

    /// Install the dependencies without the primary artifact
    #[arg(long, conflicts_with = "file")]
    pub no_primary: bool,
}

/// Arguments for the install-profile command
#[derive(Parser, Debug)]
pub struct InstallProfileArgs {
    /// Profile to install for; without one only profile-less dependencies apply
    pub profile: Option<String>,

    /// Net dependencies file
    #[arg(long)]
    pub net_dependencies: PathBuf,

    /// Project records file
    #[arg(long)]
    pub projects: PathBuf,
}

/// Arguments for the gac-plan command
#[derive(Parser, Debug)]
pub struct GacPlanArgs {
    /// Net dependencies file
    #[arg(long)]
    pub net_dependencies: PathBuf,

    /// Toolchain whose gacutil is used
    #[command(flatten)]
    pub query: QueryArgs,
}
