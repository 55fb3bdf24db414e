//! Install command
//!
//! Installs one closure: the primary artifact named on the command line plus
//! the dependencies listed in `--dependencies`.

use clrdeploy::artifact::{ArtifactResolver, DEFAULT_SCOPE, NetDependencies, ResolvedArtifact};
use clrdeploy::error::Result;

use super::Globals;
use super::helpers::engine;
use crate::cli::InstallArgs;
use crate::ui::{InstallProgressBar, display};

pub fn run(globals: &Globals, args: &InstallArgs) -> Result<()> {
    let paths = globals.tool_paths()?;
    let engine = engine(&paths);

    let dependencies = match &args.dependencies {
        Some(file) => NetDependencies::from_file(file)?.dependencies,
        None => Vec::new(),
    };

    let primary = if args.no_primary {
        None
    } else {
        let file = args.file.clone().or_else(|| {
            engine
                .resolver()
                .resolve(&args.coordinates, DEFAULT_SCOPE)
                .ok()
        });
        Some(ResolvedArtifact::new(args.coordinates.clone(), file))
    };

    let mut progress = InstallProgressBar::new();
    let report = engine.install_closure_with(primary.as_ref(), &dependencies, &mut progress)?;
    display::print_install_report(&report, globals.verbose);
    Ok(())
}
