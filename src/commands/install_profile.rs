//! Install-profile command

use clrdeploy::artifact::{MemoryProjectStore, NetDependencies};
use clrdeploy::error::Result;

use super::Globals;
use super::helpers::engine;
use crate::cli::InstallProfileArgs;
use crate::ui::{InstallProgressBar, display};

pub fn run(globals: &Globals, args: &InstallProfileArgs) -> Result<()> {
    let paths = globals.tool_paths()?;
    let engine = engine(&paths);

    let net_dependencies = NetDependencies::from_file(&args.net_dependencies)?;
    let mut store = MemoryProjectStore::from_file(&args.projects)?;

    let mut progress = InstallProgressBar::new();
    let reports = engine.install_for_profile_with(
        &net_dependencies,
        args.profile.as_deref(),
        &mut store,
        &mut progress,
    )?;

    if reports.is_empty() {
        println!(
            "Nothing to install for profile {}",
            args.profile.as_deref().unwrap_or("(none)")
        );
    }
    for report in &reports {
        display::print_install_report(report, globals.verbose);
    }
    Ok(())
}
