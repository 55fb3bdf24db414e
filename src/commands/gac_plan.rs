//! Gac-plan command

use std::path::PathBuf;

use clrdeploy::artifact::NetDependencies;
use clrdeploy::capability::Command;
use clrdeploy::error::{ClrError, Result};

use super::Globals;
use super::helpers::{engine, load_context};
use crate::cli::GacPlanArgs;
use crate::ui::{self, display};

pub fn run(globals: &Globals, args: &GacPlanArgs) -> Result<()> {
    let paths = globals.tool_paths()?;
    let context = load_context(&paths)?;

    let toolchain = context.resolve(&args.query.to_query())?;
    let gacutil = match context.capabilities().locate(&toolchain, Command::Gacutil) {
        Ok(path) => path,
        Err(ClrError::CapabilityNotFound { .. }) => {
            let name = context
                .capabilities()
                .executable_for(toolchain.vendor, Command::Gacutil)?;
            ui::warn(format!(
                "{name} not found in the {} {} toolchain, assuming it is on PATH",
                toolchain.vendor, toolchain.vendor_version
            ));
            PathBuf::from(name)
        }
        Err(e) => return Err(e),
    };

    let net_dependencies = NetDependencies::from_file(&args.net_dependencies)?;
    let plan = engine(&paths).gac_install_plan(&net_dependencies, &gacutil)?;
    display::print_gac_plan(&plan);
    Ok(())
}
