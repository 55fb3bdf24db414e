//! List command

use clrdeploy::deploy::list_installed;
use clrdeploy::error::Result;

use super::Globals;
use crate::cli::ListArgs;
use crate::ui::display;

pub fn run(globals: &Globals, args: &ListArgs) -> Result<()> {
    let mapper = globals.tool_paths()?.mapper();
    let mut assemblies = list_installed(&mapper)?;

    if let Some(filter) = args.filter.as_deref() {
        assemblies.retain(|a| a.artifact_id.contains(filter));
    }

    display::print_installed(&assemblies, globals.verbose);
    Ok(())
}
