//! Resolve command

use clrdeploy::error::Result;

use super::Globals;
use super::helpers::load_context;
use crate::cli::QueryArgs;
use crate::ui::display;

pub fn run(globals: &Globals, args: &QueryArgs) -> Result<()> {
    let paths = globals.tool_paths()?;
    let context = load_context(&paths)?;

    let toolchain = context.resolve(&args.to_query())?;
    display::print_toolchain(&toolchain);

    if globals.verbose {
        let preferred = context
            .catalog()
            .entry(toolchain.vendor, &toolchain.vendor_version)
            .is_some_and(|entry| entry.is_default);
        println!("Preferred release:  {}", if preferred { "yes" } else { "no" });
        println!("Executable paths:");
        for dir in toolchain.executable_paths() {
            println!("  {}", dir.display());
        }
    }
    Ok(())
}
