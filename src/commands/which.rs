//! Which command

use clrdeploy::error::Result;

use super::Globals;
use super::helpers::load_context;
use crate::cli::WhichArgs;

pub fn run(globals: &Globals, args: &WhichArgs) -> Result<()> {
    let paths = globals.tool_paths()?;
    let context = load_context(&paths)?;

    let (toolchain, executable) = context.locate(&args.query.to_query(), args.command)?;
    if globals.verbose {
        println!(
            "{} {} / framework {}",
            toolchain.vendor, toolchain.vendor_version, toolchain.framework_version
        );
    }
    println!("{}", executable.display());
    Ok(())
}
