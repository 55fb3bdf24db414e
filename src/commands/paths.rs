//! Paths command

use clrdeploy::error::Result;

use super::Globals;
use crate::cli::PathsArgs;

pub fn run(globals: &Globals, args: &PathsArgs) -> Result<()> {
    let mapper = globals.tool_paths()?.mapper();
    let coordinates = &args.coordinates;

    match mapper.global_cache_path(coordinates) {
        Some(path) => println!("global:  {}", path.display()),
        None => println!("global:  - (not GAC-resident)"),
    }
    println!("private: {}", mapper.private_cache_path(coordinates)?.display());
    if globals.verbose {
        println!("install directory: {}", mapper.install_directory(coordinates)?.display());
    }
    Ok(())
}
