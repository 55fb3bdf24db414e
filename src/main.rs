//! clrdeploy - managed runtime toolchain resolution and private assembly deployment
//!
//! Command line front end over the `clrdeploy` library.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::Globals;

fn main() {
    let cli = Cli::parse();
    let globals = Globals::from_cli(&cli);

    let result = match &cli.command {
        Commands::Resolve(args) => commands::resolve::run(&globals, args),
        Commands::Which(args) => commands::which::run(&globals, args),
        Commands::Paths(args) => commands::paths::run(&globals, args),
        Commands::Install(args) => commands::install::run(&globals, args),
        Commands::InstallProfile(args) => commands::install_profile::run(&globals, args),
        Commands::GacPlan(args) => commands::gac_plan::run(&globals, args),
        Commands::List(args) => commands::list::run(&globals, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
