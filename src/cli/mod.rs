//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - query: Toolchain query arguments (resolve, which)
//! - install: Install, install-profile, paths and gac-plan arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod query;

pub use completions::CompletionsArgs;
pub use install::{GacPlanArgs, InstallArgs, InstallProfileArgs, PathsArgs};
pub use list::ListArgs;
pub use query::{QueryArgs, WhichArgs};

/// clrdeploy - managed runtime toolchain resolution and private assembly deployment
#[derive(Parser, Debug)]
#[command(
    name = "clrdeploy",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve managed runtime toolchains and deploy assemblies into a private cache",
    long_about = "clrdeploy picks a concrete toolchain (vendor, vendor version, framework version) \
                  from a partial description and installs assembly closures into an application-private \
                  cache that mirrors the global assembly cache layout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  clrdeploy resolve --vendor mono                       \x1b[90m# Default version and framework for Mono\x1b[0m\n   \
                  clrdeploy which gacutil                               \x1b[90m# Locate gacutil in the default toolchain\x1b[0m\n   \
                  clrdeploy paths System:System.Xml:2.0.0.0:gac_msil:b77a5c561934e089\n   \
                  clrdeploy install acme:Tool:1.0:exe --file Tool.exe   \x1b[90m# Install a closure\x1b[0m\n   \
                  clrdeploy list                                        \x1b[90m# Show the private cache\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Settings file with the vendor catalog
    #[arg(long, short = 's', global = true)]
    pub settings: Option<PathBuf>,

    /// Local artifact repository; the private cache lives next to it
    #[arg(long, global = true)]
    pub local_repository: Option<PathBuf>,

    /// Root of the global assembly cache
    #[arg(long, global = true)]
    pub gac_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a partial toolchain description
    Resolve(QueryArgs),

    /// Locate a toolchain executable
    Which(WhichArgs),

    /// Show where an artifact lives in the global and private caches
    Paths(PathsArgs),

    /// Install an artifact and its dependencies into the private cache
    Install(InstallArgs),

    /// Install the plugins, add-ins and executables a profile needs
    InstallProfile(InstallProfileArgs),

    /// Print the gacutil commands registering flagged assemblies
    GacPlan(GacPlanArgs),

    /// List assemblies in the private cache
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
