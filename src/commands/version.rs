//! Version command implementation

use clrdeploy::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("clrdeploy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    Ok(())
}
