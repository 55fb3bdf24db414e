//! Rendering of command results

use console::Style;

use clrdeploy::deploy::{DeployedAssembly, GacInstallCommand, InstallOutcome, InstallReport, InstalledAssembly};
use clrdeploy::resolution::ResolvedToolchain;

macro_rules! field {
    ($label:expr, $value:expr) => {
        println!("{:<20} {}", Style::new().bold().apply_to($label), $value)
    };
}

pub fn print_toolchain(toolchain: &ResolvedToolchain) {
    field!("Vendor:", toolchain.vendor);
    field!("Vendor version:", toolchain.vendor_version);
    field!("Framework version:", toolchain.framework_version);
    field!("Install root:", toolchain.install_root.display());
    if let Some(sdk_root) = &toolchain.sdk_root {
        field!("SDK root:", sdk_root.display());
    }
    field!("Query state:", Style::new().dim().apply_to(toolchain.state));
}

fn outcome_label(assembly: &DeployedAssembly) -> String {
    let label = match assembly.outcome {
        InstallOutcome::Installed if assembly.changed => Style::new().green().apply_to("installed"),
        InstallOutcome::Installed => Style::new().dim().apply_to("unchanged"),
        InstallOutcome::SkippedGlobal => Style::new().cyan().apply_to("global"),
        InstallOutcome::SkippedMissing => Style::new().yellow().apply_to("skipped"),
    };
    label.to_string()
}

pub fn print_install_report(report: &InstallReport, verbose: bool) {
    if verbose {
        for assembly in &report.assemblies {
            println!("  {:<10} {}", outcome_label(assembly), assembly.coordinates);
        }
    }

    let installed = report.installed().count();
    let skipped = report.skipped().count();
    match &report.install_directory {
        Some(dir) => println!(
            "Installed {installed} assemblies into {} ({skipped} skipped)",
            Style::new().bold().apply_to(dir.display())
        ),
        None => println!("Installed {installed} assemblies ({skipped} skipped)"),
    }
}

pub fn print_gac_plan(plan: &[GacInstallCommand]) {
    if plan.is_empty() {
        println!("{}", Style::new().dim().apply_to("No assemblies flagged for the global cache"));
        return;
    }
    for command in plan {
        println!("{command}");
    }
}

pub fn print_installed(assemblies: &[InstalledAssembly], verbose: bool) {
    if assemblies.is_empty() {
        println!("{}", Style::new().dim().apply_to("No assemblies installed"));
        return;
    }

    println!("{}", Style::new().bold().apply_to("Installed assemblies:"));
    for assembly in assemblies {
        println!(
            "  {} {} {}",
            Style::new().bold().yellow().apply_to(&assembly.artifact_id),
            assembly.version,
            Style::new().dim().apply_to(&assembly.group_id)
        );
        if verbose {
            println!("    {}", assembly.file.display());
        }
    }
}
