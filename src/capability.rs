//! Toolchain capabilities
//!
//! A closed table from (vendor, command) to the executable implementing the
//! command for that vendor. Locating a capability searches the executable
//! paths of a resolved toolchain.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{self, ClrError, Result};
use crate::resolution::ResolvedToolchain;
use crate::vendor::VendorName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// C# compiler
    Csc,
    Gacutil,
    Resgen,
    /// Assembly linker
    Al,
    Ilasm,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Csc,
        Command::Gacutil,
        Command::Resgen,
        Command::Al,
        Command::Ilasm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Command::Csc => "CSC",
            Command::Gacutil => "GACUTIL",
            Command::Resgen => "RESGEN",
            Command::Al => "AL",
            Command::Ilasm => "ILASM",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ClrError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| error::capability_not_found("any", name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub vendor: VendorName,
    pub command: Command,
    pub executable: &'static str,
}

const BUILTIN: &[(VendorName, Command, &str)] = &[
    (VendorName::Microsoft, Command::Csc, "csc"),
    (VendorName::Microsoft, Command::Gacutil, "gacutil"),
    (VendorName::Microsoft, Command::Resgen, "resgen"),
    (VendorName::Microsoft, Command::Al, "al"),
    (VendorName::Microsoft, Command::Ilasm, "ilasm"),
    (VendorName::Mono, Command::Csc, "mcs"),
    (VendorName::Mono, Command::Gacutil, "gacutil"),
    (VendorName::Mono, Command::Resgen, "resgen"),
    (VendorName::Mono, Command::Al, "al"),
    (VendorName::Mono, Command::Ilasm, "ilasm"),
    (VendorName::DotGnu, Command::Csc, "cscc"),
    (VendorName::DotGnu, Command::Gacutil, "ilgac"),
    (VendorName::DotGnu, Command::Resgen, "resgen"),
    (VendorName::DotGnu, Command::Al, "ilalink"),
    (VendorName::DotGnu, Command::Ilasm, "ilasm"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRegistry {
    capabilities: Vec<Capability>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CapabilityRegistry {
    pub fn builtin() -> Self {
        Self {
            capabilities: BUILTIN
                .iter()
                .map(|&(vendor, command, executable)| Capability {
                    vendor,
                    command,
                    executable,
                })
                .collect(),
        }
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn executable_for(&self, vendor: VendorName, command: Command) -> Result<&'static str> {
        self.capabilities
            .iter()
            .find(|c| c.vendor == vendor && c.command == command)
            .map(|c| c.executable)
            .ok_or_else(|| error::capability_not_found(vendor.as_str(), command.as_str()))
    }

    /// First existing executable for `command` in the toolchain's executable paths
    pub fn locate(&self, toolchain: &ResolvedToolchain, command: Command) -> Result<PathBuf> {
        let executable = self.executable_for(toolchain.vendor, command)?;

        toolchain
            .executable_paths()
            .into_iter()
            .flat_map(|dir| candidates(executable).map(move |name| dir.join(name)))
            .find(|path| path.is_file())
            .ok_or_else(|| error::capability_not_found(toolchain.vendor.as_str(), command.as_str()))
    }
}

/// File names tried for an executable on this platform
fn candidates(executable: &'static str) -> impl Iterator<Item = String> {
    let suffixes: &[&str] = if cfg!(windows) {
        &[".exe", ".bat", ""]
    } else {
        &["", ".exe"]
    };
    suffixes.iter().map(move |suffix| format!("{executable}{suffix}"))
}
