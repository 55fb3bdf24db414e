//! Artifact model
//!
//! This module handles:
//! - Artifact coordinates and packaging types (ArtifactCoordinates, ArtifactType)
//! - Declared dependencies (DependencyDescriptor) and their match policies
//! - Cache layout mapping (via paths module)
//! - Collaborators for fetching files and project records (resolver, store)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{self, ClrError, Result};

pub mod paths;
pub mod policy;
pub mod resolver;
pub mod store;

pub use paths::AssemblyPathMapper;
pub use policy::{GacFlagMatch, KindMatch, MatchPolicy, ProfileMatch};
pub use resolver::{ArtifactResolver, FetchError, LocalRepositoryResolver};
pub use store::{MemoryProjectStore, NetDependencies, Project, ProjectStore};

/// Scope used when a dependency does not declare one
pub const DEFAULT_SCOPE: &str = "compile";

/// Packaging types known to the deployment layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    Library,
    Exe,
    WinExe,
    Module,
    NetPlugin,
    VisualStudioAddin,
    SharpDevelopAddin,
    Nar,
    ExeConfig,
    Jar,
    Gac,
    GacMsil,
    Gac32,
    GacGeneric,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 14] = [
        ArtifactType::Library,
        ArtifactType::Exe,
        ArtifactType::WinExe,
        ArtifactType::Module,
        ArtifactType::NetPlugin,
        ArtifactType::VisualStudioAddin,
        ArtifactType::SharpDevelopAddin,
        ArtifactType::Nar,
        ArtifactType::ExeConfig,
        ArtifactType::Jar,
        ArtifactType::Gac,
        ArtifactType::GacMsil,
        ArtifactType::Gac32,
        ArtifactType::GacGeneric,
    ];

    /// Packaging name as written in project files
    pub fn packaging(self) -> &'static str {
        match self {
            ArtifactType::Library => "library",
            ArtifactType::Exe => "exe",
            ArtifactType::WinExe => "winexe",
            ArtifactType::Module => "module",
            ArtifactType::NetPlugin => "netplugin",
            ArtifactType::VisualStudioAddin => "visual-studio-addin",
            ArtifactType::SharpDevelopAddin => "sharp-develop-addin",
            ArtifactType::Nar => "nar",
            ArtifactType::ExeConfig => "exe.config",
            ArtifactType::Jar => "jar",
            ArtifactType::Gac => "gac",
            ArtifactType::GacMsil => "gac_msil",
            ArtifactType::Gac32 => "gac_32",
            ArtifactType::GacGeneric => "gac_generic",
        }
    }

    /// File extension of the built file
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactType::Exe | ArtifactType::WinExe => "exe",
            ArtifactType::Module => "netmodule",
            ArtifactType::Nar => "nar",
            ArtifactType::ExeConfig => "exe.config",
            ArtifactType::Jar => "jar",
            ArtifactType::Library
            | ArtifactType::NetPlugin
            | ArtifactType::VisualStudioAddin
            | ArtifactType::SharpDevelopAddin
            | ArtifactType::Gac
            | ArtifactType::GacMsil
            | ArtifactType::Gac32
            | ArtifactType::GacGeneric => "dll",
        }
    }

    pub fn from_packaging(packaging: &str) -> Result<Self> {
        let packaging = packaging.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.packaging() == packaging)
            .ok_or_else(|| error::unknown_artifact_type(packaging))
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.packaging())
    }
}

/// Whether a packaging type names an assembly living in the global cache.
/// Works on raw strings so unknown `gac*` variants are still treated as global.
pub fn is_gac_resident(packaging: &str) -> bool {
    packaging.trim().starts_with("gac")
}

fn unsafe_segment(value: &str) -> Option<&'static str> {
    if value == "." || value == ".." {
        Some("is a relative path segment")
    } else if value.contains(['/', '\\', ':', '\0']) {
        Some("contains a path separator")
    } else {
        None
    }
}

/// Coordinates identifying one artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    #[serde(rename = "type")]
    pub artifact_type: String,

    /// Public key token of a signed assembly (the classifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_token: Option<String>,
}

impl ArtifactCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: artifact_type.into(),
            public_key_token: None,
        }
    }

    pub fn with_public_key_token(mut self, token: impl Into<String>) -> Self {
        self.public_key_token = Some(token.into());
        self
    }

    pub fn is_gac_resident(&self) -> bool {
        is_gac_resident(&self.artifact_type)
    }

    pub fn kind(&self) -> Result<ArtifactType> {
        ArtifactType::from_packaging(&self.artifact_type)
    }

    /// Every field lands in a file system path, so none may be a relative
    /// segment (`.`, `..`) or contain a separator, a drive colon or NUL.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("group", Some(self.group_id.as_str())),
            ("artifact", Some(self.artifact_id.as_str())),
            ("version", Some(self.version.as_str())),
            ("type", Some(self.artifact_type.as_str())),
            ("public key token", self.public_key_token.as_deref()),
        ];
        for (field, value) in fields {
            let Some(value) = value else { continue };
            if let Some(reason) = unsafe_segment(value.trim()) {
                return Err(error::invalid_coordinates(
                    self.to_string(),
                    format!("{field} {reason}"),
                ));
            }
        }
        Ok(())
    }

    /// `group:artifact:version:type`
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.artifact_type
        )
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())?;
        if let Some(token) = &self.public_key_token {
            write!(f, ":{token}")?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactCoordinates {
    type Err = ClrError;

    /// Parse `group:artifact:version:type[:publicKeyToken]`
    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().split(':').map(str::trim).collect();
        if !(4..=5).contains(&parts.len()) {
            return Err(error::invalid_coordinates(
                input,
                format!("expected 4 or 5 ':'-separated fields, found {}", parts.len()),
            ));
        }
        if let Some(pos) = parts.iter().take(4).position(|p| p.is_empty()) {
            let field = ["group", "artifact", "version", "type"][pos];
            return Err(error::invalid_coordinates(input, format!("empty {field}")));
        }

        let mut coordinates = Self::new(parts[0], parts[1], parts[2], parts[3]);
        if let Some(token) = parts.get(4).filter(|t| !t.is_empty()) {
            coordinates.public_key_token = Some((*token).to_string());
        }
        coordinates.validate()?;
        Ok(coordinates)
    }
}

/// A dependency as declared by a project or a net-dependencies document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDescriptor {
    #[serde(flatten)]
    pub coordinates: ArtifactCoordinates,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Profile the dependency is restricted to; blank means every profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Register the assembly in the global cache
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gac_install: bool,
}

impl DependencyDescriptor {
    pub fn new(coordinates: ArtifactCoordinates) -> Self {
        Self {
            coordinates,
            scope: None,
            profile: None,
            gac_install: false,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_gac_install(mut self, gac_install: bool) -> Self {
        self.gac_install = gac_install;
        self
    }

    /// Declared scope, or `compile`
    pub fn scope(&self) -> &str {
        crate::vendor::non_blank(self.scope.as_deref()).unwrap_or(DEFAULT_SCOPE)
    }
}

/// Coordinates plus the file they were resolved to, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub coordinates: ArtifactCoordinates,
    pub file: Option<PathBuf>,
}

impl ResolvedArtifact {
    pub fn new(coordinates: ArtifactCoordinates, file: Option<PathBuf>) -> Self {
        Self { coordinates, file }
    }

    /// The resolved file, only if it exists on disk
    pub fn existing_file(&self) -> Option<&std::path::Path> {
        self.file.as_deref().filter(|f| f.is_file())
    }
}
