//! Error types and handling for clrdeploy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Settings and catalog errors
//! - [`platform`]: Toolchain resolution errors
//! - [`artifact`]: Artifact coordinates, lookup and install errors
//! - [`fs`]: File system errors

pub mod artifact;
pub mod config;
pub mod fs;
pub mod platform;

pub use artifact::{
    invalid_coordinates, missing_artifact, primary_artifact_missing, project_not_found,
    resolution_failed as artifact_resolution_failed, unknown_type as unknown_artifact_type,
};
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};
pub use platform::{capability_not_found, platform_unsupported};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for clrdeploy operations
#[derive(Error, Diagnostic, Debug)]
pub enum ClrError {
    // Configuration errors
    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(clrdeploy::config::not_found),
        help("Pass --settings <FILE> or set CLRDEPLOY_SETTINGS")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read settings file: {path}")]
    #[diagnostic(code(clrdeploy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse settings: {path}: {reason}")]
    #[diagnostic(code(clrdeploy::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(code(clrdeploy::config::invalid))]
    ConfigInvalid { message: String },

    // Resolution errors
    #[error(
        "Platform unsupported: vendor = {vendor}, vendor version = {vendor_version}, framework version = {framework_version}"
    )]
    #[diagnostic(
        code(clrdeploy::platform::unsupported),
        help("Check the vendors configured in the settings file")
    )]
    PlatformUnsupported {
        vendor: String,
        vendor_version: String,
        framework_version: String,
    },

    #[error("No vendor given and no default vendor configured")]
    #[diagnostic(
        code(clrdeploy::platform::no_default),
        help("Add a default_setup.vendor entry to the settings file or pass --vendor")
    )]
    NoDefaultConfigured,

    #[error("Executable for {command} not found for vendor {vendor}")]
    #[diagnostic(code(clrdeploy::platform::capability_not_found))]
    CapabilityNotFound { vendor: String, command: String },

    // Artifact errors
    #[error("Invalid artifact coordinates: {input}")]
    #[diagnostic(
        code(clrdeploy::artifact::invalid_coordinates),
        help("Coordinates are written group:artifact:version:type[:publicKeyToken]")
    )]
    InvalidCoordinates { input: String, reason: String },

    #[error("Unknown artifact type: {artifact_type}")]
    #[diagnostic(
        code(clrdeploy::artifact::unknown_type),
        help(
            "Known types: library, exe, winexe, module, netplugin, visual-studio-addin, sharp-develop-addin, nar, exe.config, jar, gac, gac_msil, gac_32, gac_generic"
        )
    )]
    UnknownArtifactType { artifact_type: String },

    #[error("Could not resolve artifact {id}: {reason}")]
    #[diagnostic(code(clrdeploy::artifact::resolution_failed))]
    ArtifactResolutionFailed { id: String, reason: String },

    #[error("Could not find artifact dependency {id}")]
    #[diagnostic(
        code(clrdeploy::artifact::missing),
        help("Private dependencies must exist in the local repository before installing")
    )]
    MissingArtifact { id: String, path: Option<String> },

    #[error("Could not find primary artifact {id}")]
    #[diagnostic(
        code(clrdeploy::artifact::primary_missing),
        help("Build the artifact first or pass its file with --file")
    )]
    PrimaryArtifactMissing { id: String, path: Option<String> },

    #[error("No project record for {id}")]
    #[diagnostic(code(clrdeploy::artifact::project_not_found))]
    ProjectNotFound { id: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(clrdeploy::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(clrdeploy::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(clrdeploy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ClrError {
    fn from(err: std::io::Error) -> Self {
        ClrError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ClrError {
    fn from(err: serde_yaml::Error) -> Self {
        ClrError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClrError {
    fn from(err: serde_json::Error) -> Self {
        ClrError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ClrError>;
