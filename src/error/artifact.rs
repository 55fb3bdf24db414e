//! Artifact errors

use super::ClrError;

/// Creates an invalid coordinates error
pub fn invalid_coordinates(input: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::InvalidCoordinates {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown artifact type error
pub fn unknown_type(artifact_type: impl Into<String>) -> ClrError {
    ClrError::UnknownArtifactType {
        artifact_type: artifact_type.into(),
    }
}

/// Creates an error for a fetch that failed for reasons other than absence
pub fn resolution_failed(id: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::ArtifactResolutionFailed {
        id: id.into(),
        reason: reason.into(),
    }
}

/// Creates a missing private dependency error
pub fn missing_artifact(id: impl Into<String>, path: Option<String>) -> ClrError {
    ClrError::MissingArtifact {
        id: id.into(),
        path,
    }
}

/// Creates a missing primary artifact error
pub fn primary_artifact_missing(id: impl Into<String>, path: Option<String>) -> ClrError {
    ClrError::PrimaryArtifactMissing {
        id: id.into(),
        path,
    }
}

pub fn project_not_found(id: impl Into<String>) -> ClrError {
    ClrError::ProjectNotFound { id: id.into() }
}
