//! Toolchain resolution errors

use super::ClrError;

pub fn platform_unsupported(
    vendor: impl Into<String>,
    vendor_version: impl Into<String>,
    framework_version: impl Into<String>,
) -> ClrError {
    ClrError::PlatformUnsupported {
        vendor: vendor.into(),
        vendor_version: vendor_version.into(),
        framework_version: framework_version.into(),
    }
}

pub fn capability_not_found(vendor: impl Into<String>, command: impl Into<String>) -> ClrError {
    ClrError::CapabilityNotFound {
        vendor: vendor.into(),
        command: command.into(),
    }
}
