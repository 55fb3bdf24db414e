//! clrdeploy - toolchain resolution and private assembly deployment
//!
//! Two engines share this crate:
//! - [`resolution`] picks a concrete toolchain from a partial
//!   (vendor, vendor version, framework version) description using the
//!   [`vendor`] catalog.
//! - [`deploy`] installs artifact closures into an application-private cache
//!   laid out like the global assembly cache ([`artifact::AssemblyPathMapper`]).
//!
//! Nothing in the library prints. Warnings (for example vendors dropped at
//! load time) are returned as data for the caller to report.

pub mod artifact;
pub mod capability;
pub mod config;
pub mod context;
pub mod deploy;
pub mod error;
pub mod resolution;
pub mod vendor;

pub use context::ToolchainContext;
pub use error::{ClrError, Result};
