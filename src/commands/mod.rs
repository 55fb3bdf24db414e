//! Command implementations for the clrdeploy CLI

pub mod completions;
pub mod gac_plan;
pub mod helpers;
pub mod install;
pub mod install_profile;
pub mod list;
pub mod paths;
pub mod resolve;
pub mod version;
pub mod which;

pub use helpers::Globals;
