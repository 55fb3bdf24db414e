use clap::{Args, Parser};

use clrdeploy::capability::Command as ToolCommand;
use clrdeploy::resolution::ResolutionQuery;
use clrdeploy::vendor::VendorName;

/// Partial toolchain description; anything left out is defaulted
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Vendor (MICROSOFT, MONO, DotGNU; any case)
    #[arg(long)]
    pub vendor: Option<VendorName>,

    /// Vendor version, e.g. 1.1.18
    #[arg(long)]
    pub vendor_version: Option<String>,

    /// Framework version, e.g. 2.0.50727
    #[arg(long)]
    pub framework_version: Option<String>,
}

impl QueryArgs {
    pub fn to_query(&self) -> ResolutionQuery {
        ResolutionQuery {
            vendor: self.vendor,
            vendor_version: self.vendor_version.clone(),
            framework_version: self.framework_version.clone(),
        }
    }
}

/// Arguments for the which command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Locate the C# compiler of the default toolchain:\n    clrdeploy which csc\n\n\
                  Locate gacutil for a specific Mono release:\n    clrdeploy which gacutil --vendor mono --vendor-version 1.1.18")]
pub struct WhichArgs {
    /// Command to locate (CSC, GACUTIL, RESGEN, AL, ILASM)
    pub command: ToolCommand,

    #[command(flatten)]
    pub query: QueryArgs,
}
