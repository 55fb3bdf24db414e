use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed assemblies:\n    clrdeploy list\n\n\
                  Show file locations:\n    clrdeploy list -v")]
pub struct ListArgs {
    /// Only assemblies whose artifact id contains this text
    #[arg(long)]
    pub filter: Option<String>,
}
