use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    clrdeploy completions bash > ~/.bash_completion.d/clrdeploy\n\n\
                  Generate zsh completions:\n    clrdeploy completions zsh > ~/.zfunc/_clrdeploy\n\n\
                  Generate fish completions:\n    clrdeploy completions fish > ~/.config/fish/completions/clrdeploy.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
