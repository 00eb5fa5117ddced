use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    firmkeep completions bash > ~/.bash_completion.d/firmkeep\n\n\
                  Generate zsh completions:\n    firmkeep completions zsh > ~/.zfunc/_firmkeep\n\n\
                  Generate fish completions:\n    firmkeep completions fish > ~/.config/fish/completions/firmkeep.fish\n\n\
                  Generate PowerShell completions:\n    firmkeep completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
