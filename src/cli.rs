//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clientctl - command-line client installer
///
/// Performs a client installation from a previously-downloaded install
/// profile into a target directory.
#[derive(Parser, Debug)]
#[command(
    name = "clientctl",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Command-line client installer driven by local install profiles",
    long_about = "clientctl reads an install profile (install_profile.json) and performs \
                  a client installation into a target directory, reporting success or \
                  failure through the process exit code.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  clientctl\n    \
                  clientctl install\n    \
                  clientctl install --dir ~/launcher\n    \
                  clientctl install --manifest ./install_profile.json\n\n\
                  \x1b[1m\x1b[32mExit codes:\x1b[0m\n    \
                  0 on success, 1 on any failure"
)]
pub struct Cli {
    /// Running without a subcommand performs an install with defaults
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform a client install from the install profile
    Install(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Install into the current directory:\n    clientctl install\n\n\
                  Install into a launcher directory:\n    clientctl install --dir ~/launcher\n\n\
                  Use a profile from elsewhere:\n    clientctl install --manifest /tmp/install_profile.json")]
pub struct InstallArgs {
    /// Target directory to install into (defaults to current directory)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Install profile location (defaults to install_profile.json in the current directory)
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Installer binary location recorded by v1 installs (defaults to this executable)
    #[arg(long)]
    pub installer: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    clientctl completions --shell bash > ~/.bash_completion.d/clientctl\n\n\
                  Generate zsh completions:\n    clientctl completions --shell zsh > ~/.zfunc/_clientctl")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
