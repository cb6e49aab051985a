//! clientctl - command-line client installer
//!
//! Reads a previously-downloaded install profile and performs a client
//! installation into a target directory, reporting success or failure
//! through the process exit code (0 success, 1 any failure).

use clap::Parser;

mod actions;
mod cli;
mod commands;
mod error;
mod manifest;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Bare invocation performs a client install with defaults
    let result = match cli.command {
        Some(Commands::Install(args)) => commands::install::run(args),
        None => commands::install::run(cli::InstallArgs::default()),
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(args).map(|()| 0),
    };

    // Exit explicitly on every path, success included, so any background
    // work an action left behind cannot keep the process alive
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            println!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
