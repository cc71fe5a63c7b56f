//! `pl completions` — shell completion script generation.

use clap::Args;
use clap_complete::Shell;
use std::io;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate a completion script for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to stdout.
pub fn run_completions(args: &CompletionsArgs, command: &mut clap::Command) {
    clap_complete::generate(args.shell, command, "pl", &mut io::stdout());
}
