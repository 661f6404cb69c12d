//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::output::OutputWriter;
use clap::CommandFactory;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs, output: &mut OutputWriter) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut script = Vec::new();
    clap_complete::generate(args.shell.to_clap_shell(), &mut cmd, name, &mut script);

    output.write(&String::from_utf8_lossy(&script))
}
