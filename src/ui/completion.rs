//! Shell completion generation for linkcase

use clap::{Command, CommandFactory};
use clap_complete::{Generator, generate};
use std::io::Write;

use crate::ui::cli::Cli;

/// Write completions for the given shell to `out`
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

/// Print completions for the given shell to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Completion script for the linkcase command line as a string
pub fn generate_completion_script(shell: clap_complete::Shell) -> Result<String, String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::<u8>::new();
    write_completions(shell, &mut cmd, &mut buf);

    String::from_utf8(buf).map_err(|e| format!("Failed to generate completion script: {e}"))
}
