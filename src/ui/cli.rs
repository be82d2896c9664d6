// Command-line interface definitions and parsing for linkcase

use crate::config::CliConfig;
use crate::core::constants::defaults;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to process recursively (default: current directory)
    #[arg(value_parser = existing_directory)]
    pub root: Option<PathBuf>,

    // Matching
    /// Only lowercase URLs on this host, with or without "www."
    #[arg(long, value_name = "DOMAIN", help_heading = "Matching")]
    pub host: Option<String>,

    /// Filename suffix of files to process (default: .md)
    #[arg(long = "ext", value_name = "SUFFIX", help_heading = "Matching")]
    pub extension: Option<String>,

    // Writing
    /// Write through a temporary file and rename it into place
    #[arg(long, help_heading = "Writing")]
    pub atomic: bool,

    /// Report files without writing them
    #[arg(long, help_heading = "Writing")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Suppress per-file output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Root directory, defaulting to the current directory
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::ROOT))
    }
}

fn existing_directory(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Directory not found [{value:?}]"));
    }
    if !path.is_dir() {
        return Err(format!("Not a directory [{value:?}]"));
    }
    Ok(path)
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        host: cli.host.as_ref().map(|h| h.trim().to_string()),
        extension: cli.extension.clone(),
        atomic: cli.atomic,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
