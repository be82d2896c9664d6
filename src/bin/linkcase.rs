use clap::{CommandFactory, Parser};
use linkcase::config::{CliConfig, Config};
use linkcase::reporting::logging;
use linkcase::rewrite::LinkNormalizer;
use linkcase::ui::{Cli, Commands, cli_to_config, print_completions};

use std::io;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_linkcase_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            logging::log_error("Run aborted", Some(e.as_ref()));
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main rewrite logic extracted from main() for testing
pub fn run_linkcase_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let root = cli.root();
    let normalizer = LinkNormalizer::from_config(&config, cli_config.dry_run)?;
    logging::log_config_info(&config, &root, normalizer.mode());

    if cli_config.quiet {
        normalizer.process_directory_with(&root, &mut io::sink())?;
    } else {
        normalizer.process_directory(&root)?;
    }

    Ok(0)
}

/// Load configuration and merge with CLI arguments
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_path) = cli_config.config_file {
        Config::load_from_file(config_path)?
    } else {
        Config::load_from_standard_locations()?
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
