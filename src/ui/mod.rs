//! User interface
//!
//! This module contains command line parsing and shell completion
//! generation.

pub mod cli;
pub mod completion;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::{generate_completion_script, print_completions};
