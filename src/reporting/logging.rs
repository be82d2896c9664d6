use crate::config::Config;
use crate::core::types::{FileOutcome, RunSummary, WriteMode};
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
///
/// `-q` and `-v` pick the level outright. Without either flag `RUST_LOG`
/// decides, and logging stays off when it is unset so stdout only carries
/// the per-file notices.
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));

    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    // A logger is installed once per process, so a second call leaves the first in place
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized (verbose: {verbose}, quiet: {quiet})");
}

/// Log configuration information
pub fn log_config_info(config: &Config, root: &Path, mode: WriteMode) {
    info!("Root directory: {}", root.display());
    info!(
        "Matching: scope={}, extension={}",
        config.match_scope(),
        config.extension()
    );
    info!("Writing: mode={mode}");
}

/// Log the outcome of a single file
pub fn log_file_outcome(outcome: &FileOutcome) {
    if outcome.changed {
        debug!(
            "✓ {} -> {} URL(s), lowercased",
            outcome.path.display(),
            outcome.urls_matched
        );
    } else {
        debug!(
            "= {} -> {} URL(s), unchanged",
            outcome.path.display(),
            outcome.urls_matched
        );
    }
}

/// Log the totals of a run
pub fn log_run_summary(summary: &RunSummary, mode: WriteMode) {
    let verb = if mode == WriteMode::DryRun {
        "would change"
    } else {
        "changed"
    };
    info!(
        "Processed {} file(s): {} URL(s) found, {} file(s) {verb}",
        summary.files_processed, summary.urls_matched, summary.files_changed
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
