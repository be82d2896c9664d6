use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::core::constants::display;
use crate::core::error::Result;
use crate::core::types::{FileOutcome, MatchScope, RunSummary, WriteMode};
use crate::discovery::EligibleFiles;
use crate::reporting::logging;
use crate::rewrite::file::lowercase_links_in_file;
use crate::rewrite::matcher::UrlMatcher;

/// Walks a directory tree and lowercases the URLs in every eligible file.
///
/// Files are handled one at a time as the walk yields them. The first
/// traversal, read or write error ends the run: files already rewritten stay
/// rewritten and later files are never opened.
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    matcher: UrlMatcher,
    suffix: String,
    mode: WriteMode,
}

impl LinkNormalizer {
    pub fn new(scope: MatchScope, suffix: impl Into<String>, mode: WriteMode) -> Result<Self> {
        Ok(Self {
            matcher: UrlMatcher::new(scope)?,
            suffix: suffix.into(),
            mode,
        })
    }

    /// Build a normalizer from merged configuration
    pub fn from_config(config: &Config, dry_run: bool) -> Result<Self> {
        let mode = if dry_run {
            WriteMode::DryRun
        } else if config.atomic() {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };
        Self::new(config.match_scope(), config.extension(), mode)
    }

    pub fn matcher(&self) -> &UrlMatcher {
        &self.matcher
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Process `root`, printing a notice to stdout before each file
    pub fn process_directory<P: AsRef<Path>>(&self, root: P) -> Result<RunSummary> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.process_directory_with(root, &mut handle)
    }

    /// Process `root`, writing the per-file notices to `progress`
    pub fn process_directory_with<P, W>(&self, root: P, progress: &mut W) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        W: Write + ?Sized,
    {
        let mut summary = RunSummary::default();

        for path in EligibleFiles::new(root, &self.suffix) {
            let path = path?;
            writeln!(progress, "{}{}", display::PROCESSING_PREFIX, path.display())?;
            progress.flush()?;

            let outcome = self.lowercase_links_in_file(&path)?;
            logging::log_file_outcome(&outcome);
            summary.record(&outcome);
        }

        logging::log_run_summary(&summary, self.mode);
        Ok(summary)
    }

    /// Rewrite a single file with this normalizer's matcher and write mode
    pub fn lowercase_links_in_file(&self, path: &Path) -> Result<FileOutcome> {
        lowercase_links_in_file(path, &self.matcher, self.mode)
    }
}
