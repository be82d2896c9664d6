use std::fmt;
use std::path::PathBuf;

/// Which URLs the matcher considers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MatchScope {
    /// Every `http://` or `https://` URL
    #[default]
    Any,
    /// Only URLs whose host is the given domain, with or without `www.`
    Host(String),
}

impl MatchScope {
    /// Build a scope from an optional host, `None` meaning unrestricted
    pub fn from_host(host: Option<&str>) -> Self {
        match host.map(str::trim) {
            Some(host) if !host.is_empty() => MatchScope::Host(host.to_string()),
            _ => MatchScope::Any,
        }
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            MatchScope::Any => None,
            MatchScope::Host(host) => Some(host),
        }
    }
}

impl fmt::Display for MatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchScope::Any => write!(f, "any host"),
            MatchScope::Host(host) => write!(f, "host {host}"),
        }
    }
}

/// How rewritten content reaches the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate the file and write the new content
    #[default]
    InPlace,
    /// Write a sibling temporary file, then rename it over the original
    Atomic,
    /// Never write, only report
    DryRun,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteMode::InPlace => "in-place",
            WriteMode::Atomic => "atomic",
            WriteMode::DryRun => "dry-run",
        };
        write!(f, "{name}")
    }
}

/// Result of processing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Number of URL matches found in the file
    pub urls_matched: usize,
    /// Whether lowercasing changed the content
    pub changed: bool,
}

/// Totals for one run over a directory tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_changed: usize,
    pub urls_matched: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_processed += 1;
        self.urls_matched += outcome.urls_matched;
        if outcome.changed {
            self.files_changed += 1;
        }
    }
}
