//! linkcase - lowercase the URLs inside Markdown files
//!
//! This library walks a directory tree, picks the files ending in a
//! configured suffix and rewrites every URL they contain to lowercase,
//! optionally limited to a single host.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod rewrite;
pub mod ui;

// Re-export main types for convenience
pub use config::{CliConfig, Config};
pub use crate::core::{FileOutcome, LinkCaseError, MatchScope, Result, RunSummary, WriteMode};
pub use discovery::{EligibleFiles, find_eligible_files};
pub use rewrite::{LinkNormalizer, UrlMatcher, lowercase_links_in_file};
