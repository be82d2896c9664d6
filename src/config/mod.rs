//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, defaults};
use crate::core::error::{LinkCaseError, Result};
use crate::core::types::MatchScope;
use crate::rewrite::matcher::validate_host;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Only lowercase URLs on this host (with or without `www.`)
    pub host: Option<String>,

    /// Filename suffix of files to process
    pub extension: Option<String>,

    /// Write through a temporary file and rename it into place
    pub atomic: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None, // Unrestricted matching
            extension: Some(defaults::EXTENSION.to_string()),
            atomic: Some(defaults::ATOMIC),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkCaseError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkCaseError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in the current directory or its parents
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for a config file in `dir`, then up to three parent directories.
    ///
    /// Only a missing file moves the search on; the first config file found
    /// must read, parse and validate. Defaults apply when none exists.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        for candidate in Self::candidate_paths(dir) {
            let exists = candidate.try_exists().map_err(|e| {
                LinkCaseError::Config(format!(
                    "Could not access config file '{}': {}",
                    candidate.display(),
                    e
                ))
            })?;
            if exists {
                return Self::load_from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
        (0..=config_files::MAX_PARENT_LEVELS)
            .map(|level| {
                let mut path = dir.to_path_buf();
                for _ in 0..level {
                    path.push("..");
                }
                path.join(config_files::FILE_NAME)
            })
            .collect()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref host) = cli_config.host {
            self.host = Some(host.clone());
        }
        if let Some(ref extension) = cli_config.extension {
            self.extension = Some(extension.clone());
        }
        if cli_config.atomic {
            self.atomic = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Matching scope for the configured host
    pub fn match_scope(&self) -> MatchScope {
        MatchScope::from_host(self.host.as_deref())
    }

    /// Filename suffix, falling back to `.md`
    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(defaults::EXTENSION)
    }

    pub fn atomic(&self) -> bool {
        self.atomic.unwrap_or(defaults::ATOMIC)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref extension) = self.extension
            && extension.trim().is_empty()
        {
            return Err(LinkCaseError::Config(
                "Extension cannot be empty. Expected a filename suffix such as '.md'.".to_string(),
            ));
        }

        if let MatchScope::Host(host) = self.match_scope() {
            validate_host(&host).map_err(|e| LinkCaseError::Config(e.to_string()))?;
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Matching
    pub host: Option<String>,      // --host
    pub extension: Option<String>, // --ext

    // Writing
    pub atomic: bool,  // --atomic
    pub dry_run: bool, // --dry-run

    // Output
    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
