/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Defaults for file selection and traversal
pub mod defaults {
    /// Root directory processed when none is given
    pub const ROOT: &str = ".";
    /// Filename suffix of eligible files
    pub const EXTENSION: &str = ".md";
    /// Rewrite files through a temporary file unless configured otherwise
    pub const ATOMIC: bool = false;
}

/// Configuration file lookup
pub mod config_files {
    /// Name of the configuration file searched for
    pub const FILE_NAME: &str = ".linkcase.toml";
    /// How many parent directories are searched after the current one
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// URL pattern building blocks
pub mod patterns {
    /// Scheme prefix, matched case-insensitively
    pub const SCHEME: &str = r"(?i:https?)://";
    /// Characters allowed after the scheme: anything but whitespace or `)`
    pub const URL_CHAR: &str = r"[^\s)]";
    /// Optional `www.` before a restricted host
    pub const WWW_PREFIX: &str = r"(?:www\.)?";
    /// Characters rejected in a configured hostname
    pub const FORBIDDEN_HOST_CHARS: [char; 2] = ['/', ')'];
}

/// Progress output
pub mod display {
    /// Prefix of the notice printed before each file is processed
    pub const PROCESSING_PREFIX: &str = "Processing file: ";
}
