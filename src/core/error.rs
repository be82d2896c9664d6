use std::fmt;
use std::path::PathBuf;

/// Error types for linkcase operations
#[derive(Debug)]
pub enum LinkCaseError {
    /// Directory could not be listed while walking the tree
    Traversal(ignore::Error),

    /// File could not be opened or decoded as UTF-8
    Read { path: PathBuf, source: std::io::Error },

    /// Rewritten content could not be written back
    Write { path: PathBuf, source: std::io::Error },

    /// Other IO error (progress output, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for LinkCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkCaseError::Traversal(err) => write!(f, "Directory traversal error: {err}"),
            LinkCaseError::Read { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            LinkCaseError::Write { path, source } => {
                write!(f, "Could not write '{}': {source}", path.display())
            }
            LinkCaseError::Io(err) => write!(f, "IO error: {err}"),
            LinkCaseError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkCaseError::Regex(err) => write!(f, "Regex error: {err}"),
            LinkCaseError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinkCaseError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for LinkCaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkCaseError::Traversal(err) => Some(err),
            LinkCaseError::Read { source, .. } => Some(source),
            LinkCaseError::Write { source, .. } => Some(source),
            LinkCaseError::Io(err) => Some(err),
            LinkCaseError::Regex(err) => Some(err),
            LinkCaseError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl LinkCaseError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LinkCaseError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LinkCaseError::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for LinkCaseError {
    fn from(err: std::io::Error) -> Self {
        LinkCaseError::Io(err)
    }
}

impl From<ignore::Error> for LinkCaseError {
    fn from(err: ignore::Error) -> Self {
        LinkCaseError::Traversal(err)
    }
}

impl From<regex::Error> for LinkCaseError {
    fn from(err: regex::Error) -> Self {
        LinkCaseError::Regex(err)
    }
}

impl From<toml::de::Error> for LinkCaseError {
    fn from(err: toml::de::Error) -> Self {
        LinkCaseError::TomlParsing(err)
    }
}

/// Type alias for Results using LinkCaseError
pub type Result<T> = std::result::Result<T, LinkCaseError>;
