//! URL rewriting
//!
//! This module matches URLs in file content, lowercases them and
//! writes the result back to disk.

pub mod file;
pub mod matcher;
pub mod normalizer;

// Re-export commonly used items
pub use file::lowercase_links_in_file;
pub use matcher::UrlMatcher;
pub use normalizer::LinkNormalizer;
