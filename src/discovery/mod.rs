//! File discovery
//!
//! This module handles directory traversal and selection of the
//! files whose URLs get rewritten.

pub mod walker;

// Re-export commonly used items
pub use walker::{EligibleFiles, find_eligible_files};
