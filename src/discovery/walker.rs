use ignore::{Walk, WalkBuilder};

use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Depth-first walk yielding every file under a root whose name ends with
/// a suffix.
///
/// Hidden files and files excluded by `.gitignore` are visited too; nothing
/// under the root is skipped. A symlink to a file is yielded like a regular
/// file, a symlink to a directory is not descended into. Entries come in
/// directory-listing order, which is not sorted.
pub struct EligibleFiles {
    walk: Walk,
    suffix: String,
}

impl EligibleFiles {
    pub fn new<P: AsRef<Path>>(root: P, suffix: &str) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);

        Self {
            walk: builder.build(),
            suffix: suffix.to_string(),
        }
    }

    fn is_eligible(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.suffix.as_str()))
            .unwrap_or(false)
    }
}

impl Iterator for EligibleFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            // Symlinked directories are not descended into, symlinked files are kept
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_symlink() => entry.path().is_file(),
                Some(ft) => ft.is_file(),
                None => false,
            };
            if is_file && self.is_eligible(entry.path()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Collect every eligible file under `root`, stopping at the first error
pub fn find_eligible_files<P: AsRef<Path>>(root: P, suffix: &str) -> Result<Vec<PathBuf>> {
    EligibleFiles::new(root, suffix).collect()
}
