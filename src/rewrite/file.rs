use log::debug;
use tempfile::NamedTempFile;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::{LinkCaseError, Result};
use crate::core::types::{FileOutcome, WriteMode};
use crate::rewrite::matcher::UrlMatcher;

/// Lowercase every URL the matcher finds in `path` and write the file back.
///
/// The file is read fully and closed before it is reopened for writing. In
/// [`WriteMode::InPlace`] the file is truncated first, so a failure half way
/// through can leave it incomplete. [`WriteMode::Atomic`] renames a finished
/// temporary file over the original instead.
pub fn lowercase_links_in_file(
    path: &Path,
    matcher: &UrlMatcher,
    mode: WriteMode,
) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|e| LinkCaseError::read(path, e))?;

    let (updated, urls_matched) = matcher.lowercase_links(&content);
    let changed = updated != content;

    match mode {
        WriteMode::InPlace => {
            fs::write(path, updated.as_bytes()).map_err(|e| LinkCaseError::write(path, e))?
        }
        WriteMode::Atomic => write_atomic(path, updated.as_bytes())?,
        WriteMode::DryRun => debug!("Dry run, leaving {} untouched", path.display()),
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        urls_matched,
        changed,
    })
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let to_write_error = |e| LinkCaseError::write(path, e);

    // Rename over the link target so a symlinked file stays a symlink
    let target = fs::canonicalize(path).map_err(to_write_error)?;
    let dir = target.parent().unwrap_or(Path::new("."));
    let permissions = fs::metadata(&target).map_err(to_write_error)?.permissions();

    // Dropping the temp file on any early return removes it
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    tmp.write_all(contents).map_err(to_write_error)?;
    tmp.as_file().sync_all().map_err(to_write_error)?;
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(to_write_error)?;
    tmp.persist(&target).map_err(|e| to_write_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::MatchScope;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    const MIXED_CASE: &str = "# Post\n\nSee [docs](HTTPS://Docs.RS/Regex) and https://Example.com/A.\n";
    const LOWERCASED: &str = "# Post\n\nSee [docs](https://docs.rs/regex) and https://example.com/a.\n";

    #[test]
    fn test_lowercase_links_in_file__in_place() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("post.md");
        fs::write(&path, MIXED_CASE)?;

        let outcome =
            lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::InPlace)?;

        assert_eq!(fs::read_to_string(&path)?, LOWERCASED);
        assert_eq!(outcome.urls_matched, 2);
        assert!(outcome.changed);
        assert_eq!(outcome.path, path);
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__atomic_matches_in_place() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("post.md");
        fs::write(&path, MIXED_CASE)?;

        let outcome =
            lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::Atomic)?;

        assert_eq!(fs::read_to_string(&path)?, LOWERCASED);
        assert!(outcome.changed);

        // No temporary files are left behind
        let entries = fs::read_dir(dir.path())?.count();
        assert_eq!(entries, 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_lowercase_links_in_file__atomic_keeps_permissions() -> TestResult {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("post.md");
        fs::write(&path, MIXED_CASE)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;

        lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::Atomic)?;

        let mode = fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__dry_run_leaves_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("post.md");
        fs::write(&path, MIXED_CASE)?;

        let outcome =
            lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::DryRun)?;

        assert_eq!(fs::read_to_string(&path)?, MIXED_CASE);
        assert!(outcome.changed);
        assert_eq!(outcome.urls_matched, 2);
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__no_urls_unchanged() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("plain.md");
        let content = "Just Text.\r\nWith CRLF and Ünïcödé\r\n";
        fs::write(&path, content)?;

        let outcome =
            lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::InPlace)?;

        assert_eq!(fs::read(&path)?, content.as_bytes());
        assert!(!outcome.changed);
        assert_eq!(outcome.urls_matched, 0);
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__host_scope() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("post.md");
        fs::write(
            &path,
            "https://Example.com/Path\nhttps://Nickolasfisher.com/ABC\n",
        )?;
        let matcher = UrlMatcher::new(MatchScope::Host("nickolasfisher.com".to_string()))?;

        let outcome = lowercase_links_in_file(&path, &matcher, WriteMode::InPlace)?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "https://Example.com/Path\nhttps://nickolasfisher.com/abc\n"
        );
        assert_eq!(outcome.urls_matched, 1);
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__missing_file_is_read_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing.md");

        let result = lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::InPlace);

        match result {
            Err(LinkCaseError::Read { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected Read error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_lowercase_links_in_file__invalid_utf8_is_read_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("binary.md");
        fs::write(&path, [0x68, 0x74, 0xff, 0xfe, 0x00])?;

        let result = lowercase_links_in_file(&path, &UrlMatcher::unrestricted()?, WriteMode::InPlace);

        assert!(matches!(result, Err(LinkCaseError::Read { .. })));
        // The original bytes are not touched
        assert_eq!(fs::read(&path)?, vec![0x68, 0x74, 0xff, 0xfe, 0x00]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_lowercase_links_in_file__atomic_through_symlink() -> TestResult {
        let dir = tempfile::tempdir()?;
        let real = dir.path().join("real.md");
        let link = dir.path().join("link.md");
        fs::write(&real, MIXED_CASE)?;
        std::os::unix::fs::symlink(&real, &link)?;

        lowercase_links_in_file(&link, &UrlMatcher::unrestricted()?, WriteMode::Atomic)?;

        assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real)?, LOWERCASED);
        Ok(())
    }
}
