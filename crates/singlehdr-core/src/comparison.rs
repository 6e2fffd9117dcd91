//! Comparison of freshly generated output against the file on disk
//!
//! Used to verify in CI that a committed single header is up to date with
//! its sources.

mod diff;

use std::fs;
use std::io;
use std::path::Path;

pub use diff::DiffGenerator;

use crate::error::{Error, Result};

/// State of the output file relative to freshly generated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatus {
    /// The file on disk matches byte for byte
    UpToDate,
    /// No file exists at the output path
    Missing,
    /// The file exists with different content
    Stale {
        /// Unified diff from the file on disk to the generated text
        diff: String,
    },
}

impl OutputStatus {
    /// Whether the file on disk matches
    #[must_use]
    pub const fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }
}

/// Compares generated output with an existing file
pub struct OutputComparator;

impl OutputComparator {
    /// Compare `expected` with the content of `path`
    ///
    /// `colored` selects ANSI colors for the diff of a stale file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn compare(expected: &str, path: &Path, colored: bool) -> Result<OutputStatus> {
        let actual = match fs::read_to_string(path) {
            Ok(actual) => actual,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(OutputStatus::Missing),
            Err(source) => {
                return Err(Error::ReadOutput {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if actual == expected {
            return Ok(OutputStatus::UpToDate);
        }

        let diff = if colored {
            DiffGenerator::generate_from_content(&actual, expected, path)
        } else {
            DiffGenerator::generate_plain(&actual, expected, path)
        };

        Ok(OutputStatus::Stale { diff })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_up_to_date() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.hpp");
        fs::write(&path, "int a;\n").unwrap();

        let status = OutputComparator::compare("int a;\n", &path, false).unwrap();
        assert!(status.is_up_to_date());
    }

    #[test]
    fn test_missing_output() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.hpp");

        let status = OutputComparator::compare("int a;\n", &path, false).unwrap();
        assert_eq!(status, OutputStatus::Missing);
        assert!(!status.is_up_to_date());
    }

    #[test]
    fn test_stale_output_has_diff() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.hpp");
        fs::write(&path, "int a;\nint old;\n").unwrap();

        let status = OutputComparator::compare("int a;\nint new;\n", &path, false).unwrap();
        match status {
            OutputStatus::Stale { diff } => {
                assert!(diff.contains("-int old;"));
                assert!(diff.contains("+int new;"));
            }
            other => panic!("expected stale output, got {other:?}"),
        }
    }

    #[test]
    fn test_output_path_is_directory() {
        let tmp = TempDir::new().unwrap();

        let result = OutputComparator::compare("int a;\n", tmp.path(), false);
        assert!(matches!(result, Err(Error::ReadOutput { .. })));
    }
}
