//! Source file providers
//!
//! The orderer and assembler only ever read files through a
//! [`SourceProvider`], which keeps the filesystem at the edge.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::FileId;

/// Read-only access to source files by identifier
pub trait SourceProvider {
    /// Load the full text of `file`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] if the file cannot be read.
    fn read(&self, file: &FileId) -> Result<String>;
}

/// Reads files from a directory on disk
///
/// Identifiers are joined onto the root directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a provider rooted at `root`
    ///
    /// The root is canonicalized when possible so error messages show an
    /// absolute location.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        Self { root }
    }

    /// Root directory identifiers are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of `file`
    #[must_use]
    pub fn path_of(&self, file: &FileId) -> PathBuf {
        self.root.join(file.as_str())
    }
}

impl SourceProvider for FsSource {
    fn read(&self, file: &FileId) -> Result<String> {
        let path = self.path_of(file);
        debug!(file = %file, path = %path.display(), "reading source");

        fs::read_to_string(&path).map_err(|source| Error::MissingFile {
            file: file.clone(),
            path,
            source,
        })
    }
}

/// In-memory sources, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<FileId, String>,
}

impl MemorySource {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content
    #[must_use]
    pub fn with_file(mut self, file: impl Into<FileId>, content: impl Into<String>) -> Self {
        self.insert(file, content);
        self
    }

    /// Add a file, replacing any previous content
    pub fn insert(&mut self, file: impl Into<FileId>, content: impl Into<String>) {
        self.files.insert(file.into(), content.into());
    }
}

impl SourceProvider for MemorySource {
    fn read(&self, file: &FileId) -> Result<String> {
        self.files
            .get(file)
            .cloned()
            .ok_or_else(|| Error::MissingFile {
                file: file.clone(),
                path: PathBuf::from(file.as_str()),
                source: io::Error::new(io::ErrorKind::NotFound, "no such in-memory file"),
            })
    }
}
