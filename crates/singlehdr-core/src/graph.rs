//! Dependency-ordered traversal of the include graph
//!
//! The traversal is a depth-first, dependencies-first walk: a file is only
//! appended to the queue after every file it includes has been appended.
//! Dependencies are visited in the order they first appear in the including
//! file, which makes the resulting queue deterministic.
//!
//! Cycles are detected with an explicit "currently resolving" stack rather
//! than by inspecting the finished queue, so cycles of any length are caught.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::includes::IncludeScanner;
use crate::source::SourceProvider;

/// Identifier of a source file in the include graph
///
/// In practice this is the path written inside an include directive,
/// relative to the library root. Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Create a file identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Files in dependency order: every file appears after all of its includes
pub type Queue = Vec<FileId>;

/// Resolve the dependency order starting at `entry`
///
/// `read_content` loads a file's text; `extract_deps` lists the files it
/// includes in first-occurrence order.
///
/// # Errors
///
/// Returns [`Error::Cycle`] if a file transitively includes itself, or any
/// error produced by `read_content`.
pub fn order<R, E>(entry: &FileId, read_content: R, extract_deps: E) -> Result<Queue>
where
    R: FnMut(&FileId) -> Result<String>,
    E: Fn(&str) -> Vec<FileId>,
{
    let mut traversal = Traversal {
        read_content,
        extract_deps,
        resolved: Vec::new(),
        resolved_set: HashSet::new(),
        resolving: Vec::new(),
        resolving_set: HashSet::new(),
    };

    traversal.visit(entry)?;

    Ok(traversal.resolved)
}

struct Traversal<R, E> {
    read_content: R,
    extract_deps: E,
    resolved: Vec<FileId>,
    resolved_set: HashSet<FileId>,
    resolving: Vec<FileId>,
    resolving_set: HashSet<FileId>,
}

impl<R, E> Traversal<R, E>
where
    R: FnMut(&FileId) -> Result<String>,
    E: Fn(&str) -> Vec<FileId>,
{
    fn visit(&mut self, file: &FileId) -> Result<()> {
        if self.resolved_set.contains(file) {
            return Ok(());
        }

        if self.resolving_set.contains(file) {
            return Err(self.cycle_error(file));
        }

        debug!(file = %file, depth = self.resolving.len(), "resolving");
        self.resolving.push(file.clone());
        self.resolving_set.insert(file.clone());

        let content = (self.read_content)(file)?;
        let dependencies = (self.extract_deps)(&content);

        for dependency in &dependencies {
            self.visit(dependency)?;
        }

        self.resolving.pop();
        self.resolving_set.remove(file);

        debug!(file = %file, position = self.resolved.len(), "resolved");
        self.resolved_set.insert(file.clone());
        self.resolved.push(file.clone());

        Ok(())
    }

    fn cycle_error(&self, file: &FileId) -> Error {
        let start = self
            .resolving
            .iter()
            .position(|f| f == file)
            .unwrap_or(0);

        let mut chain: Vec<FileId> = self.resolving[start..].to_vec();
        chain.push(file.clone());

        Error::Cycle {
            file: file.clone(),
            chain,
        }
    }
}

/// Orders the include graph of a [`SourceProvider`] using the local include
/// scanner
pub struct DependencyOrderer<'a, S: SourceProvider + ?Sized> {
    source: &'a S,
    scanner: IncludeScanner,
}

impl<'a, S: SourceProvider + ?Sized> DependencyOrderer<'a, S> {
    /// Create an orderer reading from `source`
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            scanner: IncludeScanner::new(),
        }
    }

    /// Resolve the dependency order starting at `entry`
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or an include cycle exists.
    pub fn order(&self, entry: &FileId) -> Result<Queue> {
        order(
            entry,
            |file| self.source.read(file),
            |content| self.scanner.scan(content),
        )
    }
}
