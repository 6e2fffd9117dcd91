use std::io;
use std::path::PathBuf;

use crate::graph::FileId;

/// Result type alias using the library [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while amalgamating
///
/// Every variant aborts the run; there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced file could not be read
    #[error("Failed to read {file} ({})", .path.display())]
    MissingFile {
        /// Identifier as it appeared in the include directive
        file: FileId,
        /// Path the identifier resolved to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file transitively includes itself
    #[error("Include cycle detected at {file}: {}", format_chain(.chain))]
    Cycle {
        /// File that was requested while still being resolved
        file: FileId,
        /// Resolution path from the first occurrence of `file` back to it
        chain: Vec<FileId>,
    },

    /// The output file could not be written
    #[error("Failed to write output file {}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An existing output file could not be read for comparison
    #[error("Failed to read existing output file {}", .path.display())]
    ReadOutput {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A config file could not be read
    #[error("Failed to read config file {}", .path.display())]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for the expected schema
    #[error("Failed to parse config file {}", .path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// The effective configuration could not be serialized
    #[error("Failed to serialize configuration")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The effective configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn format_chain(chain: &[FileId]) -> String {
    chain
        .iter()
        .map(FileId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
