//! # singlehdr-core
//!
//! Core library for amalgamating a header-only C++ library into a single
//! header file.
//!
//! Starting from an entry header, local `#include "..."` directives are
//! resolved into a dependency-ordered queue, each file is cleaned up, and the
//! result is concatenated between a licence banner and an include guard.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for the singlehdr library
pub mod error;

/// Dependency-ordered traversal of the include graph
pub mod graph;

/// Local include directive scanning
pub mod includes;

/// Source file providers
pub mod source;

/// Per-file content cleanup
pub mod transform;

/// Output assembly and writing
pub mod assemble;

/// Comparison of generated output against the file on disk
pub mod comparison;

/// Configuration file parsing and management
pub mod config;

pub use assemble::{Amalgamation, Assembler, amalgamate};
pub use error::{Error, Result};
pub use graph::{DependencyOrderer, FileId, Queue, order};
