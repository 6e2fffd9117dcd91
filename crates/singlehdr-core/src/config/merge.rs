//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! Every field is an override: a value set in a higher-precedence file
//! replaces the value from lower-precedence files. Lists are replaced as a
//! whole, never concatenated, so a project can drop a system include that a
//! global config adds.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::discovery::ConfigFiles;
use super::types::ConfigLayer;
use crate::error::{Error, Result};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .singlehdr.toml
    /// 3. singlehdr.toml
    /// 4. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<ConfigLayer> {
        files
            .in_merge_order()
            .try_fold(ConfigLayer::default(), |merged, path| -> Result<ConfigLayer> {
                Ok(merged.overlay(Self::load(path)?))
            })
    }

    /// Load a single config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config.
    pub fn load(path: &Path) -> Result<ConfigLayer> {
        debug!(path = %path.display(), "loading config file");

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
