//! Configuration file parsing, merging, and validation
//!
//! This module handles:
//! - Config file discovery from multiple locations
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Validation and error reporting

mod discovery;
mod merge;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, LOCAL_CONFIG_NAME, PROJECT_CONFIG_NAME};
pub use merge::ConfigMerger;
pub use types::{Config, ConfigLayer, ThemeDefault, guard_from_output};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Where to look for configuration
#[derive(Debug, Clone, Copy)]
pub struct ConfigSources<'a> {
    /// Explicit config file from the command line
    pub cli_path: Option<&'a Path>,
    /// Directory the project config search starts from
    pub start_dir: &'a Path,
    /// Skip all config files
    pub no_config: bool,
}

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load, merge, apply command-line overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read, or if
    /// the effective configuration fails validation.
    pub fn load(sources: ConfigSources<'_>, overrides: ConfigLayer) -> Result<Config> {
        let files = if sources.no_config {
            ConfigFiles::default()
        } else {
            ConfigDiscovery::discover(sources.cli_path, sources.start_dir)
        };

        let merged = ConfigMerger::merge(&files)?.overlay(overrides);
        let config = Config::from_layer(merged);

        ConfigValidator::validate(&config)?;

        Ok(config)
    }
}
