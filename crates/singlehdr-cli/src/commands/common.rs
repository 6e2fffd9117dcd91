//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use anyhow::Context;
use singlehdr_core::config::{Config, ConfigManager, ConfigSources};
use tracing::debug;

use crate::cli::{Cli, LayoutArgs};

/// Root directory and effective configuration for one command
pub struct CommandContext {
    /// Directory include paths are resolved against
    pub root: PathBuf,
    /// Effective configuration
    pub config: Config,
}

impl CommandContext {
    /// Resolve the root and load configuration with the command's overrides
    ///
    /// Project config files are searched from the root upwards.
    pub fn load(cli: &Cli, layout: &LayoutArgs) -> anyhow::Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let sources = ConfigSources {
            cli_path: cli.config.as_deref(),
            start_dir: &root,
            no_config: cli.no_config,
        };

        let config = ConfigManager::load(sources, layout.to_overrides())
            .context("Failed to load configuration")?;

        debug!(root = %root.display(), entry = %config.entry, output = %config.output, "loaded configuration");

        Ok(Self { root, config })
    }

    /// Absolute location of the output file
    pub fn output_path(&self) -> PathBuf {
        singlehdr_core::assemble::output_path(&self.config, &self.root)
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}
