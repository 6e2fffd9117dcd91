//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Project-local config, meant to stay out of version control
pub const LOCAL_CONFIG_NAME: &str = ".singlehdr.toml";

/// Project config
pub const PROJECT_CONFIG_NAME: &str = "singlehdr.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project-local config (.singlehdr.toml)
    pub local: Option<PathBuf>,
    /// Project config (singlehdr.toml)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Discovered files from lowest to highest precedence
    pub fn in_merge_order(&self) -> impl Iterator<Item = &Path> {
        [&self.global, &self.project, &self.local, &self.cli]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// Project files are searched from `start_dir` upwards. An explicit CLI
    /// path is always kept, so that a missing file is reported when it is
    /// read rather than silently ignored.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>, start_dir: &Path) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            local: Self::find_file(start_dir, LOCAL_CONFIG_NAME),
            project: Self::find_file(start_dir, PROJECT_CONFIG_NAME),
            global: Self::find_global_config(),
        }
    }

    /// Find a config file in `start_dir` or its parent directories
    fn find_file(start_dir: &Path, name: &str) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("singlehdr").join("config.toml");

        global_config.is_file().then_some(global_config)
    }
}
