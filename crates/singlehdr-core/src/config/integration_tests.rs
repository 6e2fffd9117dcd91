//! Integration tests for configuration module

use std::fs;
use tempfile::TempDir;

use super::{Config, ConfigLayer, ConfigManager, ConfigSources, PROJECT_CONFIG_NAME};
use crate::error::Error;

fn sources(tmp: &TempDir) -> ConfigSources<'_> {
    ConfigSources {
        cli_path: None,
        start_dir: tmp.path(),
        no_config: false,
    }
}

#[test]
fn test_full_config_workflow() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("custom.toml");

    fs::write(
        &config_file,
        r#"
entry = "boto.hpp"
output = "dist/boto_single.hpp"
license = "COPYING"
namespace = "boto"
includes = ["string", "SDL.h"]

[theme]
macro_name = "BOTO_THEME"
value = "boto::themes::Dark"
"#,
    )
    .unwrap();

    let config = ConfigManager::load(
        ConfigSources {
            cli_path: Some(config_file.as_path()),
            ..sources(&tmp)
        },
        ConfigLayer::default(),
    )
    .unwrap();

    assert_eq!(config.entry, "boto.hpp");
    assert_eq!(config.output, "dist/boto_single.hpp");
    assert_eq!(config.guard, "BOTO_SINGLE_HPP");
    assert_eq!(config.license.as_deref(), Some("COPYING"));
    assert_eq!(config.namespace.as_deref(), Some("boto"));
    assert_eq!(config.includes, vec!["string", "SDL.h"]);
    assert_eq!(config.theme.unwrap().macro_name, "BOTO_THEME");
}

#[test]
fn test_project_config_discovered_from_start_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(PROJECT_CONFIG_NAME), "entry = \"lib.hpp\"\n").unwrap();

    let config = ConfigManager::load(sources(&tmp), ConfigLayer::default()).unwrap();

    assert_eq!(config.entry, "lib.hpp");
}

#[test]
fn test_overrides_beat_config_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(PROJECT_CONFIG_NAME),
        "entry = \"lib.hpp\"\nguard = \"FROM_FILE\"\n",
    )
    .unwrap();

    let overrides = ConfigLayer {
        guard: Some("FROM_CLI".to_string()),
        ..ConfigLayer::default()
    };

    let config = ConfigManager::load(sources(&tmp), overrides).unwrap();

    assert_eq!(config.entry, "lib.hpp");
    assert_eq!(config.guard, "FROM_CLI");
}

#[test]
fn test_no_config_ignores_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(PROJECT_CONFIG_NAME), "entry = \"lib.hpp\"\n").unwrap();

    let config = ConfigManager::load(
        ConfigSources {
            no_config: true,
            ..sources(&tmp)
        },
        ConfigLayer::default(),
    )
    .unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_config_validation() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(PROJECT_CONFIG_NAME),
        "entry = \"same.hpp\"\noutput = \"same.hpp\"\n",
    )
    .unwrap();

    let result = ConfigManager::load(sources(&tmp), ConfigLayer::default());

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_missing_cli_config_is_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.toml");

    let result = ConfigManager::load(
        ConfigSources {
            cli_path: Some(missing.as_path()),
            ..sources(&tmp)
        },
        ConfigLayer::default(),
    );

    assert!(matches!(result, Err(Error::ConfigRead { .. })));
}
