//! Configuration validation and error reporting

use std::path::{Component, Path};

use super::types::Config;
use crate::error::{Error, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an effective configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        if config.entry.trim().is_empty() {
            return Err(invalid("entry cannot be empty"));
        }

        if config.output.trim().is_empty() {
            return Err(invalid("output cannot be empty"));
        }

        if same_path(&config.entry, &config.output) {
            return Err(invalid(format!(
                "output '{}' would overwrite the entry header",
                config.output
            )));
        }

        if !is_identifier(&config.guard) {
            return Err(invalid(format!(
                "guard '{}' is not a valid macro name",
                config.guard
            )));
        }

        if let Some(namespace) = &config.namespace
            && !namespace.split("::").all(is_identifier)
        {
            return Err(invalid(format!(
                "namespace '{namespace}' is not a valid C++ namespace"
            )));
        }

        for (idx, include) in config.includes.iter().enumerate() {
            if include.trim().is_empty() {
                return Err(invalid(format!("include #{} is empty", idx + 1)));
            }

            if include.contains(['<', '>', '"', '\n']) {
                return Err(invalid(format!(
                    "include '{include}' must be a bare header name"
                )));
            }
        }

        if let Some(theme) = &config.theme {
            if !is_identifier(&theme.macro_name) {
                return Err(invalid(format!(
                    "theme macro '{}' is not a valid macro name",
                    theme.macro_name
                )));
            }

            if theme.value.trim().is_empty() {
                return Err(invalid("theme value cannot be empty"));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig(message.into())
}

/// Whether two root-relative paths name the same file after lexical
/// normalization (`./a.hpp`, `sub/../a.hpp` and `a.hpp` are equal)
fn same_path(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(path: &str) -> Vec<Component<'_>> {
    let mut components = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir
                if matches!(components.last(), Some(Component::Normal(_))) =>
            {
                components.pop();
            }
            other => components.push(other),
        }
    }

    components
}

/// Whether `name` is a valid C identifier
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
