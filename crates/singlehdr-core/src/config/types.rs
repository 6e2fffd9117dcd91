//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Default theme definition emitted in the header block
///
/// Produces:
///
/// ```text
/// #ifndef <macro_name>
/// #define <macro_name> <value>
/// #endif
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefault {
    /// Macro users can predefine to pick another theme
    pub macro_name: String,
    /// Fallback definition
    pub value: String,
}

/// One configuration source, as read from a TOML file or the command line
///
/// Every field is optional; unset fields fall through to lower-precedence
/// sources and finally to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Entry header, relative to the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Output file, relative to the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Licence text file, relative to the root; empty disables the banner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Include guard macro; derived from the output name when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,

    /// Wrapping namespace; empty disables namespace handling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// System headers included once at the top of the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,

    /// Default theme definition; an empty `macro_name` disables it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeDefault>,
}

impl ConfigLayer {
    /// Overlay `higher` on top of `self`; fields set in `higher` win
    #[must_use]
    pub fn overlay(self, higher: Self) -> Self {
        Self {
            entry: higher.entry.or(self.entry),
            output: higher.output.or(self.output),
            license: higher.license.or(self.license),
            guard: higher.guard.or(self.guard),
            namespace: higher.namespace.or(self.namespace),
            includes: higher.includes.or(self.includes),
            theme: higher.theme.or(self.theme),
        }
    }
}

/// Effective configuration for one amalgamation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entry header, relative to the root
    pub entry: String,
    /// Output file, relative to the root
    pub output: String,
    /// Licence text file, relative to the root
    pub license: Option<String>,
    /// Include guard macro
    pub guard: String,
    /// Wrapping namespace
    pub namespace: Option<String>,
    /// System headers included once at the top of the output
    pub includes: Vec<String>,
    /// Default theme definition
    pub theme: Option<ThemeDefault>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry: "dui.hpp".to_string(),
            output: "dui_single.hpp".to_string(),
            license: Some("LICENSE".to_string()),
            guard: "DUI_SINGLE_HPP".to_string(),
            namespace: Some("dui".to_string()),
            includes: ["algorithm", "string", "string_view", "vector", "SDL.h"]
                .into_iter()
                .map(String::from)
                .collect(),
            theme: Some(ThemeDefault {
                macro_name: "DUI_THEME".to_string(),
                value: "dui::style::SteelBlue".to_string(),
            }),
        }
    }
}

impl Config {
    /// Resolve a merged layer against the defaults
    ///
    /// When the layer sets `output` but no `guard`, the guard is derived
    /// from the output file name.
    #[must_use]
    pub fn from_layer(layer: ConfigLayer) -> Self {
        let defaults = Self::default();

        let guard = match (layer.guard, &layer.output) {
            (Some(guard), _) => guard,
            (None, Some(output)) => guard_from_output(output),
            (None, None) => defaults.guard,
        };

        Self {
            entry: layer.entry.unwrap_or(defaults.entry),
            output: layer.output.unwrap_or(defaults.output),
            license: layer.license.map_or(defaults.license, non_empty),
            guard,
            namespace: layer.namespace.map_or(defaults.namespace, non_empty),
            includes: layer.includes.unwrap_or(defaults.includes),
            theme: layer
                .theme
                .map_or(defaults.theme, |t| (!t.macro_name.is_empty()).then_some(t)),
        }
    }

    /// Express this configuration as a layer with every field set
    ///
    /// Disabled sections become their empty values, so resolving the layer
    /// again with [`Config::from_layer`] gives back the same configuration.
    #[must_use]
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            entry: Some(self.entry.clone()),
            output: Some(self.output.clone()),
            license: Some(self.license.clone().unwrap_or_default()),
            guard: Some(self.guard.clone()),
            namespace: Some(self.namespace.clone().unwrap_or_default()),
            includes: Some(self.includes.clone()),
            theme: Some(self.theme.clone().unwrap_or(ThemeDefault {
                macro_name: String::new(),
                value: String::new(),
            })),
        }
    }

    /// Render as TOML that loads back to the same configuration
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        Ok(toml::to_string(&self.to_layer())?)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// Derive an include guard from an output path: `dui_single.hpp` becomes
/// `DUI_SINGLE_HPP`
#[must_use]
pub fn guard_from_output(output: &str) -> String {
    let name = output.rsplit(['/', '\\']).next().unwrap_or(output);

    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }

    guard
}
