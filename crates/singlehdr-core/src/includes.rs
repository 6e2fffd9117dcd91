//! Local include directive scanning
//!
//! Only lines that are exactly `#include "<path>"` count as local
//! dependencies. Angle-bracket includes refer to system or external headers
//! and are left to the assembled header block.

use regex::Regex;

use crate::graph::FileId;

/// Line-anchored local include directive; `R` makes `$` accept `\r\n` endings
const LOCAL_INCLUDE_PATTERN: &str = r#"(?mR)^#include "(.*)"$"#;

/// Extracts local include targets from header content
#[derive(Debug, Clone)]
pub struct IncludeScanner {
    pattern: Regex,
}

impl IncludeScanner {
    /// Create a new include scanner
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LOCAL_INCLUDE_PATTERN).expect("include pattern is valid"),
        }
    }

    /// List the local includes of `content` in the order they appear
    ///
    /// Repeated directives are returned once per occurrence.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<FileId> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| FileId::from(m.as_str()))
            .collect()
    }
}

impl Default for IncludeScanner {
    fn default() -> Self {
        Self::new()
    }
}
