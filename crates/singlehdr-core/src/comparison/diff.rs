//! Diff generation with color-coded output

use std::fmt::Write;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

const DIFF_CONTEXT_LINES: usize = 3;

/// Diff generator for showing how an output file is out of date
pub struct DiffGenerator;

impl DiffGenerator {
    /// Generate a color-coded unified diff from `current` (on disk) to
    /// `generated`
    #[must_use]
    pub fn generate_from_content(current: &str, generated: &str, path: &Path) -> String {
        Self::render(current, generated, path, true)
    }

    /// Generate the same diff without ANSI colors
    #[must_use]
    pub fn generate_plain(current: &str, generated: &str, path: &Path) -> String {
        Self::render(current, generated, path, false)
    }

    fn render(current: &str, generated: &str, path: &Path, colored: bool) -> String {
        let diff = TextDiff::from_lines(current, generated);
        let paint = |color: &'static str| if colored { color } else { "" };
        let reset = paint("\x1b[0m");

        let mut output = String::new();

        let _ = writeln!(output, "{}--- {} (on disk){reset}", paint("\x1b[1m"), path.display());
        let _ = writeln!(output, "{}+++ {} (generated){reset}", paint("\x1b[1m"), path.display());

        for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, color) = match change.tag() {
                        ChangeTag::Delete => ("-", paint("\x1b[31m")), // Red
                        ChangeTag::Insert => ("+", paint("\x1b[32m")), // Green
                        ChangeTag::Equal => (" ", ""),
                    };

                    let newline = if change.value().ends_with('\n') {
                        ""
                    } else {
                        "\n"
                    };

                    let end = if color.is_empty() { "" } else { reset };
                    let _ = write!(output, "{color}{sign}{}{newline}{end}", change.value());
                }
            }
        }

        output
    }
}
