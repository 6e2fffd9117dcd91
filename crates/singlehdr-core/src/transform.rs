//! Per-file content cleanup before concatenation
//!
//! Each merged file loses its preprocessor lines (include guards, pragmas and
//! includes are re-emitted once by the assembler), the lines that open and
//! close the library namespace (the assembler wraps everything in a single
//! namespace instead), and surrounding whitespace.

/// Cleans up one header's content for inclusion in the amalgamation
#[derive(Debug, Clone, Default)]
pub struct ContentTransform {
    namespace_open: Option<String>,
    namespace_close: Option<String>,
}

impl ContentTransform {
    /// Create a transform that strips only preprocessor lines
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also strip the `namespace <ns> {` and `} // namespace <ns>` lines
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        if namespace.is_empty() {
            self.namespace_open = None;
            self.namespace_close = None;
        } else {
            self.namespace_open = Some(format!("namespace {namespace} {{"));
            self.namespace_close = Some(format!("}} // namespace {namespace}"));
        }
        self
    }

    /// Apply the transform to `content`
    ///
    /// Removed lines leave their line break behind, so interior blank lines
    /// are preserved; only the ends of the result are trimmed.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        let mut output = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            let (text, ending) = split_line_ending(line);
            if !self.is_stripped(text) {
                output.push_str(text);
            }
            output.push_str(ending);
        }

        output.trim().to_string()
    }

    fn is_stripped(&self, line: &str) -> bool {
        line.starts_with('#')
            || self.namespace_open.as_deref() == Some(line)
            || self.namespace_close.as_deref() == Some(line)
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(text) = line.strip_suffix("\r\n") {
        (text, &line[text.len()..])
    } else if let Some(text) = line.strip_suffix('\n') {
        (text, &line[text.len()..])
    } else {
        (line, "")
    }
}
