//! Output assembly and writing
//!
//! The assembler turns a dependency-ordered queue into the final header:
//! licence banner, include guard, system includes, namespace wrapper and
//! theme default around the cleaned-up content of every queued file.
//!
//! The whole output is rendered in memory first. Nothing touches the output
//! path until every source has been read and ordered successfully.


use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::{DependencyOrderer, FileId, Queue};
use crate::source::{FsSource, SourceProvider};
use crate::transform::ContentTransform;

/// Renders the single-header output for one configuration
pub struct Assembler<'a, S: SourceProvider + ?Sized> {
    source: &'a S,
    config: &'a Config,
    transform: ContentTransform,
}

impl<'a, S: SourceProvider + ?Sized> Assembler<'a, S> {
    /// Create an assembler reading sources (and the licence) from `source`
    #[must_use]
    pub fn new(source: &'a S, config: &'a Config) -> Self {
        let transform = match &config.namespace {
            Some(namespace) => ContentTransform::new().with_namespace(namespace),
            None => ContentTransform::new(),
        };

        Self {
            source,
            config,
            transform,
        }
    }

    /// Render the amalgamated header for `queue`
    ///
    /// # Errors
    ///
    /// Returns an error if the licence or a queued file cannot be read.
    pub fn render(&self, queue: &Queue) -> Result<String> {
        let mut output = String::new();

        self.render_banner(&mut output)?;
        self.render_header(&mut output);

        for file in queue {
            let content = self.source.read(file)?;
            let body = self.transform.apply(&content);
            debug!(file = %file, bytes = body.len(), "merging");

            let _ = writeln!(output, "// begin {file}");
            output.push_str(&body);
            output.push_str("\n\n");
        }

        self.render_footer(&mut output);

        Ok(output)
    }

    fn render_banner(&self, output: &mut String) -> Result<()> {
        let Some(license) = &self.config.license else {
            return Ok(());
        };

        let text = self.source.read(&FileId::from(license.as_str()))?;

        output.push_str("/*\n * ");
        output.push_str(&text.replace('\n', "\n * "));
        output.push_str("\n */\n");

        Ok(())
    }

    fn render_header(&self, output: &mut String) {
        let guard = &self.config.guard;
        let _ = writeln!(output, "#ifndef {guard}");
        let _ = writeln!(output, "#define {guard}\n");

        if !self.config.includes.is_empty() {
            for include in &self.config.includes {
                let _ = writeln!(output, "#include <{include}>");
            }
            output.push('\n');
        }

        if let Some(namespace) = &self.config.namespace {
            let _ = writeln!(output, "namespace {namespace} {{\n");
        }

        if let Some(theme) = &self.config.theme {
            let _ = writeln!(output, "#ifndef {}", theme.macro_name);
            let _ = writeln!(output, "#define {} {}", theme.macro_name, theme.value);
            output.push_str("#endif\n\n");
        }
    }

    fn render_footer(&self, output: &mut String) {
        if let Some(namespace) = &self.config.namespace {
            let _ = writeln!(output, "}} // namespace {namespace}\n");
        }

        let _ = writeln!(output, "#endif // {}", self.config.guard);
    }
}

/// Result of a successful amalgamation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amalgamation {
    /// Files merged, in output order
    pub queue: Queue,
    /// Full output text
    pub text: String,
}

impl Amalgamation {
    /// Write the output, replacing any previous content at `path`
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(path, &self.text).map_err(write_error)?;

        info!(
            path = %path.display(),
            files = self.queue.len(),
            bytes = self.text.len(),
            "wrote amalgamated header"
        );

        Ok(())
    }
}

/// Order and render the library described by `config` from any source
///
/// # Errors
///
/// Returns an error if a file is missing or an include cycle exists.
pub fn amalgamate_from<S: SourceProvider + ?Sized>(
    source: &S,
    config: &Config,
) -> Result<Amalgamation> {
    let entry = FileId::from(config.entry.as_str());
    let queue = DependencyOrderer::new(source).order(&entry)?;

    if queue.len() == 1 {
        warn!(entry = %entry, "entry header has no local includes");
    }

    let text = Assembler::new(source, config).render(&queue)?;

    Ok(Amalgamation { queue, text })
}

/// Order and render the library described by `config`, reading from `root`
///
/// # Errors
///
/// Returns an error if a file is missing or an include cycle exists.
pub fn amalgamate(config: &Config, root: &Path) -> Result<Amalgamation> {
    amalgamate_from(&FsSource::new(root), config)
}

/// Location of the configured output under `root`
#[must_use]
pub fn output_path(config: &Config, root: &Path) -> PathBuf {
    root.join(&config.output)
}
