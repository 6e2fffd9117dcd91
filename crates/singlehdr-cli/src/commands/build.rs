use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use singlehdr_core::Amalgamation;
use tracing::debug;

use super::common::CommandContext;
use crate::cli::{Cli, LayoutArgs};

pub struct Build;

impl Build {
    pub fn execute(cli: &Cli, layout: &LayoutArgs, dry_run: bool, stdout: bool) -> anyhow::Result<()> {
        let ctx = CommandContext::load(cli, layout)?;
        let output = ctx.output_path();

        debug!(
            root = %ctx.root().display(),
            entry = %ctx.config.entry,
            output = %output.display(),
            "building"
        );

        let amalgamation = singlehdr_core::amalgamate(&ctx.config, ctx.root())
            .with_context(|| format!("Failed to amalgamate {}", ctx.config.entry))?;

        if stdout {
            print!("{}", amalgamation.text);
            return Ok(());
        }

        if dry_run {
            eprintln!(
                "[DRY RUN] Would write: {} ({} bytes)",
                output.display(),
                amalgamation.text.len()
            );
        } else {
            amalgamation.write_to(&output)?;
        }

        println!("{}", Self::summary(&amalgamation, &output, dry_run));

        Ok(())
    }

    fn summary(amalgamation: &Amalgamation, output: &Path, dry_run: bool) -> String {
        let mut summary = String::new();

        summary.push_str("\n=== Build Summary ===\n");
        let _ = writeln!(summary, "Files merged: {}", amalgamation.queue.len());
        let _ = writeln!(summary, "Output:       {}", output.display());
        let _ = writeln!(summary, "Size:         {} bytes", amalgamation.text.len());

        if dry_run {
            summary.push_str("Status: dry run, nothing written");
        } else {
            summary.push_str("Status: ✓ Written");
        }

        summary
    }
}
