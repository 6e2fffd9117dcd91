use std::io::IsTerminal;

use anyhow::Context;
use singlehdr_core::comparison::{OutputComparator, OutputStatus};

use super::common::CommandContext;
use crate::cli::{Cli, LayoutArgs};

pub struct Check;

impl Check {
    pub fn execute(cli: &Cli, layout: &LayoutArgs) -> anyhow::Result<()> {
        let ctx = CommandContext::load(cli, layout)?;
        let output = ctx.output_path();

        let amalgamation = singlehdr_core::amalgamate(&ctx.config, ctx.root())
            .with_context(|| format!("Failed to amalgamate {}", ctx.config.entry))?;

        let colored = std::io::stdout().is_terminal();
        match OutputComparator::compare(&amalgamation.text, &output, colored)? {
            OutputStatus::UpToDate => {
                println!("✓ {} is up to date", output.display());
                Ok(())
            }
            OutputStatus::Missing => {
                anyhow::bail!("{} does not exist (run `singlehdr build`)", output.display())
            }
            OutputStatus::Stale { diff } => {
                print!("{diff}");
                anyhow::bail!("{} is out of date (run `singlehdr build`)", output.display())
            }
        }
    }
}
