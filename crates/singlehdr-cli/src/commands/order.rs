use anyhow::Context;
use singlehdr_core::source::FsSource;
use singlehdr_core::{DependencyOrderer, FileId};
use tracing::debug;

use super::common::CommandContext;
use crate::cli::{Cli, LayoutArgs};

pub struct Order;

impl Order {
    pub fn execute(cli: &Cli, layout: &LayoutArgs) -> anyhow::Result<()> {
        let ctx = CommandContext::load(cli, layout)?;

        let source = FsSource::new(ctx.root());
        let entry = FileId::from(ctx.config.entry.as_str());
        let queue = DependencyOrderer::new(&source)
            .order(&entry)
            .with_context(|| format!("Failed to resolve includes of {entry}"))?;

        for file in &queue {
            println!("{file}");
        }

        debug!(files = queue.len(), "printed dependency order");

        Ok(())
    }
}
