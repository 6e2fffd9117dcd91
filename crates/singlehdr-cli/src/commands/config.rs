use tracing::debug;

use super::common::CommandContext;
use crate::cli::{Cli, LayoutArgs};

pub struct Config;

impl Config {
    pub fn execute(cli: &Cli, layout: &LayoutArgs) -> anyhow::Result<()> {
        let ctx = CommandContext::load(cli, layout)?;

        debug!(root = %ctx.root().display(), "printing effective configuration");

        print!("{}", ctx.config.to_toml()?);
        Ok(())
    }
}
