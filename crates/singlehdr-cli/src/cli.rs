use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use singlehdr_core::config::ConfigLayer;

/// Header-only library amalgamation tool
#[derive(Parser, Debug)]
#[command(name = "singlehdr")]
#[command(
    about = "Amalgamate a header-only C++ library into a single header",
    long_about = None,
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Directory include paths are resolved against (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the single header and write it to the output path
    Build {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Report what would be written without writing
        #[arg(long)]
        dry_run: bool,

        /// Print the single header instead of writing it
        #[arg(long, conflicts_with = "dry_run")]
        stdout: bool,
    },

    /// Print the resolved dependency order, one file per line
    Order {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Verify the output file is up to date with its sources
    Check {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show the effective configuration
    Config {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Output layout overrides shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Entry header, relative to the root
    #[arg(long, value_name = "FILE")]
    pub entry: Option<String>,

    /// Output file, relative to the root
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Licence text file, relative to the root
    #[arg(long, value_name = "FILE", conflicts_with = "no_license")]
    pub license: Option<String>,

    /// Omit the licence banner
    #[arg(long)]
    pub no_license: bool,

    /// Include guard macro (default: derived from the output file name)
    #[arg(long, value_name = "NAME")]
    pub guard: Option<String>,

    /// Wrapping namespace; pass an empty string to disable
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,

    /// System header to include once at the top (repeatable, replaces the configured list)
    #[arg(long = "include", value_name = "HEADER", conflicts_with = "no_includes")]
    pub includes: Vec<String>,

    /// Emit no system includes
    #[arg(long)]
    pub no_includes: bool,
}

impl LayoutArgs {
    /// Convert flags into the highest-precedence config layer
    pub fn to_overrides(&self) -> ConfigLayer {
        let license = if self.no_license {
            Some(String::new())
        } else {
            self.license.clone()
        };

        let includes = if self.no_includes {
            Some(Vec::new())
        } else if self.includes.is_empty() {
            None
        } else {
            Some(self.includes.clone())
        };

        ConfigLayer {
            entry: self.entry.clone(),
            output: self.output.clone(),
            license,
            guard: self.guard.clone(),
            namespace: self.namespace.clone(),
            includes,
            theme: None,
        }
    }
}

impl Commands {
    /// Layout overrides of whichever subcommand was given
    pub fn layout(&self) -> &LayoutArgs {
        match self {
            Self::Build { layout, .. }
            | Self::Order { layout }
            | Self::Check { layout }
            | Self::Config { layout } => layout,
        }
    }
}
