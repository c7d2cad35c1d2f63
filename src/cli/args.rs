//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::builder::Shape;
use crate::config::RenderStyle;
use crate::stats::Strategy;

/// Generic tree: render it and compare recursive with explicit-stack traversals
#[derive(Parser, Debug)]
#[command(name = "gentree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory with a local .gentree.toml (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sample tree and print all traversal results (default)
    Demo,

    /// Draw a generated tree
    Render {
        #[command(flatten)]
        tree: TreeArgs,

        /// Listing style (overrides config)
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Count nodes, sum values and measure depth of a generated tree
    Stats {
        #[command(flatten)]
        tree: TreeArgs,

        /// Traversals to run (overrides config)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Selects the generated tree.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Tree shape
    #[arg(long, value_enum, default_value_t = Shape::Example)]
    pub shape: Shape,

    /// Chain length, number of fan leaves, or depth of a complete tree
    #[arg(short = 'n', long, default_value_t = 3)]
    pub size: usize,

    /// Children per inner node of a complete tree
    #[arg(short, long, default_value_t = 2)]
    pub branching: usize,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented template config
    Template,
    /// Show config file locations
    Path,
}
