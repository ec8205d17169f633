//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Optimal keep/replace policies for aging equipment via backward dynamic programming
#[derive(Parser, Debug)]
#[command(name = "mrsolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output to stderr (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Working directory holding a local .mrsolve.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub work_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the model comes from: a TOML file or a built-in sample.
#[derive(Args, Debug, Clone)]
pub struct ModelSource {
    /// Model file (TOML)
    #[arg(value_hint = ValueHint::FilePath, conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Built-in sample model (see `mrsolve samples`)
    #[arg(short, long)]
    pub sample: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a model: stage tables, decisions and optimal chains
    Solve {
        #[command(flatten)]
        source: ModelSource,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also print reachable states per decision year
        #[arg(long)]
        states: bool,
    },

    /// Show reachable states per decision year and the decision tree
    States {
        #[command(flatten)]
        source: ModelSource,

        /// Also print the full decision tree
        #[arg(long)]
        tree: bool,
    },

    /// Show all optimal decision chains
    Chains {
        #[command(flatten)]
        source: ModelSource,

        /// Show chains as a branching tree
        #[arg(long)]
        tree: bool,
    },

    /// List built-in sample models
    Samples,

    /// Print a model file template
    Template,

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
