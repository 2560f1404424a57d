// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ConfigOverrides;

/// Command-line arguments for `workflow-dag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workflow-dag",
    version,
    about = "Generate a random workflow DAG, order it, split it into execution layers and draw it.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `WorkflowDag.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of nodes.
    #[arg(short = 'n', long = "n", value_name = "N")]
    pub nodes: Option<usize>,

    /// Probability of each allowed edge, in [0, 1].
    #[arg(short = 'p', long = "p", value_name = "P")]
    pub probability: Option<f64>,

    /// Random seed (0 -> time-based).
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the edges of the generated graph.
    #[arg(long)]
    pub print: bool,

    /// Use `T`-prefixed names for nodes.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub names: Option<bool>,

    /// Output directory for `.dot` files and images.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Only write `.dot` files; do not run the renderer.
    #[arg(long)]
    pub no_render: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKFLOW_DAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate config, print it, but don't generate anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Config values set on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            nodes: self.nodes,
            probability: self.probability,
            seed: self.seed,
            dir: self.out.clone(),
            names: self.names,
            render: self.no_render.then_some(false),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
