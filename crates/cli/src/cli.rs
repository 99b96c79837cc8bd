//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::syntax::Syntax;

/// Format stylesheets with CSScomb
#[derive(Parser)]
#[command(name = "combfmt")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use a specific config file instead of searching for .csscomb.json
    #[arg(
        short = 'C',
        long = "config",
        global = true,
        env = "COMBFMT_CONFIG",
        value_name = "PATH"
    )]
    pub config: Option<PathBuf>,

    /// Inline JSON configuration (overrides discovery; --config wins)
    #[arg(
        long = "config-json",
        global = true,
        env = "COMBFMT_CONFIG_JSON",
        value_name = "JSON"
    )]
    pub config_json: Option<String>,

    /// Path to the Node.js binary (default: `node` on PATH)
    #[arg(
        long = "node-path",
        global = true,
        env = "COMBFMT_NODE_PATH",
        value_name = "PATH"
    )]
    pub node_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format stylesheets in place, or filter stdin to stdout
    Fmt(FmtArgs),
    /// Show which configuration applies to a file or directory
    Config(ConfigArgs),
    /// Write a starter .csscomb.json to the current directory
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct FmtArgs {
    /// Files or directories to format ("-" or nothing reads stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Override syntax detection
    #[arg(short, long, value_name = "SYNTAX")]
    pub syntax: Option<Syntax>,

    /// Print the result to stdout instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    /// Output format for the run report
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Exclude paths matching these globs
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// File or directory to resolve for (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing .csscomb.json
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
