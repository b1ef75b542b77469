use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::record::Field;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Completeness rule for tube-filtered groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompletenessChoice {
    /// Group size equals the number of required tubes
    ExactCount,
    /// One record for every required tube
    ExactCoverage,
}

#[derive(Parser, Debug)]
#[command(name = "flowdir")]
#[command(author, version, about = "Inventory and group flow cytometry LMD result folders")]
#[command(long_about = "Scans <root>/<group>/<file> trees for LMD files named \
    '<digits>-<digits>-<material> CLL 9F 0<tube>...LMD' and groups the results.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Nothing found (with --fail-on-empty)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every matching file under the given roots
    Scan(ScanArgs),

    /// Scan, then group the records by a field
    Group(GroupArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Options shared by every command that scans.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// Root directories containing one subdirectory per group
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// Dataset tag for every record (default: each root's directory name)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Require the whole filename to match the grammar
    #[arg(long)]
    pub anchored: bool,

    /// Sort directory entries by name
    #[arg(long)]
    pub sort: bool,

    /// Fail when a root directory does not exist
    #[arg(long)]
    pub require_root: bool,

    /// Exit with code 1 when nothing is found
    #[arg(long)]
    pub fail_on_empty: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub scan: ScanOptions,
}

#[derive(Args, Debug)]
pub struct GroupArgs {
    #[command(flatten)]
    pub scan: ScanOptions,

    /// Field to group on (overrides config)
    #[arg(short, long, value_enum)]
    pub by: Option<Field>,

    /// Required tube numbers, comma-separated (e.g. 1,2,3)
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..=9))]
    pub tubes: Option<Vec<u8>>,

    /// Ignore configured tubes and keep every group
    #[arg(long, conflicts_with = "tubes")]
    pub all_tubes: bool,

    /// Completeness rule for tube-filtered groups (overrides config)
    #[arg(long, value_enum)]
    pub policy: Option<CompletenessChoice>,

    /// Sort group keys instead of keeping first-seen order
    #[arg(long)]
    pub sorted_keys: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".flowdir.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
