use crate::config::models::{InputFormat, OutputFormat};
use clap::{Args, Parser, Subcommand};
use quasistatic::engine::config::SelectionMode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Quasistatic Process Contributors",
    version,
    about = "Quasistatic CLI - Locates the stable states and transition barrier of sampled reaction-energy profiles.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used when locating states for many profiles.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate the left-hand state, barrier and right-hand state of one or more energy profiles.
    Locate(LocateArgs),
    /// List the strict local minima and maxima of a single energy profile.
    Extrema(ExtremaArgs),
}

/// Options controlling how profile files are read.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file format. Inferred from the file extension when omitted ('.csv' is CSV,
    /// anything else is whitespace-separated text).
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Column holding the energies: a header name (CSV only) or a zero-based index.
    #[arg(long, value_name = "NAME_OR_INDEX")]
    pub column: Option<String>,
}

/// Arguments for the `locate` subcommand.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Energy profile files to analyse.
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stable-state selection mode: 'absolute' or 'nearest-to-barrier'.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<SelectionMode>,

    /// Prefer the minimum closest to the barrier on each side (same as
    /// `--mode nearest-to-barrier`).
    #[arg(long, conflicts_with = "mode")]
    pub sensitive: bool,

    #[command(flatten)]
    pub input: InputArgs,

    /// Report format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of decimal places used for energies in the report.
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Treat a missing input file as a profile with a single missing sample.
    #[arg(long)]
    pub allow_missing_files: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S locator.mode=nearest-to-barrier
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `extrema` subcommand.
#[derive(Args, Debug)]
pub struct ExtremaArgs {
    /// Energy profile file to scan.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub input_options: InputArgs,
}
