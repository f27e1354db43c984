use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tbx",
    about = "Toolbox text comparison: line, word and character diffs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files line by line (use `-` for stdin)
    Diff(DiffArgs),
    /// Compare two strings word by word
    Words(InlineArgs),
    /// Compare two strings character by character
    Chars(InlineArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Strip all whitespace before comparing lines
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,
    /// Compare lines case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
    /// Compare right against left
    #[arg(long)]
    pub swap: bool,
    /// Pair changed lines and highlight the words that differ
    #[arg(long)]
    pub inline: bool,
    /// Print prefixed rows instead of two columns
    #[arg(short, long)]
    pub unified: bool,
    /// Width of each column in the two-column view
    #[arg(long, default_value = "40")]
    pub width: usize,
    /// Refuse inputs larger than this many characters in total
    #[arg(long)]
    pub max_chars: Option<usize>,
    /// Refuse alignments that need more than this many table cells
    #[arg(long)]
    pub max_cells: Option<usize>,
    /// TOML file with default options and limits
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Exit with status 1 when the inputs differ
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Args)]
pub struct InlineArgs {
    pub left: String,
    pub right: String,
}
