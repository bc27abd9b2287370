use std::path::PathBuf;

use clap::Parser;

/// charjump: jump to any visible spot by typing a few characters.
///
/// Each line on stdin is the new value of the open prompt. An empty line
/// accepts it, end of input dismisses it. The target is printed as
/// `<file>:<line>:<column>`.
#[derive(Parser, Debug)]
#[command(name = "charjump", version, about)]
pub struct Args {
    /// Files to open, one view each.
    #[arg(required_unless_present = "print_config")]
    pub files: Vec<PathBuf>,

    /// First visible line (0-based) in every file.
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Number of visible lines in every file.
    #[arg(long, default_value_t = 40)]
    pub height: usize,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search debounce window override, in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u32>,

    /// Match the typed search text literally instead of as a regex.
    #[arg(long)]
    pub literal: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
