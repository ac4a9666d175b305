//! CLI argument parsing for hyperion

use clap::Parser;
use std::path::PathBuf;

/// Hyperion - a line-oriented task tracker
///
/// Reads commands from stdin (todo, deadline, event, delete, list, mark,
/// unmark, find, bye) and saves the task list after every change.
#[derive(Parser, Debug)]
#[command(name = "hy")]
#[command(version, about = "Line-oriented task tracker", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Task file to use instead of the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
