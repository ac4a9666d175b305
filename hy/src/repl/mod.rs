//! Input loop for Hyperion
//!
//! Reads commands from an interactive line editor when stdin is a terminal,
//! or line by line from stdin otherwise.

mod session;

pub use session::Session;

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use eyre::{Context, Result};
use log::info;

use crate::config::Config;
use crate::interpreter::Interpreter;
use crate::storage::Storage;
use crate::tasklist::TaskList;

/// Load the task file named by `config` and run a session until `bye` or end of input
///
/// This is the main entry point for the `hy` binary.
pub fn run(config: &Config) -> Result<()> {
    let storage = Storage::open(&config.data_file);
    let mut stdout = io::stdout();

    let (tasks, load_warning) = match storage.load_partial() {
        Ok(outcome) => {
            let warning = outcome.error.map(|err| {
                format!(
                    "{} (continuing with the {} tasks read before it)",
                    err,
                    outcome.tasks.len()
                )
            });
            (outcome.tasks, warning)
        }
        Err(err) => (Vec::new(), Some(format!("{} (starting with an empty list)", err))),
    };
    info!("Starting session with {} tasks", tasks.len());

    let mut session = Session::new(Interpreter::new(TaskList::new(tasks), storage));
    session.greet(&mut stdout).context("Failed to write greeting")?;
    if let Some(warning) = load_warning {
        writeln!(stdout, "{} {}", "!".yellow(), warning).context("Failed to write load warning")?;
        writeln!(stdout).context("Failed to write load warning")?;
    }

    if io::stdin().is_terminal() {
        session.run_interactive(&mut stdout)
    } else {
        session.run_lines(io::stdin().lock(), &mut stdout)
    }
}
