//! Session loop

use std::io::{BufRead, Write};

use colored::Colorize;
use eyre::{Context, Result};
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::interpreter::{Interpreter, Reply};
use crate::messages;

/// Feeds input lines to an interpreter and prints its replies
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    pub fn greet(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", messages::GREETING)?;
        writeln!(out)
    }

    /// Read newline-terminated commands until `bye` or end of input
    pub fn run_lines(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.respond(&line, out)? {
                return Ok(());
            }
        }
        debug!("Input ended without bye");
        Ok(())
    }

    /// Read commands with line editing and history
    ///
    /// Ctrl+C clears the current line; Ctrl+D ends the session.
    pub fn run_interactive(&mut self, out: &mut impl Write) -> Result<()> {
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            match rl.readline(&format!("{} ", ">".bright_green())) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if self.respond(&line, out)? {
                        return Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    writeln!(out, "^C")?;
                }
                Err(ReadlineError::Eof) => {
                    writeln!(out)?;
                    return Ok(());
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }
    }

    /// Handle one line; returns true when the session should end
    fn respond(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let reply = self.interpreter.handle(line);
        print_reply(&reply, out).context("Failed to write reply")?;
        Ok(reply.exit)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

fn print_reply(reply: &Reply, out: &mut impl Write) -> std::io::Result<()> {
    if reply.is_error {
        writeln!(out, "{} {}", "✗".red(), reply.text)?;
    } else {
        writeln!(out, "{}", reply.text)?;
    }
    writeln!(out)?;
    out.flush()
}
