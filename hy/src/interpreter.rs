//! One-line command interpreter
//!
//! Each call to [`Interpreter::handle`] parses a single line, applies it to the
//! task list, saves after any mutation and returns the reply to show.

use log::{debug, warn};

use crate::command::Command;
use crate::error::Result;
use crate::messages;
use crate::storage::Storage;
use crate::tasklist::TaskList;

/// What the session should print after one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_error: bool,
    pub exit: bool,
}

impl Reply {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            exit: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            exit: false,
        }
    }

    fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            exit: true,
        }
    }
}

/// Owns the task list and the storage it is saved to
pub struct Interpreter {
    tasks: TaskList,
    storage: Storage,
}

impl Interpreter {
    pub fn new(tasks: TaskList, storage: Storage) -> Self {
        Self { tasks, storage }
    }

    /// Process one line; failures become error replies
    pub fn handle(&mut self, line: &str) -> Reply {
        match self.execute(line) {
            Ok(reply) => reply,
            Err(err) => {
                if err.is_user_error() {
                    debug!("Command rejected: {}", err);
                } else {
                    warn!("Command failed: {}", err);
                }
                Reply::error(err.to_string())
            }
        }
    }

    /// Process one line, returning the first failure
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let command = Command::parse(line)?;
        let word = command.word();
        debug!("Executing {}", word);

        // Replies render the snapshot each mutation pushed, popping it so the
        // history only ever holds the entry for the command in progress.
        let text = match command {
            Command::Todo(raw) => {
                let task = self.tasks.add_todo(&raw)?.clone();
                let task = self.tasks.pop_last_added().unwrap_or(task);
                messages::added(&task, self.tasks.len())
            }
            Command::Deadline(raw) => {
                let task = self.tasks.add_deadline(&raw)?.clone();
                let task = self.tasks.pop_last_added().unwrap_or(task);
                messages::added(&task, self.tasks.len())
            }
            Command::Event(raw) => {
                let task = self.tasks.add_event(&raw)?.clone();
                let task = self.tasks.pop_last_added().unwrap_or(task);
                messages::added(&task, self.tasks.len())
            }
            Command::Delete(index) => {
                let task = self.tasks.delete(&index)?;
                let task = self.tasks.pop_last_deleted().unwrap_or(task);
                messages::removed(&task, self.tasks.len())
            }
            Command::Mark(index) => {
                let task = self.tasks.mark(&index)?.clone();
                messages::marked(&self.tasks.pop_last_marked().unwrap_or(task))
            }
            Command::Unmark(index) => {
                let task = self.tasks.unmark(&index)?.clone();
                messages::unmarked(&self.tasks.pop_last_unmarked().unwrap_or(task))
            }
            Command::List => self.tasks.list(),
            Command::Find(needle) => {
                let matches = TaskList::new(self.tasks.find(&needle));
                messages::found(&matches.list())
            }
            Command::Bye => return Ok(Reply::exit(messages::FAREWELL)),
        };

        if word.is_mutating() {
            return Ok(Reply::ok(self.save_then(text)));
        }
        Ok(Reply::ok(text))
    }

    /// Save the list and return `text`, noting a failed save
    ///
    /// The in-memory change stands even when the save fails.
    fn save_then(&self, text: String) -> String {
        match self.storage.save(&self.tasks) {
            Ok(()) => text,
            Err(err) => {
                warn!("Failed to save tasks: {}", err);
                format!("{}\n{}", text, messages::save_failed(&err.to_string()))
            }
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}
