//! Hyperion - line-oriented task tracker
//!
//! Reads one command per line, keeps an ordered list of to-dos, deadlines and
//! events, and rewrites a flat task file after every change.
//!
//! # Task file
//!
//! ```text
//! T | 0 | read book
//! D | 1 | submit report | Sunday
//! E | 0 | trip | Mon | Fri
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hyperion::{Interpreter, Storage, TaskList};
//!
//! let storage = Storage::open("data/tasks.txt");
//! let tasks = TaskList::new(storage.load()?);
//! let mut interpreter = Interpreter::new(tasks, storage);
//! let reply = interpreter.handle("deadline submit report /by Sunday");
//! println!("{}", reply.text);
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod messages;
pub mod repl;
pub mod storage;
pub mod task;
pub mod tasklist;

pub use command::{Command, CommandWord};
pub use error::{HyperionError, Result};
pub use interpreter::{Interpreter, Reply};
pub use storage::{LoadOutcome, Storage};
pub use task::{Task, TaskKind};
pub use tasklist::TaskList;

/// File name of the task file inside the data directory
pub const DEFAULT_DATA_FILE_NAME: &str = "tasks.txt";
