//! In-memory task list
//!
//! Tasks keep insertion order. External indices are 1-based text, converted
//! with `index = n - 1` and validated before anything is changed.

use log::debug;

use crate::command::CommandWord;
use crate::error::{HyperionError, Result};
use crate::task::Task;

/// Header line of every rendered list
pub const LIST_HEADER: &str = "Here are the tasks in your list:";

/// Snapshots of the tasks touched by recent mutations, newest last
#[derive(Debug, Default)]
struct History {
    added: Vec<Task>,
    deleted: Vec<Task>,
    marked: Vec<Task>,
    unmarked: Vec<Task>,
}

/// Ordered collection of tasks plus a history of what each mutation touched
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    history: History,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            history: History::default(),
        }
    }

    pub fn add_todo(&mut self, raw: &str) -> Result<&Task> {
        let task = Task::parse_todo(raw)?;
        Ok(self.push(task))
    }

    pub fn add_deadline(&mut self, raw: &str) -> Result<&Task> {
        let task = Task::parse_deadline(raw)?;
        Ok(self.push(task))
    }

    pub fn add_event(&mut self, raw: &str) -> Result<&Task> {
        let task = Task::parse_event(raw)?;
        Ok(self.push(task))
    }

    fn push(&mut self, task: Task) -> &Task {
        debug!("Adding task: {}", task);
        self.history.added.push(task.clone());
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove the task at a 1-based index and return it
    pub fn delete(&mut self, index_text: &str) -> Result<Task> {
        let index = self.resolve_index(CommandWord::Delete, index_text)?;
        let task = self.tasks.remove(index);
        debug!("Deleted task {}: {}", index + 1, task);
        self.history.deleted.push(task.clone());
        Ok(task)
    }

    /// Mark the task at a 1-based index as done
    pub fn mark(&mut self, index_text: &str) -> Result<&Task> {
        let index = self.resolve_marking_index(CommandWord::Mark, index_text)?;
        let task = &mut self.tasks[index];
        task.mark_done();
        self.history.marked.push(task.clone());
        Ok(task)
    }

    /// Mark the task at a 1-based index as not done
    pub fn unmark(&mut self, index_text: &str) -> Result<&Task> {
        let index = self.resolve_marking_index(CommandWord::Unmark, index_text)?;
        let task = &mut self.tasks[index];
        task.mark_not_done();
        self.history.unmarked.push(task.clone());
        Ok(task)
    }

    fn resolve_marking_index(&self, word: CommandWord, index_text: &str) -> Result<usize> {
        if index_text.trim().is_empty() {
            return Err(HyperionError::empty_description(word.as_str()));
        }
        self.resolve_index(word, index_text)
    }

    fn resolve_index(&self, word: CommandWord, index_text: &str) -> Result<usize> {
        let invalid = || HyperionError::invalid_syntax(word.as_str(), word.usage());
        let number: i64 = index_text.trim().parse().map_err(|_| invalid())?;
        let index = number
            .checked_sub(1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(invalid)?;
        if index >= self.tasks.len() {
            return Err(invalid());
        }
        Ok(index)
    }

    /// Every task whose rendering contains `needle`, in list order
    pub fn find(&self, needle: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.describe().contains(needle))
            .cloned()
            .collect()
    }

    /// Render the numbered list, one task per line after the header
    pub fn list(&self) -> String {
        let mut out = String::from(LIST_HEADER);
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, task));
        }
        out
    }

    /// The task file contents: one storage line per task, newline-terminated
    pub fn to_storage_string(&self) -> String {
        self.tasks
            .iter()
            .map(|task| format!("{}\n", task.storage_line()))
            .collect()
    }

    pub fn pop_last_added(&mut self) -> Option<Task> {
        self.history.added.pop()
    }

    pub fn pop_last_deleted(&mut self) -> Option<Task> {
        self.history.deleted.pop()
    }

    pub fn pop_last_marked(&mut self) -> Option<Task> {
        self.history.marked.pop()
    }

    pub fn pop_last_unmarked(&mut self) -> Option<Task> {
        self.history.unmarked.pop()
    }

    /// Number of snapshots waiting across all four history stacks
    pub fn history_len(&self) -> usize {
        let h = &self.history;
        h.added.len() + h.deleted.len() + h.marked.len() + h.unmarked.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
