//! Task model: to-dos, deadlines and events
//!
//! Every task renders two ways: the human-readable form shown in replies
//! (`[D][ ] submit report (by: Sunday)`) and the pipe-delimited storage line
//! written to the task file (`D | 0 | submit report | Sunday`).

use std::fmt;

use crate::command::CommandWord;
use crate::error::{HyperionError, Result};

/// Separator between fields of a storage line
pub const FIELD_SEPARATOR: &str = "| ";

/// Character that cannot appear in a date or event bound
const FIELD_DELIMITER: char = '|';

const BY_TOKEN: &str = "/by";
const FROM_TOKEN: &str = "/from";
const TO_TOKEN: &str = "/to";

/// Type-specific part of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter tag used in both renderings
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// A single trackable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Deadline { by: by.into() })
    }

    pub fn event(description: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    /// Build a to-do from the remainder of a `todo` command
    pub fn parse_todo(raw: &str) -> Result<Self> {
        let description = raw.trim();
        if description.is_empty() {
            return Err(HyperionError::empty_description(CommandWord::Todo.as_str()));
        }
        Ok(Self::todo(description))
    }

    /// Build a deadline from `<description> /by <date>`
    ///
    /// The `/by` token must appear exactly once and the date may not contain `|`.
    pub fn parse_deadline(raw: &str) -> Result<Self> {
        let word = CommandWord::Deadline;
        let invalid = || HyperionError::invalid_syntax(word.as_str(), word.usage());

        let parts: Vec<&str> = raw.split(BY_TOKEN).collect();
        let [description, by] = parts.as_slice() else {
            return Err(invalid());
        };
        let (description, by) = (description.trim(), by.trim());
        if by.is_empty() || by.contains(FIELD_DELIMITER) {
            return Err(invalid());
        }
        if description.is_empty() {
            return Err(HyperionError::empty_description(word.as_str()));
        }
        Ok(Self::deadline(description, by))
    }

    /// Build an event from `<description> /from <start> /to <end>`
    ///
    /// Splits on the first `/from`, then on the first `/to` after it. Neither
    /// bound may contain `|`.
    pub fn parse_event(raw: &str) -> Result<Self> {
        let word = CommandWord::Event;
        let invalid = || HyperionError::invalid_syntax(word.as_str(), word.usage());

        let (description, range) = raw.split_once(FROM_TOKEN).ok_or_else(invalid)?;
        let (from, to) = range.split_once(TO_TOKEN).ok_or_else(invalid)?;
        let (description, from, to) = (description.trim(), from.trim(), to.trim());
        if [from, to]
            .iter()
            .any(|bound| bound.is_empty() || bound.contains(FIELD_DELIMITER))
        {
            return Err(invalid());
        }
        if description.is_empty() {
            return Err(HyperionError::empty_description(word.as_str()));
        }
        Ok(Self::event(description, from, to))
    }

    /// Rebuild a task from one line of the task file
    ///
    /// `line_no` is 1-based and only used for error reporting. The type-specific
    /// fields never contain `|`, so they are taken from the right-hand end of
    /// the record and a description containing the separator still loads.
    pub fn from_storage_line(line: &str, line_no: usize) -> Result<Self> {
        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let (Some(tag), Some(done), Some(rest)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(HyperionError::corrupt(line_no, "expected at least 3 fields"));
        };

        let done = match done.trim() {
            "0" => false,
            "1" => true,
            other => {
                return Err(HyperionError::corrupt(
                    line_no,
                    format!("done flag must be 0 or 1, found '{}'", other),
                ));
            }
        };

        let mut task = match tag.trim() {
            "T" => Self::todo(rest.trim()),
            "D" => {
                let (description, by) = rest
                    .rsplit_once(FIELD_SEPARATOR)
                    .ok_or_else(|| HyperionError::corrupt(line_no, "deadline is missing its due date"))?;
                Self::deadline(description.trim(), by.trim())
            }
            "E" => {
                let mut fields = rest.rsplitn(3, FIELD_SEPARATOR);
                let (Some(to), Some(from), Some(description)) = (fields.next(), fields.next(), fields.next()) else {
                    return Err(HyperionError::corrupt(line_no, "event is missing its start or end"));
                };
                Self::event(description.trim(), from.trim(), to.trim())
            }
            other => {
                return Err(HyperionError::corrupt(line_no, format!("unknown task type '{}'", other)));
            }
        };
        task.done = done;
        Ok(task)
    }

    /// Render the pipe-delimited record written to the task file
    pub fn storage_line(&self) -> String {
        let done = if self.done { 1 } else { 0 };
        let mut line = format!("{} | {} | {}", self.kind.tag(), done, self.description);
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                line.push_str(" | ");
                line.push_str(by);
            }
            TaskKind::Event { from, to } => {
                line.push_str(" | ");
                line.push_str(from);
                line.push_str(" | ");
                line.push_str(to);
            }
        }
        line
    }

    /// Human-readable rendering, same as `Display`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), marker, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_describe_each_kind() {
        assert_eq!(Task::todo("read book").describe(), "[T][ ] read book");
        assert_eq!(
            Task::deadline("submit report", "Sunday").describe(),
            "[D][ ] submit report (by: Sunday)"
        );
        assert_eq!(
            Task::event("trip", "Mon", "Fri").describe(),
            "[E][ ] trip (from: Mon to: Fri)"
        );
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut task = Task::todo("read book");
        task.mark_done();
        task.mark_done();
        assert_eq!(task.describe(), "[T][X] read book");

        task.mark_not_done();
        task.mark_not_done();
        assert_eq!(task.describe(), "[T][ ] read book");
    }

    #[test]
    fn test_storage_line_format() {
        let mut event = Task::event("trip", "Mon", "Fri");
        event.mark_done();

        assert_eq!(Task::todo("read book").storage_line(), "T | 0 | read book");
        assert_eq!(
            Task::deadline("submit report", "Sunday").storage_line(),
            "D | 0 | submit report | Sunday"
        );
        assert_eq!(event.storage_line(), "E | 1 | trip | Mon | Fri");
    }

    #[test]
    fn test_from_storage_line() {
        let task = Task::from_storage_line("D | 0 | submit report | Sunday", 1).unwrap();
        assert_eq!(task.describe(), "[D][ ] submit report (by: Sunday)");

        let task = Task::from_storage_line("E | 1 | trip | Mon | Fri", 1).unwrap();
        assert!(task.is_done());
        assert_eq!(task.kind(), &TaskKind::Event {
            from: "Mon".to_string(),
            to: "Fri".to_string()
        });
    }

    #[test]
    fn test_from_storage_line_keeps_separator_in_description() {
        let task = Task::deadline("pick a | b", "noon");
        let parsed = Task::from_storage_line(&task.storage_line(), 1).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_accepted_input_reloads_unchanged() {
        for task in [
            Task::parse_deadline("pay | rent /by Fri").unwrap(),
            Task::parse_event("trip | family /from Mon /to Fri").unwrap(),
            Task::parse_todo("a | b | c").unwrap(),
        ] {
            let parsed = Task::from_storage_line(&task.storage_line(), 1).unwrap();
            assert_eq!(parsed, task);
        }
    }

    #[test]
    fn test_from_storage_line_rejects_corrupt_records() {
        for (line, needle) in [
            ("X | 0 | mystery", "unknown task type 'X'"),
            ("T | maybe | read book", "done flag"),
            ("T | 2 | read book", "done flag"),
            ("D | 0 | no date", "due date"),
            ("E | 0 | trip | Mon", "start or end"),
            ("T | 0", "at least 3 fields"),
        ] {
            let err = Task::from_storage_line(line, 7).unwrap_err();
            assert!(matches!(err, HyperionError::CorruptFile { line: 7, .. }), "{line}");
            assert!(err.to_string().contains(needle), "{line}: {err}");
        }
    }

    #[test]
    fn test_parse_todo() {
        assert_eq!(Task::parse_todo(" read book ").unwrap(), Task::todo("read book"));
        assert!(matches!(
            Task::parse_todo("   "),
            Err(HyperionError::EmptyDescription { .. })
        ));
    }

    #[test]
    fn test_parse_deadline() {
        let task = Task::parse_deadline("submit report /by Sunday").unwrap();
        assert_eq!(task, Task::deadline("submit report", "Sunday"));

        for raw in [
            "submit report",
            "a /by b /by c",
            "submit report /by  ",
            "pay /by Fri | Sat",
            "pay /by Fri|Sat",
        ] {
            assert!(
                matches!(Task::parse_deadline(raw), Err(HyperionError::InvalidSyntax { .. })),
                "{raw}"
            );
        }
        assert!(matches!(
            Task::parse_deadline(" /by Sunday"),
            Err(HyperionError::EmptyDescription { .. })
        ));
    }

    #[test]
    fn test_parse_event() {
        let task = Task::parse_event("trip /from Mon /to Fri").unwrap();
        assert_eq!(task, Task::event("trip", "Mon", "Fri"));

        let task = Task::parse_event("talk /from 2pm /to 3pm /to 4pm").unwrap();
        assert_eq!(task, Task::event("talk", "2pm", "3pm /to 4pm"));

        for raw in [
            "trip",
            "trip /from Mon",
            "trip /to Fri /from Mon",
            "trip /from /to Fri",
            "trip /from Mon | am /to Fri",
            "trip /from Mon /to Fri | pm",
        ] {
            assert!(
                matches!(Task::parse_event(raw), Err(HyperionError::InvalidSyntax { .. })),
                "{raw}"
            );
        }
        assert!(matches!(
            Task::parse_event("/from Mon /to Fri"),
            Err(HyperionError::EmptyDescription { .. })
        ));
    }

    fn arb_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]([A-Za-z0-9 ,.]{0,16}[A-Za-z0-9])?"
    }

    fn arb_description() -> impl Strategy<Value = String> {
        "[A-Za-z0-9|]([A-Za-z0-9 ,.|]{0,16}[A-Za-z0-9|])?"
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        let kind = prop_oneof![
            Just(TaskKind::Todo),
            arb_text().prop_map(|by| TaskKind::Deadline { by }),
            (arb_text(), arb_text()).prop_map(|(from, to)| TaskKind::Event { from, to }),
        ];
        (arb_description(), any::<bool>(), kind).prop_map(|(description, done, kind)| Task {
            description,
            done,
            kind,
        })
    }

    proptest! {
        #[test]
        fn prop_storage_line_round_trips(task in arb_task()) {
            let parsed = Task::from_storage_line(&task.storage_line(), 1).unwrap();
            prop_assert_eq!(parsed, task);
        }
    }
}
