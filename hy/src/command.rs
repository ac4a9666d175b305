//! Command words and line tokenizing

use std::fmt;
use std::str::FromStr;

use crate::error::HyperionError;

/// The first word of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    Todo,
    Deadline,
    Event,
    Delete,
    List,
    Mark,
    Unmark,
    Find,
    Bye,
}

impl CommandWord {
    pub const ALL: [CommandWord; 9] = [
        CommandWord::Todo,
        CommandWord::Deadline,
        CommandWord::Event,
        CommandWord::Delete,
        CommandWord::List,
        CommandWord::Mark,
        CommandWord::Unmark,
        CommandWord::Find,
        CommandWord::Bye,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Todo => "todo",
            CommandWord::Deadline => "deadline",
            CommandWord::Event => "event",
            CommandWord::Delete => "delete",
            CommandWord::List => "list",
            CommandWord::Mark => "mark",
            CommandWord::Unmark => "unmark",
            CommandWord::Find => "find",
            CommandWord::Bye => "bye",
        }
    }

    /// One-line usage shown when the arguments are malformed
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Todo => "todo <description>",
            CommandWord::Deadline => "deadline <description> /by <date>",
            CommandWord::Event => "event <description> /from <start> /to <end>",
            CommandWord::Delete => "delete <task number>",
            CommandWord::List => "list",
            CommandWord::Mark => "mark <task number>",
            CommandWord::Unmark => "unmark <task number>",
            CommandWord::Find => "find <text>",
            CommandWord::Bye => "bye",
        }
    }

    /// Whether running this command changes the task list
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            CommandWord::Todo
                | CommandWord::Deadline
                | CommandWord::Event
                | CommandWord::Delete
                | CommandWord::Mark
                | CommandWord::Unmark
        )
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandWord {
    type Err = HyperionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandWord::ALL
            .into_iter()
            .find(|word| word.as_str() == s)
            .ok_or_else(|| HyperionError::CommandNotFound { command: s.to_string() })
    }
}

/// A parsed input line: the command word plus the text after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Todo(String),
    Deadline(String),
    Event(String),
    Delete(String),
    List,
    Mark(String),
    Unmark(String),
    Find(String),
    Bye,
}

impl Command {
    /// Tokenize one input line
    ///
    /// The line is split at the first space; the remainder is empty when
    /// there is no space.
    pub fn parse(line: &str) -> Result<Self, HyperionError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(HyperionError::EmptyInput);
        }

        let (word, remainder) = line.split_once(' ').unwrap_or((line, ""));
        let remainder = remainder.to_string();
        let command = match word.parse::<CommandWord>()? {
            CommandWord::Todo => Command::Todo(remainder),
            CommandWord::Deadline => Command::Deadline(remainder),
            CommandWord::Event => Command::Event(remainder),
            CommandWord::Delete => Command::Delete(remainder),
            CommandWord::List => Command::List,
            CommandWord::Mark => Command::Mark(remainder),
            CommandWord::Unmark => Command::Unmark(remainder),
            CommandWord::Find => Command::Find(remainder),
            CommandWord::Bye => Command::Bye,
        };
        Ok(command)
    }

    pub fn word(&self) -> CommandWord {
        match self {
            Command::Todo(_) => CommandWord::Todo,
            Command::Deadline(_) => CommandWord::Deadline,
            Command::Event(_) => CommandWord::Event,
            Command::Delete(_) => CommandWord::Delete,
            Command::List => CommandWord::List,
            Command::Mark(_) => CommandWord::Mark,
            Command::Unmark(_) => CommandWord::Unmark,
            Command::Find(_) => CommandWord::Find,
            Command::Bye => CommandWord::Bye,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_at_first_space() {
        assert_eq!(
            Command::parse("todo read the book").unwrap(),
            Command::Todo("read the book".to_string())
        );
        assert_eq!(
            Command::parse("deadline submit report /by Sunday").unwrap(),
            Command::Deadline("submit report /by Sunday".to_string())
        );
        assert_eq!(Command::parse("mark").unwrap(), Command::Mark(String::new()));
    }

    #[test]
    fn test_parse_ignores_remainder_for_list_and_bye() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("list everything").unwrap(), Command::List);
        assert_eq!(Command::parse("bye\n").unwrap(), Command::Bye);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(Command::parse(""), Err(HyperionError::EmptyInput)));
        assert!(matches!(Command::parse("   \r\n"), Err(HyperionError::EmptyInput)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("blah 1").unwrap_err();
        assert!(matches!(err, HyperionError::CommandNotFound { ref command } if command == "blah"));

        // command words are case-sensitive
        assert!(matches!(
            Command::parse("LIST"),
            Err(HyperionError::CommandNotFound { .. })
        ));
    }

    #[test]
    fn test_word_round_trip() {
        for word in CommandWord::ALL {
            assert_eq!(word.as_str().parse::<CommandWord>().unwrap(), word);
            assert!(word.usage().starts_with(word.as_str()));
        }
    }

    #[test]
    fn test_is_mutating() {
        assert!(CommandWord::Delete.is_mutating());
        assert!(CommandWord::Unmark.is_mutating());
        assert!(!CommandWord::List.is_mutating());
        assert!(!CommandWord::Find.is_mutating());
        assert!(!CommandWord::Bye.is_mutating());
    }
}
