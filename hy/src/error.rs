//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while interpreting a command line or reading the task file
#[derive(Debug, Error)]
pub enum HyperionError {
    #[error("Please type a command")]
    EmptyInput,

    #[error("I don't know what '{command}' means")]
    CommandNotFound { command: String },

    #[error("Invalid syntax for '{command}'. Usage: {usage}")]
    InvalidSyntax { command: String, usage: &'static str },

    #[error("The description of '{command}' cannot be empty")]
    EmptyDescription { command: String },

    #[error("Task file is corrupted at line {line}: {reason}")]
    CorruptFile { line: usize, reason: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HyperionError {
    pub(crate) fn invalid_syntax(command: &str, usage: &'static str) -> Self {
        HyperionError::InvalidSyntax {
            command: command.to_string(),
            usage,
        }
    }

    pub(crate) fn empty_description(command: &str) -> Self {
        HyperionError::EmptyDescription {
            command: command.to_string(),
        }
    }

    pub(crate) fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        HyperionError::CorruptFile {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this error came from the user's input rather than the file system
    pub fn is_user_error(&self) -> bool {
        match self {
            HyperionError::EmptyInput
            | HyperionError::CommandNotFound { .. }
            | HyperionError::InvalidSyntax { .. }
            | HyperionError::EmptyDescription { .. } => true,
            HyperionError::CorruptFile { .. } | HyperionError::Io { .. } => false,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HyperionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_syntax_message() {
        let err = HyperionError::invalid_syntax("delete", "delete <task number>");

        let msg = err.to_string();
        assert!(msg.contains("'delete'"));
        assert!(msg.contains("delete <task number>"));
    }

    #[test]
    fn test_corrupt_file_message() {
        let err = HyperionError::corrupt(3, "unknown task type 'X'");

        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("'X'"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(HyperionError::EmptyInput.is_user_error());
        assert!(HyperionError::empty_description("mark").is_user_error());
        assert!(!HyperionError::corrupt(1, "bad").is_user_error());
        assert!(
            !HyperionError::Io {
                path: PathBuf::from("/tmp/tasks.txt"),
                source: std::io::Error::other("disk full"),
            }
            .is_user_error()
        );
    }
}
