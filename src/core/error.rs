//! Error types for the shell.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FsError`] - Virtual filesystem and path resolution failures
//! - [`ShellError`] - Command dispatch and argument validation failures
//! - [`SeedError`] - Building the initial filesystem layout

use thiserror::Error;

/// Virtual filesystem errors.
///
/// The display strings are the conventional Unix wording, so handlers can
/// embed them directly: `rm: cannot remove 'x': No such file or directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path or name does not resolve.
    #[error("No such file or directory")]
    NotFound,
    /// Creating over an existing entry.
    #[error("File exists")]
    NameConflict,
    /// Removing a directory that still has children.
    #[error("Directory not empty")]
    NotEmpty,
    /// A directory was required.
    #[error("Not a directory")]
    NotADirectory,
    /// A file was required.
    #[error("Is a directory")]
    IsADirectory,
    /// The target is the working directory or one of its ancestors.
    #[error("Device or resource busy")]
    Busy,
    /// `.` or `..` used as an operation target.
    #[error("Invalid argument")]
    InvalidArgument,
}

/// Errors surfaced at the dispatch boundary.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Required arguments absent (`mkdir: missing operand`).
    #[error("{command}: missing {operand}")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
    },
    /// No handler registered under this name.
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ShellError {
    /// Shorthand for [`ShellError::MissingOperand`].
    pub fn missing(command: &'static str, operand: &'static str) -> Self {
        Self::MissingOperand { command, operand }
    }
}

/// Errors building the initial filesystem.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed layout: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed layout root must be a directory")]
    RootNotDirectory,
}
