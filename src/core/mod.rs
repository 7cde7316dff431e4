//! Core shell logic.
//!
//! This module provides:
//! - [`Shell`] context and its [`dispatch`](Shell::dispatch) entry point
//! - [`VirtualFs`] in-memory filesystem and the [`path`] helpers
//! - [`CommandRegistry`] and the [`Builtin`] commands
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod path;
mod session;
mod shell;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint, word_start};
pub use commands::{
    Builtin, CommandRegistry, CommandResult, ExecContext, PathCompletion, register_builtins,
};
pub use error::{FsError, SeedError, ShellError};
pub use filesystem::VirtualFs;
pub use parser::{ParsedCommand, parse_input};
pub use session::Session;
pub use shell::Shell;
