//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`Node`], [`Directory`], [`File`], [`SeedNode`] - Virtual filesystem representation
//! - [`OutputLine`], [`ListEntry`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{Directory, DisplayPermissions, File, Node, SeedNode};
pub use terminal::{ListEntry, OutputLine, TextStyle};
