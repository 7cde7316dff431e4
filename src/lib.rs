//! Orea: a simulated Unix-like shell over an in-memory filesystem.
//!
//! The [`Shell`] owns a [`VirtualFs`] tree, the session state and a
//! registry of built-in commands. Feed it raw lines with
//! [`Shell::dispatch`] and render the returned [`CommandResult`].
//!
//! ```
//! use orea::{Shell, ShellConfig};
//!
//! let mut shell = Shell::new(ShellConfig::without_delays()).unwrap();
//! shell.dispatch("mkdir /home/user/projects/demo");
//! let listing = shell.dispatch("ls /home/user/projects");
//! assert_eq!(listing.lines(), vec!["demo/  python_app/"]);
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod repl;
mod utils;

pub use crate::config::ShellConfig;
pub use crate::core::{
    AutocompleteResult, Builtin, CommandRegistry, CommandResult, ExecContext, FsError,
    PathCompletion, SeedError, Session, Shell, ShellError, VirtualFs,
};
pub use crate::models::OutputLine;
