//! Command registry and built-in commands.
//!
//! This module provides:
//! - [`Builtin`], the trait every command implements
//! - [`ExecContext`], the tree/session view handed to a running command
//! - [`CommandRegistry`], the name → handler map consulted by the dispatcher
//!
//! # Architecture
//!
//! ```text
//! CommandRegistry
//! ├── navigation  (ls, pwd, cd)
//! ├── files       (mkdir, rmdir, rm, touch, cp, mv, file)
//! ├── text        (cat, tac, grep, echo, find)
//! ├── simulated   (chmod, zip, unzip, tar, nano, vi, jed, apt, dnf)
//! └── system      (help, clear, date, whoami, neofetch, exit)
//! ```

mod files;
mod navigation;
mod result;
mod simulated;
mod system;
mod text;

pub use result::CommandResult;
pub use system::banner;

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use crate::config::ShellConfig;
use crate::core::error::{FsError, ShellError};
use crate::core::path;
use crate::core::{Session, VirtualFs};
use crate::models::Node;

// =============================================================================
// Builtin Trait
// =============================================================================

/// What kind of path a command's arguments name, for tab completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCompletion {
    /// Arguments are not paths.
    None,
    /// Arguments name directories.
    Directories,
    /// Arguments name files or directories.
    Any,
}

/// A command bound to a name in the registry.
pub trait Builtin {
    /// Name the command is registered and invoked under.
    fn name(&self) -> &'static str;

    /// Run to completion.
    ///
    /// Per-target problems are reported as output lines. An `Err` is
    /// recovered by the dispatcher and never ends the session.
    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError>;

    fn completion(&self) -> PathCompletion {
        PathCompletion::None
    }
}

// =============================================================================
// Execution Context
// =============================================================================

/// Everything a command may read or mutate while it runs.
pub struct ExecContext<'a> {
    pub fs: &'a mut VirtualFs,
    pub session: &'a mut Session,
    pub config: &'a ShellConfig,
    /// Registered command names, sorted.
    pub commands: &'a [&'static str],
}

impl ExecContext<'_> {
    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }

    /// Expand `~` and make `path` absolute (not normalized).
    pub fn absolute(&self, path: &str) -> String {
        path::absolutize(path, self.session.cwd(), &self.config.home)
    }

    pub fn resolve(&self, path: &str) -> Result<&Node, FsError> {
        self.fs.resolve(&self.absolute(path), path::ROOT)
    }

    pub fn canonicalize(&self, path: &str) -> Result<String, FsError> {
        self.fs.canonicalize(&self.absolute(path), path::ROOT)
    }

    /// Canonical parent directory and final name of `path`.
    pub fn parent_of(&self, path: &str) -> Result<(String, String), FsError> {
        self.fs.parent_of(&self.absolute(path), path::ROOT)
    }

    /// Refuse to detach the working directory or one of its ancestors.
    pub fn ensure_not_cwd(&self, abs: &str) -> Result<(), FsError> {
        if path::is_within(self.session.cwd(), abs) {
            Err(FsError::Busy)
        } else {
            Ok(())
        }
    }

    /// Simulated fixed delay, skipped when delays are disabled.
    pub fn pause(&self, duration: Duration) {
        if self.config.simulate_delays {
            thread::sleep(duration);
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Name → handler mapping, filled once at startup.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Box<dyn Builtin>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register a handler under its name, returning any handler it replaces.
    pub fn register(&mut self, handler: Box<dyn Builtin>) -> Option<Box<dyn Builtin>> {
        self.handlers.insert(handler.name(), handler)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.handlers.get(name).map(|b| b.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// All command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Register all built-in commands.
pub fn register_builtins(registry: &mut CommandRegistry) {
    let builtins: Vec<Box<dyn Builtin>> = vec![
        // Navigation
        Box::new(navigation::Ls),
        Box::new(navigation::Pwd),
        Box::new(navigation::Cd),
        // Files
        Box::new(files::Mkdir),
        Box::new(files::Rmdir),
        Box::new(files::Rm),
        Box::new(files::Touch),
        Box::new(files::Cp),
        Box::new(files::Mv),
        Box::new(files::FileInfo),
        // Text
        Box::new(text::Cat),
        Box::new(text::Tac),
        Box::new(text::Grep),
        Box::new(text::Echo),
        Box::new(text::Find),
        // Simulated tools
        Box::new(simulated::Chmod),
        Box::new(simulated::Zip),
        Box::new(simulated::Unzip),
        Box::new(simulated::Tar),
        Box::new(simulated::Editor::nano()),
        Box::new(simulated::Editor::vi()),
        Box::new(simulated::Editor::jed()),
        Box::new(simulated::Apt),
        Box::new(simulated::Dnf),
        // System
        Box::new(system::Help),
        Box::new(system::Clear),
        Box::new(system::Date),
        Box::new(system::Whoami),
        Box::new(system::Neofetch),
        Box::new(system::Exit),
    ];

    for builtin in builtins {
        registry.register(builtin);
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Filesystem, session and config for driving a single builtin.
    pub struct Fixture {
        pub fs: VirtualFs,
        pub session: Session,
        pub config: ShellConfig,
        pub names: Vec<&'static str>,
    }

    impl Fixture {
        pub fn new() -> Self {
            let config = ShellConfig::without_delays();
            Self {
                fs: VirtualFs::seeded().expect("seed layout"),
                session: Session::new(config.home.clone()),
                config,
                names: CommandRegistry::with_builtins().names(),
            }
        }

        pub fn in_dir(cwd: &str) -> Self {
            let mut fixture = Self::new();
            fixture.session.set_cwd(cwd);
            fixture
        }

        /// Run a builtin and return its unstyled output lines.
        pub fn run(&mut self, builtin: &dyn Builtin, args: &[&str]) -> Vec<String> {
            self.try_run(builtin, args)
                .expect("builtin should not fail")
                .lines()
        }

        pub fn try_run(
            &mut self,
            builtin: &dyn Builtin,
            args: &[&str],
        ) -> Result<CommandResult, ShellError> {
            let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            let mut ctx = ExecContext {
                fs: &mut self.fs,
                session: &mut self.session,
                config: &self.config,
                commands: &self.names,
            };
            builtin.run(&mut ctx, &args)
        }

        pub fn exists(&self, path: &str) -> bool {
            self.fs.exists(path, self.session.cwd())
        }
    }
}
