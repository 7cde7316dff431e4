//! The shell context: filesystem, session, command registry and config.

use crate::config::{ShellConfig, ansi};
use crate::core::commands::{self, CommandRegistry, CommandResult, ExecContext};
use crate::core::error::{SeedError, ShellError};
use crate::core::parser::parse_input;
use crate::core::path::ROOT;
use crate::core::{Session, VirtualFs};
use crate::models::OutputLine;

/// One interactive shell.
///
/// Owns everything a command can touch, so several shells can live in one
/// process without sharing state.
pub struct Shell {
    fs: VirtualFs,
    session: Session,
    registry: CommandRegistry,
    config: ShellConfig,
}

impl Shell {
    /// Start a shell over the embedded seed layout, in the home directory.
    pub fn new(config: ShellConfig) -> Result<Self, SeedError> {
        Ok(Self::with_fs(VirtualFs::seeded()?, config))
    }

    /// Start a shell over a caller-supplied tree.
    ///
    /// The session starts in the configured home, or at `/` when the
    /// tree has no such directory.
    pub fn with_fs(fs: VirtualFs, config: ShellConfig) -> Self {
        let cwd = if fs.is_directory(&config.home, ROOT) {
            config.home.clone()
        } else {
            tracing::warn!("home {} is not a directory, starting at /", config.home);
            ROOT.to_string()
        };
        tracing::info!(user = %config.user, cwd = %cwd, "session started");

        Self {
            fs,
            session: Session::new(cwd),
            registry: CommandRegistry::with_builtins(),
            config,
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Register an extra command, replacing any built-in of the same name.
    pub fn register(&mut self, handler: Box<dyn commands::Builtin>) {
        if let Some(previous) = self.registry.register(handler) {
            tracing::debug!("replaced command {}", previous.name());
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// End the session from outside a command (end of input).
    pub fn terminate(&mut self) {
        self.session.terminate();
        tracing::info!("session ended");
    }

    /// `user@host:cwd$ ` with the user/host in green and the path in blue.
    pub fn prompt(&self) -> String {
        format!(
            "{}{}@{}{}:{}{}{}$ ",
            ansi::USER_HOST,
            self.config.user,
            self.config.host,
            ansi::RESET,
            ansi::DIRECTORY,
            self.session.cwd(),
            ansi::RESET
        )
    }

    /// Lines shown before the first prompt.
    pub fn banner(&self) -> Vec<OutputLine> {
        commands::banner()
    }

    /// Run one raw input line.
    ///
    /// Never fails: unknown commands and handler errors become error lines
    /// and the session stays alive. Blank lines are ignored entirely.
    pub fn dispatch(&mut self, line: &str) -> CommandResult {
        let Some(parsed) = parse_input(line) else {
            return CommandResult::empty();
        };
        self.session.record(line);

        tracing::debug!(
            command = %parsed.name,
            args = ?parsed.args,
            cwd = %self.session.cwd(),
            "dispatch"
        );

        let Some(handler) = self.registry.get(&parsed.name) else {
            return CommandResult::error(ShellError::UnknownCommand(parsed.name).to_string());
        };

        let names = self.registry.names();
        let mut ctx = ExecContext {
            fs: &mut self.fs,
            session: &mut self.session,
            config: &self.config,
            commands: &names,
        };

        match handler.run(&mut ctx, &parsed.args) {
            Ok(result) => result,
            Err(e @ ShellError::MissingOperand { .. }) => CommandResult::error(e.to_string()),
            Err(e) => {
                tracing::warn!(command = %parsed.name, error = %e, "command failed");
                CommandResult::error(format!("Error executing command: {}", e))
            }
        }
    }
}
