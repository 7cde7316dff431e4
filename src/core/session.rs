//! Per-session mutable state: working directory, history, liveness.

/// State for one running shell.
#[derive(Clone, Debug)]
pub struct Session {
    /// Absolute path of an existing directory.
    cwd: String,
    /// Raw input lines in the order they were entered.
    history: Vec<String>,
    running: bool,
}

impl Session {
    /// Start a live session in `cwd`.
    ///
    /// The caller guarantees `cwd` names an existing directory.
    pub fn new(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            history: Vec::new(),
            running: true,
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Change the working directory.
    ///
    /// Only called with paths that resolved to a directory.
    pub(crate) fn set_cwd(&mut self, cwd: impl Into<String>) {
        self.cwd = cwd.into();
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Append a raw input line.
    pub fn record(&mut self, line: impl Into<String>) {
        self.history.push(line.into());
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the liveness flag; the REPL exits after the current line.
    pub fn terminate(&mut self) {
        self.running = false;
    }
}
