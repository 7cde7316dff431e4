//! Command execution result type.

use crate::models::OutputLine;

/// Result of executing a command.
///
/// Side effects on the tree and session happen during execution; the
/// result only carries what should be printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
}

impl CommandResult {
    /// Create a result with the given output lines.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self { output: lines }
    }

    /// Create a result with a single plain text line.
    pub fn text(s: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::text(s)])
    }

    /// Create a result with a single error line.
    pub fn error(s: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::error(s)])
    }

    /// Create an empty result (no output).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.output.push(line);
    }

    pub fn push_error(&mut self, s: impl Into<String>) {
        self.output.push(OutputLine::error(s));
    }

    /// Append every line of `text`, split on `\n`.
    pub fn push_text_lines(&mut self, text: &str) {
        self.output.extend(text.split('\n').map(OutputLine::text));
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Unstyled text of every line.
    pub fn lines(&self) -> Vec<String> {
        self.output.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.output.iter().any(OutputLine::is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_text_lines() {
        let mut result = CommandResult::empty();
        result.push_text_lines("a\nb\n");
        assert_eq!(result.lines(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_has_errors() {
        assert!(CommandResult::error("bad").has_errors());
        assert!(!CommandResult::text("good").has_errors());
        assert!(CommandResult::empty().is_empty());
    }
}
