//! Interactive front-end: line editing, completion and ANSI rendering.

use std::borrow::Cow;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::config::ansi;
use crate::core::{AutocompleteResult, CommandResult, Shell, autocomplete, get_hint};
use crate::models::{ListEntry, OutputLine, TextStyle};

// =============================================================================
// Rendering
// =============================================================================

fn styled(name: &str, style: TextStyle) -> String {
    match style {
        TextStyle::Directory => format!("{}{}{}", ansi::DIRECTORY, name, ansi::RESET),
        TextStyle::File => name.to_string(),
    }
}

/// Terminal text for one output line, with directories in bold blue.
///
/// `ClearScreen` renders as the reset sequence with no line break.
pub fn render(line: &OutputLine) -> String {
    match line {
        OutputLine::Listing(entries) => entries
            .iter()
            .map(|entry: &ListEntry| styled(&entry.display_name(), entry.style))
            .collect::<Vec<_>>()
            .join("  "),
        OutputLine::LongEntry { name, style, .. } => {
            let plain = line.to_string();
            let prefix = &plain[..plain.len() - name.len()];
            format!("{}{}", prefix, styled(name, *style))
        }
        OutputLine::ClearScreen => ansi::CLEAR_SCREEN.to_string(),
        other => other.to_string(),
    }
}

/// Write every line of a result to `out`.
pub fn write_output(out: &mut impl Write, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        match line {
            OutputLine::ClearScreen => write!(out, "{}", render(line))?,
            _ => writeln!(out, "{}", render(line))?,
        }
    }
    out.flush()
}

fn print_result(result: &CommandResult) {
    if let Err(e) = write_output(&mut io::stdout().lock(), &result.output) {
        tracing::warn!("failed to write output: {}", e);
    }
}

// =============================================================================
// Line Editor Helper
// =============================================================================

/// Completion and hints backed by the live shell.
///
/// Borrows the shell only while rustyline is asking, never across a dispatch.
pub struct ShellHelper {
    shell: Rc<RefCell<Shell>>,
}

impl ShellHelper {
    pub fn new(shell: Rc<RefCell<Shell>>) -> Self {
        Self { shell }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        // Completions replace the line from its first non-blank character.
        let start = input.len() - input.trim_start().len();

        let candidates = match autocomplete(input, &self.shell.borrow()) {
            AutocompleteResult::None => Vec::new(),
            AutocompleteResult::Single(completed) => vec![Pair {
                display: completed.clone(),
                replacement: completed,
            }],
            AutocompleteResult::Multiple(common, names) => names
                .into_iter()
                .map(|display| Pair {
                    display,
                    replacement: common.clone(),
                })
                .collect(),
        };

        Ok((start, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        get_hint(line, &self.shell.borrow())
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", ansi::HINT, hint, ansi::RESET))
    }
}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

// =============================================================================
// Loop
// =============================================================================

/// Run the interactive loop until `exit` or end of input.
pub fn run(shell: Shell, show_banner: bool) -> rustyline::Result<()> {
    let shell = Rc::new(RefCell::new(shell));

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(ShellHelper::new(Rc::clone(&shell))));

    if show_banner {
        let banner = shell.borrow().banner();
        print_result(&CommandResult::output(banner));
    }

    while shell.borrow().is_running() {
        let prompt = shell.borrow().prompt();

        match rl.readline(&prompt) {
            Ok(line) => {
                let result = shell.borrow_mut().dispatch(&line);
                print_result(&result);
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Use 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => {
                println!("EOF detected. Exiting...");
                shell.borrow_mut().terminate();
            }
            Err(err) => {
                tracing::warn!("readline failed: {}", err);
                return Err(err);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listing_colors_directories() {
        let line = OutputLine::Listing(vec![
            ListEntry::new("docs", true),
            ListEntry::new("a.txt", false),
        ]);
        assert_eq!(render(&line), "\x1b[1;34mdocs/\x1b[0m  a.txt");
    }

    #[test]
    fn test_render_long_entry() {
        let line = OutputLine::long_entry("drwxr-xr-x", 4096, "projects", TextStyle::Directory);
        assert_eq!(
            render(&line),
            "drwxr-xr-x 1 user group     4096 Feb 27 14:30 \x1b[1;34mprojects\x1b[0m"
        );
    }

    #[test]
    fn test_write_output() {
        let mut buf = Vec::new();
        write_output(
            &mut buf,
            &[
                OutputLine::ClearScreen,
                OutputLine::text("hello"),
                OutputLine::empty(),
                OutputLine::error("bad"),
            ],
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1bchello\n\nbad\n");
    }
}
