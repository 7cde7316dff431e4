//! Tab autocomplete functionality for terminal commands and paths.
//!
//! This module provides completion for:
//! - Command names from the registry (e.g., "cl" → "clear")
//! - Directory paths for commands that take directories (`cd`, `ls`, `mkdir`, ...)
//! - File and directory paths for the other path commands (`cat`, `rm`, ...)
//!
//! The autocomplete system supports:
//! - Single match: Complete immediately
//! - Multiple matches: Show common prefix and all options
//! - Ghost text hints while typing

use crate::core::Shell;
use crate::core::commands::PathCompletion;
use crate::core::path;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - the whole completed line.
    Single(String),
    /// Multiple matches - (line up to the common prefix, display names).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what type of completion is needed for a command.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    /// Complete command names only.
    Command,
    /// Complete directory paths.
    DirectoryPath,
    /// Complete file and directory paths.
    AnyPath,
    /// No completion available.
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    fn from_input(input: &str, shell: &Shell) -> Self {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else {
            return Self::Command;
        };
        if word_start(input) == 0 {
            return Self::Command;
        }

        match shell.registry().get(cmd).map(|b| b.completion()) {
            Some(PathCompletion::Directories) => Self::DirectoryPath,
            Some(PathCompletion::Any) => Self::AnyPath,
            Some(PathCompletion::None) | None => Self::None,
        }
    }

    /// Returns true if this mode only matches directories.
    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

/// Byte offset where the word under the cursor starts.
///
/// The cursor is assumed to be at the end of `input`.
pub fn word_start(input: &str) -> usize {
    input.rfind(char::is_whitespace).map_or(0, |i| i + 1)
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Filename/directory name being completed.
    name_part: &'a str,
    /// Canonical directory to search.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    /// Parse a partial path and resolve the search directory.
    fn parse(partial: &'a str, shell: &Shell) -> Option<Self> {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let cwd = shell.session().cwd();
        let search = if dir_part.is_empty() { "." } else { dir_part };
        let search_dir = shell
            .fs()
            .canonicalize(&path::absolutize(search, cwd, &shell.config().home), path::ROOT)
            .ok()?;

        Some(Self {
            dir_part,
            name_part,
            search_dir,
        })
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Completes the last word of `input` and returns whole-line results.
pub fn autocomplete(input: &str, shell: &Shell) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let mode = CompletionMode::from_input(input, shell);
    let start = word_start(input);

    match mode {
        CompletionMode::Command => complete_command(input, shell),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            complete_path(&input[..start], &input[start..], shell, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix that would complete the current input.
pub fn get_hint(input: &str, shell: &Shell) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let mode = CompletionMode::from_input(input, shell);
    let start = word_start(input);

    match mode {
        CompletionMode::Command => get_command_hint(input, shell),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            get_path_hint(&input[start..], shell, mode.dirs_only())
        }
        CompletionMode::None => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Complete command name.
fn complete_command(partial: &str, shell: &Shell) -> AutocompleteResult {
    let matches: Vec<String> = shell
        .registry()
        .names()
        .into_iter()
        .filter(|cmd| cmd.starts_with(partial))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Get hint for command name completion.
fn get_command_hint(partial: &str, shell: &Shell) -> Option<String> {
    shell
        .registry()
        .names()
        .into_iter()
        .find(|cmd| cmd.starts_with(partial) && *cmd != partial)
        .map(|cmd| cmd[partial.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

/// Complete file/directory path.
fn complete_path(head: &str, partial: &str, shell: &Shell, dirs_only: bool) -> AutocompleteResult {
    let Some(parsed) = ParsedPath::parse(partial, shell) else {
        return AutocompleteResult::None;
    };

    let matches = get_matching_entries(shell, &parsed, dirs_only);
    build_path_result(head, &parsed, matches)
}

/// Get hint for path completion.
fn get_path_hint(partial: &str, shell: &Shell, dirs_only: bool) -> Option<String> {
    let parsed = ParsedPath::parse(partial, shell)?;
    let matches = get_matching_entries(shell, &parsed, dirs_only);

    // First match that extends the current input
    matches
        .iter()
        .find(|(name, _)| name.as_str() != parsed.name_part)
        .map(|(name, is_dir)| {
            let suffix = if *is_dir { "/" } else { "" };
            format!("{}{}", &name[parsed.name_part.len()..], suffix)
        })
}

/// Entries of the search directory starting with the partial name, sorted.
///
/// Dotfiles are offered only once the partial name starts with `.`.
fn get_matching_entries(shell: &Shell, parsed: &ParsedPath, dirs_only: bool) -> Vec<(String, bool)> {
    let Ok(dir) = shell.fs().dir(&parsed.search_dir) else {
        return Vec::new();
    };
    let show_hidden = parsed.name_part.starts_with('.');

    dir.sorted_entries()
        .into_iter()
        .filter(|(name, node)| {
            if dirs_only && !node.is_directory() {
                return false;
            }
            if name.starts_with('.') && !show_hidden {
                return false;
            }
            name.starts_with(parsed.name_part)
        })
        .map(|(name, node)| (name.to_string(), node.is_directory()))
        .collect()
}

/// Build the autocomplete result from matched paths.
fn build_path_result(
    head: &str,
    parsed: &ParsedPath,
    matches: Vec<(String, bool)>,
) -> AutocompleteResult {
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{}{}{}{}", head, parsed.dir_part, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(n, _)| n.clone()).collect();
            let common = find_common_prefix(&names);

            let display_names = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.clone()
                    }
                })
                .collect();

            let line = format!("{}{}{}", head, parsed.dir_part, common);
            AutocompleteResult::Multiple(line, display_names)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;

    fn shell() -> Shell {
        Shell::new(ShellConfig::without_delays()).unwrap()
    }

    #[test]
    fn test_command_completion_single() {
        assert_eq!(
            autocomplete("cle", &shell()),
            AutocompleteResult::Single("clear ".to_string())
        );
    }

    #[test]
    fn test_command_completion_multiple() {
        match autocomplete("c", &shell()) {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "c");
                assert!(matches.contains(&"cat".to_string()));
                assert!(matches.contains(&"cd".to_string()));
                assert!(matches.contains(&"clear".to_string()));
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_command_common_prefix_extends() {
        match autocomplete("un", &shell()) {
            AutocompleteResult::Single(line) => assert_eq!(line, "unzip "),
            other => panic!("Expected single match, got {:?}", other),
        }
        match autocomplete("t", &shell()) {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "t");
                assert_eq!(matches, vec!["tac", "tar", "touch"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(autocomplete("xyz", &shell()), AutocompleteResult::None);
        assert_eq!(autocomplete("   ", &shell()), AutocompleteResult::None);
    }

    #[test]
    fn test_directory_completion() {
        let mut sh = shell();
        assert_eq!(
            autocomplete("cd proj", &sh),
            AutocompleteResult::Single("cd projects/".to_string())
        );
        assert_eq!(
            autocomplete("cd projects/py", &sh),
            AutocompleteResult::Single("cd projects/python_app/".to_string())
        );
        sh.dispatch("cd projects/python_app");
        // Only directories for cd.
        assert_eq!(autocomplete("cd ma", &sh), AutocompleteResult::None);
    }

    #[test]
    fn test_file_completion_multiple() {
        let mut sh = shell();
        sh.dispatch("touch doc.txt");
        match autocomplete("cat do", &sh) {
            AutocompleteResult::Multiple(line, names) => {
                assert_eq!(line, "cat do");
                assert_eq!(names, vec!["doc.txt", "documents/", "downloads/"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_completes_last_argument() {
        let sh = shell();
        assert_eq!(
            autocomplete("cp -r ~/projects/python_app/ma", &sh),
            AutocompleteResult::Single("cp -r ~/projects/python_app/main.py ".to_string())
        );
    }

    #[test]
    fn test_hidden_files_need_dot() {
        let sh = shell();
        assert_eq!(autocomplete("cat .b", &sh), AutocompleteResult::Single("cat .bashrc ".to_string()));
        assert_eq!(get_hint("cat ", &sh), Some("documents/".to_string()));
    }

    #[test]
    fn test_non_path_commands() {
        assert_eq!(autocomplete("whoami x", &shell()), AutocompleteResult::None);
        assert_eq!(autocomplete("foobar x", &shell()), AutocompleteResult::None);
    }

    #[test]
    fn test_hints() {
        let sh = shell();
        assert_eq!(get_hint("neo", &sh), Some("fetch".to_string()));
        assert_eq!(get_hint("ls pic", &sh), Some("tures/".to_string()));
        assert_eq!(get_hint("ls", &sh), None);
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&[]), "");
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("cd"), 0);
        assert_eq!(word_start("cd pro"), 3);
        assert_eq!(word_start("cp a "), 5);
    }
}
