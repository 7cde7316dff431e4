//! Input tokenizer.
//!
//! Lines are split on whitespace only: no quoting, no variables, no pipes.
//! `echo "a b"` passes `"a` and `b"` through verbatim.

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a raw line into a command name and its arguments.
///
/// Returns `None` for empty or whitespace-only input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace().map(str::to_string);
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

/// Separate `-x` style flags from positional operands.
///
/// A lone `-` is treated as an operand.
pub fn split_flags(args: &[String]) -> (Vec<&str>, Vec<&str>) {
    args.iter()
        .map(String::as_str)
        .partition(|arg| arg.starts_with('-') && arg.len() > 1)
}

/// Whether any flag argument contains the short option `opt`
/// (`-l`, `-la` and `-al` all contain `l`).
pub fn has_short_flag(flags: &[&str], opt: char) -> bool {
    flags
        .iter()
        .filter(|f| !f.starts_with("--"))
        .any(|f| f[1..].contains(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_parse_words() {
        let cmd = parse_input("  mkdir   a  b ").unwrap();
        assert_eq!(cmd.name, "mkdir");
        assert_eq!(cmd.args, args(&["a", "b"]));
    }

    #[test]
    fn test_parse_keeps_quotes() {
        let cmd = parse_input(r#"echo "hello world""#).unwrap();
        assert_eq!(cmd.args, args(&["\"hello", "world\""]));
    }

    #[test]
    fn test_split_flags() {
        let input = args(&["-l", "docs", "-a", "-"]);
        let (flags, operands) = split_flags(&input);
        assert_eq!(flags, vec!["-l", "-a"]);
        assert_eq!(operands, vec!["docs", "-"]);
    }

    #[test]
    fn test_has_short_flag() {
        assert!(has_short_flag(&["-la"], 'l'));
        assert!(has_short_flag(&["-la"], 'a'));
        assert!(has_short_flag(&["-a", "-l"], 'l'));
        assert!(!has_short_flag(&["-a"], 'l'));
        assert!(!has_short_flag(&["--all"], 'a'));
    }
}
