//! Commands that read file contents or print text: `cat`, `tac`, `grep`,
//! `echo`, and `find`.

use crate::core::error::ShellError;
use crate::core::path;
use crate::models::Node;
use crate::utils::glob_to_regex;

use super::{Builtin, CommandResult, ExecContext, PathCompletion};

/// Read a file's content, or the error line `<command>: <f>: <reason>`.
fn read_file<'a>(ctx: &'a ExecContext<'_>, command: &str, target: &str) -> Result<&'a str, String> {
    match ctx.resolve(target) {
        Ok(Node::File(file)) => Ok(file.content()),
        Ok(Node::Directory(_)) => Err(format!("{}: {}: Is a directory", command, target)),
        Err(e) => Err(format!("{}: {}: {}", command, target, e)),
    }
}

pub struct Cat;

impl Builtin for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("cat", "file operand"));
        }

        let mut result = CommandResult::empty();
        for target in args {
            match read_file(ctx, "cat", target) {
                Ok(content) => result.push_text_lines(content),
                Err(line) => result.push_error(line),
            }
        }
        Ok(result)
    }
}

/// `cat` with the lines of each file in reverse order.
pub struct Tac;

impl Builtin for Tac {
    fn name(&self) -> &'static str {
        "tac"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("tac", "file operand"));
        }

        let mut result = CommandResult::empty();
        for target in args {
            match read_file(ctx, "tac", target) {
                Ok(content) => {
                    for line in content.split('\n').rev() {
                        result.push_text_lines(line);
                    }
                }
                Err(line) => result.push_error(line),
            }
        }
        Ok(result)
    }
}

/// Print lines containing a literal substring.
pub struct Grep;

impl Builtin for Grep {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let [pattern, files @ ..] = args else {
            return Err(ShellError::missing("grep", "pattern and file operand"));
        };
        if files.is_empty() {
            return Err(ShellError::missing("grep", "pattern and file operand"));
        }

        let mut result = CommandResult::empty();
        for target in files {
            match read_file(ctx, "grep", target) {
                Ok(content) => {
                    for line in content.split('\n').filter(|l| l.contains(pattern.as_str())) {
                        result.push_text_lines(line);
                    }
                }
                Err(line) => result.push_error(line),
            }
        }
        Ok(result)
    }
}

pub struct Echo;

impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::text(args.join(" ")))
    }
}

/// `find [path] [pattern]`: every descendant whose name matches.
pub struct Find;

impl Builtin for Find {
    fn name(&self) -> &'static str {
        "find"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Directories
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let start = args.first().map(String::as_str);
        let pattern = args.get(1).map(String::as_str).unwrap_or("*");
        let shown = start.unwrap_or_else(|| ctx.cwd()).to_string();

        let mut result =
            CommandResult::text(format!("Finding files matching '{}' in {}", pattern, shown));

        let Ok(base) = ctx.canonicalize(start.unwrap_or(".")) else {
            result.push_error(format!("find: '{}': No such file or directory", shown));
            return Ok(result);
        };
        let matcher = match glob_to_regex(pattern) {
            Ok(re) => re,
            Err(_) => {
                result.push_error(format!("find: invalid pattern '{}'", pattern));
                return Ok(result);
            }
        };

        let prefix = if base == path::ROOT {
            base.len()
        } else {
            base.len() + 1
        };
        for (abs, _) in ctx.fs.walk(&base) {
            if matcher.is_match(path::file_name(&abs)) {
                result.push_text_lines(&path::join(&shown, &abs[prefix..]));
            }
        }
        Ok(result)
    }
}
