//! `ls`, `pwd`, `cd`.

use crate::core::error::{FsError, ShellError};
use crate::core::parser::{has_short_flag, split_flags};
use crate::core::path;
use crate::models::{ListEntry, Node, OutputLine, TextStyle};

use super::{Builtin, CommandResult, ExecContext, PathCompletion};

/// List directory contents.
pub struct Ls;

impl Builtin for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Directories
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let (flags, operands) = split_flags(args);
        let show_hidden = has_short_flag(&flags, 'a');
        let long = has_short_flag(&flags, 'l');

        let target = operands.first().copied().unwrap_or(".");
        let shown = operands.first().copied().unwrap_or_else(|| ctx.cwd());

        let node = match ctx.resolve(target) {
            Ok(node) => node,
            Err(_) => {
                return Ok(CommandResult::error(format!(
                    "ls: cannot access '{}': No such file or directory",
                    shown
                )));
            }
        };

        // A file lists as itself, under the name it was given.
        let entries: Vec<(&str, &Node)> = match node {
            Node::Directory(dir) => dir
                .sorted_entries()
                .into_iter()
                .filter(|(name, _)| show_hidden || !name.starts_with('.'))
                .collect(),
            Node::File(_) => vec![(target, node)],
        };

        if long {
            let mut result = CommandResult::text(format!("total {}", entries.len()));
            for (name, node) in entries {
                let style = if node.is_directory() {
                    TextStyle::Directory
                } else {
                    TextStyle::File
                };
                result.push(OutputLine::long_entry(
                    node.permissions().to_string(),
                    node.display_size(),
                    name,
                    style,
                ));
            }
            Ok(result)
        } else {
            let row = entries
                .into_iter()
                .map(|(name, node)| ListEntry::new(name, node.is_directory()))
                .collect();
            Ok(CommandResult::output(vec![OutputLine::Listing(row)]))
        }
    }
}

/// Print the working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn run(&self, ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::text(ctx.cwd()))
    }
}

/// Change the working directory.
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Directories
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let target = args.first().map(String::as_str).unwrap_or("~");

        let next = if target == ".." {
            Ok(path::parent_path(ctx.cwd()))
        } else {
            change_target(ctx, target)
        };

        match next {
            Ok(dir) => {
                ctx.session.set_cwd(dir);
                Ok(CommandResult::empty())
            }
            Err(e) => Ok(CommandResult::error(format!("cd: {}: {}", target, e))),
        }
    }
}

/// Canonical path of the directory `target` names.
fn change_target(ctx: &ExecContext<'_>, target: &str) -> Result<String, FsError> {
    let dir = ctx.canonicalize(target)?;
    if ctx.fs.is_directory(&dir, path::ROOT) {
        Ok(dir)
    } else {
        Err(FsError::NotADirectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Fixture;

    #[test]
    fn test_ls_default_is_cwd() {
        let mut fx = Fixture::in_dir("/home/user/projects");
        assert_eq!(fx.run(&Ls, &[]), vec!["python_app/"]);
    }

    #[test]
    fn test_ls_sorted_and_hidden() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(&Ls, &[]),
            vec!["documents/  downloads/  pictures/  projects/"]
        );
        assert_eq!(
            fx.run(&Ls, &["-a"]),
            vec![".bashrc  documents/  downloads/  pictures/  projects/"]
        );
    }

    #[test]
    fn test_ls_long() {
        let mut fx = Fixture::new();
        let lines = fx.run(&Ls, &["-l", "projects/python_app"]);
        assert_eq!(
            lines,
            vec![
                "total 2",
                "-rw-r--r-- 1 user group       22 Feb 27 14:30 main.py",
                "-rw-r--r-- 1 user group       30 Feb 27 14:30 requirements.txt",
            ]
        );
    }

    #[test]
    fn test_ls_combined_flags() {
        let mut fx = Fixture::new();
        let separate = fx.run(&Ls, &["-l", "-a"]);
        let combined = fx.run(&Ls, &["-la"]);
        assert_eq!(separate, combined);
        assert_eq!(combined[0], "total 5");
        assert!(combined[1].ends_with(" .bashrc"));
        assert!(combined[2].starts_with("drwxr-xr-x 1 user group     4096"));
    }

    #[test]
    fn test_ls_path_before_or_after_flags() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Ls, &["/etc", "-l"]), fx.run(&Ls, &["-l", "/etc"]));
    }

    #[test]
    fn test_ls_file_target() {
        let mut fx = Fixture::in_dir("/home/user/projects/python_app");
        assert_eq!(fx.run(&Ls, &["main.py"]), vec!["main.py"]);
    }

    #[test]
    fn test_ls_empty_dir() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Ls, &["/bin"]), vec![""]);
    }

    #[test]
    fn test_ls_missing() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(&Ls, &["ghost"]),
            vec!["ls: cannot access 'ghost': No such file or directory"]
        );
    }

    #[test]
    fn test_pwd() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Pwd, &[]), vec!["/home/user"]);
    }

    #[test]
    fn test_cd_variants() {
        let mut fx = Fixture::in_dir("/");
        fx.run(&Cd, &["home"]);
        assert_eq!(fx.session.cwd(), "/home");
        fx.run(&Cd, &[".."]);
        assert_eq!(fx.session.cwd(), "/");
        fx.run(&Cd, &[".."]);
        assert_eq!(fx.session.cwd(), "/");
        fx.run(&Cd, &["/usr/lib"]);
        assert_eq!(fx.session.cwd(), "/usr/lib");
        fx.run(&Cd, &["~"]);
        assert_eq!(fx.session.cwd(), "/home/user");
        fx.run(&Cd, &["/var"]);
        fx.run(&Cd, &[]);
        assert_eq!(fx.session.cwd(), "/home/user");
    }

    #[test]
    fn test_cd_normalizes() {
        let mut fx = Fixture::new();
        fx.run(&Cd, &["./projects//python_app/"]);
        assert_eq!(fx.session.cwd(), "/home/user/projects/python_app");
        fx.run(&Cd, &["../../documents"]);
        assert_eq!(fx.session.cwd(), "/home/user/documents");
    }

    #[test]
    fn test_cd_missing_leaves_cwd() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(&Cd, &["nowhere"]),
            vec!["cd: nowhere: No such file or directory"]
        );
        assert_eq!(fx.session.cwd(), "/home/user");
    }

    #[test]
    fn test_cd_into_file_rejected() {
        let mut fx = Fixture::in_dir("/home/user/projects/python_app");
        assert_eq!(fx.run(&Cd, &["main.py"]), vec!["cd: main.py: Not a directory"]);
        assert_eq!(fx.session.cwd(), "/home/user/projects/python_app");
    }
}
