//! Commands that only pretend: archives, permissions, editors and
//! package managers print canned output and leave the tree untouched.

use crate::config::delays;
use crate::core::error::ShellError;

use super::{Builtin, CommandResult, ExecContext, PathCompletion};

pub struct Chmod;

impl Builtin for Chmod {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let [mode, target, ..] = args else {
            return Err(ShellError::missing("chmod", "operand"));
        };
        Ok(CommandResult::text(format!(
            "Changed mode of {} to {}",
            target, mode
        )))
    }
}

pub struct Zip;

impl Builtin for Zip {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let [archive, files @ ..] = args else {
            return Err(ShellError::missing("zip", "file operand"));
        };
        if files.is_empty() {
            return Err(ShellError::missing("zip", "file operand"));
        }

        let mut result = CommandResult::text(format!("Adding files to {}...", archive));
        for file in files {
            result.push_text_lines(&format!("  adding: {}", file));
        }
        Ok(result)
    }
}

pub struct Unzip;

impl Builtin for Unzip {
    fn name(&self) -> &'static str {
        "unzip"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let Some(archive) = args.first() else {
            return Err(ShellError::missing("unzip", "file operand"));
        };
        Ok(CommandResult::text(format!(
            "Extracting files from {}...",
            archive
        )))
    }
}

pub struct Tar;

impl Builtin for Tar {
    fn name(&self) -> &'static str {
        "tar"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("tar", "file operand"));
        }
        Ok(CommandResult::text("Creating tar archive..."))
    }
}

/// A text editor that "opens" a file, waits, and tells you how to leave.
pub struct Editor {
    name: &'static str,
    exit_hint: &'static str,
}

impl Editor {
    pub fn nano() -> Self {
        Self {
            name: "nano",
            exit_hint: "Ctrl+X",
        }
    }

    pub fn vi() -> Self {
        Self {
            name: "vi",
            exit_hint: ":q!",
        }
    }

    pub fn jed() -> Self {
        Self {
            name: "jed",
            exit_hint: "Ctrl+X",
        }
    }
}

impl Builtin for Editor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let Some(file) = args.first() else {
            return Err(ShellError::missing(self.name, "file operand"));
        };

        let mut result =
            CommandResult::text(format!("Opening {} in {} editor...", file, self.name));
        ctx.pause(delays::EDITOR_OPEN);
        result.push_text_lines(&format!("Exit {} with {}", self.name, self.exit_hint));
        Ok(result)
    }
}

pub struct Apt;

impl Builtin for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let Some(operation) = args.first() else {
            return Err(ShellError::missing("apt", "command"));
        };

        let mut result = CommandResult::empty();
        match operation.as_str() {
            "update" => result.push_text_lines("Reading package lists... Done"),
            "upgrade" => result.push_text_lines(
                "Reading package lists... Done\n\
                 Building dependency tree... Done\n\
                 0 upgraded, 0 newly installed, 0 to remove and 0 not upgraded.",
            ),
            "install" => {
                let packages = &args[1..];
                if packages.is_empty() {
                    return Err(ShellError::missing("apt", "package name"));
                }
                for package in packages {
                    result.push_text_lines(&format!("Installing {}...", package));
                    ctx.pause(delays::PACKAGE_INSTALL);
                    result.push_text_lines(&format!(
                        "{} has been installed successfully",
                        package
                    ));
                }
            }
            other => result.push_error(format!("apt: invalid operation: {}", other)),
        }
        Ok(result)
    }
}

pub struct Dnf;

impl Builtin for Dnf {
    fn name(&self) -> &'static str {
        "dnf"
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::text("DNF package manager (Fedora/RHEL)"))
    }
}
