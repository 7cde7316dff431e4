//! Tree-mutating commands: `mkdir`, `rmdir`, `rm`, `touch`, `cp`, `mv`, and `file`.
//!
//! Every multi-target command handles each operand on its own: a failure
//! is reported as one output line and the remaining operands still run.

use crate::core::error::{FsError, ShellError};
use crate::core::parser::{has_short_flag, split_flags};
use crate::core::path;
use crate::models::Node;

use super::{Builtin, CommandResult, ExecContext, PathCompletion};

/// Whether a final path segment cannot name a new or removable entry.
fn is_dot_name(name: &str) -> bool {
    matches!(name, "." | "..")
}

// =============================================================================
// mkdir
// =============================================================================

pub struct Mkdir;

impl Builtin for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Directories
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("mkdir", "operand"));
        }

        let mut result = CommandResult::empty();
        for target in args {
            if let Err(e) = make_dir(ctx, target) {
                result.push_error(format!(
                    "mkdir: cannot create directory '{}': {}",
                    target, e
                ));
            }
        }
        Ok(result)
    }
}

fn make_dir(ctx: &mut ExecContext<'_>, target: &str) -> Result<(), FsError> {
    let (parent, name) = ctx.parent_of(target)?;
    if name.is_empty() || is_dot_name(&name) {
        return Err(FsError::NameConflict);
    }
    let dir = ctx.fs.dir_mut(&parent)?;
    if dir.contains(&name) {
        return Err(FsError::NameConflict);
    }
    dir.insert(name, Node::empty_dir())?;
    Ok(())
}

// =============================================================================
// rmdir
// =============================================================================

pub struct Rmdir;

impl Builtin for Rmdir {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Directories
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("rmdir", "operand"));
        }

        let mut result = CommandResult::empty();
        for target in args {
            if let Err(e) = remove_dir(ctx, target) {
                result.push_error(format!("rmdir: failed to remove '{}': {}", target, e));
            }
        }
        Ok(result)
    }
}

fn remove_dir(ctx: &mut ExecContext<'_>, target: &str) -> Result<(), FsError> {
    let (parent, name) = ctx.parent_of(target)?;
    if is_dot_name(&name) {
        return Err(FsError::InvalidArgument);
    }
    if name.is_empty() {
        return Err(FsError::Busy);
    }

    match ctx.fs.dir(&parent)?.get(&name) {
        None => return Err(FsError::NotFound),
        Some(Node::File(_)) => return Err(FsError::NotADirectory),
        Some(Node::Directory(dir)) if !dir.is_empty() => return Err(FsError::NotEmpty),
        Some(Node::Directory(_)) => {}
    }

    ctx.ensure_not_cwd(&path::join(&parent, &name))?;
    ctx.fs.dir_mut(&parent)?.remove(&name)?;
    Ok(())
}

// =============================================================================
// rm
// =============================================================================

pub struct Rm;

impl Builtin for Rm {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let (flags, targets) = split_flags(args);
        if targets.is_empty() {
            return Err(ShellError::missing("rm", "operand"));
        }
        let recursive = has_short_flag(&flags, 'r') || has_short_flag(&flags, 'R');

        let mut result = CommandResult::empty();
        for target in targets {
            if let Err(e) = remove(ctx, target, recursive) {
                result.push_error(format!("rm: cannot remove '{}': {}", target, e));
            }
        }
        Ok(result)
    }
}

fn remove(ctx: &mut ExecContext<'_>, target: &str, recursive: bool) -> Result<(), FsError> {
    let (parent, name) = ctx.parent_of(target)?;
    if is_dot_name(&name) {
        return Err(FsError::InvalidArgument);
    }

    let is_dir = if name.is_empty() {
        true
    } else {
        ctx.fs
            .dir(&parent)?
            .get(&name)
            .ok_or(FsError::NotFound)?
            .is_directory()
    };

    if is_dir {
        if !recursive {
            return Err(FsError::IsADirectory);
        }
        let abs = if name.is_empty() {
            path::ROOT.to_string()
        } else {
            path::join(&parent, &name)
        };
        ctx.ensure_not_cwd(&abs)?;
    }

    ctx.fs.dir_mut(&parent)?.remove(&name)?;
    Ok(())
}

// =============================================================================
// touch
// =============================================================================

pub struct Touch;

impl Builtin for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Err(ShellError::missing("touch", "file operand"));
        }

        let mut result = CommandResult::empty();
        for target in args {
            if let Err(e) = touch(ctx, target) {
                result.push_error(format!("touch: cannot touch '{}': {}", target, e));
            }
        }
        Ok(result)
    }
}

/// Create an empty file unless something already has the name.
fn touch(ctx: &mut ExecContext<'_>, target: &str) -> Result<(), FsError> {
    let (parent, name) = ctx.parent_of(target)?;
    if name.is_empty() || is_dot_name(&name) {
        return Ok(());
    }
    let dir = ctx.fs.dir_mut(&parent)?;
    if !dir.contains(&name) {
        dir.insert(name, Node::file(""))?;
    }
    Ok(())
}

// =============================================================================
// cp / mv
// =============================================================================

/// Where a copied or moved node lands: an existing directory receives it
/// under its current name, anything else names the new entry.
fn destination(
    ctx: &ExecContext<'_>,
    source_abs: &str,
    dest: &str,
) -> Result<(String, String), FsError> {
    if let Ok(dir) = ctx.canonicalize(dest)
        && ctx.fs.is_directory(&dir, path::ROOT)
    {
        return Ok((dir, path::file_name(source_abs).to_string()));
    }

    let (parent, name) = ctx.parent_of(dest)?;
    if name.is_empty() || is_dot_name(&name) {
        return Err(FsError::InvalidArgument);
    }
    Ok((parent, name))
}

/// Check that `node` may be placed at `parent/name`.
fn check_placement(
    ctx: &ExecContext<'_>,
    node: &Node,
    parent: &str,
    name: &str,
) -> Result<(), FsError> {
    match ctx.fs.dir(parent)?.get(name) {
        Some(Node::Directory(_)) => Err(FsError::NameConflict),
        Some(Node::File(_)) if node.is_directory() => Err(FsError::NotADirectory),
        _ => Ok(()),
    }
}

pub struct Cp;

impl Builtin for Cp {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let (flags, operands) = split_flags(args);
        let [source, dest, ..] = operands[..] else {
            return Err(ShellError::missing("cp", "file operand"));
        };
        let recursive = has_short_flag(&flags, 'r') || has_short_flag(&flags, 'R');

        let Ok(source_abs) = ctx.canonicalize(source) else {
            return Ok(CommandResult::error(format!(
                "cp: cannot stat '{}': No such file or directory",
                source
            )));
        };
        let node = ctx.fs.node(&source_abs).cloned().ok_or(FsError::NotFound)?;

        if node.is_directory() && !recursive {
            return Ok(CommandResult::error(format!(
                "cp: -r not specified; omitting directory '{}'",
                source
            )));
        }

        let (parent, name) = match destination(ctx, &source_abs, dest) {
            Ok(place) => place,
            Err(e) => {
                return Ok(CommandResult::error(format!(
                    "cp: cannot create '{}': {}",
                    dest, e
                )));
            }
        };

        let target_abs = path::join(&parent, &name);
        if target_abs == source_abs {
            return Ok(CommandResult::error(format!(
                "cp: '{}' and '{}' are the same file",
                source, dest
            )));
        }
        if node.is_directory() && path::is_within(&target_abs, &source_abs) {
            return Ok(CommandResult::error(format!(
                "cp: cannot copy a directory, '{}', into itself, '{}'",
                source, dest
            )));
        }
        if let Err(e) = check_placement(ctx, &node, &parent, &name) {
            return Ok(CommandResult::error(format!(
                "cp: cannot create '{}': {}",
                dest, e
            )));
        }

        ctx.fs.dir_mut(&parent)?.insert(name, node)?;
        Ok(CommandResult::text(format!("Copied {} to {}", source, dest)))
    }
}

pub struct Mv;

impl Builtin for Mv {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let (_, operands) = split_flags(args);
        let [source, dest, ..] = operands[..] else {
            return Err(ShellError::missing("mv", "file operand"));
        };

        let Ok(source_abs) = ctx.canonicalize(source) else {
            return Ok(CommandResult::error(format!(
                "mv: cannot stat '{}': No such file or directory",
                source
            )));
        };
        if let Err(e) = ctx.ensure_not_cwd(&source_abs) {
            return Ok(CommandResult::error(format!(
                "mv: cannot move '{}': {}",
                source, e
            )));
        }

        let (parent, name) = match destination(ctx, &source_abs, dest) {
            Ok(place) => place,
            Err(e) => {
                return Ok(CommandResult::error(format!(
                    "mv: cannot move '{}' to '{}': {}",
                    source, dest, e
                )));
            }
        };

        let target_abs = path::join(&parent, &name);
        if target_abs == source_abs {
            return Ok(CommandResult::error(format!(
                "mv: '{}' and '{}' are the same file",
                source, dest
            )));
        }

        let node = ctx.fs.node(&source_abs).ok_or(FsError::NotFound)?;
        if node.is_directory() && path::is_within(&target_abs, &source_abs) {
            return Ok(CommandResult::error(format!(
                "mv: cannot move '{}' to a subdirectory of itself, '{}'",
                source, dest
            )));
        }
        if let Err(e) = check_placement(ctx, node, &parent, &name) {
            return Ok(CommandResult::error(format!(
                "mv: cannot move '{}' to '{}': {}",
                source, dest, e
            )));
        }

        let source_parent = path::parent_path(&source_abs);
        let moved = ctx
            .fs
            .dir_mut(&source_parent)?
            .remove(path::file_name(&source_abs))?;
        ctx.fs.dir_mut(&parent)?.insert(name, moved)?;
        Ok(CommandResult::text(format!("Moved {} to {}", source, dest)))
    }
}

// =============================================================================
// file
// =============================================================================

pub struct FileInfo;

impl Builtin for FileInfo {
    fn name(&self) -> &'static str {
        "file"
    }

    fn completion(&self) -> PathCompletion {
        PathCompletion::Any
    }

    fn run(&self, ctx: &mut ExecContext<'_>, args: &[String]) -> Result<CommandResult, ShellError> {
        let Some(target) = args.first() else {
            return Err(ShellError::missing("file", "file operand"));
        };

        Ok(match ctx.resolve(target) {
            Err(_) => CommandResult::error(format!(
                "file: cannot open '{}' (No such file or directory)",
                target
            )),
            Ok(Node::Directory(_)) => CommandResult::text(format!("{}: directory", target)),
            Ok(Node::File(_)) => CommandResult::text(format!("{}: ASCII text", target)),
        })
    }
}
