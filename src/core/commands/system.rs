//! Session-level commands: `help`, `clear`, `date`, `whoami`, `neofetch`,
//! and `exit`, plus the startup banner.

use chrono::Local;
use rand::Rng;

use crate::config::{ASCII_BANNER, HELP_COLUMNS, WELCOME_LINES};
use crate::core::error::ShellError;
use crate::models::OutputLine;
use crate::utils::format_columns;

use super::{Builtin, CommandResult, ExecContext};

/// Clear screen, system summary and welcome text shown at startup.
pub fn banner() -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::ClearScreen];
    lines.extend(system_summary());
    lines.extend(WELCOME_LINES.iter().map(|&line| match line {
        "" => OutputLine::empty(),
        text => OutputLine::text(text),
    }));
    lines
}

/// Logo followed by the fixed and randomized system facts.
fn system_summary() -> Vec<OutputLine> {
    let mut rng = rand::thread_rng();
    let mut lines: Vec<OutputLine> = ASCII_BANNER.lines().map(OutputLine::ascii).collect();
    lines.push(OutputLine::empty());
    lines.extend(
        [
            "OS: Orea OS".to_string(),
            "Kernel: 5.15.0-orea".to_string(),
            format!(
                "Uptime: {} hours, {} mins",
                rng.gen_range(1..=24),
                rng.gen_range(1..=59)
            ),
            "Shell: bash 5.1.16".to_string(),
            "Resolution: 1920x1080".to_string(),
            "CPU: Intel i7-10700 (8) @ 3.80GHz".to_string(),
            format!("Memory: {}MiB / 8192MiB", rng.gen_range(2000..=4000)),
        ]
        .into_iter()
        .map(OutputLine::text),
    );
    lines
}

pub struct Help;

impl Builtin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn run(&self, ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        let mut result = CommandResult::text("Available commands:");
        for row in format_columns(ctx.commands, HELP_COLUMNS) {
            result.push(OutputLine::text(row));
        }
        Ok(result)
    }
}

pub struct Clear;

impl Builtin for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::output(vec![OutputLine::ClearScreen]))
    }
}

pub struct Date;

impl Builtin for Date {
    fn name(&self) -> &'static str {
        "date"
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::text(
            Local::now().format("%a %b %d %H:%M:%S %Z %Y").to_string(),
        ))
    }
}

pub struct Whoami;

impl Builtin for Whoami {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn run(&self, ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::text(ctx.config.user.clone()))
    }
}

pub struct Neofetch;

impl Builtin for Neofetch {
    fn name(&self) -> &'static str {
        "neofetch"
    }

    fn run(&self, _ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::output(system_summary()))
    }
}

pub struct Exit;

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, ctx: &mut ExecContext<'_>, _args: &[String]) -> Result<CommandResult, ShellError> {
        ctx.session.terminate();
        Ok(CommandResult::text("Logging out..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Fixture;

    #[test]
    fn test_help_layout() {
        let mut fx = Fixture::new();
        let lines = fx.run(&Help, &[]);
        assert_eq!(lines[0], "Available commands:");
        // 30 commands in 4 columns, column-major, width "neofetch".len() + 2.
        assert_eq!(lines.len(), 1 + 8);
        assert_eq!(lines[1], "apt       echo      mkdir     tar       ");
        assert_eq!(lines[8], "dnf       ls        tac       ");
    }

    #[test]
    fn test_clear_emits_reset() {
        let mut fx = Fixture::new();
        let result = fx.try_run(&Clear, &[]).unwrap();
        assert_eq!(result.output, vec![OutputLine::ClearScreen]);
    }

    #[test]
    fn test_date_shape() {
        let mut fx = Fixture::new();
        let line = fx.run(&Date, &[]).remove(0);
        let parts: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(parts.len(), 6, "unexpected date: {}", line);
        assert_eq!(parts[3].matches(':').count(), 2);
        assert!(parts[5].parse::<i32>().is_ok());
    }

    #[test]
    fn test_whoami() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Whoami, &[]), vec!["user"]);
    }

    #[test]
    fn test_neofetch() {
        let mut fx = Fixture::new();
        let lines = fx.run(&Neofetch, &[]);
        assert!(lines.iter().any(|l| l == "OS: Orea OS"));
        assert!(lines.iter().any(|l| l == "Kernel: 5.15.0-orea"));

        let uptime = lines.iter().find(|l| l.starts_with("Uptime: ")).unwrap();
        let hours: u32 = uptime["Uptime: ".len()..]
            .split(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=24).contains(&hours));

        let memory = lines.iter().find(|l| l.starts_with("Memory: ")).unwrap();
        let used: u32 = memory["Memory: ".len()..]
            .split("MiB")
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((2000..=4000).contains(&used));
        assert!(memory.ends_with("/ 8192MiB"));
    }

    #[test]
    fn test_exit_clears_liveness() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Exit, &[]), vec!["Logging out..."]);
        assert!(!fx.session.is_running());
    }

    #[test]
    fn test_banner() {
        let lines = banner();
        assert_eq!(lines[0], OutputLine::ClearScreen);
        assert!(lines.contains(&OutputLine::text(
            "Welcome to Orea OS - A simulated OS for tech enthusiasts!"
        )));
        assert_eq!(lines.last(), Some(&OutputLine::empty()));
    }
}
