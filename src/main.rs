//! Orea command-line entry point.
//!
//! Usage:
//!   orea                  # Interactive shell with banner
//!   orea --no-banner      # Skip the startup banner
//!   orea -c "ls -la"      # Run one line and exit

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use orea::{Shell, ShellConfig, repl};

#[derive(Parser, Debug)]
#[command(name = "orea", version, about = "A simulated Unix-like shell")]
struct Cli {
    /// Skip the clear-screen banner at startup
    #[arg(long)]
    no_banner: bool,

    /// Disable the simulated editor and package-manager delays
    #[arg(long)]
    no_delay: bool,

    /// Run a single command line, print its output and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with shell output (RUST_LOG, default warn)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = ShellConfig {
        simulate_delays: !cli.no_delay,
        ..ShellConfig::default()
    };
    let mut shell = Shell::new(config).context("Failed to build the initial filesystem")?;

    if let Some(line) = cli.command {
        let result = shell.dispatch(&line);
        repl::write_output(&mut io::stdout().lock(), &result.output)
            .context("Failed to write output")?;
        return Ok(if result.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    repl::run(shell, !cli.no_banner).context("Terminal error")?;
    Ok(ExitCode::SUCCESS)
}
