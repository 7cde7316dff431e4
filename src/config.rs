//! Shell configuration.
//!
//! Centralizes all configuration constants used throughout the shell.
//! Text assets are loaded at compile time using `include_str!`.

use std::time::Duration;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII logo printed by `neofetch` and at startup.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Initial filesystem layout (JSON: objects are directories, strings are files).
pub const SEED_LAYOUT: &str = include_str!("../assets/seed.json");

// =============================================================================
// Identity
// =============================================================================

/// Login name shown in the prompt and by `whoami`.
pub const USER_NAME: &str = "user";

/// Group shown in long listings.
pub const GROUP_NAME: &str = "group";

/// Host name shown in the prompt.
pub const HOST_NAME: &str = "orea";

/// Home directory (`cd`, `cd ~`, `~/...`).
pub const HOME_PATH: &str = "/home/user";

/// Lines printed after the startup banner.
pub const WELCOME_LINES: &[&str] = &[
    "",
    "Welcome to Orea OS - A simulated OS for tech enthusiasts!",
    "Type 'help' to see available commands.",
    "",
];

// =============================================================================
// Listing
// =============================================================================

/// Nominal size reported for directories in `ls -l`.
pub const DIRECTORY_SIZE: u64 = 4096;

/// Fixed modification date shown in `ls -l`.
pub const LISTING_DATE: &str = "Feb 27 14:30";

/// Number of columns used by `help`.
pub const HELP_COLUMNS: usize = 4;

// =============================================================================
// ANSI Styling
// =============================================================================

pub mod ansi {
    /// Bold green (user@host).
    pub const USER_HOST: &str = "\x1b[1;32m";
    /// Bold blue (paths and directories).
    pub const DIRECTORY: &str = "\x1b[1;34m";
    /// Dim (inline completion hints).
    pub const HINT: &str = "\x1b[2m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
    /// Full terminal reset (`clear`).
    pub const CLEAR_SCREEN: &str = "\x1bc";
}

// =============================================================================
// Simulated Delays
// =============================================================================

pub mod delays {
    use super::Duration;

    /// Pause while an editor "opens".
    pub const EDITOR_OPEN: Duration = Duration::from_millis(1000);
    /// Pause per package during `apt install`.
    pub const PACKAGE_INSTALL: Duration = Duration::from_millis(500);
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Per-session settings handed to every command.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    pub user: String,
    pub host: String,
    pub home: String,
    /// Sleep during editor/package simulations.
    pub simulate_delays: bool,
}

impl ShellConfig {
    /// Configuration with simulated delays disabled.
    pub fn without_delays() -> Self {
        Self {
            simulate_delays: false,
            ..Self::default()
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: USER_NAME.to_string(),
            host: HOST_NAME.to_string(),
            home: HOME_PATH.to_string(),
            simulate_delays: true,
        }
    }
}
