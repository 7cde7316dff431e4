//! Terminal-related data types for output rendering.

use std::fmt;

use crate::config::{GROUP_NAME, LISTING_DATE, USER_NAME};
use crate::utils::format_size;

/// Text styling for file listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries (blue, bold, trailing `/`)
    Directory,
    /// Regular file entries
    File,
}

/// One name in a short `ls` listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub style: TextStyle,
}

/// A single line of command output.
///
/// Commands build these; the REPL decides how to style them.
/// `Display` yields the unstyled text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// ASCII art
    Ascii(String),
    /// Empty line
    Empty,
    /// Short listing row (`ls`)
    Listing(Vec<ListEntry>),
    /// Long listing entry (`ls -l`)
    LongEntry {
        permissions: String,
        size: u64,
        name: String,
        style: TextStyle,
    },
    /// Reset the terminal (`clear`)
    ClearScreen,
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::Ascii(s.into())
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    /// Create a long listing entry (ls -l)
    pub fn long_entry(
        permissions: impl Into<String>,
        size: u64,
        name: impl Into<String>,
        style: TextStyle,
    ) -> Self {
        Self::LongEntry {
            permissions: permissions.into(),
            size,
            name: name.into(),
            style,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl ListEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            style: if is_dir {
                TextStyle::Directory
            } else {
                TextStyle::File
            },
        }
    }

    /// Name as shown in a listing: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        match self.style {
            TextStyle::Directory => format!("{}/", self.name),
            TextStyle::File => self.name.clone(),
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Error(s) | Self::Ascii(s) => write!(f, "{}", s),
            Self::Empty | Self::ClearScreen => Ok(()),
            Self::Listing(entries) => {
                let names: Vec<_> = entries.iter().map(ListEntry::display_name).collect();
                write!(f, "{}", names.join("  "))
            }
            Self::LongEntry {
                permissions,
                size,
                name,
                ..
            } => write!(
                f,
                "{} 1 {} {} {} {} {}",
                permissions,
                USER_NAME,
                GROUP_NAME,
                format_size(*size),
                LISTING_DATE,
                name
            ),
        }
    }
}
