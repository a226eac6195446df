//! Command parsing and interpretation.
//!
//! This module provides:
//! - `Command` enum for parsed input lines
//! - `Outcome` for interpretation results
//! - `interpret` for mapping a raw line to an `Outcome`
//!
//! # Architecture
//!
//! Parsing is pure and total: every line maps to exactly one `Command`
//! variant (unrecognized input becomes `Command::Unknown`). A single
//! dispatch in `execute` turns the variant into an `Outcome` by reading the
//! virtual filesystem and the session's working directory.

mod execute;
mod result;

pub use execute::{execute_command, interpret};
pub use result::Outcome;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd about`, `cat skills.txt`).
///
/// Stored as typed, including inner spaces; it names one child of the
/// working directory and is only validated during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Pwd,
    Ls,
    Cd(PathArg),
    Cat(PathArg),
    Clear,
    /// Anything else, holding the trimmed input line
    Unknown(String),
    /// Blank input
    Empty,
}

impl Command {
    /// Parse one raw input line.
    ///
    /// Matching is case-sensitive and exact. Commands without arguments must
    /// stand alone (`ls -l` is unknown); `cd` and `cat` take the rest of the
    /// line after a single space, trimmed, so `cd` on its own is unknown too.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        match trimmed {
            "" => Self::Empty,
            "help" => Self::Help,
            "pwd" => Self::Pwd,
            "ls" => Self::Ls,
            "clear" => Self::Clear,
            _ => {
                if let Some(rest) = trimmed.strip_prefix("cd ") {
                    Self::Cd(PathArg::new(rest.trim()))
                } else if let Some(rest) = trimmed.strip_prefix("cat ") {
                    Self::Cat(PathArg::new(rest.trim()))
                } else {
                    Self::Unknown(trimmed.to_string())
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("pwd"), Command::Pwd);
        assert_eq!(Command::parse("ls"), Command::Ls);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("  ls  "), Command::Ls);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t "), Command::Empty);
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(Command::parse("cd about"), Command::Cd(ref p) if p == &"about"));
        assert!(matches!(Command::parse("cd .."), Command::Cd(ref p) if p == &".."));
        assert!(matches!(Command::parse("cd    about  "), Command::Cd(ref p) if p == &"about"));
    }

    #[test]
    fn test_parse_cat_keeps_inner_spaces() {
        assert!(matches!(
            Command::parse("cat my  notes.txt"),
            Command::Cat(ref p) if p == &"my  notes.txt"
        ));
    }

    #[test]
    fn test_parse_missing_argument_is_unknown() {
        assert_eq!(Command::parse("cd"), Command::Unknown("cd".to_string()));
        assert_eq!(Command::parse("cat   "), Command::Unknown("cat".to_string()));
    }

    #[test]
    fn test_parse_extra_arguments_are_unknown() {
        assert_eq!(Command::parse("ls -l"), Command::Unknown("ls -l".to_string()));
        assert_eq!(
            Command::parse("help me"),
            Command::Unknown("help me".to_string())
        );
    }

    #[test]
    fn test_parse_case_sensitive() {
        assert_eq!(Command::parse("LS"), Command::Unknown("LS".to_string()));
        assert_eq!(
            Command::parse("Cd about"),
            Command::Unknown("Cd about".to_string())
        );
    }

    #[test]
    fn test_parse_prefix_is_not_a_command() {
        assert_eq!(Command::parse("cdabout"), Command::Unknown("cdabout".to_string()));
        assert_eq!(Command::parse("cat\tx"), Command::Unknown("cat\tx".to_string()));
    }
}
