//! Terminal transcript and command outcome types.

use super::VirtualPath;

/// One unit of terminal transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Echo of a submitted command with the directory it was typed in
    Command { text: String, dir: VirtualPath },
    /// Output block; `animating` is true while lines are still arriving
    Output { lines: Vec<String>, animating: bool },
}

impl Entry {
    pub fn command(text: impl Into<String>, dir: VirtualPath) -> Self {
        Entry::Command {
            text: text.into(),
            dir,
        }
    }

    pub fn output(lines: Vec<String>) -> Self {
        Entry::Output {
            lines,
            animating: false,
        }
    }

    /// Output block that is about to be streamed into.
    pub fn streaming() -> Self {
        Entry::Output {
            lines: Vec::new(),
            animating: true,
        }
    }
}

/// How an outcome's lines reach the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// All lines at once
    Instant,
    /// One line at a time, at a fixed pace
    Animated,
}

/// State change requested by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// No state change; the command and its output are recorded
    None,
    /// Replace the working directory (silent)
    ChangeDirectory(VirtualPath),
    /// Empty the transcript (silent)
    ClearHistory,
    /// Nothing happens and nothing is recorded
    Suppressed,
}

impl SideEffect {
    /// Whether the submission leaves a trace in the transcript.
    pub fn is_recorded(&self) -> bool {
        matches!(self, SideEffect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        assert_eq!(
            Entry::command("ls", VirtualPath::root()),
            Entry::Command {
                text: "ls".to_string(),
                dir: VirtualPath::root()
            }
        );
        assert_eq!(
            Entry::output(vec!["a".into()]),
            Entry::Output {
                lines: vec!["a".to_string()],
                animating: false
            }
        );
        assert_eq!(
            Entry::streaming(),
            Entry::Output {
                lines: vec![],
                animating: true
            }
        );
    }

    #[test]
    fn test_only_plain_outcomes_are_recorded() {
        assert!(SideEffect::None.is_recorded());
        assert!(!SideEffect::ClearHistory.is_recorded());
        assert!(!SideEffect::Suppressed.is_recorded());
        assert!(!SideEffect::ChangeDirectory(VirtualPath::root()).is_recorded());
    }
}
