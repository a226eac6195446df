//! Command interpretation result type.

use crate::models::{Presentation, SideEffect, VirtualPath};

/// Result of interpreting one input line.
///
/// Errors are not a separate channel: `cd: x: No such directory` is an
/// outcome like any other, only the text differs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Lines to display
    pub lines: Vec<String>,
    /// Whether the lines appear at once or are streamed
    pub presentation: Presentation,
    /// State change to apply
    pub side_effect: SideEffect,
}

impl Outcome {
    /// Lines shown at once, recorded in the transcript.
    pub fn instant(lines: Vec<String>) -> Self {
        Self {
            lines,
            presentation: Presentation::Instant,
            side_effect: SideEffect::None,
        }
    }

    /// Single-line instant output.
    pub fn line(line: impl Into<String>) -> Self {
        Self::instant(vec![line.into()])
    }

    /// Lines streamed one at a time.
    pub fn animated(lines: Vec<String>) -> Self {
        Self {
            lines,
            presentation: Presentation::Animated,
            side_effect: SideEffect::None,
        }
    }

    /// Silent working-directory change.
    pub fn change_directory(path: VirtualPath) -> Self {
        Self::silent(SideEffect::ChangeDirectory(path))
    }

    /// Silent transcript wipe.
    pub fn clear_history() -> Self {
        Self::silent(SideEffect::ClearHistory)
    }

    /// Nothing to do and nothing to record.
    pub fn suppressed() -> Self {
        Self::silent(SideEffect::Suppressed)
    }

    fn silent(side_effect: SideEffect) -> Self {
        Self {
            lines: vec![],
            presentation: Presentation::Instant,
            side_effect,
        }
    }
}
