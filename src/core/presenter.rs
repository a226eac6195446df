//! Output presentation state machine.
//!
//! Outcomes either land in the transcript at once or are streamed into a
//! single output entry, one line per step. While a stream is in progress the
//! presenter is `Streaming` and refuses new outcomes, so the transcript is
//! never interleaved.

use std::collections::VecDeque;
use std::time::Duration;

use crate::core::{Outcome, SessionState};
use crate::models::{Entry, Presentation, SideEffect, VirtualPath};

/// What happened to a submitted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A stream is in progress; nothing was parsed or recorded
    Rejected,
    /// Side effect applied, transcript untouched
    Silent,
    /// Command and output appended in one update
    Recorded,
    /// Command appended; `lines` lines are waiting to be revealed
    Streaming { lines: usize },
}

/// One step of an in-progress stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamStep {
    /// A line was appended to the streaming entry
    Revealed(String),
    /// The entry is complete and the presenter is idle again
    Finished,
}

#[derive(Clone, Debug, Default)]
enum State {
    #[default]
    Idle,
    Streaming {
        /// History index of the output entry being filled
        entry: usize,
        pending: VecDeque<String>,
    },
}

/// Applies outcomes to a [`SessionState`], instantly or line by line.
///
/// Crate-internal: [`Shell`](crate::core::Shell) pairs it with the one
/// session it mutates and only feeds it outcomes from the interpreter.
#[derive(Clone, Debug)]
pub(crate) struct OutputPresenter {
    state: State,
    line_delay: Duration,
}

impl OutputPresenter {
    pub(crate) fn new(line_delay: Duration) -> Self {
        Self {
            state: State::Idle,
            line_delay,
        }
    }

    /// Delay to wait before each revealed line.
    pub(crate) fn line_delay(&self) -> Duration {
        self.line_delay
    }

    pub(crate) fn is_streaming(&self) -> bool {
        matches!(self.state, State::Streaming { .. })
    }

    /// Lines of the current stream not yet revealed.
    pub(crate) fn pending(&self) -> usize {
        match &self.state {
            State::Streaming { pending, .. } => pending.len(),
            State::Idle => 0,
        }
    }

    /// Apply an outcome produced for `input`, typed in directory `dir`.
    pub(crate) fn present(
        &mut self,
        session: &mut SessionState,
        input: &str,
        dir: VirtualPath,
        outcome: Outcome,
    ) -> Submission {
        if self.is_streaming() {
            tracing::warn!(input, "stream in progress, submission rejected");
            return Submission::Rejected;
        }

        if !outcome.side_effect.is_recorded() {
            match outcome.side_effect {
                SideEffect::ChangeDirectory(path) => {
                    tracing::debug!(%path, "changing directory");
                    session.set_current_path(path);
                }
                SideEffect::ClearHistory => {
                    tracing::debug!("clearing history");
                    session.clear_history();
                }
                SideEffect::Suppressed | SideEffect::None => {}
            }
            return Submission::Silent;
        }

        let command = Entry::command(input, dir);
        match outcome.presentation {
            Presentation::Instant => {
                session.push_entries([command, Entry::output(outcome.lines)]);
                Submission::Recorded
            }
            Presentation::Animated => {
                let lines = outcome.lines.len();
                let entry = session.push_entries([command, Entry::streaming()]);
                session.set_animating(entry, true);
                self.state = State::Streaming {
                    entry,
                    pending: outcome.lines.into(),
                };
                tracing::info!(lines, "streaming output");
                Submission::Streaming { lines }
            }
        }
    }

    /// Reveal the next pending line, or finish the stream when none remain.
    ///
    /// Returns `None` when idle.
    pub(crate) fn advance(&mut self, session: &mut SessionState) -> Option<StreamStep> {
        let State::Streaming { entry, pending } = &mut self.state else {
            return None;
        };
        let entry = *entry;

        match pending.pop_front() {
            Some(line) => {
                session.append_line(entry, line.clone());
                Some(StreamStep::Revealed(line))
            }
            None => {
                session.set_animating(entry, false);
                self.state = State::Idle;
                tracing::info!("stream finished");
                Some(StreamStep::Finished)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> OutputPresenter {
        OutputPresenter::new(Duration::from_millis(150))
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_instant_outcome_appends_pair() {
        let mut session = SessionState::new();
        let mut p = presenter();
        let result = p.present(
            &mut session,
            "pwd",
            VirtualPath::root(),
            Outcome::line("~"),
        );
        assert_eq!(result, Submission::Recorded);
        assert_eq!(
            session.history(),
            &[
                Entry::command("pwd", VirtualPath::root()),
                Entry::output(lines(&["~"])),
            ]
        );
        assert!(!p.is_streaming());
    }

    #[test]
    fn test_silent_outcomes_skip_history() {
        let mut session = SessionState::new();
        let mut p = presenter();
        let about = VirtualPath::root().join("about");

        let result = p.present(
            &mut session,
            "cd about",
            VirtualPath::root(),
            Outcome::change_directory(about.clone()),
        );
        assert_eq!(result, Submission::Silent);
        assert_eq!(session.current_path(), &about);
        assert!(session.history().is_empty());

        let result = p.present(&mut session, "", about.clone(), Outcome::suppressed());
        assert_eq!(result, Submission::Silent);
        assert_eq!(session.current_path(), &about);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_clear_outcome_empties_history() {
        let mut session = SessionState::new();
        let mut p = presenter();
        p.present(&mut session, "x", VirtualPath::root(), Outcome::line("a"));
        p.present(&mut session, "y", VirtualPath::root(), Outcome::line("b"));
        assert_eq!(session.history().len(), 4);

        p.present(&mut session, "clear", VirtualPath::root(), Outcome::clear_history());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_stream_reveals_in_order() {
        let mut session = SessionState::new();
        let mut p = presenter();
        let result = p.present(
            &mut session,
            "cat f",
            VirtualPath::root(),
            Outcome::animated(lines(&["a", "b", "c"])),
        );
        assert_eq!(result, Submission::Streaming { lines: 3 });
        assert!(session.is_animating());
        assert_eq!(session.history()[1], Entry::streaming());

        for (i, expected) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(p.pending(), 3 - i);
            assert_eq!(
                p.advance(&mut session),
                Some(StreamStep::Revealed(expected.to_string()))
            );
            assert!(session.is_animating());
        }

        assert_eq!(p.advance(&mut session), Some(StreamStep::Finished));
        assert!(!session.is_animating());
        assert_eq!(
            session.history()[1],
            Entry::Output {
                lines: lines(&["a", "b", "c"]),
                animating: false
            }
        );
        assert_eq!(p.advance(&mut session), None);
    }

    #[test]
    fn test_empty_stream_finishes_immediately() {
        let mut session = SessionState::new();
        let mut p = presenter();
        p.present(&mut session, "cat empty", VirtualPath::root(), Outcome::animated(vec![]));
        assert!(p.is_streaming());
        assert_eq!(p.advance(&mut session), Some(StreamStep::Finished));
        assert!(!session.is_animating());
    }

    #[test]
    fn test_submission_rejected_while_streaming() {
        let mut session = SessionState::new();
        let mut p = presenter();
        p.present(&mut session, "cat f", VirtualPath::root(), Outcome::animated(lines(&["a"])));
        let before = session.history().to_vec();

        let result = p.present(
            &mut session,
            "cd about",
            VirtualPath::root(),
            Outcome::change_directory(VirtualPath::root().join("about")),
        );
        assert_eq!(result, Submission::Rejected);
        assert_eq!(session.history(), before.as_slice());
        assert!(session.current_path().is_root());
    }
}
