//! Per-session terminal state.

use crate::models::{Entry, VirtualPath};

/// State of one terminal session.
///
/// Readable by anyone; mutated only by the crate's presenter when it applies
/// an [`Outcome`](crate::core::Outcome). The working directory is only ever
/// replaced by a path the interpreter already resolved to a directory.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Current working directory.
    current_path: VirtualPath,
    /// Transcript of commands and their output, oldest first.
    history: Vec<Entry>,
    /// True while an output entry is being streamed.
    animating: bool,
}

impl SessionState {
    /// Creates a session at the root with an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub(crate) fn set_current_path(&mut self, path: VirtualPath) {
        self.current_path = path;
    }

    /// Clears the whole transcript, commands included.
    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Appends entries in a single update; returns the index of the last one.
    pub(crate) fn push_entries(&mut self, entries: impl IntoIterator<Item = Entry>) -> usize {
        self.history.extend(entries);
        self.history.len().saturating_sub(1)
    }

    /// Appends one line to the output entry at `index`.
    pub(crate) fn append_line(&mut self, index: usize, line: String) {
        if let Some(Entry::Output { lines, .. }) = self.history.get_mut(index) {
            lines.push(line);
        }
    }

    /// Marks streaming as started or finished, for the session and for the
    /// output entry at `index`.
    pub(crate) fn set_animating(&mut self, index: usize, value: bool) {
        if let Some(Entry::Output { animating, .. }) = self.history.get_mut(index) {
            *animating = value;
        }
        self.animating = value;
    }
}
