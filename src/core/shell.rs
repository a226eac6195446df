//! The shell session facade handed to rendering front ends.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::PromptConfig;
use crate::core::{OutputPresenter, SessionState, StreamStep, Submission, VirtualFs, interpret};
use crate::models::{Entry, VirtualPath};
use crate::utils::timer;

/// One interactive session over a shared, read-only filesystem.
///
/// Front ends call [`submit`](Shell::submit) for each input line and render
/// [`history`](Shell::history). Streamed output is driven either step by step
/// with [`advance`](Shell::advance) or to completion with
/// [`drain`](Shell::drain) / [`run_stream`](Shell::run_stream); input must be
/// disabled while [`is_animating`](Shell::is_animating) is true.
#[derive(Clone, Debug)]
pub struct Shell {
    fs: Arc<VirtualFs>,
    state: SessionState,
    presenter: OutputPresenter,
    prompt: PromptConfig,
}

impl Shell {
    pub fn new(fs: Arc<VirtualFs>, line_delay: Duration) -> Self {
        Self {
            fs,
            state: SessionState::new(),
            presenter: OutputPresenter::new(line_delay),
            prompt: PromptConfig::default(),
        }
    }

    /// Use a custom `user@host` identity in prompts.
    pub fn with_prompt(mut self, prompt: PromptConfig) -> Self {
        self.prompt = prompt;
        self
    }

    /// Interpret and apply one input line.
    ///
    /// Rejected without any parsing while a stream is in progress.
    pub fn submit(&mut self, line: &str) -> Submission {
        if self.presenter.is_streaming() {
            tracing::warn!(line, "input disabled while streaming");
            return Submission::Rejected;
        }

        let dir = self.state.current_path().clone();
        let outcome = interpret(line, &self.state, &self.fs);
        self.presenter.present(&mut self.state, line, dir, outcome)
    }

    /// Reveal the next streamed line, or finish the stream when none remain.
    ///
    /// Returns `None` when no stream is in progress.
    pub fn advance(&mut self) -> Option<StreamStep> {
        self.presenter.advance(&mut self.state)
    }

    /// Drive the current stream to completion.
    ///
    /// `sleep` is awaited with the line delay before every revealed line;
    /// finishing the stream is not delayed. `on_step` sees each step as it
    /// is applied. Returns the number of revealed lines.
    pub async fn drain<S, F>(&mut self, mut sleep: S, mut on_step: impl FnMut(&StreamStep)) -> usize
    where
        S: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        let mut revealed = 0;
        while self.presenter.is_streaming() {
            if self.presenter.pending() > 0 {
                sleep(self.presenter.line_delay()).await;
            }
            if let Some(step) = self.advance() {
                if matches!(step, StreamStep::Revealed(_)) {
                    revealed += 1;
                }
                on_step(&step);
            }
        }
        revealed
    }

    /// [`drain`](Shell::drain) using the platform timer.
    pub async fn run_stream(&mut self, on_step: impl FnMut(&StreamStep)) -> usize {
        self.drain(timer::sleep, on_step).await
    }

    pub fn history(&self) -> &[Entry] {
        self.state.history()
    }

    pub fn current_path(&self) -> &VirtualPath {
        self.state.current_path()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Prompt for the current directory.
    pub fn prompt(&self) -> String {
        self.prompt_for(self.current_path())
    }

    /// Prompt as it looked in `dir`, for rendering recorded commands.
    ///
    /// Format: `{user}@{host}:{path}$`
    pub fn prompt_for(&self, dir: &VirtualPath) -> String {
        format!("{}@{}:{}$", self.prompt.user, self.prompt.host, dir)
    }
}
