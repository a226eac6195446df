//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`VirtualFs`] read-only virtual filesystem
//! - [`Command`] parsing and [`interpret`] for turning input into an [`Outcome`]
//! - [`SessionState`], read-only outside the crate
//! - [`Shell`], the session facade used by front ends

mod commands;
pub mod error;
mod filesystem;
mod presenter;
mod session;
mod shell;

pub use commands::{Command, Outcome, PathArg, execute_command, interpret};
pub use filesystem::{DirEntry, VirtualFs};
pub(crate) use presenter::OutputPresenter;
pub use presenter::{StreamStep, Submission};
pub use session::SessionState;
pub use shell::Shell;
